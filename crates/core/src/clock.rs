//! Fixed-timestep scheduler.
//!
//! Wall-clock time is fed in as elapsed milliseconds and converted into a
//! whole number of simulation ticks, carrying the remainder over. Tests can
//! drive it with synthetic durations; nothing here sleeps.

use crate::types::TICK_MS;

/// Most ticks a single `advance` may produce before the backlog is dropped.
pub const DEFAULT_MAX_CATCH_UP: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTimestep {
    tick_ms: u32,
    accumulator_ms: u32,
    max_catch_up: u32,
}

impl FixedTimestep {
    pub fn new(tick_ms: u32) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            accumulator_ms: 0,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
        }
    }

    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn accumulator_ms(&self) -> u32 {
        self.accumulator_ms
    }

    /// Milliseconds until the next tick is due.
    pub fn until_next_tick_ms(&self) -> u32 {
        self.tick_ms - self.accumulator_ms.min(self.tick_ms)
    }

    /// Account for `elapsed_ms` of real time; returns how many ticks to run.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let due = self.accumulator_ms / self.tick_ms;

        if due > self.max_catch_up {
            log::trace!(
                "dropping {} overdue ticks",
                due - self.max_catch_up
            );
            self.accumulator_ms %= self.tick_ms;
            return self.max_catch_up;
        }

        self.accumulator_ms -= due * self.tick_ms;
        due
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}
