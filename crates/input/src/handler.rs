//! Held-control tracking for terminal environments.
//!
//! Terminals with keyboard enhancement report key releases and those are
//! used directly. Plain terminals only report presses (and auto-repeat
//! presses), so a held control is let go once no press for it has been seen
//! for the release timeout.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{control_for_key, Control};
use crate::types::{InputEvent, SteerDirection};

// Must outlast the keyboard's auto-repeat delay, or a held pedal flickers
// off before the first repeat arrives.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 500;

/// Tracks which controls are held and turns key traffic into input events.
#[derive(Debug, Clone)]
pub struct InputHandler {
    steer: SteerDirection,
    accelerate: bool,
    brake: bool,
    steer_idle_ms: u32,
    accelerate_idle_ms: u32,
    brake_idle_ms: u32,
    key_release_timeout_ms: u32,
    release_events: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            steer: SteerDirection::None,
            accelerate: false,
            brake: false,
            steer_idle_ms: 0,
            accelerate_idle_ms: 0,
            brake_idle_ms: 0,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// The terminal reports key releases; disables the timeout fallback.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn steer(&self) -> SteerDirection {
        self.steer
    }

    pub fn accelerate_held(&self) -> bool {
        self.accelerate
    }

    pub fn brake_held(&self) -> bool {
        self.brake
    }

    /// Feed one terminal key event. Returns the event to apply, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<InputEvent> {
        let control = control_for_key(key.code)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_press(control),
            KeyEventKind::Release => self.handle_release(control),
        }
    }

    pub fn handle_press(&mut self, control: Control) -> Option<InputEvent> {
        match control {
            Control::SteerLeft => {
                self.steer_idle_ms = 0;
                self.set_steer(SteerDirection::Left)
            }
            Control::SteerRight => {
                self.steer_idle_ms = 0;
                self.set_steer(SteerDirection::Right)
            }
            Control::Accelerate => {
                self.accelerate_idle_ms = 0;
                if self.accelerate {
                    None
                } else {
                    self.accelerate = true;
                    Some(InputEvent::AccelerateOn)
                }
            }
            Control::Brake => {
                self.brake_idle_ms = 0;
                if self.brake {
                    None
                } else {
                    self.brake = true;
                    Some(InputEvent::BrakeOn)
                }
            }
        }
    }

    /// Releasing either steering key centers the wheel.
    pub fn handle_release(&mut self, control: Control) -> Option<InputEvent> {
        match control {
            Control::SteerLeft | Control::SteerRight => self.set_steer(SteerDirection::None),
            Control::Accelerate if self.accelerate => {
                self.accelerate = false;
                Some(InputEvent::AccelerateOff)
            }
            Control::Brake if self.brake => {
                self.brake = false;
                Some(InputEvent::BrakeOff)
            }
            Control::Accelerate | Control::Brake => None,
        }
    }

    fn set_steer(&mut self, steer: SteerDirection) -> Option<InputEvent> {
        if self.steer == steer {
            return None;
        }
        self.steer = steer;
        Some(match steer {
            SteerDirection::Left => InputEvent::SteerLeft,
            SteerDirection::Right => InputEvent::SteerRight,
            SteerDirection::None => InputEvent::SteerNone,
        })
    }

    /// Advance idle timers; returns releases synthesized by the timeout.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<InputEvent, 3> {
        let mut events = ArrayVec::<InputEvent, 3>::new();
        if self.release_events {
            return events;
        }

        let timeout = self.key_release_timeout_ms;

        if self.steer != SteerDirection::None {
            self.steer_idle_ms = self.steer_idle_ms.saturating_add(elapsed_ms);
            if self.steer_idle_ms > timeout {
                self.steer_idle_ms = 0;
                if let Some(ev) = self.set_steer(SteerDirection::None) {
                    events.push(ev);
                }
            }
        }

        if self.accelerate {
            self.accelerate_idle_ms = self.accelerate_idle_ms.saturating_add(elapsed_ms);
            if self.accelerate_idle_ms > timeout {
                self.accelerate_idle_ms = 0;
                if let Some(ev) = self.handle_release(Control::Accelerate) {
                    events.push(ev);
                }
            }
        }

        if self.brake {
            self.brake_idle_ms = self.brake_idle_ms.saturating_add(elapsed_ms);
            if self.brake_idle_ms > timeout {
                self.brake_idle_ms = 0;
                if let Some(ev) = self.handle_release(Control::Brake) {
                    events.push(ev);
                }
            }
        }

        events
    }

    pub fn reset(&mut self) {
        self.steer = SteerDirection::None;
        self.accelerate = false;
        self.brake = false;
        self.steer_idle_ms = 0;
        self.accelerate_idle_ms = 0;
        self.brake_idle_ms = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
