//! Scripted input for headless runs.
//!
//! A script is a comma-separated list of `event@tick` entries, for example
//! `accelerateOn@0,steerLeft@40,steerNone@60`. Events fire just before the
//! tick they name.

use std::fmt;

use crate::types::InputEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    MissingTick(String),
    UnknownEvent(String),
    BadTick(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::MissingTick(entry) => write!(f, "script entry {entry:?} has no @tick"),
            ScriptError::UnknownEvent(name) => write!(f, "unknown input event {name:?}"),
            ScriptError::BadTick(tick) => write!(f, "invalid tick {tick:?}"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Input events ordered by the tick they fire on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputScript {
    entries: Vec<(u64, InputEvent)>,
    next: usize,
}

impl InputScript {
    pub fn parse(src: &str) -> Result<Self, ScriptError> {
        let mut entries = Vec::new();
        for entry in src.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, tick) = entry
                .split_once('@')
                .ok_or_else(|| ScriptError::MissingTick(entry.to_string()))?;
            let event = InputEvent::from_str(name.trim())
                .ok_or_else(|| ScriptError::UnknownEvent(name.trim().to_string()))?;
            let tick = tick
                .trim()
                .parse()
                .map_err(|_| ScriptError::BadTick(tick.trim().to_string()))?;
            entries.push((tick, event));
        }
        // Stable: same-tick events keep their written order.
        entries.sort_by_key(|&(tick, _)| tick);
        Ok(Self { entries, next: 0 })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Events due at `tick`, consumed in order. Ticks must be visited ascending.
    pub fn due(&mut self, tick: u64) -> impl Iterator<Item = InputEvent> + '_ {
        let start = self.next;
        while self.next < self.entries.len() && self.entries[self.next].0 <= tick {
            self.next += 1;
        }
        self.entries[start..self.next].iter().map(|&(_, ev)| ev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_and_orders_entries() {
        let mut script = InputScript::parse("steerLeft@40, accelerateOn@0,brakeOn@40").unwrap();
        assert_eq!(script.len(), 3);
        assert_eq!(script.due(0).collect::<Vec<_>>(), vec![InputEvent::AccelerateOn]);
        assert_eq!(script.due(39).count(), 0);
        assert_eq!(
            script.due(40).collect::<Vec<_>>(),
            vec![InputEvent::SteerLeft, InputEvent::BrakeOn]
        );
        assert_eq!(script.due(1_000).count(), 0);
    }

    #[test]
    fn test_empty_script() {
        let script = InputScript::parse("  ").unwrap();
        assert!(script.is_empty());
    }

    #[test]
    fn test_rejects_malformed_entries() {
        assert_eq!(
            InputScript::parse("accelerateOn"),
            Err(ScriptError::MissingTick("accelerateOn".into()))
        );
        assert_eq!(
            InputScript::parse("nitro@3"),
            Err(ScriptError::UnknownEvent("nitro".into()))
        );
        assert_eq!(
            InputScript::parse("brakeOn@soon"),
            Err(ScriptError::BadTick("soon".into()))
        );
    }
}
