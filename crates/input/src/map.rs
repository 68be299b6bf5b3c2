//! Key mapping from terminal events to car controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A physical control of the car. Each one has a press and a release event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    SteerLeft,
    SteerRight,
    Accelerate,
    Brake,
}

/// Map a key to the control it drives.
pub fn control_for_key(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(Control::SteerLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Control::SteerRight),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Control::Accelerate),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(Control::Brake),
        _ => None,
    }
}

/// Check if key should quit the race.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
