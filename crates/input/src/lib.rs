//! Terminal input module (loop-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`]s and keeps
//! track of which controls are held, so that terminals without key-release
//! events still let go of the pedals.

pub mod handler;
pub mod map;
pub mod reader;

pub use pole_position_types as types;

pub use handler::{InputHandler, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{control_for_key, should_quit, Control};
pub use reader::InputThread;
