//! Pole Position (workspace facade crate).
//!
//! Re-exports the workspace crates as `pole_position::{core,input,term,types}`
//! and adds the environment-driven [`config`] and the headless input
//! [`script`] format shared by the binaries.

pub mod config;
pub mod script;

pub use pole_position_core as core;
pub use pole_position_input as input;
pub use pole_position_term as term;
pub use pole_position_types as types;

pub use config::GameConfig;
pub use script::{InputScript, ScriptError};
