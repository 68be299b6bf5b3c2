//! Terminal presentation for the race.
//!
//! The core describes each frame through its `Surface` trait; this crate
//! rasterizes that description into half-block "pixels" and flushes the
//! result to the terminal.
//!
//! - [`sprites`]: procedural bitmaps for every sprite frame
//! - [`canvas`]: `Surface` implementation scaling 640x480 into the terminal
//! - [`fb`]: pixel and cell buffers
//! - [`renderer`]: diff encoding and terminal setup

pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod sprites;

pub use pole_position_core as core;
pub use pole_position_types as types;

pub use canvas::{Canvas, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Glyph, PixelBuffer, HALF_BLOCK};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprites::{Bitmap, SpriteSheet};
