//! Scene rendering against an abstract drawing surface.
//!
//! The core never touches pixels. It describes a frame as filled
//! rectangles, horizontal line spans, scaled images and text, and the
//! presentation layer decides what those look like. Rendering only reads
//! [`GameState`]; every animation phase is advanced in `tick`.

use crate::game_state::GameState;
use crate::sprite::{draw_sprite, AssetCatalog};
use crate::types::{palette, Rgb, SpriteKind, APP_WIDTH, ROAD_HEIGHT, SKY_HEIGHT};

/// A single image frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageRef {
    pub kind: SpriteKind,
    pub frame: u8,
}

impl ImageRef {
    pub const fn new(kind: SpriteKind, frame: u8) -> Self {
        Self { kind, frame }
    }
}

/// HUD font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSize {
    Small,
    Large,
}

/// 2D drawing target in logical screen coordinates (640x480).
///
/// Coordinates may fall outside the screen; implementations clip.
pub trait Surface {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb);

    /// Horizontal span from `x0` to `x1` inclusive.
    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb);

    /// Draw `image` scaled into the rectangle.
    fn draw_image(&mut self, image: ImageRef, x: i32, y: i32, w: i32, h: i32);

    /// Draw `text` with its baseline at `y`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, size: TextSize, color: Rgb);
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgb,
    },
    HLine {
        x0: i32,
        x1: i32,
        y: i32,
        color: Rgb,
    },
    Image {
        image: ImageRef,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        size: TextSize,
        color: Rgb,
    },
}

/// A surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn images(&self) -> impl Iterator<Item = (ImageRef, i32, i32, i32, i32)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Image { image, x, y, w, h } => Some((image, x, y, w, h)),
            _ => None,
        })
    }

    /// Horizontal spans drawn on screen row `y`, in call order.
    pub fn spans_at(&self, y: i32) -> impl Iterator<Item = (i32, i32, Rgb)> + '_ {
        self.commands.iter().filter_map(move |c| match *c {
            DrawCommand::HLine { x0, x1, y: row, color } if row == y => Some((x0, x1, color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb) {
        self.commands.push(DrawCommand::HLine { x0, x1, y, color });
    }

    fn draw_image(&mut self, image: ImageRef, x: i32, y: i32, w: i32, h: i32) {
        self.commands.push(DrawCommand::Image { image, x, y, w, h });
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, size: TextSize, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            size,
            color,
        });
    }
}

/// Draw one complete frame, back to front.
pub fn render_frame<S: Surface + ?Sized>(state: &GameState, assets: &AssetCatalog, surface: &mut S) {
    surface.fill_rect(0, 0, APP_WIDTH, SKY_HEIGHT, palette::SKY);
    surface.fill_rect(0, SKY_HEIGHT, APP_WIDTH, ROAD_HEIGHT, palette::GRASS);

    state.landscape().render(assets, surface);
    state.road().render(surface);
    draw_sprite(state.banner(), assets, surface);
    draw_sprite(state.player(), assets, surface);
    state.hud().render(assets, surface);
}
