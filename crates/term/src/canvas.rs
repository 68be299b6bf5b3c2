//! Canvas: rasterizes the 640x480 logical scene into terminal pixels.
//!
//! This module is pure (no I/O). Every buffer is sized on `resize` and
//! reused frame to frame, so drawing a frame does not allocate.

use crate::core::render::{ImageRef, Surface, TextSize};
use crate::fb::{Cell, FrameBuffer, Glyph, PixelBuffer};
use crate::sprites::SpriteSheet;
use crate::types::{palette, Rgb, APP_HEIGHT, APP_WIDTH};

/// Terminal viewport dimensions, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Largest 4:3 pixel area that fits; half-block pixels are square.
    pub fn pixel_size(&self) -> (u16, u16) {
        let mut w = self.width as u32;
        let mut h = self.height as u32 * 2;
        if w * 3 > h * 4 {
            w = h * 4 / 3;
        } else {
            h = w * 3 / 4;
        }
        (w.max(1) as u16, h.max(1) as u16)
    }
}

pub struct Canvas {
    sheet: SpriteSheet,
    viewport: Viewport,
    pixels: PixelBuffer,
    overlay: Vec<Option<Glyph>>,
}

impl Canvas {
    pub fn new(sheet: SpriteSheet, viewport: Viewport) -> Self {
        let mut canvas = Self {
            sheet,
            viewport,
            pixels: PixelBuffer::new(0, 0),
            overlay: Vec::new(),
        };
        canvas.resize(viewport);
        canvas
    }

    pub fn sheet(&self) -> &SpriteSheet {
        &self.sheet
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let (w, h) = viewport.pixel_size();
        self.pixels.resize(w, h);
        let cells = w as usize * h.div_ceil(2) as usize;
        self.overlay.resize(cells, None);
        log::debug!(
            "canvas {}x{} cells -> {}x{} pixels",
            viewport.width,
            viewport.height,
            w,
            h
        );
    }

    /// Clear pixels and text before drawing a new frame.
    pub fn begin_frame(&mut self) {
        self.pixels.clear(palette::BLACK);
        self.overlay.fill(None);
    }

    /// Text glyph at overlay cell `(col, row)`.
    pub fn glyph_at(&self, col: u16, row: u16) -> Option<Glyph> {
        if col >= self.pixels.width() {
            return None;
        }
        let slot = row as usize * self.pixels.width() as usize + col as usize;
        self.overlay.get(slot).copied().flatten()
    }

    /// Compose the frame into `fb`, centered in the viewport.
    pub fn present(&self, fb: &mut FrameBuffer) {
        fb.resize(self.viewport.width, self.viewport.height);
        fb.clear(Cell::default());
        let ox = self.viewport.width.saturating_sub(self.pixels.width()) / 2;
        let oy = self
            .viewport
            .height
            .saturating_sub(self.pixels.height().div_ceil(2))
            / 2;
        fb.compose(&self.pixels, &self.overlay, ox, oy);
    }

    fn sx(&self, x: i32) -> i32 {
        (x as i64 * self.pixels.width() as i64 / APP_WIDTH as i64) as i32
    }

    fn sy(&self, y: i32) -> i32 {
        (y as i64 * self.pixels.height() as i64 / APP_HEIGHT as i64) as i32
    }
}

impl Surface for Canvas {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        let (x0, y0) = (self.sx(x), self.sy(y));
        let (x1, y1) = (self.sx(x + w), self.sy(y + h));
        self.pixels.fill(x0, y0, x1, y1, color);
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb) {
        if x1 < x0 {
            return;
        }
        let py = self.sy(y);
        let px0 = self.sx(x0);
        let px1 = self.sx(x1 + 1).max(px0 + 1);
        self.pixels.fill(px0, py, px1, py + 1, color);
    }

    /// Nearest-neighbour stretch of the bitmap; transparent pixels are skipped.
    fn draw_image(&mut self, image: ImageRef, x: i32, y: i32, w: i32, h: i32) {
        let Some(bitmap) = self.sheet.get(image) else {
            return;
        };
        let (px0, py0) = (self.sx(x), self.sy(y));
        let (px1, py1) = (self.sx(x + w), self.sy(y + h));
        let (tw, th) = (px1 - px0, py1 - py0);
        if tw <= 0 || th <= 0 {
            return;
        }
        let (bw, bh) = (bitmap.width() as i32, bitmap.height() as i32);

        let y_start = py0.max(0);
        let y_end = py1.min(self.pixels.height() as i32);
        let x_start = px0.max(0);
        let x_end = px1.min(self.pixels.width() as i32);
        for py in y_start..y_end {
            let sy = ((py - py0) * bh / th) as u16;
            for px in x_start..x_end {
                let sx = ((px - px0) * bw / tw) as u16;
                if let Some(color) = bitmap.get(sx, sy) {
                    self.pixels.set(px, py, color);
                }
            }
        }
    }

    /// Text sits in the cell row holding the pixel just above the baseline.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, size: TextSize, color: Rgb) {
        let cols = self.pixels.width() as i32;
        let rows = self.pixels.height().div_ceil(2) as i32;
        let row = (self.sy(y) - 1).max(0) / 2;
        if row >= rows {
            return;
        }
        let bold = size == TextSize::Large;
        let mut col = self.sx(x);
        for ch in text.chars() {
            if col >= cols {
                break;
            }
            if col >= 0 {
                self.overlay[(row * cols + col) as usize] = Some(Glyph { ch, fg: color, bold });
            }
            col += 1;
        }
    }
}
