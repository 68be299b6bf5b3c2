//! Pixel and cell buffers for terminal rendering.
//!
//! The scene is rasterized into a [`PixelBuffer`] whose rows are twice as
//! dense as terminal rows. [`FrameBuffer::compose`] folds each pair of pixel
//! rows into one row of `▀` cells (foreground = upper pixel, background =
//! lower pixel) and lays the text overlay on top.

use crate::types::{palette, Rgb};

/// Upper half block; the foreground paints the top pixel.
pub const HALF_BLOCK: char = '\u{2580}';

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: palette::BLACK,
            bold: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Text glyph laid over the pixels. The background comes from the pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Rgb,
    pub bold: bool,
}

/// Row-major grid of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![palette::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels
            .resize(width as usize * height as usize, palette::BLACK);
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Fill the half-open rectangle `[x0, x1) x [y0, y1)`, clipped.
    pub fn fill(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width as i32);
        let y1 = y1.min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let w = self.width as usize;
        for y in y0..y1 {
            let row = y as usize * w;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Fold `pixels` into half-block cells at cell offset `(ox, oy)` and lay
    /// `overlay` (one slot per covered cell, row-major) on top.
    pub fn compose(&mut self, pixels: &PixelBuffer, overlay: &[Option<Glyph>], ox: u16, oy: u16) {
        let rows = pixels.height().div_ceil(2);
        let cols = pixels.width();
        for row in 0..rows {
            for col in 0..cols {
                let top = pixels
                    .get(col as i32, row as i32 * 2)
                    .unwrap_or(palette::BLACK);
                let bottom = pixels
                    .get(col as i32, row as i32 * 2 + 1)
                    .unwrap_or(palette::BLACK);
                let slot = row as usize * cols as usize + col as usize;
                let cell = match overlay.get(slot).copied().flatten() {
                    Some(glyph) => Cell {
                        ch: glyph.ch,
                        style: CellStyle {
                            fg: glyph.fg,
                            bg: top,
                            bold: glyph.bold,
                        },
                    },
                    None => Cell {
                        ch: HALF_BLOCK,
                        style: CellStyle {
                            fg: top,
                            bg: bottom,
                            bold: false,
                        },
                    },
                };
                self.set(ox.saturating_add(col), oy.saturating_add(row), cell);
            }
        }
    }
}
