//! Procedural sprite art.
//!
//! The terminal has no image files to load, so every frame is painted into
//! a small bitmap at startup. Bitmaps are stretched to their logical size
//! when drawn, so their native resolution only sets how blocky they look.

use std::collections::BTreeMap;

use crate::core::render::ImageRef;
use crate::core::sprite::{AssetCatalog, ImageSize};
use crate::types::{
    palette, Rgb, SpriteKind, BANNER_HEIGHT, BANNER_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH,
    TILE_HEIGHT, TILE_WIDTH,
};

pub const CIRCUIT_MAP_SIZE: ImageSize = ImageSize::new(100, 100);
pub const SPEEDOMETER_SIZE: ImageSize = ImageSize::new(150, 40);

const BODY: Rgb = Rgb::new(200, 20, 30);
const BODY_DARK: Rgb = Rgb::new(120, 10, 20);
const TIRE: Rgb = Rgb::new(20, 20, 20);
const TREAD: Rgb = Rgb::new(70, 70, 70);
const GLASS: Rgb = Rgb::new(90, 160, 220);
const BRAKE_LIGHT: Rgb = Rgb::new(255, 90, 60);
const MOUNTAIN: Rgb = Rgb::new(110, 90, 140);
const SNOW: Rgb = Rgb::new(235, 235, 245);
const TREE: Rgb = Rgb::new(20, 100, 40);
const POST: Rgb = Rgb::new(120, 80, 40);

/// An image with per-pixel transparency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u16,
    height: u16,
    pixels: Vec<Option<Rgb>>,
}

impl Bitmap {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = Some(color);
    }

    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        for yy in y..y + h {
            for xx in x..x + w {
                self.set(xx, yy, color);
            }
        }
    }

    /// Filled triangle with its apex at `(cx, top)` and base on `bottom`.
    fn peak(&mut self, cx: i32, top: i32, bottom: i32, color: Rgb) {
        for y in top..=bottom {
            let half = y - top;
            self.rect(cx - half, y, half * 2 + 1, 1, color);
        }
    }
}

/// Every sprite frame, keyed by image.
#[derive(Debug, Clone, Default)]
pub struct SpriteSheet {
    bitmaps: BTreeMap<ImageRef, (Bitmap, ImageSize)>,
}

impl SpriteSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint the full set of race sprites.
    pub fn builtin() -> Self {
        let mut sheet = Self::new();
        for frame in 1..=SpriteKind::Car.frames() {
            sheet.insert(
                ImageRef::new(SpriteKind::Car, frame),
                car(frame),
                ImageSize::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            );
        }
        for frame in 1..=SpriteKind::Banner.frames() {
            sheet.insert(
                ImageRef::new(SpriteKind::Banner, frame),
                banner(frame),
                ImageSize::new(BANNER_WIDTH, BANNER_HEIGHT),
            );
        }
        for frame in 1..=SpriteKind::Landscape.frames() {
            sheet.insert(
                ImageRef::new(SpriteKind::Landscape, frame),
                landscape_tile(frame),
                ImageSize::new(TILE_WIDTH, TILE_HEIGHT),
            );
        }
        sheet.insert(
            ImageRef::new(SpriteKind::CircuitMap, 1),
            circuit_map(),
            CIRCUIT_MAP_SIZE,
        );
        sheet.insert(
            ImageRef::new(SpriteKind::Speedometer, 1),
            speedometer(),
            SPEEDOMETER_SIZE,
        );
        log::debug!("painted {} sprite frames", sheet.len());
        sheet
    }

    pub fn insert(&mut self, image: ImageRef, bitmap: Bitmap, size: ImageSize) {
        self.bitmaps.insert(image, (bitmap, size));
    }

    pub fn get(&self, image: ImageRef) -> Option<&Bitmap> {
        self.bitmaps.get(&image).map(|(bitmap, _)| bitmap)
    }

    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }

    /// Logical sizes of every painted frame.
    pub fn catalog(&self) -> AssetCatalog {
        let mut catalog = AssetCatalog::new();
        for (image, (_, size)) in &self.bitmaps {
            catalog.register(image.kind, image.frame, *size);
        }
        catalog
    }
}

/// Rear view of the car, 36x20.
///
/// Frames: 1-3 straight/right/left, 4-6 braking, 7-9 second tire phase.
fn car(frame: u8) -> Bitmap {
    let mut bmp = Bitmap::new(36, 20);
    let lean = match frame {
        2 | 5 | 8 => 1,
        3 | 6 | 9 => -1,
        _ => 0,
    };
    let braking = (4..=6).contains(&frame);
    let second_phase = frame >= 7;

    // Rear wing and body.
    bmp.rect(4 + lean, 2, 28, 3, BODY_DARK);
    bmp.rect(10 + lean, 5, 16, 9, BODY);
    bmp.rect(14 + lean, 6, 8, 3, GLASS);
    bmp.rect(6, 12, 24, 4, BODY);

    // Rear tires; the tread stripe moves between phases.
    for x in [0, 28] {
        bmp.rect(x, 8, 8, 12, TIRE);
        let stripe = if second_phase { 11 } else { 14 };
        bmp.rect(x, stripe, 8, 1, TREAD);
        bmp.rect(x, stripe + 5, 8, 1, TREAD);
    }

    let light = if braking { BRAKE_LIGHT } else { BODY_DARK };
    bmp.rect(12, 15, 4, 2, light);
    bmp.rect(20, 15, 4, 2, light);
    bmp
}

/// Roadside billboard on two posts, 20x16.
fn banner(frame: u8) -> Bitmap {
    let mut bmp = Bitmap::new(20, 16);
    let stripe = if frame == 1 { palette::RED } else { palette::SKY };
    bmp.rect(0, 0, 20, 10, palette::WHITE);
    bmp.rect(1, 3, 18, 4, stripe);
    bmp.rect(3, 10, 2, 6, POST);
    bmp.rect(15, 10, 2, 6, POST);
    bmp
}

/// Horizon tile, 10x10. Frame 1 is open sky.
fn landscape_tile(frame: u8) -> Bitmap {
    let mut bmp = Bitmap::new(10, 10);
    match frame {
        2 => {
            bmp.peak(5, 3, 9, MOUNTAIN);
            bmp.peak(5, 3, 4, SNOW);
        }
        3 => bmp.peak(3, 5, 9, MOUNTAIN),
        4 => {
            bmp.peak(6, 1, 9, MOUNTAIN);
            bmp.peak(6, 1, 3, SNOW);
        }
        5 => {
            bmp.peak(2, 6, 9, TREE);
            bmp.peak(7, 5, 9, TREE);
        }
        6 => bmp.rect(0, 8, 10, 2, TREE),
        _ => {}
    }
    bmp
}

/// Circuit outline, 20x20.
fn circuit_map() -> Bitmap {
    let mut bmp = Bitmap::new(20, 20);
    for i in 2..18 {
        bmp.set(i, 2, palette::WHITE);
        bmp.set(i, 17, palette::WHITE);
        bmp.set(2, i, palette::WHITE);
        bmp.set(17, i, palette::WHITE);
    }
    bmp.rect(2, 9, 2, 2, palette::RED);
    bmp
}

/// Speed bar, 30x8.
fn speedometer() -> Bitmap {
    let mut bmp = Bitmap::new(30, 8);
    bmp.rect(0, 0, 30, 8, palette::BLACK);
    for (i, x) in (2..28).step_by(2).enumerate() {
        let color = if i < 9 { palette::GRASS } else { palette::RED };
        bmp.rect(x, 2, 1, 4, color);
    }
    bmp
}
