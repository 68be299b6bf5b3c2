//! Landscape module - endlessly scrolling horizon
//!
//! Fifteen 50px tiles sit above the horizon: thirteen cover the screen and
//! one hangs off each side. Instead of moving tiles to ever larger
//! coordinates, the landscape keeps a small pixel offset and, once a whole
//! tile has scrolled past, rotates which map entry every slot shows.

use crate::render::Surface;
use crate::sprite::{draw_sprite, AssetCatalog, Sprite};
use crate::types::{SpriteKind, LANDSCAPE_WIDTH, SKY_HEIGHT, TILE_HEIGHT, TILE_WIDTH};

/// Tile type of every map position.
pub const LANDSCAPE_MAP: [u8; LANDSCAPE_WIDTH] = [0, 0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5, 0, 0];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Landscape {
    offset: i32,
    /// Map position shown by each screen slot.
    tile_pos: [usize; LANDSCAPE_WIDTH],
}

impl Landscape {
    pub fn new() -> Self {
        let mut tile_pos = [0; LANDSCAPE_WIDTH];
        for (i, pos) in tile_pos.iter_mut().enumerate() {
            *pos = i;
        }
        Self {
            offset: 0,
            tile_pos,
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn tile_positions(&self) -> &[usize; LANDSCAPE_WIDTH] {
        &self.tile_pos
    }

    /// Scroll by `delta` pixels; positive moves the scenery right.
    pub fn scroll(&mut self, delta: i32) {
        self.offset += delta;

        if self.offset.abs() <= TILE_WIDTH {
            return;
        }
        self.offset = 0;

        for pos in self.tile_pos.iter_mut() {
            *pos = if delta < 0 {
                (*pos + 1) % LANDSCAPE_WIDTH
            } else {
                (*pos + LANDSCAPE_WIDTH - 1) % LANDSCAPE_WIDTH
            };
        }
    }

    /// Tile sprites in draw order. Slot 0 starts one tile left of the screen.
    pub fn tiles(&self) -> impl Iterator<Item = Sprite> + '_ {
        self.tile_pos.iter().enumerate().map(move |(slot, &pos)| {
            let kind = LANDSCAPE_MAP[pos];
            let mut tile = Sprite::new(SpriteKind::Landscape)
                .with_frame(kind + 1)
                .at(
                    (slot as i32 - 1) * TILE_WIDTH + self.offset,
                    SKY_HEIGHT - TILE_HEIGHT,
                );
            tile.on();
            tile
        })
    }

    pub fn render<S: Surface + ?Sized>(&self, assets: &AssetCatalog, surface: &mut S) {
        for tile in self.tiles() {
            draw_sprite(&tile, assets, surface);
        }
    }
}

impl Default for Landscape {
    fn default() -> Self {
        Self::new()
    }
}
