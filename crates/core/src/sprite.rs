//! Sprites and the asset catalog.
//!
//! Images are loaded and decoded by the presentation layer. The simulation
//! only needs their pixel sizes, which live in the [`AssetCatalog`]. A frame
//! the presentation layer failed to provide simply has no entry, and drawing
//! it is skipped.

use std::collections::BTreeMap;

use crate::render::{ImageRef, Surface};
use crate::types::SpriteKind;

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageSize {
    pub width: i32,
    pub height: i32,
}

impl ImageSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Sizes of every image frame the presentation layer managed to load.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    sizes: BTreeMap<(SpriteKind, u8), ImageSize>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: SpriteKind, frame: u8, size: ImageSize) {
        self.sizes.insert((kind, frame), size);
    }

    pub fn size(&self, kind: SpriteKind, frame: u8) -> Option<ImageSize> {
        self.sizes.get(&(kind, frame)).copied()
    }

    /// Reference size of a family: its last frame, else any loaded frame.
    pub fn base_size(&self, kind: SpriteKind) -> Option<ImageSize> {
        self.size(kind, kind.frames()).or_else(|| {
            self.sizes
                .range((kind, 0)..=(kind, u8::MAX))
                .next()
                .map(|(_, size)| *size)
        })
    }

    /// Frames expected for `kinds` that have no entry.
    pub fn missing<'a>(
        &'a self,
        kinds: &'a [SpriteKind],
    ) -> impl Iterator<Item = (SpriteKind, u8)> + 'a {
        kinds.iter().flat_map(move |&kind| {
            (1..=kind.frames())
                .filter(move |&frame| !self.sizes.contains_key(&(kind, frame)))
                .map(move |frame| (kind, frame))
        })
    }

    /// Log every expected frame that failed to load. Returns how many.
    pub fn report_missing(&self, kinds: &[SpriteKind]) -> usize {
        let mut count = 0;
        for (kind, frame) in self.missing(kinds) {
            log::warn!("missing image: {} frame {}", kind.as_str(), frame);
            count += 1;
        }
        count
    }
}

/// Anything that can be placed on screen as an image.
pub trait Drawable {
    fn kind(&self) -> SpriteKind;

    /// Top-left corner in logical screen coordinates.
    fn position(&self) -> (i32, i32);

    /// 1-based frame within the sprite family.
    fn frame(&self) -> u8;

    fn visible(&self) -> bool;

    /// Size the sprite is drawn at. Defaults to the loaded image size.
    fn draw_size(&self, assets: &AssetCatalog) -> Option<ImageSize> {
        assets.size(self.kind(), self.frame())
    }
}

/// Draw `sprite` if it is visible and its frame was loaded.
pub fn draw_sprite<D, S>(sprite: &D, assets: &AssetCatalog, surface: &mut S)
where
    D: Drawable + ?Sized,
    S: Surface + ?Sized,
{
    if !sprite.visible() {
        return;
    }
    let Some(size) = sprite.draw_size(assets) else {
        return;
    };
    if size.is_empty() {
        return;
    }
    let (x, y) = sprite.position();
    surface.draw_image(
        ImageRef::new(sprite.kind(), sprite.frame()),
        x,
        y,
        size.width,
        size.height,
    );
}

/// Axis-aligned bounding box overlap between two sprites.
///
/// Sprites whose frame was never loaded cannot collide.
pub fn collides(a: &dyn Drawable, b: &dyn Drawable, assets: &AssetCatalog) -> bool {
    let (Some(sa), Some(sb)) = (a.draw_size(assets), b.draw_size(assets)) else {
        return false;
    };
    let (x1, y1) = a.position();
    let (x2, y2) = b.position();

    x1 + sa.width > x2 && y1 + sa.height > y2 && x2 + sb.width > x1 && y2 + sb.height > y1
}

/// A plain positioned image: landscape tiles and HUD elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    kind: SpriteKind,
    x: i32,
    y: i32,
    frame: u8,
    visible: bool,
}

impl Sprite {
    pub fn new(kind: SpriteKind) -> Self {
        Self {
            kind,
            x: 0,
            y: 0,
            frame: 1,
            visible: false,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_frame(mut self, frame: u8) -> Self {
        self.frame = frame;
        self
    }

    pub fn on(&mut self) {
        self.visible = true;
    }

    pub fn off(&mut self) {
        self.visible = false;
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn select_frame(&mut self, frame: u8) {
        self.frame = frame;
    }
}

impl Drawable for Sprite {
    fn kind(&self) -> SpriteKind {
        self.kind
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn frame(&self) -> u8 {
        self.frame
    }

    fn visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    fn catalog() -> AssetCatalog {
        let mut assets = AssetCatalog::new();
        assets.register(SpriteKind::Landscape, 1, ImageSize::new(50, 50));
        assets.register(SpriteKind::CircuitMap, 1, ImageSize::new(100, 100));
        assets
    }

    #[test]
    fn base_size_prefers_last_frame() {
        let mut assets = AssetCatalog::new();
        assets.register(SpriteKind::Banner, 1, ImageSize::new(90, 70));
        assert_eq!(
            assets.base_size(SpriteKind::Banner),
            Some(ImageSize::new(90, 70))
        );
        assets.register(SpriteKind::Banner, 2, ImageSize::new(100, 80));
        assert_eq!(
            assets.base_size(SpriteKind::Banner),
            Some(ImageSize::new(100, 80))
        );
        assert_eq!(assets.base_size(SpriteKind::Car), None);
    }

    #[test]
    fn missing_lists_unloaded_frames() {
        let assets = catalog();
        let missing: Vec<_> = assets.missing(&[SpriteKind::Landscape]).collect();
        assert_eq!(missing.len(), 5);
        assert_eq!(missing[0], (SpriteKind::Landscape, 2));
        assert_eq!(assets.report_missing(&[SpriteKind::CircuitMap]), 0);
    }

    #[test]
    fn drawing_missing_frame_is_a_no_op() {
        let assets = catalog();
        let mut surface = RecordingSurface::new();

        let mut tile = Sprite::new(SpriteKind::Landscape).with_frame(3);
        tile.on();
        draw_sprite(&tile, &assets, &mut surface);
        assert!(surface.commands().is_empty());

        tile.select_frame(1);
        draw_sprite(&tile, &assets, &mut surface);
        assert_eq!(
            surface.commands(),
            &[DrawCommand::Image {
                image: ImageRef::new(SpriteKind::Landscape, 1),
                x: 0,
                y: 0,
                w: 50,
                h: 50
            }]
        );
    }

    #[test]
    fn hidden_sprite_is_not_drawn() {
        let assets = catalog();
        let mut surface = RecordingSurface::new();
        let tile = Sprite::new(SpriteKind::Landscape);
        draw_sprite(&tile, &assets, &mut surface);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn overlapping_boxes_collide() {
        let assets = catalog();
        let a = Sprite::new(SpriteKind::Landscape).at(0, 0);
        let b = Sprite::new(SpriteKind::Landscape).at(49, 49);
        let c = Sprite::new(SpriteKind::Landscape).at(50, 0);
        assert!(collides(&a, &b, &assets));
        assert!(!collides(&a, &c, &assets), "touching edges do not overlap");
    }

    #[test]
    fn unloaded_sprites_never_collide() {
        let assets = catalog();
        let a = Sprite::new(SpriteKind::Landscape).at(0, 0);
        let ghost = Sprite::new(SpriteKind::Speedometer).at(0, 0);
        assert!(!collides(&a, &ghost, &assets));
    }
}
