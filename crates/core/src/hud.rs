//! Heads-up display overlay. Static; nothing in it reacts to the race.

use crate::render::{Surface, TextSize};
use crate::sprite::{draw_sprite, AssetCatalog, Sprite};
use crate::types::{palette, SpriteKind, APP_HEIGHT, APP_WIDTH};

/// HUD captions: `(x, baseline y, text, size)`.
pub const HUD_TEXT: [(i32, i32, &str, TextSize); 4] = [
    (APP_WIDTH / 2 - 40, 30, "TIME LEFT", TextSize::Small),
    (APP_WIDTH / 2 - 20, 70, "50", TextSize::Large),
    (10, APP_HEIGHT - 10, "Nitro x 0", TextSize::Small),
    (APP_WIDTH - 110, APP_HEIGHT - 10, "100 Km/h", TextSize::Small),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    circuit_map: Sprite,
    speedometer: Sprite,
}

impl Hud {
    pub fn new() -> Self {
        let mut circuit_map = Sprite::new(SpriteKind::CircuitMap).at(10, 10);
        circuit_map.on();
        let mut speedometer =
            Sprite::new(SpriteKind::Speedometer).at(APP_WIDTH - 160, APP_HEIGHT - 50);
        speedometer.on();
        Self {
            circuit_map,
            speedometer,
        }
    }

    pub fn sprites(&self) -> [&Sprite; 2] {
        [&self.circuit_map, &self.speedometer]
    }

    pub fn render<S: Surface + ?Sized>(&self, assets: &AssetCatalog, surface: &mut S) {
        for &(x, y, text, size) in HUD_TEXT.iter() {
            surface.draw_text(x, y, text, size, palette::HUD_TEXT);
        }
        for sprite in self.sprites() {
            draw_sprite(sprite, assets, surface);
        }
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, ImageRef, RecordingSurface};
    use crate::sprite::ImageSize;

    #[test]
    fn renders_text_then_loaded_sprites() {
        let hud = Hud::new();
        let mut assets = AssetCatalog::new();
        assets.register(SpriteKind::Speedometer, 1, ImageSize::new(150, 40));

        let mut surface = RecordingSurface::new();
        hud.render(&assets, &mut surface);

        let cmds = surface.commands();
        assert_eq!(cmds.len(), HUD_TEXT.len() + 1);
        assert!(matches!(&cmds[1], DrawCommand::Text { text, size: TextSize::Large, .. } if text == "50"));
        assert_eq!(
            cmds[4],
            DrawCommand::Image {
                image: ImageRef::new(SpriteKind::Speedometer, 1),
                x: APP_WIDTH - 160,
                y: APP_HEIGHT - 50,
                w: 150,
                h: 40
            }
        );
    }
}
