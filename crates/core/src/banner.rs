//! Roadside advertisement banners.
//!
//! A banner appears at the horizon while the player is inside one of the
//! scripted distance windows, then slides down the road edge growing 2% per
//! tick. Its screen position reuses the road's perspective math at a
//! simulated depth. Past 150% it speeds up tenfold so it whips past the
//! camera, and it retires once it reaches the bottom of the road.

use crate::rng::SimpleRng;
use crate::road::{Road, CONST_Z};
use crate::sprite::{AssetCatalog, Drawable, ImageSize};
use crate::types::{
    BannerSide, SpriteKind, APP_WIDTH, BANNER_FAST_SCALE, BANNER_FAST_STEP, BANNER_GROWTH,
    BANNER_HEIGHT, BANNER_SLOW_STEP, BANNER_WIDTH, BANNER_WINDOWS, ROAD_HEIGHT, SKY_HEIGHT,
};

pub fn in_spawn_window(distance: usize) -> bool {
    BANNER_WINDOWS
        .iter()
        .any(|&(start, end)| distance >= start && distance <= end)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    active: bool,
    /// Percent of the base size.
    scale: i32,
    side: BannerSide,
    frame: u8,
    x: i32,
    y: i32,
    base: ImageSize,
    scaled: ImageSize,
    /// Simulated depth in scanlines below the horizon.
    depth: i32,
}

impl Banner {
    pub fn new() -> Self {
        Self::with_base_size(ImageSize::new(BANNER_WIDTH, BANNER_HEIGHT))
    }

    pub fn with_base_size(base: ImageSize) -> Self {
        Self {
            active: false,
            scale: 0,
            side: BannerSide::Left,
            frame: 1,
            x: 0,
            y: 0,
            base,
            scaled: base,
            depth: 0,
        }
    }

    /// Take the base size from the loaded banner images, if any.
    pub fn use_assets(&mut self, assets: &AssetCatalog) {
        if let Some(size) = assets.base_size(SpriteKind::Banner) {
            self.base = size;
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn side(&self) -> BannerSide {
        self.side
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn base_size(&self) -> ImageSize {
        self.base
    }

    pub fn scaled_size(&self) -> ImageSize {
        self.scaled
    }

    fn spawn(&mut self, rng: &mut SimpleRng) {
        self.side = if rng.next_bool() {
            BannerSide::Right
        } else {
            BannerSide::Left
        };
        self.frame = rng.next_range(2) as u8 + 1;
        self.active = true;
        self.depth = 0;
        self.scaled = ImageSize::new(0, 0);
        log::debug!(
            "banner {} spawned on the {}",
            self.frame,
            self.side.as_str()
        );
    }

    fn retire(&mut self) {
        self.active = false;
        self.scale = 0;
        log::debug!("banner retired");
    }

    /// Per-tick banner step.
    pub fn update(&mut self, road: &Road, speed: i32, rng: &mut SimpleRng) {
        if !self.active && in_spawn_window(road.distance()) {
            self.spawn(rng);
        }

        if !self.active || speed <= 1 {
            return;
        }

        self.scale += BANNER_GROWTH;
        self.scaled = ImageSize::new(
            self.base.width * self.scale / 100,
            self.base.height * self.scale / 100,
        );

        // Depth counted from the horizon, as a road scanline index.
        let inverted = ROAD_HEIGHT - self.depth;
        let delta_z = CONST_Z.mul_int(inverted).integral();
        let delta_s = road.current_curvature() * road.scale_at((inverted - 1) as usize);
        self.x = match self.side {
            BannerSide::Left => delta_s + road.scroll() + delta_z - self.scaled.width,
            BannerSide::Right => APP_WIDTH + delta_s + road.scroll() - delta_z,
        };

        let step = if self.scale > BANNER_FAST_SCALE {
            BANNER_FAST_STEP
        } else {
            BANNER_SLOW_STEP
        };
        self.y = SKY_HEIGHT + self.depth + step - self.scaled.height;
        self.depth += step;

        if self.depth >= ROAD_HEIGHT {
            self.retire();
        }
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for Banner {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Banner
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn frame(&self) -> u8 {
        self.frame
    }

    fn visible(&self) -> bool {
        self.active
    }

    /// Banners are drawn scaled; the frame only has to be loaded.
    fn draw_size(&self, assets: &AssetCatalog) -> Option<ImageSize> {
        assets.size(SpriteKind::Banner, self.frame).map(|_| self.scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::road::DistanceMode;
    use crate::track::Track;

    fn road_at(distance: usize) -> Road {
        let mut road = Road::new(Track::builtin().unwrap(), DistanceMode::Literal);
        road.set_distance(distance);
        road
    }

    #[test]
    fn spawn_windows_are_inclusive() {
        assert!(!in_spawn_window(49));
        assert!(in_spawn_window(50));
        assert!(in_spawn_window(60));
        assert!(!in_spawn_window(61));
        assert!(in_spawn_window(150));
        assert!(in_spawn_window(160));
        assert!(!in_spawn_window(0));
    }

    #[test]
    fn no_spawn_outside_windows() {
        let mut banner = Banner::new();
        let mut rng = SimpleRng::new(1);
        banner.update(&road_at(10), 100, &mut rng);
        assert!(!banner.active());
    }

    #[test]
    fn spawned_banner_waits_for_movement() {
        let mut banner = Banner::new();
        let mut rng = SimpleRng::new(1);
        banner.update(&road_at(55), 0, &mut rng);
        assert!(banner.active());
        assert_eq!(banner.scale(), 0);
        assert_eq!(banner.depth(), 0);
        assert!((1..=2).contains(&banner.frame()));
    }

    #[test]
    fn first_step_grows_and_places_banner() {
        let mut banner = Banner::new();
        let mut rng = SimpleRng::new(3);
        let road = road_at(55);
        banner.update(&road, 100, &mut rng);

        assert_eq!(banner.scale(), 2);
        assert_eq!(banner.scaled_size(), ImageSize::new(2, 1));
        assert_eq!(banner.depth(), 1);
        assert_eq!(banner.position().1, SKY_HEIGHT + 1 - 1);

        // inverted depth 200: delta_z = 300, scale[199] = 29, curvature at 55 = -3.
        let delta_s = -3 * 29;
        let expected_x = match banner.side() {
            BannerSide::Left => delta_s + 300 - 2,
            BannerSide::Right => APP_WIDTH + delta_s - 300,
        };
        assert_eq!(banner.position().0, expected_x);
    }

    #[test]
    fn depth_increases_until_retired() {
        let mut banner = Banner::new();
        let mut rng = SimpleRng::new(9);
        let road = road_at(150);

        banner.update(&road, 200, &mut rng);
        let mut last = banner.depth();
        let mut ticks = 1;
        while banner.active() {
            banner.update(&road, 200, &mut rng);
            ticks += 1;
            if banner.active() {
                assert!(banner.depth() > last);
                last = banner.depth();
            }
            assert!(ticks < 1000, "banner never retired");
        }
        assert!(banner.depth() >= ROAD_HEIGHT);
        assert_eq!(banner.scale(), 0);
        // 75 slow steps up to 150%, then 10 scanlines per tick.
        assert_eq!(ticks, 88);
    }

    #[test]
    fn banner_respawns_while_still_in_window() {
        let mut banner = Banner::new();
        let mut rng = SimpleRng::new(4);
        let road = road_at(60);
        while {
            banner.update(&road, 300, &mut rng);
            banner.active()
        } {}
        assert!(!banner.active());
        banner.update(&road, 300, &mut rng);
        assert!(banner.active());
        assert_eq!(banner.depth(), 1);
    }

    #[test]
    fn drawn_at_scaled_size_only_when_frame_loaded() {
        let mut banner = Banner::new();
        let mut rng = SimpleRng::new(5);
        banner.update(&road_at(55), 100, &mut rng);

        let empty = AssetCatalog::new();
        assert_eq!(banner.draw_size(&empty), None);

        let mut assets = AssetCatalog::new();
        assets.register(SpriteKind::Banner, 1, ImageSize::new(100, 80));
        assets.register(SpriteKind::Banner, 2, ImageSize::new(100, 80));
        assert_eq!(banner.draw_size(&assets), Some(ImageSize::new(2, 1)));
    }

    #[test]
    fn base_size_comes_from_assets() {
        let mut banner = Banner::new();
        let mut assets = AssetCatalog::new();
        assets.register(SpriteKind::Banner, 2, ImageSize::new(120, 60));
        banner.use_assets(&assets);
        assert_eq!(banner.base_size(), ImageSize::new(120, 60));
    }
}
