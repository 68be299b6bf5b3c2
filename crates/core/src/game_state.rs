//! Game state module - owns every scene object and advances them in lockstep
//!
//! One call to [`GameState::tick`] is one 40ms simulation step. The update
//! order is fixed: landscape, banner, road, then the player. The banner
//! places itself from the road's scroll before the road moves, and the car
//! steers the road only after the road's own curve drift.

use crate::banner::Banner;
use crate::clock::FixedTimestep;
use crate::hud::Hud;
use crate::landscape::Landscape;
use crate::player::Player;
use crate::rng::SimpleRng;
use crate::road::{DistanceMode, Road};
use crate::snapshot::{BannerSnapshot, RaceSnapshot};
use crate::sprite::{AssetCatalog, Drawable};
use crate::track::{Track, TrackError};
use crate::types::{InputEvent, TICK_MS};

#[derive(Debug, Clone)]
pub struct GameState {
    road: Road,
    player: Player,
    landscape: Landscape,
    banner: Banner,
    hud: Hud,
    rng: SimpleRng,
    clock: FixedTimestep,
    tick_count: u64,
    seed: u32,
}

impl GameState {
    /// New race on the built-in circuit.
    pub fn new(seed: u32, distance_mode: DistanceMode) -> Result<Self, TrackError> {
        Ok(Self::with_track(Track::builtin()?, seed, distance_mode))
    }

    pub fn with_track(track: Track, seed: u32, distance_mode: DistanceMode) -> Self {
        log::info!(
            "new race: seed {}, distance mode {}",
            seed,
            distance_mode.as_str()
        );
        Self {
            road: Road::new(track, distance_mode),
            player: Player::new(),
            landscape: Landscape::new(),
            banner: Banner::new(),
            hud: Hud::new(),
            rng: SimpleRng::new(seed),
            clock: FixedTimestep::new(TICK_MS),
            tick_count: 0,
            seed,
        }
    }

    /// Replace the scheduler, e.g. to run at a different tick length.
    pub fn with_clock(mut self, clock: FixedTimestep) -> Self {
        self.clock = clock;
        self
    }

    /// Pick up image sizes that depend on the loaded assets.
    pub fn use_assets(&mut self, assets: &AssetCatalog) {
        self.banner.use_assets(assets);
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn road(&self) -> &Road {
        &self.road
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn landscape(&self) -> &Landscape {
        &self.landscape
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn clock(&self) -> &FixedTimestep {
        &self.clock
    }

    /// Latch an input event; it takes effect on the next tick.
    pub fn apply_input(&mut self, event: InputEvent) {
        log::trace!("input {}", event.as_str());
        self.player.apply(event);
    }

    /// Advance the simulation by exactly one tick.
    pub fn tick(&mut self) {
        let speed = self.player.speed();

        if self.player.accelerating() {
            self.landscape.scroll(-self.road.current_curvature());
        }

        self.banner.update(&self.road, speed, &mut self.rng);
        self.road.update(speed);

        self.player.tick(self.road.scroll());
        self.player.select_frame();
        self.road.scroll_by(self.player.steer_scroll());

        self.tick_count += 1;
    }

    /// Feed `elapsed_ms` of wall-clock time; runs every tick that became due.
    ///
    /// Returns the number of ticks run.
    pub fn step(&mut self, elapsed_ms: u32) -> u32 {
        let due = self.clock.advance(elapsed_ms);
        for _ in 0..due {
            self.tick();
        }
        due
    }

    pub fn snapshot_into(&self, out: &mut RaceSnapshot) {
        let (banner_x, banner_y) = self.banner.position();
        out.tick = self.tick_count;
        out.seed = self.seed;
        out.speed = self.player.speed();
        out.steer = self.player.steer_direction();
        out.accelerating = self.player.accelerating();
        out.braking = self.player.braking();
        out.frame = self.player.car_frame();
        out.distance = self.road.distance();
        out.laps = self.road.laps();
        out.curvature = self.road.current_curvature();
        out.scroll = self.road.scroll();
        out.border_change = self.road.border_change();
        out.off_road = Player::is_off_road(self.road.scroll());
        out.landscape_offset = self.landscape.offset();
        out.landscape_tiles = *self.landscape.tile_positions();
        out.banner = BannerSnapshot {
            active: self.banner.active(),
            side: self.banner.side(),
            frame: self.banner.frame(),
            x: banner_x,
            y: banner_y,
            scale: self.banner.scale(),
            depth: self.banner.depth(),
        };
    }

    pub fn snapshot(&self) -> RaceSnapshot {
        let mut snap = RaceSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
