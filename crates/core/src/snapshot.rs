use crate::types::{BannerSide, CarFrame, SteerDirection, LANDSCAPE_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerSnapshot {
    pub active: bool,
    pub side: BannerSide,
    pub frame: u8,
    pub x: i32,
    pub y: i32,
    pub scale: i32,
    pub depth: i32,
}

/// Plain-data view of one simulation tick, for observers and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RaceSnapshot {
    pub tick: u64,
    pub seed: u32,
    pub speed: i32,
    pub steer: SteerDirection,
    pub accelerating: bool,
    pub braking: bool,
    pub frame: CarFrame,
    pub distance: usize,
    pub laps: u32,
    pub curvature: i32,
    pub scroll: i32,
    pub border_change: i32,
    pub off_road: bool,
    pub landscape_offset: i32,
    pub landscape_tiles: [usize; LANDSCAPE_WIDTH],
    pub banner: BannerSnapshot,
}

impl RaceSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn moving(&self) -> bool {
        self.speed > 0
    }
}

impl Default for RaceSnapshot {
    fn default() -> Self {
        Self {
            tick: 0,
            seed: 0,
            speed: 0,
            steer: SteerDirection::None,
            accelerating: false,
            braking: false,
            frame: CarFrame::SteerNone,
            distance: 0,
            laps: 0,
            curvature: 0,
            scroll: 0,
            border_change: 0,
            off_road: false,
            landscape_offset: 0,
            landscape_tiles: [0; LANDSCAPE_WIDTH],
            banner: BannerSnapshot {
                active: false,
                side: BannerSide::Left,
                frame: 1,
                x: 0,
                y: 0,
                scale: 0,
                depth: 0,
            },
        }
    }
}
