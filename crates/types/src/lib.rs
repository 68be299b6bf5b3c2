//! Shared types module - screen geometry, physics constants and input events
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the simulation core, the terminal presentation layer and the
//! headless tracer alike.
//!
//! # Screen Geometry
//!
//! All simulation math happens in a fixed 640x480 logical screen. The road
//! occupies the bottom 200 scanlines, below a 280 pixel sky:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `APP_WIDTH` | 640 | Logical screen width |
//! | `APP_HEIGHT` | 480 | Logical screen height |
//! | `SKY_HEIGHT` | 280 | Horizon line (first road scanline from the top) |
//! | `ROAD_HEIGHT` | 200 | Number of road scanlines |
//!
//! # Timing
//!
//! The simulation advances in fixed 40ms ticks (~25 Hz). Speeds are in km/h
//! and every physics constant is applied once per tick:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 40 | Fixed timestep interval |
//! | `MAX_SPEED` | 300 | Top speed |
//! | `ACCEL` | 5 | Speed gained (or lost when coasting) per tick |
//! | `BRAKE` | 30 | Extra speed lost per tick while braking |
//! | `OFF_ROAD_PENALTY` | 10 | Speed lost per tick on the grass |
//!
//! # Examples
//!
//! ```
//! use pole_position_types::{CarFrame, InputEvent, SteerDirection, MAX_SPEED};
//!
//! assert_eq!(InputEvent::from_str("accelerateOn"), Some(InputEvent::AccelerateOn));
//! assert_eq!(CarFrame::from_index(9), Some(CarFrame::SteerLeft2));
//! assert_eq!(SteerDirection::Left.opposite(), SteerDirection::Right);
//! assert_eq!(MAX_SPEED, 300);
//! ```

/// Logical screen width in pixels.
pub const APP_WIDTH: i32 = 640;

/// Logical screen height in pixels.
pub const APP_HEIGHT: i32 = 480;

/// Height of the sky band; the road starts right below it.
pub const SKY_HEIGHT: i32 = 280;

/// Number of road scanlines (and entries in the perspective scale table).
pub const ROAD_HEIGHT: i32 = 200;

/// Fixed timestep interval in milliseconds (40ms ≈ 25 Hz).
pub const TICK_MS: u32 = 40;

/// Number of one-kilometre segments in the circuit.
pub const ROAD_LENGTH: usize = 200;

/// Largest curvature magnitude a track segment may hold.
pub const MAX_CURVATURE: i32 = 10;

/// Road-border base width at the nearest scanline.
pub const BORDER_BASE: i32 = 20;

/// Curve scale constant: `(APP_WIDTH / 2) / MAX_CURVATURE - ROAD_HEIGHT / 100`.
pub const CONST_S: i32 = (APP_WIDTH / 2) / MAX_CURVATURE - (ROAD_HEIGHT / 100);

/// Per-scanline horizontal inset numerator and denominator.
///
/// `(APP_WIDTH / ROAD_HEIGHT) / 2` evaluated with the integer quotient first,
/// i.e. 3 / 2 = 1.5 pixels per side and scanline.
pub const CONST_Z_NUM: i32 = APP_WIDTH / ROAD_HEIGHT;
pub const CONST_Z_DEN: i32 = 2;

/// Road scroll applied per tick while steering left.
pub const STEER_LEFT_SCROLL: i32 = 10;

/// Road scroll applied per tick while steering right.
pub const STEER_RIGHT_SCROLL: i32 = -10;

/// Value the border-change counter is reset to after a color swap.
pub const BORDER_CHANGE_RESET: i32 = 30;

/// Number of scanlines between two border/division color toggles.
pub const BORDER_BAND: i32 = 30;

/// Car sprite width.
pub const PLAYER_WIDTH: i32 = 180;

/// Car sprite height.
pub const PLAYER_HEIGHT: i32 = 96;

/// Top speed in km/h.
pub const MAX_SPEED: i32 = 300;

/// Speed gained per tick when accelerating (and lost per tick when not).
pub const ACCEL: i32 = 5;

/// Extra speed lost per tick while braking.
pub const BRAKE: i32 = 30;

/// Speed lost per tick while driving on the grass.
pub const OFF_ROAD_PENALTY: i32 = 10;

/// Number of landscape tiles in the rotating buffer (13 on screen + 2 off).
pub const LANDSCAPE_WIDTH: usize = 15;

/// Number of distinct landscape tile images.
pub const LANDSCAPE_TILE_KINDS: usize = 6;

/// Landscape tile width.
pub const TILE_WIDTH: i32 = 50;

/// Landscape tile height.
pub const TILE_HEIGHT: i32 = 50;

/// Banner base width (at 100% scale).
pub const BANNER_WIDTH: i32 = 100;

/// Banner base height (at 100% scale).
pub const BANNER_HEIGHT: i32 = 80;

/// Distance windows (inclusive, in km) in which a banner may appear.
pub const BANNER_WINDOWS: [(usize, usize); 2] = [(50, 60), (150, 160)];

/// Banner scale growth per tick, in percent.
pub const BANNER_GROWTH: i32 = 2;

/// Above this scale the banner switches to fast depth steps.
pub const BANNER_FAST_SCALE: i32 = 150;

/// Depth advance per tick in slow mode.
pub const BANNER_SLOW_STEP: i32 = 1;

/// Depth advance per tick in fast mode.
pub const BANNER_FAST_STEP: i32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_road_constants() {
        assert_eq!(CONST_S, 30);
        assert_eq!(CONST_Z_NUM, 3);
        assert_eq!(SKY_HEIGHT + ROAD_HEIGHT, APP_HEIGHT);
        assert_eq!(MAX_SPEED / ACCEL, 60);
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Game palette.
pub mod palette {
    use super::Rgb;

    pub const SKY: Rgb = Rgb::new(32, 32, 224);
    pub const GRASS: Rgb = Rgb::new(0, 150, 0);
    pub const ROAD: Rgb = Rgb::new(100, 100, 100);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const HUD_TEXT: Rgb = Rgb::new(255, 255, 0);
}

/// Discrete input events delivered to the simulation.
///
/// Each event sets exactly one player field; there is no queuing or
/// debouncing, the last event before a tick wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    SteerLeft,
    SteerRight,
    SteerNone,
    AccelerateOn,
    AccelerateOff,
    BrakeOn,
    BrakeOff,
}

impl InputEvent {
    pub const ALL: [InputEvent; 7] = [
        InputEvent::SteerLeft,
        InputEvent::SteerRight,
        InputEvent::SteerNone,
        InputEvent::AccelerateOn,
        InputEvent::AccelerateOff,
        InputEvent::BrakeOn,
        InputEvent::BrakeOff,
    ];

    /// Parse an event from its camelCase name (case-insensitive).
    ///
    /// ```
    /// use pole_position_types::InputEvent;
    ///
    /// assert_eq!(InputEvent::from_str("brakeOn"), Some(InputEvent::BrakeOn));
    /// assert_eq!(InputEvent::from_str("STEERLEFT"), Some(InputEvent::SteerLeft));
    /// assert_eq!(InputEvent::from_str("nitro"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "steerleft" => Some(InputEvent::SteerLeft),
            "steerright" => Some(InputEvent::SteerRight),
            "steernone" => Some(InputEvent::SteerNone),
            "accelerateon" => Some(InputEvent::AccelerateOn),
            "accelerateoff" => Some(InputEvent::AccelerateOff),
            "brakeon" => Some(InputEvent::BrakeOn),
            "brakeoff" => Some(InputEvent::BrakeOff),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::SteerLeft => "steerLeft",
            InputEvent::SteerRight => "steerRight",
            InputEvent::SteerNone => "steerNone",
            InputEvent::AccelerateOn => "accelerateOn",
            InputEvent::AccelerateOff => "accelerateOff",
            InputEvent::BrakeOn => "brakeOn",
            InputEvent::BrakeOff => "brakeOff",
        }
    }
}

/// Steering wheel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SteerDirection {
    Left,
    Right,
    #[default]
    None,
}

impl SteerDirection {
    pub fn opposite(&self) -> Self {
        match self {
            SteerDirection::Left => SteerDirection::Right,
            SteerDirection::Right => SteerDirection::Left,
            SteerDirection::None => SteerDirection::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SteerDirection::Left => "left",
            SteerDirection::Right => "right",
            SteerDirection::None => "none",
        }
    }
}

/// Car sprite frames.
///
/// Every steering state has two frames so the tires can be animated by
/// alternating between them; braking states have a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CarFrame {
    #[default]
    SteerNone,
    SteerRight,
    SteerLeft,
    BrakeNone,
    BrakeRight,
    BrakeLeft,
    SteerNone2,
    SteerRight2,
    SteerLeft2,
}

impl CarFrame {
    /// Asset frame number (1-based, matches the car sprite sheet order).
    pub fn index(&self) -> u8 {
        match self {
            CarFrame::SteerNone => 1,
            CarFrame::SteerRight => 2,
            CarFrame::SteerLeft => 3,
            CarFrame::BrakeNone => 4,
            CarFrame::BrakeRight => 5,
            CarFrame::BrakeLeft => 6,
            CarFrame::SteerNone2 => 7,
            CarFrame::SteerRight2 => 8,
            CarFrame::SteerLeft2 => 9,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(CarFrame::SteerNone),
            2 => Some(CarFrame::SteerRight),
            3 => Some(CarFrame::SteerLeft),
            4 => Some(CarFrame::BrakeNone),
            5 => Some(CarFrame::BrakeRight),
            6 => Some(CarFrame::BrakeLeft),
            7 => Some(CarFrame::SteerNone2),
            8 => Some(CarFrame::SteerRight2),
            9 => Some(CarFrame::SteerLeft2),
            _ => None,
        }
    }

    pub fn is_braking(&self) -> bool {
        matches!(
            self,
            CarFrame::BrakeNone | CarFrame::BrakeLeft | CarFrame::BrakeRight
        )
    }
}

/// Side of the road a banner is planted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BannerSide {
    #[default]
    Left,
    Right,
}

impl BannerSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerSide::Left => "left",
            BannerSide::Right => "right",
        }
    }
}

/// Logical image families known to the asset catalog.
///
/// Frames inside a family are 1-based, like the sprite sheets they name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpriteKind {
    /// Player car, frames 1..=9 (see [`CarFrame`]).
    Car,
    /// Roadside banner, frames 1..=2.
    Banner,
    /// Landscape tile, frames 1..=6 (tile type + 1).
    Landscape,
    /// HUD circuit map, frame 1.
    CircuitMap,
    /// HUD speedometer, frame 1.
    Speedometer,
}

impl SpriteKind {
    /// Number of frames in the family.
    pub fn frames(&self) -> u8 {
        match self {
            SpriteKind::Car => 9,
            SpriteKind::Banner => 2,
            SpriteKind::Landscape => LANDSCAPE_TILE_KINDS as u8,
            SpriteKind::CircuitMap | SpriteKind::Speedometer => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteKind::Car => "car",
            SpriteKind::Banner => "banner",
            SpriteKind::Landscape => "landscape",
            SpriteKind::CircuitMap => "circuit-map",
            SpriteKind::Speedometer => "speedometer",
        }
    }
}
