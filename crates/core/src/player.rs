//! Player car: speed integration, steering and sprite frame selection.

use crate::sprite::Drawable;
use crate::types::{
    CarFrame, InputEvent, SpriteKind, SteerDirection, ACCEL, APP_HEIGHT, APP_WIDTH, BRAKE,
    MAX_SPEED, OFF_ROAD_PENALTY, PLAYER_HEIGHT, PLAYER_WIDTH, STEER_LEFT_SCROLL,
    STEER_RIGHT_SCROLL,
};

/// Screen position of the car; the world moves, the car does not.
pub const PLAYER_X: i32 = APP_WIDTH / 2 - PLAYER_WIDTH / 2;
pub const PLAYER_Y: i32 = APP_HEIGHT - PLAYER_HEIGHT - 10;

/// Largest road scroll (either side) that still keeps the car on asphalt.
pub const ON_ROAD_LIMIT: i32 = APP_WIDTH / 2 - PLAYER_WIDTH / 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    speed: i32,
    steer: SteerDirection,
    accelerating: bool,
    braking: bool,
    frame: CarFrame,
}

impl Player {
    pub fn new() -> Self {
        Self {
            speed: 0,
            steer: SteerDirection::None,
            accelerating: false,
            braking: false,
            frame: CarFrame::SteerNone,
        }
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Set the speed, clamped to `[0, MAX_SPEED]`.
    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed.clamp(0, MAX_SPEED);
    }

    pub fn steer_direction(&self) -> SteerDirection {
        self.steer
    }

    pub fn set_steer_direction(&mut self, steer: SteerDirection) {
        self.steer = steer;
    }

    pub fn accelerating(&self) -> bool {
        self.accelerating
    }

    pub fn set_accelerating(&mut self, on: bool) {
        self.accelerating = on;
    }

    pub fn braking(&self) -> bool {
        self.braking
    }

    pub fn set_braking(&mut self, on: bool) {
        self.braking = on;
    }

    pub fn car_frame(&self) -> CarFrame {
        self.frame
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::SteerLeft => self.steer = SteerDirection::Left,
            InputEvent::SteerRight => self.steer = SteerDirection::Right,
            InputEvent::SteerNone => self.steer = SteerDirection::None,
            InputEvent::AccelerateOn => self.accelerating = true,
            InputEvent::AccelerateOff => self.accelerating = false,
            InputEvent::BrakeOn => self.braking = true,
            InputEvent::BrakeOff => self.braking = false,
        }
    }

    pub fn is_off_road(road_scroll: i32) -> bool {
        road_scroll < -ON_ROAD_LIMIT || road_scroll > ON_ROAD_LIMIT
    }

    /// Integrate speed for one tick.
    ///
    /// Coasting loses `ACCEL`, braking loses a further `BRAKE`, and the grass
    /// costs `OFF_ROAD_PENALTY`. Each step is clamped on its own.
    pub fn tick(&mut self, road_scroll: i32) {
        if self.accelerating {
            self.set_speed(self.speed + ACCEL);
        } else {
            self.set_speed(self.speed - ACCEL);
        }

        if self.braking {
            self.set_speed(self.speed - BRAKE);
        }

        if Self::is_off_road(road_scroll) {
            self.set_speed(self.speed - OFF_ROAD_PENALTY);
        }
    }

    /// Pick the car frame for the current input.
    ///
    /// Non-braking frames alternate with their second variant on every call
    /// to animate the tires. A stopped car always shows the plain frame.
    pub fn select_frame(&mut self) -> CarFrame {
        let next = if self.speed < 1 {
            if self.braking {
                CarFrame::BrakeNone
            } else {
                CarFrame::SteerNone
            }
        } else {
            match (self.steer, self.braking) {
                (SteerDirection::Left, true) => CarFrame::BrakeLeft,
                (SteerDirection::Right, true) => CarFrame::BrakeRight,
                (SteerDirection::None, true) => CarFrame::BrakeNone,
                (SteerDirection::Left, false) => {
                    alternate(self.frame, CarFrame::SteerLeft, CarFrame::SteerLeft2)
                }
                (SteerDirection::Right, false) => {
                    alternate(self.frame, CarFrame::SteerRight, CarFrame::SteerRight2)
                }
                (SteerDirection::None, false) => {
                    alternate(self.frame, CarFrame::SteerNone, CarFrame::SteerNone2)
                }
            }
        };
        self.frame = next;
        next
    }

    /// Road scroll caused by steering this tick. A stopped car cannot steer.
    pub fn steer_scroll(&self) -> i32 {
        if self.speed < 1 {
            return 0;
        }
        match self.steer {
            SteerDirection::Left => STEER_LEFT_SCROLL,
            SteerDirection::Right => STEER_RIGHT_SCROLL,
            SteerDirection::None => 0,
        }
    }
}

fn alternate(current: CarFrame, first: CarFrame, second: CarFrame) -> CarFrame {
    if current == first {
        second
    } else {
        first
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for Player {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Car
    }

    fn position(&self) -> (i32, i32) {
        (PLAYER_X, PLAYER_Y)
    }

    fn frame(&self) -> u8 {
        self.frame.index()
    }

    fn visible(&self) -> bool {
        true
    }
}
