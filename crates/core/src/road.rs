//! Road module - scanline pseudo-3D road
//!
//! The road is drawn as 200 horizontal spans, one per scanline, from the
//! bottom of the screen (nearest) up to the horizon (farthest). No 3D
//! projection is involved:
//!
//! - **Convergence**: every scanline is inset by a constant `CONST_Z` (1.5px)
//!   per side, so the edges meet near the horizon.
//! - **Curves**: the current curvature is multiplied by a per-scanline scale
//!   that grows with the cube of the scanline index, bending far scanlines
//!   more than near ones.
//! - **Motion**: border and division stripes alternate colors in 30 scanline
//!   bands. Sliding the first band boundary toward the camera each tick makes
//!   the stripes appear to rush past.
//!
//! All state changes happen in the update operations; [`Road::render`] and
//! [`Road::scanline`] are pure reads.

use crate::fixed_point::FixedPoint;
use crate::render::Surface;
use crate::track::Track;
use crate::types::{
    palette, Rgb, APP_HEIGHT, APP_WIDTH, BORDER_BAND, BORDER_BASE, BORDER_CHANGE_RESET, CONST_S,
    CONST_Z_DEN, CONST_Z_NUM, MAX_SPEED, ROAD_HEIGHT, ROAD_LENGTH,
};

/// Per-scanline horizontal inset.
pub const CONST_Z: FixedPoint = FixedPoint::from_ratio(CONST_Z_NUM, CONST_Z_DEN);

const SCANLINES: usize = ROAD_HEIGHT as usize;

/// How player speed turns into distance travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceMode {
    /// One km per tick at top speed, nothing below it (integer quotient).
    #[default]
    Literal,
    /// `speed / MAX_SPEED` km per tick. The remainder carries over exactly.
    Scaled,
}

impl DistanceMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "literal" => Some(DistanceMode::Literal),
            "scaled" => Some(DistanceMode::Scaled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceMode::Literal => "literal",
            DistanceMode::Scaled => "scaled",
        }
    }
}

/// Geometry and colors of one road scanline, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadScanline {
    /// Screen row.
    pub y: i32,
    /// Left road edge.
    pub left: i32,
    /// Right road edge.
    pub right: i32,
    /// Width of the border stripes drawn from each edge.
    pub border_width: i32,
    /// Division stripe span.
    pub division_left: i32,
    pub division_right: i32,
    pub border_color: Rgb,
    pub division_color: Rgb,
}

fn toggle_border(color: Rgb) -> Rgb {
    if color == palette::WHITE {
        palette::RED
    } else {
        palette::WHITE
    }
}

fn toggle_division(color: Rgb) -> Rgb {
    if color == palette::WHITE {
        palette::ROAD
    } else {
        palette::WHITE
    }
}

/// `floor((i / ROAD_HEIGHT)^3 * CONST_S)` for every scanline.
fn build_scale_table() -> [i32; SCANLINES] {
    let mut scale = [0; SCANLINES];
    let h3 = (ROAD_HEIGHT as i64).pow(3);
    for (i, s) in scale.iter_mut().enumerate() {
        *s = ((i as i64).pow(3) * CONST_S as i64 / h3) as i32;
    }
    scale
}

#[derive(Debug, Clone)]
pub struct Road {
    track: Track,
    scale: [i32; SCANLINES],
    /// Horizontal view shift, clamped to half the screen.
    scroll: i32,
    /// Current kilometre, index into the track.
    distance: usize,
    distance_mode: DistanceMode,
    /// Speed units not yet turned into a kilometre, in `[0, MAX_SPEED)`.
    odometer: i32,
    laps: u32,
    /// Scanline at which the first band boundary sits.
    border_change: i32,
    /// Border and division colors of the nearest band.
    border_color: Rgb,
    division_color: Rgb,
}

impl Road {
    pub fn new(track: Track, distance_mode: DistanceMode) -> Self {
        Self {
            track,
            scale: build_scale_table(),
            scroll: 0,
            distance: 0,
            distance_mode,
            odometer: 0,
            laps: 0,
            border_change: BORDER_CHANGE_RESET,
            border_color: palette::WHITE,
            division_color: palette::WHITE,
        }
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn distance(&self) -> usize {
        self.distance
    }

    pub fn distance_mode(&self) -> DistanceMode {
        self.distance_mode
    }

    pub fn laps(&self) -> u32 {
        self.laps
    }

    pub fn scroll(&self) -> i32 {
        self.scroll
    }

    pub fn border_change(&self) -> i32 {
        self.border_change
    }

    pub fn border_color(&self) -> Rgb {
        self.border_color
    }

    pub fn division_color(&self) -> Rgb {
        self.division_color
    }

    /// Curvature of the kilometre the player is on.
    pub fn current_curvature(&self) -> i32 {
        self.track.curvature(self.distance)
    }

    /// Perspective scale of `scanline` (0 = nearest).
    ///
    /// `scanline` must be below `ROAD_HEIGHT`.
    pub fn scale_at(&self, scanline: usize) -> i32 {
        self.scale[scanline]
    }

    pub fn scale_table(&self) -> &[i32] {
        &self.scale
    }

    #[cfg(test)]
    pub(crate) fn set_distance(&mut self, distance: usize) {
        self.distance = distance % ROAD_LENGTH;
    }

    /// Move `delta` kilometres ahead, wrapping to the start of the circuit.
    pub fn advance_distance(&mut self, delta: usize) {
        let next = self.distance + delta;
        if next >= ROAD_LENGTH {
            self.laps = self.laps.wrapping_add((next / ROAD_LENGTH) as u32);
            log::debug!("lap {} completed", self.laps);
        }
        self.distance = next % ROAD_LENGTH;
    }

    /// Distance gained in one tick at `speed`.
    pub fn advance_by_speed(&mut self, speed: i32) {
        let delta = match self.distance_mode {
            DistanceMode::Literal => speed / MAX_SPEED,
            DistanceMode::Scaled => {
                self.odometer += speed.max(0);
                let whole = self.odometer / MAX_SPEED;
                self.odometer %= MAX_SPEED;
                whole
            }
        };
        if delta > 0 {
            self.advance_distance(delta as usize);
        }
    }

    /// Shift the view by `delta` pixels, never past half the screen.
    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll = (self.scroll + delta).clamp(-APP_WIDTH / 2, APP_WIDTH / 2);
    }

    /// Slide the first band boundary toward the camera.
    ///
    /// Once it passes the nearest scanline the nearest band takes the other
    /// color and the boundary restarts 30 scanlines away.
    pub fn border_change_update(&mut self, speed: i32) {
        self.border_change -= speed / 10;
        if self.border_change < 0 {
            self.border_color = toggle_border(self.border_color);
            self.division_color = toggle_division(self.division_color);
            self.border_change = BORDER_CHANGE_RESET;
        }
    }

    /// Curves drag the view outward, harder at higher speed.
    pub fn curve_auto_scroll(&mut self, speed: i32) {
        if speed <= 1 {
            return;
        }
        // 3 when crawling, 1 at top speed.
        let divisor = (3 - speed / (MAX_SPEED / 2)).clamp(1, 3);
        self.scroll_by(self.current_curvature() / divisor);
    }

    /// Per-tick road step.
    pub fn update(&mut self, speed: i32) {
        if speed > 1 {
            self.border_change_update(speed);
        }
        self.curve_auto_scroll(speed);
        self.advance_by_speed(speed);
    }

    /// Border and division colors used on `scanline`.
    ///
    /// Scanlines below `border_change + 29` use the start colors; from there
    /// on the colors swap every 30 scanlines.
    pub fn band_colors(&self, scanline: i32) -> (Rgb, Rgb) {
        let first_toggle = self.border_change + BORDER_BAND - 1;
        let toggles = if scanline >= first_toggle {
            (scanline - first_toggle) / BORDER_BAND + 1
        } else {
            0
        };
        if toggles % 2 == 0 {
            (self.border_color, self.division_color)
        } else {
            (
                toggle_border(self.border_color),
                toggle_division(self.division_color),
            )
        }
    }

    /// Geometry of `scanline` (0 = nearest, `ROAD_HEIGHT - 1` = horizon).
    pub fn scanline(&self, scanline: usize) -> RoadScanline {
        let j = scanline as i32;
        let delta_z = CONST_Z.mul_int(j + 1).integral();
        let delta_s = self.current_curvature() * self.scale[scanline];

        let left = delta_z + delta_s + self.scroll;
        let right = APP_WIDTH + delta_s + self.scroll - delta_z;
        let border_width = (APP_WIDTH - 2 * delta_z) * BORDER_BASE / APP_WIDTH;
        let center = APP_WIDTH / 2 + delta_s + self.scroll;
        let (border_color, division_color) = self.band_colors(j);

        RoadScanline {
            y: APP_HEIGHT - 1 - j,
            left,
            right,
            border_width,
            division_left: center - border_width,
            division_right: center + border_width,
            border_color,
            division_color,
        }
    }

    pub fn scanlines(&self) -> impl Iterator<Item = RoadScanline> + '_ {
        (0..SCANLINES).map(move |j| self.scanline(j))
    }

    /// Sweep the road from the nearest scanline to the horizon.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for line in self.scanlines() {
            surface.hline(line.left, line.right, line.y, palette::ROAD);
            surface.hline(
                line.left,
                line.left + line.border_width,
                line.y,
                line.border_color,
            );
            surface.hline(
                line.right,
                line.right + line.border_width,
                line.y,
                line.border_color,
            );
            surface.hline(
                line.division_left,
                line.division_right,
                line.y,
                line.division_color,
            );
        }
    }
}
