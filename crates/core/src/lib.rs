//! Core race simulation - pure, deterministic, and testable
//!
//! This crate holds the pseudo-3D road model, the player car, the scrolling
//! horizon, roadside banners and the HUD layout. It has **no dependencies**
//! on terminals, images or threads:
//!
//! - **Deterministic**: the only randomness is a seeded [`SimpleRng`]
//! - **Testable**: every scene object can be stepped and inspected alone
//! - **Portable**: frames are described through the [`Surface`] trait
//!
//! # Module Structure
//!
//! - [`road`]: scanline projection, band colors, curve drift and distance
//! - [`player`]: speed integration and car frame selection
//! - [`landscape`]: horizon tiles with offset-and-rotate parallax
//! - [`banner`]: roadside banners that grow toward the camera
//! - [`hud`]: static overlay texts and images
//! - [`game_state`]: tick orchestration over all of the above
//! - [`clock`]: fixed-timestep scheduler
//! - [`render`]: the drawing surface contract and frame composition
//! - [`sprite`]: drawable objects, image catalog and overlap tests
//! - [`track`]: circuit curvature data
//! - [`fixed_point`]: 16.16 fixed-point arithmetic
//!
//! # Example
//!
//! ```
//! use pole_position_core::{DistanceMode, GameState};
//! use pole_position_core::types::InputEvent;
//!
//! let mut race = GameState::new(1, DistanceMode::Literal).unwrap();
//! race.apply_input(InputEvent::AccelerateOn);
//! for _ in 0..10 {
//!     race.tick();
//! }
//! assert_eq!(race.player().speed(), 50);
//! ```
//!
//! # Timing
//!
//! One tick is 40ms (25 per second). Feed wall-clock time through
//! [`GameState::step`], or call [`GameState::tick`] directly for replays.

pub mod banner;
pub mod clock;
pub mod fixed_point;
pub mod game_state;
pub mod hud;
pub mod landscape;
pub mod player;
pub mod render;
pub mod rng;
pub mod road;
pub mod snapshot;
pub mod sprite;
pub mod track;

pub use pole_position_types as types;

// Re-export commonly used types for convenience
pub use banner::Banner;
pub use clock::FixedTimestep;
pub use fixed_point::FixedPoint;
pub use game_state::GameState;
pub use hud::Hud;
pub use landscape::Landscape;
pub use player::Player;
pub use render::{render_frame, DrawCommand, ImageRef, RecordingSurface, Surface, TextSize};
pub use rng::SimpleRng;
pub use road::{DistanceMode, Road, RoadScanline};
pub use snapshot::{BannerSnapshot, RaceSnapshot};
pub use sprite::{collides, draw_sprite, AssetCatalog, Drawable, ImageSize, Sprite};
pub use track::{Track, TrackError};
