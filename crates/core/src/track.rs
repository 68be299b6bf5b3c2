//! Circuit definition: one curvature value per kilometre.
//!
//! Positive values bend the road to the right, negative values to the left.
//! Curvature is later multiplied by the per-scanline perspective scale, so
//! the magnitude is bounded to keep the road inside the screen.

use std::fmt;

use crate::types::{MAX_CURVATURE, ROAD_LENGTH};

/// The built-in circuit.
#[rustfmt::skip]
pub const CIRCUIT: [i32; ROAD_LENGTH] = [
     0, -1, -2, -3, -4, -5, -6, -7, -8, -9,
    -9, -9, -9, -9, -9, -9, -9, -9, -9, -9,
    -9, -9, -9, -9, -9, -9, -9, -9, -9, -9,
    -9, -9, -9, -9, -9, -9, -9, -9, -9, -9,
    -9, -9, -9, -9, -9, -9, -9, -9, -9, -9,
    -8, -7, -6, -5, -4, -3, -2, -1,  0,  1,
     2,  3,  4,  5,  4,  3,  2,  1,  2,  3,
     4,  5,  6,  7,  8,  9,  9,  9,  9,  9,
     9,  9,  9,  9,  9,  9,  9,  9,  8,  7,
     6,  5,  5,  4,  3,  2,  1,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     1,  1,  2,  2,  2,  2,  2,  2,  3,  3,
     0,  0,  0,  0,  0,  1,  2,  3,  4,  5,
     5,  5,  5,  5,  5,  6,  6,  6,  6,  6,
     5,  4,  3,  3,  3,  3,  3,  3,  3,  2,
     1,  0,  0,  0,  0,  0,  0,  0,  0,  0,
    -1, -2, -3, -4, -5, -6, -7, -8, -9, -9,
    -8, -7, -7, -7, -7, -7, -7, -7, -7, -7,
    -6, -5, -5, -5, -5, -4, -3, -2, -1,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
];

/// Why a curvature table was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackError {
    WrongLength { expected: usize, actual: usize },
    CurvatureOutOfRange { index: usize, value: i32 },
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::WrongLength { expected, actual } => write!(
                f,
                "curvature table has {} entries, expected {}",
                actual, expected
            ),
            TrackError::CurvatureOutOfRange { index, value } => write!(
                f,
                "curvature {} at km {} exceeds +/-{}",
                value, index, MAX_CURVATURE
            ),
        }
    }
}

impl std::error::Error for TrackError {}

/// A validated curvature table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Track {
    segments: [i32; ROAD_LENGTH],
}

impl Track {
    pub fn new(segments: &[i32]) -> Result<Self, TrackError> {
        if segments.len() != ROAD_LENGTH {
            return Err(TrackError::WrongLength {
                expected: ROAD_LENGTH,
                actual: segments.len(),
            });
        }

        if let Some((index, &value)) = segments
            .iter()
            .enumerate()
            .find(|(_, v)| v.abs() > MAX_CURVATURE)
        {
            return Err(TrackError::CurvatureOutOfRange { index, value });
        }

        let mut table = [0; ROAD_LENGTH];
        table.copy_from_slice(segments);
        Ok(Self { segments: table })
    }

    pub fn builtin() -> Result<Self, TrackError> {
        Self::new(&CIRCUIT)
    }

    /// Curvature at `km`; wraps past the end of the circuit.
    pub fn curvature(&self, km: usize) -> i32 {
        self.segments[km % ROAD_LENGTH]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[i32] {
        &self.segments
    }
}
