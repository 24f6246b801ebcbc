//! Index backend selection and grid tuning.

use std::f64::consts::FRAC_PI_2;

use thiserror::Error;

/// Default grid cell extent along the distance axis
pub const DEFAULT_DISTANCE_CELL: f64 = 25.0;
/// Default grid cell extent along the angle axis (a quarter turn)
pub const DEFAULT_ANGLE_CELL: f64 = FRAC_PI_2;

/// Configuration rejected at construction time
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Distance cell was zero, negative or not finite
    #[error("grid distance cell must be finite and positive, got {0}")]
    InvalidDistanceCell(f64),
    /// Angle cell was zero, negative or not finite
    #[error("grid angle cell must be finite and positive, got {0}")]
    InvalidAngleCell(f64),
}

/// Cell sizes of a [`GridIndex`](crate::GridIndex)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGridConfig"))]
pub struct GridConfig {
    distance_cell: f64,
    angle_cell: f64,
}

impl GridConfig {
    /// Validates and creates a grid configuration
    ///
    /// # Errors
    /// Returns [`ConfigError`] when either cell size is zero, negative or not finite.
    pub fn new(distance_cell: f64, angle_cell: f64) -> Result<Self, ConfigError> {
        if !(distance_cell.is_finite() && distance_cell > 0.0) {
            return Err(ConfigError::InvalidDistanceCell(distance_cell));
        }
        if !(angle_cell.is_finite() && angle_cell > 0.0) {
            return Err(ConfigError::InvalidAngleCell(angle_cell));
        }
        Ok(Self { distance_cell, angle_cell })
    }

    /// Cell extent along the distance axis
    #[must_use]
    pub fn distance_cell(&self) -> f64 {
        self.distance_cell
    }

    /// Cell extent along the angle axis, in radians
    #[must_use]
    pub fn angle_cell(&self) -> f64 {
        self.angle_cell
    }
}

/// Unvalidated wire form; deserialization goes through [`GridConfig::new`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGridConfig {
    distance_cell: f64,
    angle_cell: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridConfig> for GridConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGridConfig) -> Result<Self, Self::Error> {
        Self::new(raw.distance_cell, raw.angle_cell)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { distance_cell: DEFAULT_DISTANCE_CELL, angle_cell: DEFAULT_ANGLE_CELL }
    }
}

/// Which index strategy a [`RingQuery`](crate::RingQuery) builds over its snapshot
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum IndexBackend {
    /// Uniform cell buckets with exact re-filtering
    Grid(GridConfig),
    /// Exhaustive scan
    Linear,
}

impl Default for IndexBackend {
    fn default() -> Self {
        Self::Grid(GridConfig::default())
    }
}
