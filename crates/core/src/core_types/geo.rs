//! Geographic primitives for the simulated region.

use serde::{Deserialize, Serialize};

/// Latitude of the simulated region centre in degrees.
pub const BASE_LAT: f64 = 28.6139;

/// Longitude of the simulated region centre in degrees.
pub const BASE_LNG: f64 = 77.2090;

/// Eight-point compass rose used for wind and spread directions.
///
/// Serialized as the short compass labels (`"N"`, `"NE"`, ...) that the
/// dashboard displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassDirection {
    #[default]
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NW")]
    NorthWest,
}

impl CompassDirection {
    /// All eight points, clockwise from north. Used for uniform draws.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Bearing in degrees clockwise from north (N = 0°, NW = 315°).
    ///
    /// Spread forecasts currently report the compass label directly; the
    /// numeric bearing is kept for geo-aware spread modelling.
    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::NorthEast => 45.0,
            Self::East => 90.0,
            Self::SouthEast => 135.0,
            Self::South => 180.0,
            Self::SouthWest => 225.0,
            Self::West => 270.0,
            Self::NorthWest => 315.0,
        }
    }
}
