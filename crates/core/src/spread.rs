//! Multi-horizon fire spread forecasting.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core_types::units::round2;
use crate::core_types::CompassDirection;

/// Forecast horizons in minutes.
const HORIZONS_MIN: [u32; 3] = [15, 30, 60];

/// Base spread radius in km per 15-minute interval under calm wind.
const BASE_SPREAD_KM: f64 = 0.5;

/// Radius at which escalation flips from MODERATE to HIGH.
const HIGH_RISK_RADIUS_KM: f64 = 2.0;

/// Wind driving a spread forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindConditions {
    /// Speed in km/h.
    pub speed: f64,
    pub direction: CompassDirection,
}

impl Default for WindConditions {
    fn default() -> Self {
        WindConditions {
            speed: 10.0,
            direction: CompassDirection::North,
        }
    }
}

/// Escalation level attached to a forecast horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskEscalation {
    Moderate,
    High,
}

/// Predicted fire extent at one future horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadForecast {
    /// Horizon in minutes.
    pub duration: u32,
    /// Estimated spread radius in km, two decimal places.
    pub radius_km: f64,
    /// The driving wind direction, reported unmodified.
    pub spread_direction: CompassDirection,
    pub risk_escalation: RiskEscalation,
}

/// Estimate spread radii at 15, 30 and 60 minutes.
///
/// Faster wind pushes the fire front proportionally harder:
/// `radius = 0.5 km × (minutes / 15) × (1 + wind / 20)`.
///
/// The origin coordinates do not shape the radius maths yet; they are part
/// of the signature for future terrain-aware modelling, as is the numeric
/// bearing available through [`CompassDirection::degrees`].
#[must_use]
pub fn predict(lat: f64, lng: f64, wind: WindConditions) -> Vec<SpreadForecast> {
    trace!(lat, lng, wind_speed = wind.speed, "spread forecast requested");

    let spread_factor = 1.0 + wind.speed / 20.0;

    HORIZONS_MIN
        .iter()
        .map(|&minutes| {
            let radius_km = round2(BASE_SPREAD_KM * (f64::from(minutes) / 15.0) * spread_factor);
            SpreadForecast {
                duration: minutes,
                radius_km,
                spread_direction: wind.direction,
                risk_escalation: if radius_km < HIGH_RISK_RADIUS_KM {
                    RiskEscalation::Moderate
                } else {
                    RiskEscalation::High
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wind_is_ten_kmh_from_the_north() {
        let wind = WindConditions::default();
        assert_eq!(wind.speed, 10.0);
        assert_eq!(wind.direction, CompassDirection::North);
    }

    #[test]
    fn reports_the_driving_direction_unmodified() {
        let wind = WindConditions {
            speed: 12.0,
            direction: CompassDirection::SouthWest,
        };
        for forecast in predict(28.6, 77.2, wind) {
            assert_eq!(forecast.spread_direction, CompassDirection::SouthWest);
        }
    }
}
