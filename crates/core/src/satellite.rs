//! Simulated satellite heat-anomaly scans.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alerts;
use crate::core_types::geo::{BASE_LAT, BASE_LNG};
use crate::core_types::CompassDirection;
use crate::state::SimulationState;

/// Readings produced per scan.
const POINTS_PER_SCAN: usize = 5;

/// Maximum coordinate offset from the region centre, in degrees.
const SCAN_SPREAD_DEG: f64 = 0.05;

/// Heat readings above this intensity raise an alert.
pub const ALERT_INTENSITY_THRESHOLD: f64 = 0.7;

/// A single simulated heat-anomaly reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    /// Relative heat intensity; scans draw from 0.3-0.95.
    pub intensity: f64,
    /// Wind speed in km/h, shared by every reading in a scan.
    pub wind_speed: f64,
    /// Wind direction, shared by every reading in a scan.
    pub wind_direction: CompassDirection,
    /// Vegetation density fraction around the reading.
    pub vegetation: f64,
}

/// Run one satellite scan over the simulated region.
///
/// Expired unverified alerts are purged first, then five fresh readings are
/// drawn around the region centre under one shared wind condition. Readings
/// hotter than [`ALERT_INTENSITY_THRESHOLD`] go through alert creation with
/// spatial deduplication. The return value is the current batch only, never
/// cumulative history.
pub fn scan<R: Rng>(
    state: &mut SimulationState,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<HeatPoint> {
    alerts::purge_expired(state, now);

    // One wind condition governs the whole scan.
    let wind_speed = rng.random_range(5.0..45.0);
    let wind_direction = CompassDirection::ALL[rng.random_range(0..CompassDirection::ALL.len())];

    let mut batch = Vec::with_capacity(POINTS_PER_SCAN);
    for _ in 0..POINTS_PER_SCAN {
        let point = HeatPoint {
            lat: BASE_LAT + rng.random_range(-SCAN_SPREAD_DEG..SCAN_SPREAD_DEG),
            lng: BASE_LNG + rng.random_range(-SCAN_SPREAD_DEG..SCAN_SPREAD_DEG),
            intensity: rng.random_range(0.3..0.95),
            wind_speed,
            wind_direction,
            vegetation: rng.random_range(0.4..0.9),
        };

        if point.intensity > ALERT_INTENSITY_THRESHOLD {
            alerts::create_or_skip(state, rng, &point, now);
        }
        batch.push(point);
    }

    debug!(
        points = batch.len(),
        wind_speed,
        ?wind_direction,
        active_alerts = state.alerts.len(),
        "satellite scan complete"
    );
    batch
}
