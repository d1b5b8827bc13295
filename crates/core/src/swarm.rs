//! Drone swarm simulation: a fixed three-drone fleet with battery drain and
//! patrol drift.

use std::ops::Range;

use rand::Rng;
use tracing::debug;

use crate::core_types::geo::{BASE_LAT, BASE_LNG};
use crate::core_types::{Drone, DroneKind, DroneStatus, FeedType};
use crate::state::SimulationState;

/// Battery percentage points drained from an active drone per status query.
const DRAIN_RANGE: Range<f64> = 0.1..0.5;

/// Patrol drift applied to each coordinate per status query, in degrees.
const DRIFT_DEG: f64 = 0.001;

/// The fixed initial roster.
fn initial_fleet() -> Vec<Drone> {
    vec![
        Drone {
            id: "DRONE-ALPHA".to_string(),
            kind: DroneKind::Visual,
            status: DroneStatus::Patrolling,
            battery: 87.0,
            lat: BASE_LAT + 0.01,
            lng: BASE_LNG + 0.01,
            feed_type: FeedType::Optical,
        },
        Drone {
            id: "DRONE-BETA".to_string(),
            kind: DroneKind::Thermal,
            status: DroneStatus::Idle,
            battery: 95.0,
            lat: BASE_LAT - 0.01,
            lng: BASE_LNG - 0.01,
            feed_type: FeedType::Thermal,
        },
        Drone {
            id: "DRONE-GAMMA".to_string(),
            kind: DroneKind::Relay,
            status: DroneStatus::Returning,
            battery: 42.0,
            lat: BASE_LAT,
            lng: BASE_LNG + 0.02,
            feed_type: FeedType::None,
        },
    ]
}

/// Advance and report the fleet.
///
/// The roster is seeded lazily on the first query and its identity set never
/// changes afterwards. Each query drains battery (floored at 0) and drifts
/// position for drones that are actively flying; idle and returning drones
/// are untouched. Returns the full fleet, affected or not.
pub fn status<'a, R: Rng>(state: &'a mut SimulationState, rng: &mut R) -> &'a [Drone] {
    if state.drones.is_empty() {
        state.drones = initial_fleet();
        debug!(count = state.drones.len(), "drone fleet initialised");
    }

    for drone in &mut state.drones {
        if drone.is_active() {
            drone.battery = (drone.battery - rng.random_range(DRAIN_RANGE)).max(0.0);
            drone.lat += rng.random_range(-DRIFT_DEG..DRIFT_DEG);
            drone.lng += rng.random_range(-DRIFT_DEG..DRIFT_DEG);
        }
    }

    &state.drones
}
