//! Drone fleet types.

use serde::{Deserialize, Serialize};

/// Drone airframe role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DroneKind {
    Visual,
    Thermal,
    Relay,
}

/// Drone operational status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DroneStatus {
    Patrolling,
    Idle,
    Returning,
    Dispatched,
}

/// Video feed offered by a drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    Optical,
    Thermal,
    None,
}

/// One drone in the simulated swarm.
///
/// The fleet roster is fixed once initialised; only battery and position
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DroneKind,
    pub status: DroneStatus,
    /// Charge percentage, floored at 0 and never recharged.
    pub battery: f64,
    pub lat: f64,
    pub lng: f64,
    pub feed_type: FeedType,
}

impl Drone {
    /// Whether the drone is actively flying and therefore drains battery and
    /// drifts position on each swarm status query.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.status, DroneStatus::Patrolling | DroneStatus::Dispatched)
    }
}
