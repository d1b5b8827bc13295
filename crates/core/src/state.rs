//! Process-wide simulation state container.

use crate::core_types::{Alert, Drone};

/// Owner of all mutable simulation data.
///
/// Exactly one instance exists for the lifetime of the process. Mutation is
/// funnelled through the [`crate::alerts`], [`crate::satellite`] and
/// [`crate::swarm`] operations rather than through the collections directly.
/// The container does no locking itself; a concurrent host must wrap it in a
/// single mutual-exclusion lock spanning each read-modify-write sequence.
#[derive(Debug, Default)]
pub struct SimulationState {
    /// Active alerts in detection order.
    pub(crate) alerts: Vec<Alert>,
    /// The drone fleet; empty until the first swarm status query seeds it.
    pub(crate) drones: Vec<Drone>,
}

impl SimulationState {
    /// Create an empty simulation: no alerts, fleet not yet initialised.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active alerts in detection order.
    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// The drone fleet, empty before the first swarm status query.
    #[must_use]
    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }
}
