//! Core types shared across the simulation modules.

pub mod alert;
pub mod drone;
pub mod geo;
pub(crate) mod units;

pub use alert::{
    Alert, AlertStatus, ConfidenceFactors, EnvironmentalSnapshot, Severity, TimelineEntry,
};
pub use drone::{Drone, DroneKind, DroneStatus, FeedType};
pub use geo::{CompassDirection, BASE_LAT, BASE_LNG};
