//! AGNI-NET Simulation Core Library
//!
//! Fabricates the wildfire-detection telemetry served to the dashboard:
//! satellite heat-anomaly scans, a multi-factor confidence scorer, spatially
//! deduplicated fire alerts with a fixed lifespan, a small drone swarm with
//! battery drain and patrol drift, multi-horizon fire-spread forecasts, and
//! a mock single-frame fire detector.
//!
//! All mutation flows through an explicitly owned [`SimulationState`] passed
//! by reference into each operation, and every random draw comes from a
//! caller-supplied [`rand::Rng`] so tests can seed the simulation.

pub mod alerts;
pub mod core_types;
pub mod detector;
pub mod error;
pub mod satellite;
pub mod scoring;
pub mod spread;
pub mod state;
pub mod swarm;

// Re-export core types
pub use core_types::{
    Alert, AlertStatus, CompassDirection, ConfidenceFactors, Drone, DroneKind, DroneStatus,
    EnvironmentalSnapshot, FeedType, Severity, TimelineEntry, BASE_LAT, BASE_LNG,
};

// Re-export operation types
pub use detector::FrameAnalysis;
pub use error::SimError;
pub use satellite::HeatPoint;
pub use scoring::ConfidenceScore;
pub use spread::{RiskEscalation, SpreadForecast, WindConditions};
pub use state::SimulationState;
