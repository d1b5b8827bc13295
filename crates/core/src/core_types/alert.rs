//! Fire alert types produced by the satellite scan pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geo::CompassDirection;

/// Coarse severity bucket derived from the confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MODERATE")]
    Moderate,
    #[serde(rename = "SEVERE")]
    Severe,
    #[serde(rename = "MEGA FIRE")]
    MegaFire,
}

/// Alert lifecycle status.
///
/// Transitions only run DETECTED → VERIFIED, triggered by a manual
/// verification call; verified alerts are exempt from expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertStatus {
    Detected,
    Verified,
}

/// Per-factor confidence contributions, each a 0-100 percentage.
///
/// Field names follow the labels the dashboard renders in the alert detail
/// panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceFactors {
    #[serde(rename = "Heat Anomaly")]
    pub heat_anomaly: f64,
    #[serde(rename = "Smoke Detection")]
    pub smoke_detection: f64,
    #[serde(rename = "Wind Influence")]
    pub wind_influence: f64,
    #[serde(rename = "Vegetation Fuel")]
    pub vegetation_fuel: f64,
}

/// Environmental conditions captured at detection time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalSnapshot {
    /// Wind speed in km/h, one decimal place.
    pub wind_speed: f64,
    pub wind_direction: CompassDirection,
    /// Vegetation density fraction, two decimal places.
    pub vegetation_density: f64,
}

/// One timestamped entry in an alert's event timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Wall-clock time as `HH:MM:SS`, matching the dashboard feed.
    pub time: String,
    pub event: String,
}

/// A detected fire alert.
///
/// Created by the satellite generator when a reading's intensity crosses the
/// alert threshold and no existing alert covers the same hotspot; removed
/// once its age exceeds the alert lifespan unless it has been verified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Randomly minted identifier, `FIRE-` plus a 4-digit suffix. Not
    /// guaranteed globally unique.
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub severity: Severity,
    /// Overall confidence percentage, 0-100.
    pub confidence: f64,
    pub factors: ConfidenceFactors,
    pub environmental: EnvironmentalSnapshot,
    pub timeline: Vec<TimelineEntry>,
    /// Creation time; the basis for expiry.
    pub timestamp: DateTime<Utc>,
    pub status: AlertStatus,
    /// Named areas threatened by this fire, possibly empty.
    pub risk_zones: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_serializes_with_display_labels() {
        assert_eq!(
            serde_json::to_string(&Severity::MegaFire).unwrap(),
            "\"MEGA FIRE\""
        );
        assert_eq!(serde_json::to_string(&Severity::Low).unwrap(), "\"LOW\"");
        assert_eq!(
            serde_json::to_string(&AlertStatus::Detected).unwrap(),
            "\"DETECTED\""
        );
    }

    #[test]
    fn factors_serialize_under_dashboard_labels() {
        let factors = ConfidenceFactors {
            heat_anomaly: 84.0,
            smoke_detection: 100.0,
            wind_influence: 44.0,
            vegetation_fuel: 62.0,
        };
        let value = serde_json::to_value(factors).unwrap();
        assert_eq!(value["Heat Anomaly"], 84.0);
        assert_eq!(value["Smoke Detection"], 100.0);
        assert_eq!(value["Wind Influence"], 44.0);
        assert_eq!(value["Vegetation Fuel"], 62.0);
    }
}
