//! Alert collection management: creation with spatial deduplication, aging,
//! and manual verification.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::debug;

use crate::core_types::units::{round1, round2};
use crate::core_types::{Alert, AlertStatus, EnvironmentalSnapshot, TimelineEntry};
use crate::error::SimError;
use crate::satellite::HeatPoint;
use crate::scoring::{classify_severity, score_confidence};
use crate::state::SimulationState;

/// Unverified alerts older than this are dropped on the next scan.
const ALERT_LIFESPAN_SECS: i64 = 180;

/// Two readings within this many degrees on both axes are the same hotspot.
const DEDUP_RADIUS_DEG: f64 = 0.001;

/// Named areas threatened by a fire, attached to roughly half of alerts.
const RISK_ZONES: [&str; 2] = ["Village Alpha", "Power Grid B"];

/// Raise an alert for a hot reading unless an existing alert already covers
/// the same hotspot.
///
/// An existing alert within [`DEDUP_RADIUS_DEG`] on both axes means the
/// reading is the same fire seen again: no new alert, no update to the old
/// one.
pub fn create_or_skip<R: Rng>(
    state: &mut SimulationState,
    rng: &mut R,
    point: &HeatPoint,
    now: DateTime<Utc>,
) {
    let duplicate = state.alerts.iter().any(|alert| {
        (alert.lat - point.lat).abs() < DEDUP_RADIUS_DEG
            && (alert.lng - point.lng).abs() < DEDUP_RADIUS_DEG
    });
    if duplicate {
        return;
    }

    let score = score_confidence(rng, point.intensity, point.wind_speed, point.vegetation);
    let severity = classify_severity(score.confidence);
    let id = format!("FIRE-{}", rng.random_range(1000..=9999));

    // The assessment entry is stamped two minutes ahead purely for the
    // dashboard timeline display; nothing is scheduled.
    let timeline = vec![
        TimelineEntry {
            time: now.format("%H:%M:%S").to_string(),
            event: "Heat anomaly detected by Sat-1".to_string(),
        },
        TimelineEntry {
            time: (now + Duration::seconds(120)).format("%H:%M:%S").to_string(),
            event: "AI Confidence Assessment complete".to_string(),
        },
    ];

    let risk_zones = if rng.random::<f64>() > 0.5 {
        RISK_ZONES.iter().map(|zone| (*zone).to_string()).collect()
    } else {
        Vec::new()
    };

    debug!(%id, ?severity, confidence = score.confidence, "raising fire alert");

    state.alerts.push(Alert {
        id,
        lat: point.lat,
        lng: point.lng,
        severity,
        confidence: score.confidence,
        factors: score.factors,
        environmental: EnvironmentalSnapshot {
            wind_speed: round1(point.wind_speed),
            wind_direction: point.wind_direction,
            vegetation_density: round2(point.vegetation),
        },
        timeline,
        timestamp: now,
        status: AlertStatus::Detected,
        risk_zones,
    });
}

/// Manually confirm an alert.
///
/// Idempotent: re-verifying an already verified alert is a no-op that still
/// reports success. Unknown identifiers fail with
/// [`SimError::AlertNotFound`].
pub fn verify(state: &mut SimulationState, id: &str) -> Result<(), SimError> {
    match state.alerts.iter_mut().find(|alert| alert.id == id) {
        Some(alert) => {
            alert.status = AlertStatus::Verified;
            debug!(%id, "alert verified");
            Ok(())
        }
        None => Err(SimError::AlertNotFound(id.to_string())),
    }
}

/// Drop unverified alerts whose age has reached the lifespan.
///
/// Verified alerts never expire.
pub fn purge_expired(state: &mut SimulationState, now: DateTime<Utc>) {
    let before = state.alerts.len();
    state.alerts.retain(|alert| {
        alert.status == AlertStatus::Verified
            || now - alert.timestamp < Duration::seconds(ALERT_LIFESPAN_SECS)
    });
    let dropped = before - state.alerts.len();
    if dropped > 0 {
        debug!(dropped, "expired stale alerts");
    }
}

/// The active alert sequence in detection order.
///
/// Expiry runs as a side effect of satellite scans, not on read, so a
/// verified alert stays visible indefinitely.
#[must_use]
pub fn active(state: &SimulationState) -> &[Alert] {
    &state.alerts
}
