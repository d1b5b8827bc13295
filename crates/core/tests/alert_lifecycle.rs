//! Alert creation, spatial deduplication, expiry and manual verification.

use agni_sim_core::{alerts, AlertStatus, CompassDirection, HeatPoint, SimError, SimulationState};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn hot_point(lat: f64, lng: f64) -> HeatPoint {
    HeatPoint {
        lat,
        lng,
        intensity: 0.9,
        wind_speed: 20.0,
        wind_direction: CompassDirection::East,
        vegetation: 0.6,
    }
}

fn raise_one(state: &mut SimulationState, now: DateTime<Utc>) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    alerts::create_or_skip(state, &mut rng, &hot_point(28.0, 77.0), now);
    assert_eq!(state.alerts().len(), 1);
    state.alerts()[0].id.clone()
}

#[test]
fn nearby_readings_collapse_into_one_alert() {
    let mut state = SimulationState::new();
    let mut rng = StdRng::seed_from_u64(1);
    let now = Utc::now();

    alerts::create_or_skip(&mut state, &mut rng, &hot_point(28.0, 77.0), now);
    alerts::create_or_skip(&mut state, &mut rng, &hot_point(28.0005, 77.0007), now);
    assert_eq!(
        state.alerts().len(),
        1,
        "readings within 0.001° on both axes are the same hotspot"
    );

    // A reading clearly elsewhere still raises its own alert.
    alerts::create_or_skip(&mut state, &mut rng, &hot_point(28.1, 77.1), now);
    assert_eq!(state.alerts().len(), 2);
}

#[test]
fn new_alerts_carry_the_full_detection_record() {
    let mut state = SimulationState::new();
    let now = Utc::now();
    raise_one(&mut state, now);

    let alert = &state.alerts()[0];
    assert!(alert.id.starts_with("FIRE-"));
    assert_eq!(alert.status, AlertStatus::Detected);
    assert_eq!(alert.timestamp, now);
    assert_eq!(alert.timeline.len(), 2);
    assert_eq!(alert.timeline[0].event, "Heat anomaly detected by Sat-1");
    assert_eq!(alert.timeline[1].event, "AI Confidence Assessment complete");
    assert_eq!(alert.environmental.wind_speed, 20.0);
    assert_eq!(alert.environmental.wind_direction, CompassDirection::East);
    assert_eq!(alert.environmental.vegetation_density, 0.6);
    assert!(
        alert.risk_zones.is_empty() || alert.risk_zones.len() == 2,
        "risk zones are attached as a pair or not at all"
    );
}

#[test]
fn unverified_alerts_expire_once_their_lifespan_is_reached() {
    let mut state = SimulationState::new();
    let now = Utc::now();
    raise_one(&mut state, now);

    // One second shy of the lifespan: still active.
    alerts::purge_expired(&mut state, now + Duration::seconds(179));
    assert_eq!(state.alerts().len(), 1);

    // Exactly at the lifespan: gone.
    alerts::purge_expired(&mut state, now + Duration::seconds(180));
    assert!(state.alerts().is_empty());
}

#[test]
fn verified_alerts_never_expire() {
    let mut state = SimulationState::new();
    let now = Utc::now();
    let id = raise_one(&mut state, now);

    alerts::verify(&mut state, &id).unwrap();
    alerts::purge_expired(&mut state, now + Duration::seconds(10_000));

    assert_eq!(state.alerts().len(), 1);
    assert_eq!(state.alerts()[0].status, AlertStatus::Verified);
}

#[test]
fn verification_is_idempotent() {
    let mut state = SimulationState::new();
    let id = raise_one(&mut state, Utc::now());

    alerts::verify(&mut state, &id).unwrap();
    assert_eq!(state.alerts()[0].status, AlertStatus::Verified);

    // Re-verifying is a no-op that still succeeds.
    alerts::verify(&mut state, &id).unwrap();
    assert_eq!(state.alerts()[0].status, AlertStatus::Verified);
}

#[test]
fn verifying_an_unknown_id_fails_with_not_found() {
    let mut state = SimulationState::new();
    raise_one(&mut state, Utc::now());

    let err = alerts::verify(&mut state, "FIRE-0000").unwrap_err();
    assert_eq!(err, SimError::AlertNotFound("FIRE-0000".to_string()));
}

#[test]
fn listing_does_not_purge() {
    let mut state = SimulationState::new();
    let now = Utc::now() - Duration::seconds(10_000);
    raise_one(&mut state, now);

    // The stale alert is still listed; expiry only happens during scans.
    assert_eq!(alerts::active(&state).len(), 1);
}
