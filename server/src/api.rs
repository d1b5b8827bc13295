//! HTTP handlers for the dashboard API.

use std::sync::MutexGuard;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use agni_sim_core::{alerts, detector, satellite, spread, swarm};
use agni_sim_core::{
    Alert, CompassDirection, Drone, FrameAnalysis, HeatPoint, SimulationState, SpreadForecast,
    WindConditions,
};

use crate::error::ApiError;
use crate::AppState;

/// Identifier reported by the drone-status endpoint. A display constant from
/// the dashboard prototype, not matched to fleet drone ids.
const FEED_DRONE_ID: &str = "DRONE-ALPHA-1";

fn lock_sim(state: &AppState) -> Result<MutexGuard<'_, SimulationState>, ApiError> {
    state
        .sim
        .lock()
        .map_err(|_| ApiError::Internal("simulation state lock poisoned".to_string()))
}

#[derive(Serialize)]
pub struct SatelliteResponse {
    status: &'static str,
    data: Vec<HeatPoint>,
}

#[derive(Serialize)]
pub struct AlertsResponse {
    status: &'static str,
    count: usize,
    alerts: Vec<Alert>,
}

#[derive(Serialize)]
pub struct DroneStatusResponse {
    status: &'static str,
    drone_id: &'static str,
    analysis: FrameAnalysis,
}

#[derive(Serialize)]
pub struct DronesResponse {
    status: &'static str,
    drones: Vec<Drone>,
}

#[derive(Serialize)]
pub struct SpreadResponse {
    status: &'static str,
    prediction: Vec<SpreadForecast>,
}

#[derive(Serialize)]
pub struct VerifyResponse {
    status: &'static str,
    message: String,
}

/// Query parameters for `GET /api/fire-spread`. Malformed numerics are
/// rejected with 400 by the extractor, before the simulation is touched.
#[derive(Deserialize)]
pub struct SpreadQuery {
    lat: f64,
    lng: f64,
    #[serde(default = "default_wind_speed")]
    wind_speed: f64,
    #[serde(default)]
    wind_direction: CompassDirection,
}

fn default_wind_speed() -> f64 {
    10.0
}

/// `GET /`
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "AGNI-NET Fire Detection System API is Online" }))
}

/// `GET /api/satellite-data`: run one satellite scan and return the batch.
pub async fn satellite_data(
    State(state): State<AppState>,
) -> Result<Json<SatelliteResponse>, ApiError> {
    let mut sim = lock_sim(&state)?;
    let data = satellite::scan(&mut sim, &mut rand::rng(), Utc::now());
    Ok(Json(SatelliteResponse {
        status: "success",
        data,
    }))
}

/// `GET /api/alerts`: the current active alert list.
pub async fn alerts(State(state): State<AppState>) -> Result<Json<AlertsResponse>, ApiError> {
    let sim = lock_sim(&state)?;
    let alerts = alerts::active(&sim).to_vec();
    Ok(Json(AlertsResponse {
        status: "success",
        count: alerts.len(),
        alerts,
    }))
}

/// `GET /api/drone-status`: classify one simulated drone frame.
pub async fn drone_status() -> Json<DroneStatusResponse> {
    let analysis = detector::analyze_frame(&mut rand::rng());
    Json(DroneStatusResponse {
        status: "online",
        drone_id: FEED_DRONE_ID,
        analysis,
    })
}

/// `GET /api/drones`: advance and report the swarm.
pub async fn drones(State(state): State<AppState>) -> Result<Json<DronesResponse>, ApiError> {
    let mut sim = lock_sim(&state)?;
    let drones = swarm::status(&mut sim, &mut rand::rng()).to_vec();
    Ok(Json(DronesResponse {
        status: "success",
        drones,
    }))
}

/// `GET /api/fire-spread`: multi-horizon spread forecast for a location.
pub async fn fire_spread(Query(query): Query<SpreadQuery>) -> Json<SpreadResponse> {
    let wind = WindConditions {
        speed: query.wind_speed,
        direction: query.wind_direction,
    };
    let prediction = spread::predict(query.lat, query.lng, wind);
    Json(SpreadResponse {
        status: "success",
        prediction,
    })
}

/// `POST /api/verify/{alert_id}`: manually confirm an alert.
pub async fn verify_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let mut sim = lock_sim(&state)?;
    alerts::verify(&mut sim, &alert_id)?;
    Ok(Json(VerifyResponse {
        status: "success",
        message: format!("Alert {alert_id} verified."),
    }))
}
