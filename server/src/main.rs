//! AGNI-NET API server entry point.
//!
//! Serves the simulated wildfire telemetry from `agni-sim-core` to the
//! dashboard over HTTP. All simulation state lives in one in-memory
//! container behind a single lock; there is no persistence.

mod api;
mod error;

use std::sync::{Arc, Mutex};

use agni_sim_core::SimulationState;
use axum::routing::{get, post};
use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// AGNI-NET fire detection demo backend.
#[derive(Parser, Debug)]
#[command(name = "agni-api")]
#[command(about = "Simulated wildfire-detection telemetry API", long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    port: u16,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The single in-memory simulation. Each handler holds the lock across
    /// its whole read-modify-write sequence, so concurrent requests cannot
    /// lose updates or race the alert deduplication.
    pub sim: Arc<Mutex<SimulationState>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let state = AppState {
        sim: Arc::new(Mutex::new(SimulationState::new())),
    };

    let app = create_router(state);

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("AGNI-NET API server running on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    // The dashboard may be served from any origin and non-browser callers
    // bypass CORS entirely, so the layer is fully permissive. tower-http
    // rejects credentialed wildcards, so no credentials flag here.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::root))
        .route("/api/satellite-data", get(api::satellite_data))
        .route("/api/alerts", get(api::alerts))
        .route("/api/drone-status", get(api::drone_status))
        .route("/api/drones", get(api::drones))
        .route("/api/fire-spread", get(api::fire_spread))
        .route("/api/verify/:alert_id", post(api::verify_alert))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
