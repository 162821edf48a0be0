//! Liveness endpoint for uptime monitors: `GET /` and `GET /health` return a JSON status.
//! Shares nothing with the bot pipeline except process lifetime.

use std::time::Instant;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::telegram::TransportMode;

pub const SERVICE_NAME: &str = "fb-profile-bot";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub mode: String,
    pub uptime_secs: u64,
}

#[derive(Clone)]
struct HealthState {
    started: Instant,
    mode: TransportMode,
}

pub fn health_routes(mode: TransportMode) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .with_state(HealthState {
            started: Instant::now(),
            mode,
        })
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        mode: state.mode.to_string(),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}
