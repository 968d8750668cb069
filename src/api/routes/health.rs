//! Health Routes
//!
//! - GET /health/live - Liveness check (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Without a live weather provider the dashboard still works but shows the
/// fallback reading, which reports as `degraded`.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let dashboard = state.dashboard.read().await;
    let live = dashboard.weather_service().is_live();

    Json(HealthResponse {
        status: if live { "healthy" } else { "degraded" }.to_string(),
        weather: if live { "live" } else { "fallback" }.to_string(),
        todos: dashboard.todos().len(),
        address: state.config.addr(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
