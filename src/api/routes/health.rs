//! Health Routes
//!
//! Health check endpoints for monitoring.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (data source usable)
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

/// GET /health/ready
///
/// Returns 200 if a page view would find its data.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if check_data_health(&state).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let data_ok = check_data_health(&state).await;

    Json(HealthResponse {
        status: if data_ok { "healthy" } else { "unhealthy" }.to_string(),
        data: if data_ok { "ok" } else { "error" }.to_string(),
        records: state.dataset.len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// The startup table is always usable; in reload mode the file must still load
async fn check_data_health(state: &AppState) -> bool {
    match state.current_dataset().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Data source {:?} not usable: {}", state.data_path(), e);
            false
        }
    }
}
