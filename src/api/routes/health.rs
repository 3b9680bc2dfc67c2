//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (datasets pass validation)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 when the dataset registry passes validation.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.registry.validate() {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let validation = state.registry.validate();
    let active_section = state.router.read().await.active_id();

    let (status, datasets, datasets_error) = match validation {
        Ok(()) => ("healthy", "ok", None),
        Err(e) => ("degraded", "error", Some(e.to_string())),
    };

    Json(HealthResponse {
        status: status.to_string(),
        datasets: datasets.to_string(),
        datasets_error,
        active_section,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
