//! Liveness handlers

use crate::api::rest::state::AppState;
use crate::error::ApiError;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Unconditional liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Challenge liveness probe. The shared chaos middleware has already
/// passed; this runs its own independent degraded trial on top.
pub async fn challenge_health_check(State(state): State<AppState>) -> Response {
    if state.gate.degrade_health() {
        tracing::info!("health check reporting degraded");
        return ApiError::Degraded.into_response();
    }

    Json(HealthResponse { status: "ok" }).into_response()
}
