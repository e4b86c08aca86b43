//! Chaos middleware for challenge routes
//!
//! Runs the gate's decision for every request on a challenge-tagged route:
//! admission, then the injected delay, then possibly an injected failure.
//! The delay is a cooperative suspension; concurrent requests keep moving.

use super::state::AppState;
use crate::error::ApiError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use havoc_chaos::Admission;

pub async fn chaos_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    match state.gate.evaluate() {
        Admission::RateLimited => {
            tracing::info!(path = %request.uri().path(), "rejecting over-budget request");
            ApiError::RateLimited.into_response()
        }
        Admission::Proceed {
            delay,
            inject_error,
        } => {
            tracing::debug!(
                path = %request.uri().path(),
                delay_ms = delay.as_millis() as u64,
                "applying injected delay"
            );
            tokio::time::sleep(delay).await;

            if inject_error {
                tracing::info!(path = %request.uri().path(), "injecting server error");
                return ApiError::Injected.into_response();
            }

            next.run(request).await
        }
    }
}
