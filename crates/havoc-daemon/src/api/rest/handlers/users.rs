//! User record handlers

use crate::api::rest::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use havoc_chaos::GenerationMode;
use havoc_types::User;

/// One clean user record.
pub async fn get_user(State(state): State<AppState>) -> Json<User> {
    Json(state.generator.generate(GenerationMode::Clean))
}

/// A batch of clean user records, clamped to the configured bound.
pub async fn list_users(
    State(state): State<AppState>,
    Path(count): Path<String>,
) -> Json<Vec<User>> {
    let requested = parse_count(&state, &count);
    Json(state.generator.generate_batch(requested, GenerationMode::Clean))
}

/// One challenge-mode record. The chaos middleware has already run.
pub async fn get_challenge_user(State(state): State<AppState>) -> Json<User> {
    tracing::debug!("generating challenge user");
    Json(state.generator.generate(GenerationMode::Challenge))
}

/// A batch of challenge-mode records, possibly silently truncated.
pub async fn list_challenge_users(
    State(state): State<AppState>,
    Path(count): Path<String>,
) -> Json<Vec<User>> {
    tracing::debug!(count = %count, "generating challenge batch");
    let requested = parse_count(&state, &count);
    Json(
        state
            .generator
            .generate_batch(requested, GenerationMode::Challenge),
    )
}

/// Lenient count parsing: a path segment that is not a number falls back
/// to the configured default instead of rejecting the request.
fn parse_count(state: &AppState, raw: &str) -> i64 {
    raw.parse()
        .unwrap_or_else(|_| state.generator.fallback_batch())
}
