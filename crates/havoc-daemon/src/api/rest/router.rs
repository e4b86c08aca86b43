//! API Router configuration

use super::handlers;
use super::middleware::chaos_gate;
use super::state::AppState;
use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router: open routes plus chaos-gated challenge
/// routes.
pub fn create_router(state: AppState, enable_cors: bool) -> Router {
    let open_routes = Router::new()
        .route("/api/user", get(handlers::get_user))
        .route("/api/users/:count", get(handlers::list_users))
        .route("/health", get(handlers::health_check));

    let challenge_routes = Router::new()
        .route("/api-challenge/user", get(handlers::get_challenge_user))
        .route(
            "/api-challenge/users/:count",
            get(handlers::list_challenge_users),
        )
        .route("/health-challenge", get(handlers::challenge_health_check))
        .layer(middleware::from_fn_with_state(state.clone(), chaos_gate));

    let mut router = Router::new()
        .merge(open_routes)
        .merge(challenge_routes)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use havoc_chaos::rng::testing::{AlwaysRandomness, SequenceRandomness};
    use havoc_chaos::{
        ChaosGate, ChaosProfile, FixedWindowLimiter, Randomness, UserGenerator, BROKEN_AVATAR_URL,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;

    /// Reference table with the injected delay zeroed so tests stay fast.
    fn test_profile() -> ChaosProfile {
        ChaosProfile {
            delay_min_ms: 0,
            delay_max_ms: 0,
            ..ChaosProfile::default()
        }
    }

    fn test_router(rng: Arc<dyn Randomness>, profile: ChaosProfile) -> Router {
        let limiter = FixedWindowLimiter::new(profile.rate_limit, profile.rate_window());
        let gate = Arc::new(ChaosGate::new(limiter, rng.clone(), profile.clone()));
        let generator = Arc::new(UserGenerator::new(rng, profile));
        create_router(AppState::new(generator, gate), true)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        use tower::ServiceExt;

        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn assert_clean_record(value: &Value) {
        let object = value.as_object().unwrap();
        for key in ["id", "name", "email", "phone", "address", "company", "jobTitle", "avatar"] {
            assert!(object.contains_key(key), "missing key {key}");
            assert!(!object[key].is_null(), "unexpected null {key}");
        }
        assert_ne!(object["jobTitle"], json!(""));
        assert_ne!(object["avatar"], json!(BROKEN_AVATAR_URL));
    }

    #[tokio::test]
    async fn test_health_is_always_ok() {
        let router = test_router(Arc::new(AlwaysRandomness::firing()), test_profile());
        for _ in 0..5 {
            let (status, body) = get_json(router.clone(), "/health").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({ "status": "ok" }));
        }
    }

    #[tokio::test]
    async fn test_clean_user_is_fully_populated() {
        let router = test_router(Arc::new(AlwaysRandomness::firing()), test_profile());
        let (status, body) = get_json(router, "/api/user").await;
        assert_eq!(status, StatusCode::OK);
        assert_clean_record(&body);
    }

    #[tokio::test]
    async fn test_clean_batch_count_handling() {
        let router = test_router(Arc::new(AlwaysRandomness::passing()), test_profile());

        let (status, body) = get_json(router.clone(), "/api/users/5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);

        // Non-numeric count falls back to the default.
        let (_, body) = get_json(router.clone(), "/api/users/abc").await;
        assert_eq!(body.as_array().unwrap().len(), 10);

        // Never more than the configured bound.
        let (_, body) = get_json(router, "/api/users/250").await;
        assert_eq!(body.as_array().unwrap().len(), 100);
    }

    #[tokio::test]
    async fn test_quiet_challenge_user_is_clean() {
        // With a source that never fires a trial, the challenge route
        // behaves exactly like the clean one: 200, fully populated.
        let router = test_router(Arc::new(AlwaysRandomness::passing()), test_profile());
        for _ in 0..5 {
            let (status, body) = get_json(router.clone(), "/api-challenge/user").await;
            assert_eq!(status, StatusCode::OK);
            assert_clean_record(&body);
        }
    }

    #[tokio::test]
    async fn test_challenge_user_injected_error() {
        let router = test_router(Arc::new(AlwaysRandomness::firing()), test_profile());
        let (status, body) = get_json(router, "/api-challenge/user").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn test_challenge_rate_limit() {
        let profile = ChaosProfile {
            rate_limit: 1,
            ..test_profile()
        };
        let router = test_router(Arc::new(AlwaysRandomness::passing()), profile);

        let (status, _) = get_json(router.clone(), "/api-challenge/user").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get_json(router, "/api-challenge/user").await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            body,
            json!({ "error": "Too many requests. Please try again later." })
        );
    }

    #[tokio::test]
    async fn test_open_routes_share_no_budget() {
        let profile = ChaosProfile {
            rate_limit: 1,
            ..test_profile()
        };
        let router = test_router(Arc::new(AlwaysRandomness::passing()), profile);

        let (status, _) = get_json(router.clone(), "/api-challenge/user").await;
        assert_eq!(status, StatusCode::OK);

        // Open routes bypass the gate entirely.
        for _ in 0..3 {
            let (status, _) = get_json(router.clone(), "/api/user").await;
            assert_eq!(status, StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_challenge_batch_truncation() {
        // Draw order: middleware failure trial, then the truncation trial.
        let rng = Arc::new(SequenceRandomness::new([false, true]));
        let router = test_router(rng, test_profile());

        let (status, body) = get_json(router, "/api-challenge/users/50").await;
        assert_eq!(status, StatusCode::OK);
        // Silently short: 35 of 50, no error marker anywhere.
        assert_eq!(body.as_array().unwrap().len(), 35);
    }

    #[tokio::test]
    async fn test_challenge_batch_full_delivery() {
        let rng = Arc::new(SequenceRandomness::new([false, false]));
        let router = test_router(rng, test_profile());

        let (status, body) = get_json(router, "/api-challenge/users/50").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 50);
    }

    #[tokio::test]
    async fn test_health_challenge_degraded() {
        // Middleware failure trial passes, degraded trial fires.
        let rng = Arc::new(SequenceRandomness::new([false, true]));
        let router = test_router(rng, test_profile());

        let (status, body) = get_json(router, "/health-challenge").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body,
            json!({
                "status": "degraded",
                "message": "Service is experiencing issues"
            })
        );
    }

    #[tokio::test]
    async fn test_health_challenge_ok() {
        let router = test_router(Arc::new(AlwaysRandomness::passing()), test_profile());
        let (status, body) = get_json(router, "/health-challenge").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
