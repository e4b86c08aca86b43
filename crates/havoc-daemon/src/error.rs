//! Error types for havoc-daemon

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Daemon-level errors: real operational faults only. Everything the
/// challenge routes "fail" with is synthetic and lives in [`ApiError`].
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server startup or serve error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Deliberately-injected failures for challenge routes.
///
/// Each variant short-circuits the request with a fixed JSON body. None
/// of them indicates an actual fault in the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Over the fixed-window budget
    #[error("rate limit exceeded")]
    RateLimited,

    /// Synthetic internal error from the chaos gate
    #[error("injected server error")]
    Injected,

    /// Synthetic degraded-health report
    #[error("degraded health")]
    Degraded,
}

/// Error response body for the injected 429/500 failures
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Response body for the degraded health report
#[derive(Debug, Serialize)]
struct DegradedBody {
    status: &'static str,
    message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorBody {
                    error: "Too many requests. Please try again later.",
                }),
            )
                .into_response(),
            ApiError::Injected => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Internal Server Error",
                }),
            )
                .into_response(),
            ApiError::Degraded => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(DegradedBody {
                    status: "degraded",
                    message: "Service is experiencing issues",
                }),
            )
                .into_response(),
        }
    }
}

/// Result type alias for daemon operations
pub type DaemonResult<T> = Result<T, DaemonError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn response_json(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_rate_limited_body() {
        let (status, body) = response_json(ApiError::RateLimited).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            body,
            json!({ "error": "Too many requests. Please try again later." })
        );
    }

    #[tokio::test]
    async fn test_injected_body() {
        let (status, body) = response_json(ApiError::Injected).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn test_degraded_body() {
        let (status, body) = response_json(ApiError::Degraded).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body,
            json!({
                "status": "degraded",
                "message": "Service is experiencing issues"
            })
        );
    }
}
