//! Error types for the cache simulator
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

// == Cache Error Enum ==
/// Unified error type for the cache engine and its HTTP surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CacheError {
    /// An operation needed the live cache before one was created
    #[error("Cache not initialized")]
    NotInitialized,

    /// A required request field was absent
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// Capacity was zero or negative
    #[error("Invalid capacity: {0} (must be a positive integer)")]
    InvalidCapacity(i64),

    /// Key outside the accepted range
    #[error("Invalid key: {0} (keys must be non-negative)")]
    InvalidKey(i64),

    /// Workload parameter out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::Internal(_) => {
                error!("{}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => {
                warn!("Rejected request: {}", self);
                StatusCode::BAD_REQUEST
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Body Rejections ==
impl From<JsonRejection> for CacheError {
    fn from(rejection: JsonRejection) -> Self {
        CacheError::InvalidParameter(rejection.body_text())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache simulator.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_bad_request() {
        let errors = [
            CacheError::NotInitialized,
            CacheError::MissingParameter("key".to_string()),
            CacheError::InvalidCapacity(0),
            CacheError::InvalidKey(-3),
            CacheError::InvalidParameter("alpha must be positive".to_string()),
        ];

        for err in errors {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_internal_error_status() {
        let resp = CacheError::Internal("worker panicked".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CacheError::NotInitialized.to_string(), "Cache not initialized");
        assert_eq!(
            CacheError::MissingParameter("value".to_string()).to_string(),
            "Missing parameter: value"
        );
        assert!(CacheError::InvalidCapacity(-1).to_string().contains("-1"));
    }
}
