//! Error types for the JSON cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == JSON Cache Error Enum ==
/// Unified error type for the JSON cache service.
///
/// Data-level anomalies (malformed JSON, missing members) never reach this
/// type; the facade resolves them to sentinel results instead.
#[derive(Error, Debug)]
pub enum JsonCacheError {
    /// Cache TTL is not a positive integer
    #[error("Invalid cache ttl: {0}")]
    TtlConfig(String),

    /// A text field exceeds the configured input limit
    #[error("Input of {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

// == IntoResponse Implementation ==
impl IntoResponse for JsonCacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            JsonCacheError::TtlConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            JsonCacheError::InputTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the JSON cache service.
pub type Result<T> = std::result::Result<T, JsonCacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_error_message() {
        let err = JsonCacheError::TtlConfig("ttl must be positive, got 0".to_string());
        assert_eq!(err.to_string(), "Invalid cache ttl: ttl must be positive, got 0");
    }

    #[test]
    fn test_status_codes() {
        let resp = JsonCacheError::TtlConfig("bad".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = JsonCacheError::InputTooLarge { size: 10, limit: 5 }.into_response();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
