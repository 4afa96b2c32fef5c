//! Error types for audioprobe-svc
//!
//! Maps detection and request errors to HTTP status codes. Detection
//! failures (network, timeout) are 500s; a missing `url` parameter is a 400.

use audioprobe_core::DetectError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Detection failure (500)
    #[error("Format detection failed: {0}")]
    Detect(#[from] DetectError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Detect(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DETECT_FAILED",
                format!("format detection failed: {}", err),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
