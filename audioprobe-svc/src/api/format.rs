//! Format detection endpoint
//!
//! Accepts a `?url=` query parameter, runs detection against the remote
//! resource, and returns the result as JSON. An unrecognized format is a
//! successful response with `format: "unknown"`; only network-level
//! failures map to an error status.

use audioprobe_core::FormatDetection;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FormatQuery {
    url: Option<String>,
}

/// GET /api/format?url=...
///
/// Returns 200 with the detection result, 400 when `url` is missing, 500
/// with the underlying error text when the probe fails.
pub async fn detect_format(
    State(state): State<AppState>,
    Query(query): Query<FormatQuery>,
) -> ApiResult<Json<FormatDetection>> {
    let url = query
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::BadRequest("missing required query parameter: url".to_string()))?;

    let result = state.detector.detect(&url).await.inspect_err(|e| {
        warn!(url = %url, error = %e, "format detection failed");
    })?;

    info!(
        url = %url,
        format = %result.format,
        is_stream = result.is_stream,
        "detected remote audio format"
    );

    Ok(Json(result))
}

/// Build format detection routes
pub fn format_routes() -> Router<AppState> {
    Router::new().route("/api/format", get(detect_format))
}
