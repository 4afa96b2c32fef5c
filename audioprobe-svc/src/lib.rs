//! audioprobe-svc library interface
//!
//! Exposes the application state and router builder so integration tests can
//! drive the API without binding a socket.

pub mod api;
pub mod config;
pub mod error;

pub use crate::config::Config;
pub use crate::error::{ApiError, ApiResult};

use audioprobe_core::FormatDetector;
use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Format detection engine with its injectable header fetcher
    pub detector: FormatDetector,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(detector: FormatDetector) -> Self {
        Self {
            detector,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::format_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
