//! HTTP API handlers for audioprobe-svc

pub mod format;
pub mod health;

pub use format::format_routes;
pub use health::health_routes;
