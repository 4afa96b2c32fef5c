//! Error types for audioprobe-core
//!
//! Defines module-specific error types using thiserror for clear error
//! propagation. An unrecognized format is not an error; it classifies as
//! `AudioFormat::Unknown`.

use thiserror::Error;

/// Convenience Result type using audioprobe-core DetectError
pub type Result<T> = std::result::Result<T, DetectError>;

/// Errors surfaced by a detection call
#[derive(Debug, Error)]
pub enum DetectError {
    /// Connection could not be established or was reset (DNS, refused, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// No response headers arrived within the detection deadline
    #[error("Timed out waiting for response headers")]
    Timeout,
}

impl DetectError {
    /// Checks if this error indicates a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, DetectError::Timeout)
    }
}
