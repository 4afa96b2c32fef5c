//! audioprobe-core - audio format detection engine
//!
//! Classifies the audio container/codec format of a remote resource from its
//! URL suffix and HTTP response headers, without downloading the response
//! body. The HTTP collaborator is injectable so tests run against canned
//! header responses with no network I/O.

pub mod detect;
pub mod error;
pub mod format;

pub use crate::detect::{
    FetchHeaders, FormatDetection, FormatDetector, HttpFetch, ResponseHead, DEFAULT_TIMEOUT,
};
pub use crate::error::{DetectError, Result};
pub use crate::format::AudioFormat;
