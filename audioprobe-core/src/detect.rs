//! Remote audio format detection
//!
//! Issues a single GET per call, reads the response headers, and classifies
//! the resource by URL suffix and content-type. The response body is never
//! downloaded: the connection is dropped as soon as headers are read, on all
//! classification paths including `Unknown`.
//!
//! Classification priority, first match wins:
//! 1. M3U8 short-circuit: URL path ends with `.m3u8` (case-insensitive) or
//!    content-type contains `mpegurl`
//! 2. MIME-table lookup over the content-type header (substring match)
//! 3. File-extension fallback from the URL path
//! 4. `Unknown` - a valid result, not an error

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::error::{DetectError, Result};
use crate::format::AudioFormat;

/// Deadline for response headers to arrive
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("audioprobe/", env!("CARGO_PKG_VERSION"));

/// Status line and the two headers detection cares about
#[derive(Debug, Clone)]
pub struct ResponseHead {
    /// HTTP status code
    pub status: u16,
    /// Raw content-type header value, if present
    pub content_type: Option<String>,
    /// Raw content-length header value, if present
    pub content_length: Option<String>,
}

/// HTTP collaborator: fetch response headers for a URL
///
/// Implementations must terminate the connection once headers are read,
/// before any of the body is consumed.
#[async_trait]
pub trait FetchHeaders: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ResponseHead>;
}

/// Production header fetcher backed by reqwest
pub struct HttpFetch {
    client: reqwest::Client,
}

impl HttpFetch {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DetectError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FetchHeaders for HttpFetch {
    async fn fetch(&self, url: &str) -> Result<ResponseHead> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DetectError::Timeout
                } else {
                    DetectError::Network(e.to_string())
                }
            })?;

        let header = |name: reqwest::header::HeaderName| {
            response
                .headers()
                .get(&name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        let head = ResponseHead {
            status: response.status().as_u16(),
            content_type: header(reqwest::header::CONTENT_TYPE),
            content_length: header(reqwest::header::CONTENT_LENGTH),
        };

        // Headers are all we need; dropping the response aborts the body
        // transfer instead of streaming a potentially unbounded payload.
        drop(response);

        Ok(head)
    }
}

/// Result of one detection call
///
/// Immutable value with no lifecycle beyond the call that produced it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatDetection {
    /// Input URL, unmodified
    pub url: String,
    /// Detected format; `unknown` when no signal matched
    pub format: AudioFormat,
    /// Raw content-type header; `None` when the response carried no header
    pub mime_type: Option<String>,
    /// Parsed content-length in bytes; `None` when absent or non-numeric
    pub content_length: Option<u64>,
    /// True exactly when the detected format is m3u8
    pub is_stream: bool,
    /// Always true on a returned value. Failures surface as errors, never as
    /// a result with `success:false`; the field exists for wire-format
    /// compatibility only.
    pub success: bool,
}

/// Classifies the audio format of a remote resource addressed by URL
///
/// Stateless; concurrent detect calls are fully independent. No retries -
/// retry policy, if any, belongs to the caller.
#[derive(Clone)]
pub struct FormatDetector {
    fetch: Arc<dyn FetchHeaders>,
    timeout: Duration,
}

impl FormatDetector {
    pub fn new(fetch: Arc<dyn FetchHeaders>) -> Self {
        Self {
            fetch,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the headers deadline (default 10 seconds)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Detect the audio format of the resource at `url`
    ///
    /// Issues exactly one outbound GET. Fails with `DetectError::Network` on
    /// connection failure and `DetectError::Timeout` when no headers arrive
    /// within the deadline; the deadline also cancels the in-flight request.
    pub async fn detect(&self, url: &str) -> Result<FormatDetection> {
        let head = tokio::time::timeout(self.timeout, self.fetch.fetch(url))
            .await
            .map_err(|_| DetectError::Timeout)??;

        let path = url_path(url);
        let format = classify(&path, head.content_type.as_deref());
        let content_length = head
            .content_length
            .as_deref()
            .and_then(|v| v.trim().parse::<u64>().ok());

        tracing::debug!(
            url = %url,
            format = %format,
            status = head.status,
            content_type = head.content_type.as_deref().unwrap_or("-"),
            "classified remote audio resource"
        );

        Ok(FormatDetection {
            url: url.to_string(),
            format,
            mime_type: head.content_type,
            content_length,
            is_stream: format.is_stream(),
            success: true,
        })
    }
}

/// Apply the classification priority order to a URL path and content-type
fn classify(path: &str, content_type: Option<&str>) -> AudioFormat {
    let path = path.to_ascii_lowercase();

    // Playlist short-circuit: suffix or an mpegurl content-type variant wins
    // before the MIME table is consulted.
    if path.ends_with(".m3u8") || content_type.is_some_and(|ct| ct.contains("mpegurl")) {
        return AudioFormat::M3u8;
    }

    if let Some(ct) = content_type {
        for format in AudioFormat::TABLE {
            if format.mime_substrings().iter().any(|t| ct.contains(t)) {
                return format;
            }
        }
    }

    if let Some((_, ext)) = path.rsplit_once('.') {
        if let Some(format) = AudioFormat::from_extension(ext) {
            return format;
        }
    }

    AudioFormat::Unknown
}

/// URL path with query string and fragment stripped
fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        // Not an absolute URL; strip query/fragment by hand so the suffix
        // checks still apply.
        Err(_) => {
            let end = url.find(['?', '#']).unwrap_or(url.len());
            url[..end].to_string()
        }
    }
}
