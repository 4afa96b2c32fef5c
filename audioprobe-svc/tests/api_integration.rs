//! Integration tests for the audioprobe-svc API
//!
//! Drives the router directly via tower's oneshot with a canned header
//! fetcher injected, so no real network I/O happens.

use std::sync::Arc;

use async_trait::async_trait;
use audioprobe_core::{
    DetectError, FetchHeaders, FormatDetector, ResponseHead, Result as DetectResult,
};
use axum::body::Body;
use axum::http::StatusCode;
use http::Request;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use audioprobe_svc::{build_router, AppState};

/// Fetcher returning a fixed response head
struct CannedFetch {
    content_type: Option<String>,
    content_length: Option<String>,
}

#[async_trait]
impl FetchHeaders for CannedFetch {
    async fn fetch(&self, _url: &str) -> DetectResult<ResponseHead> {
        Ok(ResponseHead {
            status: 200,
            content_type: self.content_type.clone(),
            content_length: self.content_length.clone(),
        })
    }
}

/// Fetcher that always fails with a connection error
struct FailingFetch;

#[async_trait]
impl FetchHeaders for FailingFetch {
    async fn fetch(&self, _url: &str) -> DetectResult<ResponseHead> {
        Err(DetectError::Network("connection refused".to_string()))
    }
}

fn test_router(fetch: impl FetchHeaders + 'static) -> axum::Router {
    let detector = FormatDetector::new(Arc::new(fetch));
    build_router(AppState::new(detector))
}

async fn get_json(app: axum::Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_reports_module_and_uptime() {
    let app = test_router(CannedFetch {
        content_type: None,
        content_length: None,
    });

    let (status, body) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "audioprobe-svc");
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn format_endpoint_returns_detection_result() {
    let app = test_router(CannedFetch {
        content_type: Some("audio/ogg".to_string()),
        content_length: Some("4096".to_string()),
    });

    let (status, body) =
        get_json(app, "/api/format?url=https://cdn.example.com/track123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "https://cdn.example.com/track123");
    assert_eq!(body["format"], "ogg");
    assert_eq!(body["contentLength"], 4096);
    assert_eq!(body["isStream"], false);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn playlist_url_is_flagged_as_stream() {
    let app = test_router(CannedFetch {
        content_type: Some("application/vnd.apple.mpegurl".to_string()),
        content_length: None,
    });

    let (status, body) =
        get_json(app, "/api/format?url=https://example.com/show/playlist.m3u8").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["format"], "m3u8");
    assert_eq!(body["isStream"], true);
    assert_eq!(body["mimeType"], "application/vnd.apple.mpegurl");
}

#[tokio::test]
async fn unrecognized_format_is_a_successful_response() {
    let app = test_router(CannedFetch {
        content_type: Some("text/html".to_string()),
        content_length: None,
    });

    let (status, body) = get_json(app, "/api/format?url=https://example.com/page.xyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["format"], "unknown");
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn missing_url_parameter_is_bad_request() {
    let app = test_router(CannedFetch {
        content_type: None,
        content_length: None,
    });

    let (status, body) = get_json(app, "/api/format").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn empty_url_parameter_is_bad_request() {
    let app = test_router(CannedFetch {
        content_type: None,
        content_length: None,
    });

    let (status, body) = get_json(app, "/api/format?url=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn probe_failure_maps_to_internal_error_with_cause() {
    let app = test_router(FailingFetch);

    let (status, body) = get_json(app, "/api/format?url=https://down.example.com/a.mp3").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "DETECT_FAILED");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("connection refused"), "message: {message}");
}
