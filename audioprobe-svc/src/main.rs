//! audioprobe-svc - Audio format probe microservice
//!
//! Small HTTP service exposing the audioprobe-core detection engine:
//! - `GET /api/format?url=...` - classify a remote audio URL
//! - `GET /health` - health check

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use audioprobe_core::{FormatDetector, HttpFetch};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audioprobe_svc::{build_router, AppState, Config};

/// Command-line arguments for audioprobe-svc
#[derive(Parser, Debug)]
#[command(name = "audioprobe-svc")]
#[command(about = "Audio format probe microservice")]
#[command(version)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, env = "AUDIOPROBE_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind the HTTP server to (overrides config file)
    #[arg(short, long, env = "AUDIOPROBE_BIND_ADDR")]
    bind_addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "audioprobe_svc=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(bind_addr) = args.bind_addr {
        config.bind_addr = bind_addr;
    }

    info!("Starting audioprobe-svc v{}", env!("CARGO_PKG_VERSION"));
    info!("Detection headers deadline: {:?}", config.detect_timeout());

    let fetch = HttpFetch::new().context("failed to build HTTP client")?;
    let detector = FormatDetector::new(Arc::new(fetch)).with_timeout(config.detect_timeout());
    let state = AppState::new(detector);

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
