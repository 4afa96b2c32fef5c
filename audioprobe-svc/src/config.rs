//! audioprobe-svc configuration
//!
//! Bootstrap configuration from an optional TOML file with CLI/env
//! overrides applied on top. Priority: CLI argument, then environment
//! variable, then TOML file, then built-in default.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

fn default_bind_addr() -> String {
    "127.0.0.1:5760".to_string()
}

fn default_detect_timeout_secs() -> u64 {
    10
}

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Headers deadline for outbound detection requests, in seconds
    #[serde(default = "default_detect_timeout_secs")]
    pub detect_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            detect_timeout_secs: default_detect_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when no
    /// path is given
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML in {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn detect_timeout(&self) -> Duration {
        Duration::from_secs(self.detect_timeout_secs)
    }
}
