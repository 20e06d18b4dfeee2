//! Configuration for the reader core

use std::env;
use std::time::Duration;

use serde::Deserialize;

/// Reader configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReaderConfig {
    pub api: ApiConfig,
    pub progress: ProgressConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the remote backend, without trailing slash
    pub base_url: String,
    /// Bearer token for authenticated endpoints
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProgressConfig {
    /// Quiet window for the trailing-edge progress debounce, in milliseconds
    pub debounce_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            api: ApiConfig {
                base_url: "http://localhost:3000/api/v1".to_string(),
                token: None,
                timeout_secs: 30,
            },
            progress: ProgressConfig { debounce_ms: 2000 },
        }
    }
}

impl ReaderConfig {
    pub fn from_env() -> Self {
        let defaults = ReaderConfig::default();
        ReaderConfig {
            api: ApiConfig {
                base_url: env::var("READER_API_URL").unwrap_or(defaults.api.base_url),
                token: env::var("READER_API_TOKEN").ok(),
                timeout_secs: env::var("READER_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.api.timeout_secs),
            },
            progress: ProgressConfig {
                debounce_ms: env::var("READER_PROGRESS_DEBOUNCE_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.progress.debounce_ms),
            },
        }
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.progress.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }
}
