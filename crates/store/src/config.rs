//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `AURA_DATA_DIR` - Directory holding the JSON collections
//!
//! ## Optional
//! - `AURA_LATENCY_MS` - Artificial per-operation latency in
//!   milliseconds (default: 200). Set to 0 to disable; tests do.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_LATENCY_MS: u64 = 200;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory the JSON collections live in.
    pub data_dir: PathBuf,
    /// Artificial latency awaited before every operation, simulating a
    /// real backend round-trip.
    pub latency: Duration,
}

impl StoreConfig {
    /// Configuration with the default latency.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
        }
    }

    /// Override the artificial latency.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `AURA_DATA_DIR` is not
    /// set and [`ConfigError::InvalidEnvVar`] if `AURA_LATENCY_MS` is
    /// not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = std::env::var("AURA_DATA_DIR")
            .map_err(|_| ConfigError::MissingEnvVar("AURA_DATA_DIR".to_owned()))?;

        let latency_ms = match std::env::var("AURA_LATENCY_MS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("AURA_LATENCY_MS".to_owned(), e.to_string())
            })?,
            Err(_) => DEFAULT_LATENCY_MS,
        };

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            latency: Duration::from_millis(latency_ms),
        })
    }
}
