//! Application configuration.
//!
//! Loaded from an optional JSON file; every field falls back to its default.
//! The telemetry API key can also come from the environment.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::simulation::params::Params;
use crate::telemetry::feed::FeedKind;

/// Environment variable naming the JSON config file.
pub const CONFIG_PATH_ENV: &str = "SPECIES_GAME_CONFIG";
/// Environment variable overriding the telemetry API key.
pub const API_KEY_ENV: &str = "SPECIES_GAME_API_KEY";

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid configuration JSON.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The values parse but cannot run.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Which field is wrong and why.
        reason: String,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Telemetry service settings.
    pub telemetry: TelemetryConfig,
    /// Simulation tunables.
    pub simulation: Params,
}

/// Telemetry service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Base URL; feeds are fetched from `{base_url}/{feed}/data`.
    pub base_url: String,
    /// Header carrying the API key.
    pub api_key_header: String,
    /// API key, sent only when present and non-empty.
    pub api_key: Option<String>,
    /// Feed name for temperature.
    pub temperature_feed: String,
    /// Feed name for humidity.
    pub humidity_feed: String,
    /// Feed name for soil moisture.
    pub soil_moisture_feed: String,
    /// Seconds between polls.
    pub poll_interval_secs: u64,
    /// Samples requested per feed and kept in the rolling history.
    pub history_len: usize,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://io.adafruit.com/api/v2/species-game/feeds".to_string(),
            api_key_header: "X-AIO-Key".to_string(),
            api_key: None,
            temperature_feed: FeedKind::Temperature.default_name().to_string(),
            humidity_feed: FeedKind::Humidity.default_name().to_string(),
            soil_moisture_feed: FeedKind::SoilMoisture.default_name().to_string(),
            poll_interval_secs: 30,
            history_len: 25,
            request_timeout_secs: 10,
        }
    }
}

impl TelemetryConfig {
    /// Configured feed name for `kind`.
    pub fn feed_name(&self, kind: FeedKind) -> &str {
        match kind {
            FeedKind::Temperature => &self.temperature_feed,
            FeedKind::Humidity => &self.humidity_feed,
            FeedKind::SoilMoisture => &self.soil_moisture_feed,
        }
    }
}

impl AppConfig {
    /// Parses and validates a JSON document; missing fields take their defaults.
    pub fn from_json(path: &str, json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would panic or spin at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::Invalid {
            reason: reason.to_string(),
        };
        if self.telemetry.poll_interval_secs == 0 {
            return Err(invalid("poll_interval_secs must be at least 1"));
        }
        if self.telemetry.history_len == 0 {
            return Err(invalid("history_len must be at least 1"));
        }
        self.simulation
            .validate()
            .map_err(|reason| ConfigError::Invalid { reason })
    }

    /// Loads the configuration from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_json(&display, &json)
    }

    /// Loads the file named by [`CONFIG_PATH_ENV`], or defaults when unset,
    /// then applies [`API_KEY_ENV`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => {
                info!(%path, "loading config");
                Self::load_from_file(&path)?
            }
            _ => Self::default(),
        };
        config.apply_api_key(std::env::var(API_KEY_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Overrides the API key when `key` is present and non-empty.
    pub fn apply_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|key| !key.is_empty()) {
            self.telemetry.api_key = Some(key);
        }
    }
}
