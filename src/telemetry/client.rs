//! HTTP access to the telemetry service.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;
use tracing::debug;

use super::feed::Sample;
use crate::config::TelemetryConfig;

/// Errors produced while fetching a feed.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Non-success HTTP status.
    #[error("feed {feed} returned HTTP {status}")]
    Status {
        /// Feed name.
        feed: String,
        /// HTTP status code.
        status: u16,
    },
    /// Empty body or empty sample array.
    #[error("feed {feed} returned no data")]
    Empty {
        /// Feed name.
        feed: String,
    },
    /// Body was not a sample array.
    #[error("failed to decode feed {feed}: {message}")]
    Decode {
        /// Feed name.
        feed: String,
        /// Decoder message.
        message: String,
    },
    /// Connection, timeout or body read failure.
    #[error("request for feed {feed} failed: {message}")]
    Transport {
        /// Feed name.
        feed: String,
        /// Underlying error message.
        message: String,
    },
    /// The configured API key header name or value is not valid HTTP.
    #[error("invalid API key header: {0}")]
    InvalidHeader(String),
}

/// Source of feed samples. Implemented over HTTP for the app and by fakes in tests.
pub trait FeedFetcher: Send + Sync {
    /// Fetches up to `limit` samples of `feed`, newest first.
    fn fetch(&self, feed: &str, limit: usize) -> Result<Vec<Sample>, TelemetryError>;
}

/// Fetches feeds with a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFeedFetcher {
    client: Client,
    base_url: String,
}

impl HttpFeedFetcher {
    /// Builds a client carrying the configured API key header, if any.
    pub fn new(config: &TelemetryConfig) -> Result<Self, TelemetryError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = config.api_key.as_deref().filter(|key| !key.is_empty()) {
            let name = HeaderName::from_bytes(config.api_key_header.as_bytes())
                .map_err(|err| TelemetryError::InvalidHeader(err.to_string()))?;
            let mut value = HeaderValue::from_str(key)
                .map_err(|err| TelemetryError::InvalidHeader(err.to_string()))?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| TelemetryError::Transport {
                feed: String::new(),
                message: err.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

impl FeedFetcher for HttpFeedFetcher {
    fn fetch(&self, feed: &str, limit: usize) -> Result<Vec<Sample>, TelemetryError> {
        let url = feed_url(&self.base_url, feed, limit);
        debug!(%url, "fetching feed");

        let transport = |err: reqwest::Error| TelemetryError::Transport {
            feed: feed.to_string(),
            message: err.to_string(),
        };

        let response = self.client.get(&url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(TelemetryError::Status {
                feed: feed.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(transport)?;
        parse_samples(feed, &body)
    }
}

/// Builds `{base}/{feed}/data?limit={limit}`.
pub fn feed_url(base_url: &str, feed: &str, limit: usize) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{base}/{feed}/data?limit={limit}")
}

/// Decodes a newest-first JSON array of samples, rejecting an empty payload.
pub fn parse_samples(feed: &str, body: &str) -> Result<Vec<Sample>, TelemetryError> {
    if body.trim().is_empty() {
        return Err(TelemetryError::Empty {
            feed: feed.to_string(),
        });
    }

    let samples: Vec<Sample> =
        serde_json::from_str(body).map_err(|err| TelemetryError::Decode {
            feed: feed.to_string(),
            message: err.to_string(),
        })?;

    if samples.is_empty() {
        return Err(TelemetryError::Empty {
            feed: feed.to_string(),
        });
    }
    Ok(samples)
}
