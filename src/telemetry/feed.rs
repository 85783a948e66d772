//! Telemetry feeds and the per-feed reading state shown in the sensor panel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::client::TelemetryError;

/// One of the three polled IoT feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedKind {
    /// Ambient temperature.
    Temperature,
    /// Ambient relative humidity.
    Humidity,
    /// Soil moisture.
    SoilMoisture,
}

impl FeedKind {
    /// All feeds in display order.
    pub const ALL: [FeedKind; 3] = [
        FeedKind::Temperature,
        FeedKind::Humidity,
        FeedKind::SoilMoisture,
    ];

    /// Feed name used by default in request paths.
    pub fn default_name(self) -> &'static str {
        match self {
            FeedKind::Temperature => "temperature",
            FeedKind::Humidity => "humidity",
            FeedKind::SoilMoisture => "soil-moisture",
        }
    }

    /// Panel label.
    pub fn label(self) -> &'static str {
        match self {
            FeedKind::Temperature => "Temperature",
            FeedKind::Humidity => "Humidity",
            FeedKind::SoilMoisture => "Soil Moisture",
        }
    }

    /// Display unit.
    pub fn unit(self) -> &'static str {
        match self {
            FeedKind::Temperature => "°C",
            FeedKind::Humidity | FeedKind::SoilMoisture => "%",
        }
    }

    /// Whether the feed keeps a rolling history for charting.
    pub fn keeps_history(self) -> bool {
        matches!(self, FeedKind::Temperature | FeedKind::Humidity)
    }
}

/// A single data point as returned by the telemetry service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Reading; the service may encode it as a number or a numeric string.
    #[serde(deserialize_with = "number_or_string")]
    pub value: f64,
    /// When the reading was recorded.
    pub created_at: DateTime<Utc>,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Latest known state of one feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedReading {
    /// Most recent value.
    pub value: Option<f64>,
    /// Recent values, oldest first. Always empty for feeds without history.
    pub history: Vec<f64>,
    /// Timestamp of the most recent value.
    pub last_updated: Option<DateTime<Utc>>,
    /// When the last successful fetch was applied.
    pub fetched_at: Option<DateTime<Utc>>,
    /// A fetch is in flight.
    pub loading: bool,
    /// Message from the last failed fetch.
    pub error: Option<String>,
}

impl FeedReading {
    /// A reading with no data and no fetch in flight.
    pub const EMPTY: FeedReading = FeedReading {
        value: None,
        history: Vec::new(),
        last_updated: None,
        fetched_at: None,
        loading: false,
        error: None,
    };

    /// Marks a fetch as started.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Applies the outcome of a fetch.
    ///
    /// A success replaces the reading wholesale from `samples`, which arrive
    /// newest-first; the history is stored oldest-first and holds at most
    /// `history_len` values. A failure keeps the last value and records the
    /// error.
    pub fn apply(
        &mut self,
        kind: FeedKind,
        result: Result<Vec<Sample>, TelemetryError>,
        history_len: usize,
        now: DateTime<Utc>,
    ) {
        self.loading = false;
        match result {
            Ok(samples) => {
                let newest = samples.first();
                self.value = newest.map(|sample| sample.value);
                self.last_updated = newest.map(|sample| sample.created_at);
                self.history = if kind.keeps_history() {
                    samples
                        .iter()
                        .take(history_len)
                        .rev()
                        .map(|sample| sample.value)
                        .collect()
                } else {
                    Vec::new()
                };
                self.fetched_at = Some(now);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }
}
