//! Fixed-interval polling of the telemetry feeds.
//!
//! Each tick that falls due spawns one fire-and-forget worker per feed; the
//! results come back over a channel and are applied on the caller's thread by
//! [`Poller::drain`], so the board is only ever touched from the frame loop.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::client::{FeedFetcher, TelemetryError};
use super::feed::{FeedKind, FeedReading, Sample};
use crate::config::TelemetryConfig;

type FetchResult = (FeedKind, Result<Vec<Sample>, TelemetryError>);

/// The three feed readings, each independent of the others.
///
/// Every [`FeedKind`] always has an entry.
#[derive(Debug, Clone)]
pub struct TelemetryBoard {
    readings: HashMap<FeedKind, FeedReading>,
}

impl Default for TelemetryBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryBoard {
    /// Creates a board with an empty reading per feed.
    pub fn new() -> Self {
        Self {
            readings: FeedKind::ALL
                .iter()
                .map(|kind| (*kind, FeedReading::default()))
                .collect(),
        }
    }

    /// Reading for `kind`.
    pub fn reading(&self, kind: FeedKind) -> &FeedReading {
        static EMPTY: FeedReading = FeedReading::EMPTY;
        self.readings.get(&kind).unwrap_or(&EMPTY)
    }

    /// Marks `kind` as loading.
    pub fn begin_fetch(&mut self, kind: FeedKind) {
        self.reading_mut(kind).begin_fetch();
    }

    /// Applies a fetch result to `kind` only.
    pub fn apply(
        &mut self,
        kind: FeedKind,
        result: Result<Vec<Sample>, TelemetryError>,
        history_len: usize,
        now: DateTime<Utc>,
    ) {
        if let Err(err) = &result {
            warn!(feed = kind.label(), error = %err, "telemetry fetch failed");
        }
        self.reading_mut(kind).apply(kind, result, history_len, now);
    }

    fn reading_mut(&mut self, kind: FeedKind) -> &mut FeedReading {
        self.readings.entry(kind).or_default()
    }
}

/// Polls every feed at a fixed interval.
pub struct Poller<F: FeedFetcher + 'static> {
    fetcher: Arc<F>,
    feed_names: HashMap<FeedKind, String>,
    interval: Duration,
    history_len: usize,
    last_poll: Option<Instant>,
    board: TelemetryBoard,
    tx: Sender<FetchResult>,
    rx: Receiver<FetchResult>,
}

impl<F: FeedFetcher + 'static> Poller<F> {
    /// Creates a poller that has not fetched anything yet.
    pub fn new(fetcher: F, config: &TelemetryConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            fetcher: Arc::new(fetcher),
            feed_names: FeedKind::ALL
                .iter()
                .map(|kind| (*kind, config.feed_name(*kind).to_string()))
                .collect(),
            interval: Duration::from_secs(config.poll_interval_secs),
            history_len: config.history_len,
            last_poll: None,
            board: TelemetryBoard::new(),
            tx,
            rx,
        }
    }

    /// Current readings.
    pub fn board(&self) -> &TelemetryBoard {
        &self.board
    }

    /// Starts a round of fetches if none has run yet or the interval elapsed.
    ///
    /// # Returns
    ///
    /// `true` if fetches were issued.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self
            .last_poll
            .is_none_or(|last| now.duration_since(last) >= self.interval);
        if !due {
            return false;
        }
        self.last_poll = Some(now);
        self.poll_all();
        true
    }

    /// Issues one background fetch per feed, regardless of the interval.
    pub fn poll_all(&mut self) {
        for kind in FeedKind::ALL {
            self.board.begin_fetch(kind);

            let fetcher = Arc::clone(&self.fetcher);
            let tx = self.tx.clone();
            let name = self.feed_names[&kind].clone();
            let limit = self.history_len;

            debug!(feed = %name, "polling feed");
            thread::spawn(move || {
                let result = fetcher.fetch(&name, limit);
                // The receiver is gone only when the poller was dropped.
                let _ = tx.send((kind, result));
            });
        }
    }

    /// Applies every result that has arrived so far.
    ///
    /// # Returns
    ///
    /// The number of results applied.
    pub fn drain(&mut self, now: DateTime<Utc>) -> usize {
        let mut applied = 0;
        while let Ok((kind, result)) = self.rx.try_recv() {
            self.board.apply(kind, result, self.history_len, now);
            applied += 1;
        }
        applied
    }
}
