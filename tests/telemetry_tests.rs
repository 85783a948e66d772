#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chrono::{DateTime, TimeZone, Utc};
use species_game::config::TelemetryConfig;
use species_game::telemetry::client::{
    FeedFetcher, HttpFeedFetcher, TelemetryError, feed_url, parse_samples,
};
use species_game::telemetry::feed::{FeedKind, FeedReading, Sample};
use species_game::telemetry::poller::{Poller, TelemetryBoard};

fn at(second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, second).unwrap()
}

/// Newest-first samples with values `count`, `count - 1`, ..., `1`.
fn samples(count: usize) -> Vec<Sample> {
    (0..count)
        .map(|i| Sample {
            value: (count - i) as f64,
            created_at: at((59 - i.min(59)) as u32),
        })
        .collect()
}

struct FakeFetcher {
    calls: Arc<AtomicUsize>,
}

impl FeedFetcher for FakeFetcher {
    fn fetch(&self, feed: &str, limit: usize) -> Result<Vec<Sample>, TelemetryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if feed == "broken" {
            return Err(TelemetryError::Status {
                feed: feed.to_string(),
                status: 503,
            });
        }
        Ok(samples(limit.min(3)))
    }
}

fn drain_until(poller: &mut Poller<FakeFetcher>, expected: usize) -> usize {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut applied = 0;
    while applied < expected && Instant::now() < deadline {
        applied += poller.drain(at(0));
        thread::sleep(Duration::from_millis(5));
    }
    applied
}

#[test]
fn test_parse_numbers_and_strings() {
    let body = r#"[
        {"value": "21.5", "created_at": "2024-05-01T12:00:30Z", "feed_id": 7},
        {"value": 20, "created_at": "2024-05-01T12:00:00Z"}
    ]"#;

    let parsed = parse_samples("temperature", body).unwrap();

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].value, 21.5);
    assert_eq!(parsed[0].created_at, at(30));
    assert_eq!(parsed[1].value, 20.0);
}

#[test]
fn test_parse_rejects_empty_and_malformed() {
    assert!(matches!(
        parse_samples("humidity", "[]"),
        Err(TelemetryError::Empty { .. })
    ));
    assert!(matches!(
        parse_samples("humidity", "  "),
        Err(TelemetryError::Empty { .. })
    ));
    assert!(matches!(
        parse_samples("humidity", r#"{"error": "not found"}"#),
        Err(TelemetryError::Decode { .. })
    ));
    assert!(matches!(
        parse_samples("humidity", r#"[{"value": "warm", "created_at": "2024-05-01T12:00:00Z"}]"#),
        Err(TelemetryError::Decode { .. })
    ));
}

#[test]
fn test_feed_url() {
    assert_eq!(
        feed_url("https://example.test/feeds/", "soil-moisture", 25),
        "https://example.test/feeds/soil-moisture/data?limit=25"
    );
}

#[test]
fn test_history_is_oldest_first() {
    let mut reading = FeedReading::default();

    reading.apply(FeedKind::Temperature, Ok(samples(3)), 25, at(1));

    assert_eq!(reading.value, Some(3.0));
    assert_eq!(reading.history, vec![1.0, 2.0, 3.0]);
    assert_eq!(reading.last_updated, Some(at(59)));
    assert_eq!(reading.fetched_at, Some(at(1)));
    assert!(!reading.loading);
}

#[test]
fn test_history_truncated_to_newest() {
    let mut reading = FeedReading::default();

    reading.apply(FeedKind::Humidity, Ok(samples(40)), 25, at(1));

    assert_eq!(reading.history.len(), 25);
    assert_eq!(reading.history.first(), Some(&16.0));
    assert_eq!(reading.history.last(), Some(&40.0));
}

#[test]
fn test_soil_moisture_keeps_no_history() {
    let mut reading = FeedReading::default();

    reading.apply(FeedKind::SoilMoisture, Ok(samples(5)), 25, at(1));

    assert_eq!(reading.value, Some(5.0));
    assert!(reading.history.is_empty());
}

#[test]
fn test_error_keeps_last_value() {
    let mut reading = FeedReading::default();
    reading.apply(FeedKind::Temperature, Ok(samples(2)), 25, at(1));
    reading.begin_fetch();
    assert!(reading.loading);

    let err = TelemetryError::Empty {
        feed: "temperature".to_string(),
    };
    reading.apply(FeedKind::Temperature, Err(err), 25, at(2));

    assert_eq!(reading.value, Some(2.0));
    assert_eq!(reading.history, vec![1.0, 2.0]);
    assert!(reading.error.is_some());
    assert!(!reading.loading);

    reading.apply(FeedKind::Temperature, Ok(samples(1)), 25, at(3));
    assert_eq!(reading.error, None);
}

#[test]
fn test_board_feeds_are_independent() {
    let mut board = TelemetryBoard::new();
    board.begin_fetch(FeedKind::Temperature);
    board.begin_fetch(FeedKind::Humidity);

    let err = TelemetryError::Transport {
        feed: "humidity".to_string(),
        message: "timed out".to_string(),
    };
    board.apply(FeedKind::Temperature, Ok(samples(2)), 25, at(0));
    board.apply(FeedKind::Humidity, Err(err), 25, at(0));

    assert_eq!(board.reading(FeedKind::Temperature).value, Some(2.0));
    assert_eq!(board.reading(FeedKind::Humidity).value, None);
    assert!(board.reading(FeedKind::Humidity).error.is_some());
    assert_eq!(*board.reading(FeedKind::SoilMoisture), FeedReading::default());
}

#[test]
fn test_poller_respects_interval() {
    let calls = Arc::new(AtomicUsize::new(0));
    let config = TelemetryConfig::default();
    let mut poller = Poller::new(
        FakeFetcher {
            calls: Arc::clone(&calls),
        },
        &config,
    );
    let start = Instant::now();

    assert!(poller.tick(start));
    assert!(FeedKind::ALL.iter().all(|kind| poller.board().reading(*kind).loading));
    assert!(!poller.tick(start));
    assert!(!poller.tick(start + Duration::from_secs(29)));
    assert!(poller.tick(start + Duration::from_secs(30)));

    assert_eq!(drain_until(&mut poller, 6), 6);
    assert_eq!(calls.load(Ordering::SeqCst), 6);
}

#[test]
fn test_poller_applies_results() {
    let config = TelemetryConfig {
        soil_moisture_feed: "broken".to_string(),
        ..TelemetryConfig::default()
    };
    let mut poller = Poller::new(
        FakeFetcher {
            calls: Arc::new(AtomicUsize::new(0)),
        },
        &config,
    );

    poller.poll_all();
    assert_eq!(drain_until(&mut poller, 3), 3);

    let board = poller.board();
    assert_eq!(board.reading(FeedKind::Temperature).history, vec![1.0, 2.0, 3.0]);
    assert_eq!(board.reading(FeedKind::Humidity).value, Some(3.0));
    let soil = board.reading(FeedKind::SoilMoisture);
    assert_eq!(soil.value, None);
    assert!(soil.error.as_deref().is_some_and(|msg| msg.contains("503")));
    assert!(FeedKind::ALL.iter().all(|kind| !board.reading(*kind).loading));
}

/// Serves one canned response per connection and returns the raw requests.
fn serve(responses: Vec<(&'static str, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/feeds", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut requests = Vec::new();
        for (status_line, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            requests.push(String::from_utf8_lossy(&request).to_lowercase());

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
        requests
    });

    (base_url, handle)
}

fn http_config(base_url: String) -> TelemetryConfig {
    TelemetryConfig {
        base_url,
        api_key: Some("secret".to_string()),
        request_timeout_secs: 5,
        ..TelemetryConfig::default()
    }
}

#[test]
fn test_http_fetch_maps_status_and_parses_body() {
    let body = r#"[{"value": "18.25", "created_at": "2024-05-01T12:00:30Z"}]"#;
    let (base_url, server) = serve(vec![("503 Service Unavailable", ""), ("200 OK", body)]);
    let fetcher = HttpFeedFetcher::new(&http_config(base_url)).unwrap();

    let first = fetcher.fetch("temperature", 25);
    let second = fetcher.fetch("temperature", 25).unwrap();
    let requests = server.join().unwrap();

    assert!(matches!(
        first,
        Err(TelemetryError::Status { status: 503, .. })
    ));
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].value, 18.25);

    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert!(request.starts_with("get /feeds/temperature/data?limit=25 "));
        assert!(request.contains("x-aio-key: secret"));
    }
}

#[test]
fn test_http_fetch_empty_body() {
    let (base_url, server) = serve(vec![("200 OK", "[]")]);
    let fetcher = HttpFeedFetcher::new(&http_config(base_url)).unwrap();

    let result = fetcher.fetch("humidity", 25);
    server.join().unwrap();

    assert!(matches!(result, Err(TelemetryError::Empty { .. })));
}

#[test]
fn test_http_fetch_without_key_sends_no_header() {
    let (base_url, server) = serve(vec![("200 OK", "[]")]);
    let config = TelemetryConfig {
        api_key: None,
        ..http_config(base_url)
    };
    let fetcher = HttpFeedFetcher::new(&config).unwrap();

    let _ = fetcher.fetch("humidity", 5);
    let requests = server.join().unwrap();

    assert!(!requests[0].contains("x-aio-key"));
}

#[test]
fn test_http_fetch_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/feeds", listener.local_addr().unwrap());
    drop(listener);
    let fetcher = HttpFeedFetcher::new(&http_config(base_url)).unwrap();

    let result = fetcher.fetch("soil-moisture", 1);

    assert!(matches!(result, Err(TelemetryError::Transport { .. })));
}

#[test]
fn test_default_board_has_every_feed() {
    let board = TelemetryBoard::default();

    for kind in FeedKind::ALL {
        assert_eq!(*board.reading(kind), FeedReading::default());
    }
}
