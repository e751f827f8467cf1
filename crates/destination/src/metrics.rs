//! Ingestion counters, aggregated and emitted as one structured log event per
//! reporting interval.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

lazy_static::lazy_static! {
    static ref GLOBAL: Metrics = Metrics::new();
}

/// Process-wide ingestion counters. Writers only ever add; the reporter swaps
/// the interval counters back to zero when it emits.
#[derive(Debug, Default)]
pub struct Metrics {
    records_processed: AtomicU64,
    bytes_processed: AtomicU64,
    files_processed: AtomicU64,
    file_processing_errors: AtomicU64,
    file_processing_nanos: AtomicU64,
    db_writes_completed: AtomicU64,
    db_write_errors: AtomicU64,
    // Gauges, never reset.
    current_in_flight_files: AtomicU64,
    total_in_flight_files: AtomicU64,
}

/// Interval counter values captured (and reset) by the reporter.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub records_processed: u64,
    pub bytes_processed: u64,
    pub files_processed: u64,
    pub file_processing_errors: u64,
    pub file_processing_time: Duration,
    pub db_writes_completed: u64,
    pub db_write_errors: u64,
    pub current_in_flight_files: u64,
    pub total_in_flight_files: u64,
}

impl Metrics {
    pub fn new() -> Metrics {
        Metrics::default()
    }

    pub fn global() -> &'static Metrics {
        &GLOBAL
    }

    pub fn add_records(&self, n: u64) {
        self.records_processed.fetch_add(n, Ordering::Relaxed);
    }

    pub fn add_bytes(&self, n: u64) {
        self.bytes_processed.fetch_add(n, Ordering::Relaxed);
    }

    pub fn file_started(&self) {
        self.current_in_flight_files.fetch_add(1, Ordering::Relaxed);
        self.total_in_flight_files.fetch_add(1, Ordering::Relaxed);
    }

    pub fn file_finished(&self, elapsed: Duration, ok: bool) {
        self.current_in_flight_files.fetch_sub(1, Ordering::Relaxed);
        self.files_processed.fetch_add(1, Ordering::Relaxed);
        self.file_processing_nanos
            .fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
        if !ok {
            self.file_processing_errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn db_write_completed(&self) {
        self.db_writes_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn db_write_error(&self) {
        self.db_write_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Captures the interval counters, resetting them to zero.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            records_processed: self.records_processed.swap(0, Ordering::Relaxed),
            bytes_processed: self.bytes_processed.swap(0, Ordering::Relaxed),
            files_processed: self.files_processed.swap(0, Ordering::Relaxed),
            file_processing_errors: self.file_processing_errors.swap(0, Ordering::Relaxed),
            file_processing_time: Duration::from_nanos(
                self.file_processing_nanos.swap(0, Ordering::Relaxed),
            ),
            db_writes_completed: self.db_writes_completed.swap(0, Ordering::Relaxed),
            db_write_errors: self.db_write_errors.swap(0, Ordering::Relaxed),
            current_in_flight_files: self.current_in_flight_files.load(Ordering::Relaxed),
            total_in_flight_files: self.total_in_flight_files.load(Ordering::Relaxed),
        }
    }
}

/// The reporting interval, from `METRICS_LOG_INTERVAL` (default 30s).
pub fn report_interval() -> Duration {
    std::env::var("METRICS_LOG_INTERVAL")
        .ok()
        .and_then(|v| humantime::parse_duration(v.trim()).ok())
        .unwrap_or(Duration::from_secs(30))
}

/// Spawns the periodic reporter task. Rates are computed over the interval;
/// interval counters reset after each emission.
pub fn spawn_reporter(
    metrics: &'static Metrics,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick fires immediately; skip it so every emission covers
        // a full interval.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let snapshot = metrics.snapshot();
            let secs = interval.as_secs_f64();
            tracing::info!(
                records_processed = snapshot.records_processed,
                records_per_sec = snapshot.records_processed as f64 / secs,
                bytes_processed = snapshot.bytes_processed,
                bytes_per_sec = snapshot.bytes_processed as f64 / secs,
                files_processed = snapshot.files_processed,
                file_processing_errors = snapshot.file_processing_errors,
                file_processing_ms = snapshot.file_processing_time.as_millis() as u64,
                db_writes_completed = snapshot.db_writes_completed,
                db_write_errors = snapshot.db_write_errors,
                current_in_flight_files = snapshot.current_in_flight_files,
                total_in_flight_files = snapshot.total_in_flight_files,
                rss_bytes = rss_bytes(),
                runtime_workers = runtime_workers(),
                message = "ingestion metrics",
            );
        }
    })
}

/// Resident set size, from /proc/self/statm. Zero where unavailable.
fn rss_bytes() -> u64 {
    std::fs::read_to_string("/proc/self/statm")
        .ok()
        .and_then(|s| {
            s.split_whitespace()
                .nth(1)
                .and_then(|pages| pages.parse::<u64>().ok())
        })
        .map(|pages| pages * 4096)
        .unwrap_or(0)
}

fn runtime_workers() -> usize {
    tokio::runtime::Handle::try_current()
        .map(|h| h.metrics().num_workers())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_counters_reset_on_snapshot() {
        let metrics = Metrics::new();
        metrics.file_started();
        metrics.add_records(10);
        metrics.add_bytes(1024);
        metrics.db_write_completed();
        metrics.db_write_error();
        metrics.file_finished(Duration::from_millis(250), false);

        let first = metrics.snapshot();
        assert_eq!(first.records_processed, 10);
        assert_eq!(first.bytes_processed, 1024);
        assert_eq!(first.files_processed, 1);
        assert_eq!(first.file_processing_errors, 1);
        assert_eq!(first.file_processing_time, Duration::from_millis(250));
        assert_eq!(first.db_writes_completed, 1);
        assert_eq!(first.db_write_errors, 1);
        assert_eq!(first.current_in_flight_files, 0);
        assert_eq!(first.total_in_flight_files, 1);

        // Interval counters are gone; the in-flight gauge survives.
        let second = metrics.snapshot();
        assert_eq!(second.records_processed, 0);
        assert_eq!(second.files_processed, 0);
        assert_eq!(second.total_in_flight_files, 1);
    }
}
