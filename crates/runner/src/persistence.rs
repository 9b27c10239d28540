//! Result sinks
//!
//! - `JsonFileSink`: one pretty-printed file per auction plus `summary.json`
//! - `MemorySink`: keeps everything in memory for tests and embedding

use auction_core::{AuctionResult, BatchSummary};
use auction_ports::{ResultSink, SinkError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Writes results as JSON files into one output directory
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    /// Prepare the output directory
    ///
    /// Creates it if missing and removes `.json` files left by a previous
    /// batch. Other files are left alone.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self, SinkError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|error| io_error(&dir, error))?;

        let mut removed = 0;
        for entry in std::fs::read_dir(&dir).map_err(|error| io_error(&dir, error))? {
            let path = entry.map_err(|error| io_error(&dir, error))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                std::fs::remove_file(&path).map_err(|error| io_error(&path, error))?;
                removed += 1;
            }
        }
        if removed > 0 {
            log::debug!("Removed {} stale result files from {}", removed, dir.display());
        }

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for one auction, e.g. `auction_007.json`
    pub fn result_file_name(auction_id: u32) -> String {
        format!("auction_{:03}.json", auction_id)
    }

    fn write_json<T: Serialize>(&self, file_name: &str, value: &T) -> Result<(), SinkError> {
        let path = self.dir.join(file_name);
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| SinkError::Serialization(e.to_string()))?;
        std::fs::write(&path, json).map_err(|error| io_error(&path, error))
    }
}

impl ResultSink for JsonFileSink {
    fn record_result(&self, result: &AuctionResult) -> Result<(), SinkError> {
        self.write_json(&Self::result_file_name(result.auction_id), result)
    }

    fn record_summary(&self, summary: &BatchSummary) -> Result<(), SinkError> {
        self.write_json("summary.json", summary)
    }
}

fn io_error(path: &Path, error: std::io::Error) -> SinkError {
    SinkError::Io {
        path: path.display().to_string(),
        error,
    }
}

/// In-memory sink
#[derive(Debug, Default)]
pub struct MemorySink {
    results: Mutex<Vec<AuctionResult>>,
    summaries: Mutex<Vec<BatchSummary>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results in the order they were recorded
    pub fn results(&self) -> Vec<AuctionResult> {
        lock(&self.results).clone()
    }

    pub fn summary(&self) -> Option<BatchSummary> {
        lock(&self.summaries).last().cloned()
    }
}

impl ResultSink for MemorySink {
    fn record_result(&self, result: &AuctionResult) -> Result<(), SinkError> {
        lock(&self.results).push(result.clone());
        Ok(())
    }

    fn record_summary(&self, summary: &BatchSummary) -> Result<(), SinkError> {
        lock(&self.summaries).push(summary.clone());
        Ok(())
    }
}

// A panicked writer cannot leave a Vec half-pushed
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_core::{AttributeSet, Bid};
    use chrono::Utc;
    use std::time::Duration;

    fn result(auction_id: u32) -> AuctionResult {
        AuctionResult::resolve(
            auction_id,
            AttributeSet::from_values([10.0, 20.0]),
            vec![
                Bid::new(1, 4.0, 12, "latency=10ms"),
                Bid::new(2, 6.0, 30, "latency=25ms"),
            ],
            Utc::now(),
            Duration::from_millis(40),
            800,
            3,
        )
    }

    fn summary() -> BatchSummary {
        let now = Utc::now();
        BatchSummary {
            start_time: now,
            end_time: now,
            elapsed_ms: 0,
            auctions: 1,
            auctions_completed: 1,
            auctions_failed: 0,
            bidders: 3,
        }
    }

    #[test]
    fn test_file_names() {
        assert_eq!(JsonFileSink::result_file_name(7), "auction_007.json");
        assert_eq!(JsonFileSink::result_file_name(1234), "auction_1234.json");
    }

    #[test]
    fn test_writes_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileSink::create(dir.path()).unwrap();

        sink.record_result(&result(7)).unwrap();
        sink.record_summary(&summary()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("auction_007.json")).unwrap();
        let parsed: AuctionResult = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.auction_id, 7);
        assert_eq!(parsed.winner.unwrap().bidder_id, 2);
        assert!(content.contains("\"attr_01\""));

        let content = std::fs::read_to_string(dir.path().join("summary.json")).unwrap();
        let parsed: BatchSummary = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.bidders, 3);
    }

    #[test]
    fn test_create_clears_stale_json_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("auction_099.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "keep").unwrap();

        JsonFileSink::create(dir.path()).unwrap();

        assert!(!dir.path().join("auction_099.json").exists());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_create_makes_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let sink = JsonFileSink::create(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(sink.dir(), nested.as_path());
    }

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.record_result(&result(2)).unwrap();
        sink.record_result(&result(0)).unwrap();
        sink.record_summary(&summary()).unwrap();

        let ids: Vec<_> = sink.results().iter().map(|r| r.auction_id).collect();
        assert_eq!(ids, vec![2, 0]);
        assert!(sink.summary().is_some());
    }
}
