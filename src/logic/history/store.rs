//! Record Store - Bounded Analysis Log
//!
//! Append-only JSON log of analysis records with FIFO eviction.
//! Holds at most `retention` records, oldest first; the file is the sole
//! source of truth and is rewritten in full on every append.
//!
//! Missing or unparseable state is a normal condition (cold start or a
//! damaged file), never an error: `load_all` returns an empty list.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::constants;
use crate::logic::history::types::AnalysisRecord;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Errors surfaced by the write path. The read path never errors.
#[derive(Debug)]
pub enum StoreError {
    Io(String),
    Serialize(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

// ============================================================================
// RECORD STORE
// ============================================================================

/// Bounded append-only log of analysis records
pub struct RecordStore {
    path: PathBuf,
    retention: usize,
}

impl RecordStore {
    /// Store at the default location with the default retention limit
    pub fn new() -> Self {
        Self::with_path(constants::get_history_path(), constants::get_retention())
    }

    /// Store at an explicit location with an explicit retention limit
    pub fn with_path(path: impl Into<PathBuf>, retention: usize) -> Self {
        Self {
            path: path.into(),
            retention,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, evicting the oldest while over capacity, and
    /// persist the full ordered list.
    pub fn append(&self, record: AnalysisRecord) -> Result<(), StoreError> {
        let mut records = self.load_all();
        records.push(record);

        while records.len() > self.retention {
            records.remove(0);
        }

        self.save(&records)
    }

    /// Current ordered list, oldest first. Absent or corrupt state yields
    /// an empty list.
    pub fn load_all(&self) -> Vec<AnalysisRecord> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(records) => records,
            Err(e) => {
                log::warn!(
                    "Analysis log at {} is unreadable ({}), starting empty",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Number of stored records
    pub fn count(&self) -> usize {
        self.load_all().len()
    }

    /// Remove all persisted state
    pub fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| StoreError::Io(e.to_string()))?;
        }
        Ok(())
    }

    fn save(&self, records: &[AnalysisRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }

        let file = File::create(&self.path).map_err(|e| StoreError::Io(e.to_string()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), records)
            .map_err(|e| StoreError::Serialize(e.to_string()))
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::history::types::AnalysisRecord;

    fn record(score: u8) -> AnalysisRecord {
        AnalysisRecord::new(score, 0.5, "malware")
    }

    fn temp_store(retention: usize) -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::with_path(dir.path().join("history.json"), retention);
        (dir, store)
    }

    #[test]
    fn test_append_preserves_order() {
        let (_dir, store) = temp_store(30);

        for score in [10, 20, 30] {
            store.append(record(score)).unwrap();
        }

        let before = store.load_all();
        store.append(record(40)).unwrap();
        let after = store.load_all();

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last().unwrap().risk_score, 40);
    }

    #[test]
    fn test_eviction_at_capacity() {
        let (_dir, store) = temp_store(30);

        for score in 0..30 {
            store.append(record(score as u8)).unwrap();
        }
        assert_eq!(store.count(), 30);

        store.append(record(99)).unwrap();
        let records = store.load_all();

        assert_eq!(records.len(), 30);
        // Oldest (score 0) evicted, second-oldest now first
        assert_eq!(records[0].risk_score, 1);
        assert_eq!(records[29].risk_score, 99);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_dir, store) = temp_store(30);
        assert!(store.load_all().is_empty());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let (_dir, store) = temp_store(30);
        std::fs::write(store.path(), "{ not json").unwrap();

        assert!(store.load_all().is_empty());

        // Store remains usable after corruption
        store.append(record(50)).unwrap();
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_clear() {
        let (_dir, store) = temp_store(30);
        store.append(record(10)).unwrap();
        store.clear().unwrap();
        assert!(store.load_all().is_empty());
    }
}
