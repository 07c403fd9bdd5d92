// rx-decoder Search History
// Capped rolling log of recent queries

use crate::store;
use crate::types::StoreError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const HISTORY_FILE: &str = "history.json";

/// Most recent queries kept
const MAX_HISTORY: usize = 10;

/// One remembered query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The query string as entered
    pub query: String,

    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
}

/// File-backed rolling search history
///
/// Newest entries first, de-duplicated by query, capped at
/// [`MAX_HISTORY`]. Reads never fail: a missing or unreadable file is an
/// empty history.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Open the history in the per-user data directory
    pub fn open() -> Result<Self, StoreError> {
        let dir = store::default_data_dir()?;
        Ok(Self {
            path: dir.join(HISTORY_FILE),
        })
    }

    /// Open a history at an explicit path
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Remembered queries, newest first
    pub fn entries(&self) -> Vec<HistoryEntry> {
        store::read_json(&self.path)
    }

    /// Remember a query
    ///
    /// Moves a repeated query to the front rather than duplicating it;
    /// drops the oldest entry past the cap.
    pub fn record(&self, query: &str) -> Result<(), StoreError> {
        let mut entries = self.entries();
        entries.retain(|entry| entry.query != query);
        entries.insert(
            0,
            HistoryEntry {
                query: query.to_string(),
                timestamp: store::now_millis(),
            },
        );
        entries.truncate(MAX_HISTORY);
        store::write_json(&self.path, &entries)
    }

    /// Forget everything
    pub fn clear(&self) -> Result<(), StoreError> {
        store::remove_if_exists(&self.path)
    }
}
