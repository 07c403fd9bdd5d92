// rx-decoder Search Analytics
// Event log and per-query popularity counters

use crate::store;
use crate::types::StoreError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const EVENTS_FILE: &str = "analytics.json";
const POPULAR_FILE: &str = "popular.json";

/// Most recent events kept
const MAX_EVENTS: usize = 1000;

/// Distinct queries tracked in the popularity list
const MAX_POPULAR: usize = 50;

/// One recorded search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEvent {
    /// The query string as entered
    pub query: String,

    /// Milliseconds since the Unix epoch
    pub timestamp: u64,

    /// Whether the search produced any results
    pub success: bool,

    /// Matched parts of the best result
    pub parts: Vec<String>,

    /// Related codes surfaced alongside the result
    pub related: Vec<String>,
}

/// Rolling counter for one distinct query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularSearch {
    pub query: String,

    /// Times this exact query was searched
    pub count: u64,

    /// Milliseconds since the Unix epoch of the latest search
    pub last_searched: u64,

    /// Running average of the success flag, in [0, 1]
    pub success_rate: f32,
}

/// Summary across the whole event log
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub total_searches: usize,
    pub successful_searches: usize,

    /// Percent of searches that produced results
    pub success_rate: f32,

    /// Mean matched-part count per search
    pub average_parts: f32,

    pub unique_queries: usize,

    /// Top queries by count, at most ten
    pub popular: Vec<PopularSearch>,
}

/// File-backed search analytics
///
/// Two files: the rolling event log (cap [`MAX_EVENTS`]) and the
/// popularity counters (cap [`MAX_POPULAR`], sorted by count). Reads
/// never fail; missing or unreadable files are empty.
pub struct AnalyticsStore {
    events_path: PathBuf,
    popular_path: PathBuf,
}

impl AnalyticsStore {
    /// Open the analytics in the per-user data directory
    pub fn open() -> Result<Self, StoreError> {
        let dir = store::default_data_dir()?;
        Ok(Self::in_dir(dir))
    }

    /// Open analytics files under an explicit directory
    pub fn in_dir(dir: PathBuf) -> Self {
        Self {
            events_path: dir.join(EVENTS_FILE),
            popular_path: dir.join(POPULAR_FILE),
        }
    }

    /// Recorded events, newest first
    pub fn events(&self) -> Vec<SearchEvent> {
        store::read_json(&self.events_path)
    }

    /// Popularity counters, most searched first
    pub fn popular(&self) -> Vec<PopularSearch> {
        store::read_json(&self.popular_path)
    }

    /// Record one search outcome
    pub fn track(
        &self,
        query: &str,
        success: bool,
        parts: Vec<String>,
        related: Vec<String>,
    ) -> Result<(), StoreError> {
        let now = store::now_millis();

        let mut events = self.events();
        events.insert(
            0,
            SearchEvent {
                query: query.to_string(),
                timestamp: now,
                success,
                parts,
                related,
            },
        );
        events.truncate(MAX_EVENTS);
        store::write_json(&self.events_path, &events)?;

        let mut popular = self.popular();
        if let Some(entry) = popular.iter_mut().find(|p| p.query == query) {
            entry.count += 1;
            entry.last_searched = now;
            let hits = entry.success_rate * (entry.count - 1) as f32;
            entry.success_rate = (hits + if success { 1.0 } else { 0.0 }) / entry.count as f32;
        } else {
            popular.push(PopularSearch {
                query: query.to_string(),
                count: 1,
                last_searched: now,
                success_rate: if success { 1.0 } else { 0.0 },
            });
        }
        popular.sort_by(|a, b| b.count.cmp(&a.count));
        popular.truncate(MAX_POPULAR);
        store::write_json(&self.popular_path, &popular)
    }

    /// Summarize the event log
    pub fn stats(&self) -> SearchStats {
        let events = self.events();
        let mut popular = self.popular();
        popular.truncate(10);

        let total_searches = events.len();
        let successful_searches = events.iter().filter(|e| e.success).count();
        let success_rate = if total_searches > 0 {
            successful_searches as f32 / total_searches as f32 * 100.0
        } else {
            0.0
        };
        let average_parts = if total_searches > 0 {
            events.iter().map(|e| e.parts.len()).sum::<usize>() as f32 / total_searches as f32
        } else {
            0.0
        };
        let unique_queries = events
            .iter()
            .map(|e| e.query.as_str())
            .collect::<FxHashSet<_>>()
            .len();

        SearchStats {
            total_searches,
            successful_searches,
            success_rate,
            average_parts,
            unique_queries,
            popular,
        }
    }

    /// Drop all recorded analytics
    pub fn clear(&self) -> Result<(), StoreError> {
        store::remove_if_exists(&self.events_path)?;
        store::remove_if_exists(&self.popular_path)
    }
}
