//! # rx-decoder: Prescription Shorthand Search Engine
//!
//! Translates prescription shorthand codes ("po", "bid", "prn") into
//! plain-English meanings, with ranked fuzzy search over a static table
//! of about a hundred records.
//!
//! ## Matching Rules
//!
//! Per record, against the lowercased query and code:
//!
//! 1. **Exact** - query equals the code → score 1.0
//! 2. **Partial** - code contains the query → score 0.8
//! 3. **Fuzzy** - edit-distance similarity at or above the minimum →
//!    score = similarity
//! 4. **Tokens** - each `[ivxlcdm]+|[a-z]+` run of the query scores
//!    independently (substring → 0.6, fuzzy → similarity × 0.8), so
//!    "i po" hits both the roman numeral and the route
//!
//! Scores combine via max; results sort by descending score.
//!
//! ## Example Usage
//!
//! ```
//! use rx_decoder::RxSearch;
//!
//! let engine = RxSearch::new();
//!
//! // Ranked search
//! let results = engine.search("po");
//! assert_eq!(results[0].meaning, "by mouth");
//!
//! // Multi-code phrase decoding
//! let decoded = engine.decode_phrase("po bid prn").unwrap();
//! assert_eq!(decoded.sentence, "by mouth, twice a day, as needed");
//!
//! // Related codes by shared meaning words
//! let related = engine.related("tid", 3);
//! assert!(related.iter().all(|r| r.code != "tid"));
//! ```
//!
//! ## Architecture
//!
//! - **Distance** - Levenshtein distance and similarity scoring
//! - **Dictionary** - indexed record set with case-insensitive lookup
//! - **Search Engine** - match/rank loop and the search/suggest entry points
//! - **Related Terms** - meaning-word overlap relation and combinations
//! - **Phrase Decoder** - exact multi-code expansion into one sentence
//! - **History & Analytics** - optional file-backed query logs for the CLI;
//!   the engine itself never touches them

pub mod analytics;
pub mod data;
pub mod decode;
pub mod dictionary;
pub mod distance;
pub mod history;
pub mod references;
pub mod related;
pub mod search;
pub mod store;
pub mod types;

// Re-export main types and functions for convenience
pub use analytics::{AnalyticsStore, PopularSearch, SearchEvent, SearchStats};
pub use decode::DecodedPhrase;
pub use dictionary::Dictionary;
pub use distance::{distance, similarity};
pub use history::{HistoryEntry, HistoryStore};
pub use references::{find_reference, Reference, REFERENCES};
pub use search::RxSearch;
pub use types::{Category, MatchType, Record, SearchOptions, SearchResult, StoreError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
