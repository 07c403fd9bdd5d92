// rx-decoder Type Definitions
// Core types for the record table, search results, and store errors

use thiserror::Error;

/// Categories of prescription shorthand codes
///
/// The table is a closed set: every record belongs to exactly one of
/// these groups, and rendering rules match on them exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Roman numeral quantities ("i" through "xii")
    Roman,
    /// Dosing frequencies ("q4h", "q2d")
    Frequency,
    /// Routes of administration ("po", "iv")
    Route,
    /// Dosage forms ("tab", "supp")
    Form,
    /// Units of measurement ("mg", "mEq")
    Unit,
    /// Latin shorthand ("bid", "prn")
    Latin,
    /// Miscellaneous order notation ("sig", "DAW")
    Misc,
    /// Abbreviations flagged as error-prone by safety lists ("u", "qd")
    ErrorProne,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 8] = [
        Category::Roman,
        Category::Frequency,
        Category::Route,
        Category::Form,
        Category::Unit,
        Category::Latin,
        Category::Misc,
        Category::ErrorProne,
    ];

    /// Human-readable heading for category-grouped listings
    pub fn label(&self) -> &'static str {
        match self {
            Category::Roman => "Roman Numerals",
            Category::Frequency => "Frequency",
            Category::Route => "Routes of Administration",
            Category::Form => "Dosage Forms",
            Category::Unit => "Units of Measurement",
            Category::Latin => "Latin Abbreviations",
            Category::Misc => "Miscellaneous",
            Category::ErrorProne => "Error-Prone Abbreviations",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            Category::Roman => "roman",
            Category::Frequency => "frequency",
            Category::Route => "route",
            Category::Form => "form",
            Category::Unit => "unit",
            Category::Latin => "latin",
            Category::Misc => "misc",
            Category::ErrorProne => "error-prone",
        };
        write!(f, "{}", id)
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "roman" => Ok(Category::Roman),
            "frequency" => Ok(Category::Frequency),
            "route" => Ok(Category::Route),
            "form" => Ok(Category::Form),
            "unit" => Ok(Category::Unit),
            "latin" => Ok(Category::Latin),
            "misc" => Ok(Category::Misc),
            "error-prone" => Ok(Category::ErrorProne),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// One entry of the shorthand table
///
/// `code` is a case-insensitive identity key but is NOT unique across
/// categories ("iv" is both a roman numeral and a route).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The shorthand code as written on prescriptions (e.g., "bid")
    pub code: String,

    /// Plain-English expansion (e.g., "twice a day")
    pub meaning: String,

    /// Category the code belongs to
    pub category: Category,
}

impl Record {
    /// Create a new record
    pub fn new(code: impl Into<String>, meaning: impl Into<String>, category: Category) -> Self {
        Self {
            code: code.into(),
            meaning: meaning.into(),
            category,
        }
    }
}

/// Which matching rule produced a result's score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Query equals the code (case-insensitive)
    Exact,
    /// Code contains the full query as a substring
    Partial,
    /// Edit-distance or token-level match
    Fuzzy,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Exact => write!(f, "exact"),
            MatchType::Partial => write!(f, "partial"),
            MatchType::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// A ranked match produced per query
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Matched record's code
    pub code: String,

    /// Matched record's meaning
    pub meaning: String,

    /// Relevance score, 1.0 for an exact hit
    pub score: f32,

    /// Rule that produced the score
    pub match_type: MatchType,

    /// Substrings that contributed to the match, in the order the
    /// rules fired; duplicates are kept
    pub matched_parts: Vec<String>,
}

impl SearchResult {
    /// Create a new search result with no score
    pub fn new(code: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            meaning: meaning.into(),
            score: 0.0,
            match_type: MatchType::Fuzzy,
            matched_parts: Vec::new(),
        }
    }

    /// Set the score
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Set the match type
    pub fn with_match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }

    /// Set the matched parts
    pub fn with_matched_parts(mut self, matched_parts: Vec<String>) -> Self {
        self.matched_parts = matched_parts;
        self
    }
}

/// Knobs for [`crate::search::RxSearch::search_records`]
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Enable edit-distance matching
    pub fuzzy: bool,

    /// Maximum number of results returned
    pub max_results: usize,

    /// Minimum similarity for a fuzzy hit to count
    pub min_score: f32,

    /// Enable substring matching of the full query
    pub include_partial: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy: true,
            max_results: 10,
            min_score: 0.3,
            include_partial: true,
        }
    }
}

/// Failures of the history/analytics file stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no platform data directory available")]
    NoDataDir,

    #[error("store file access failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store contents could not be encoded: {0}")]
    Json(#[from] serde_json::Error),
}
