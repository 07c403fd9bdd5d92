// rx-decoder Search Engine
// Match and rank records against free-text queries

use crate::decode::{self, DecodedPhrase};
use crate::dictionary::Dictionary;
use crate::distance::similarity;
use crate::related;
use crate::types::{MatchType, Record, SearchOptions, SearchResult};
use regex::Regex;

/// Maximal runs of roman-numeral or latin letters; "i po" → ["i", "po"],
/// "ipo" → ["i", "po"]. Alternation is leftmost-first, so a roman run is
/// preferred at each position.
const TOKEN_PATTERN: &str = "[ivxlcdm]+|[a-z]+";

/// Main search engine
///
/// Combines:
/// - Dictionary lookup (exact, case-insensitive)
/// - Substring matching of the full query
/// - Edit-distance scoring for near misses
/// - Token-level matching for multi-code queries
pub struct RxSearch {
    /// The indexed record set
    dict: Dictionary,

    /// Query tokenizer
    token_re: Regex,
}

impl RxSearch {
    /// Create an engine over the built-in shorthand table
    pub fn new() -> Self {
        Self::with_dictionary(Dictionary::new())
    }

    /// Create an engine over an injected dictionary
    pub fn with_dictionary(dict: Dictionary) -> Self {
        let token_re = Regex::new(TOKEN_PATTERN).expect("token pattern is a valid literal");
        Self { dict, token_re }
    }

    /// The underlying dictionary
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Look up a single code, case-insensitively
    pub fn find(&self, code: &str) -> Option<&Record> {
        self.dict.find(code)
    }

    /// Search with default options
    ///
    /// Returns an empty list for a blank query.
    ///
    /// # Example
    /// ```
    /// # use rx_decoder::search::RxSearch;
    /// let engine = RxSearch::new();
    /// let results = engine.search("po");
    /// assert_eq!(results[0].code, "po");
    /// assert_eq!(results[0].score, 1.0);
    /// ```
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.search_records(query, &SearchOptions::default())
    }

    /// As-you-type suggestions
    ///
    /// Same engine as [`RxSearch::search`] with substring matching
    /// forced on; empty for a blank query.
    pub fn suggestions(&self, query: &str) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let options = SearchOptions {
            include_partial: true,
            ..SearchOptions::default()
        };
        self.search_records(query, &options)
    }

    /// Match and rank every record against the query
    ///
    /// Per record, against the lowercased query and code:
    /// 1. Equal → score 1.0, exact.
    /// 2. Code contains the query (when partial matching is on) →
    ///    score 0.8, partial.
    /// 3. Similarity at or above `min_score` (when fuzzy is on) →
    ///    score = similarity.
    /// 4. Independently, each query token raises the score to at least
    ///    0.6 on a substring hit, or similarity × 0.8 on a fuzzy hit.
    ///
    /// Scores combine via max, so a strong full-string match is never
    /// weakened by a weaker token match. Records scoring above zero are
    /// sorted by descending score (ties keep table order) and truncated
    /// to `max_results`.
    pub fn search_records(&self, query: &str, options: &SearchOptions) -> Vec<SearchResult> {
        let query_lower = query.to_lowercase();

        let mut parts: Vec<String> = self
            .token_re
            .find_iter(&query_lower)
            .map(|m| m.as_str().to_string())
            .collect();
        if parts.is_empty() {
            parts.push(query_lower.clone());
        }

        let mut results = Vec::new();

        for record in self.dict.records() {
            let code_lower = record.code.to_lowercase();
            let mut score = 0.0f32;
            let mut match_type = MatchType::Fuzzy;
            let mut matched_parts: Vec<String> = Vec::new();

            if code_lower == query_lower {
                score = 1.0;
                match_type = MatchType::Exact;
                matched_parts.push(record.code.clone());
            } else if options.include_partial && code_lower.contains(&query_lower) {
                score = 0.8;
                match_type = MatchType::Partial;
                matched_parts.push(record.code.clone());
            } else if options.fuzzy {
                let sim = similarity(&query_lower, &code_lower);
                if sim >= options.min_score {
                    score = sim;
                    matched_parts.push(record.code.clone());
                }
            }

            for part in &parts {
                if code_lower.contains(part.as_str()) {
                    score = score.max(0.6);
                    matched_parts.push(part.clone());
                } else if options.fuzzy {
                    let sim = similarity(part, &code_lower);
                    if sim >= options.min_score {
                        score = score.max(sim * 0.8);
                        matched_parts.push(part.clone());
                    }
                }
            }

            if score > 0.0 {
                results.push(
                    SearchResult::new(record.code.clone(), record.meaning.clone())
                        .with_score(score)
                        .with_match_type(match_type)
                        .with_matched_parts(matched_parts),
                );
            }
        }

        // stable sort: equal scores keep table order
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(options.max_results);
        results
    }

    /// Records whose meanings share a long word with `code`'s meaning
    ///
    /// See [`related::related`].
    pub fn related(&self, code: &str, max_results: usize) -> Vec<SearchResult> {
        related::related(&self.dict, code, max_results)
    }

    /// Two-code combination strings for `code`
    ///
    /// See [`related::combinations`].
    pub fn combinations(&self, code: &str) -> Vec<String> {
        related::combinations(&self.dict, code)
    }

    /// Decode a whitespace-separated phrase of codes
    ///
    /// See [`decode::decode_phrase`].
    pub fn decode_phrase(&self, phrase: &str) -> Option<DecodedPhrase> {
        decode::decode_phrase(&self.dict, phrase)
    }

    /// Table statistics: (total records, category count)
    pub fn stats(&self) -> (usize, usize) {
        let counts = self.dict.counts_by_category();
        (self.dict.len(), counts.len())
    }
}

impl Default for RxSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Record};

    fn small_engine() -> RxSearch {
        RxSearch::with_dictionary(Dictionary::with_records(vec![
            Record::new("po", "by mouth", Category::Route),
            Record::new("bid", "twice a day", Category::Latin),
            Record::new("prn", "as needed", Category::Latin),
        ]))
    }

    #[test]
    fn test_exact_match_first() {
        let engine = RxSearch::new();
        let results = engine.search("po");

        assert_eq!(results[0].code, "po");
        assert_eq!(results[0].score, 1.0);
        assert_eq!(results[0].match_type, MatchType::Exact);
    }

    #[test]
    fn test_exact_match_case_insensitive() {
        let engine = small_engine();
        let results = engine.search("PRN");
        assert_eq!(results[0].code, "prn");
        assert_eq!(results[0].match_type, MatchType::Exact);
    }

    #[test]
    fn test_partial_match_score() {
        let engine = small_engine();
        // "bi" is a substring of "bid" but equal to nothing
        let results = engine.search("bi");
        let bid = results.iter().find(|r| r.code == "bid").unwrap();
        assert_eq!(bid.score, 0.8);
        assert_eq!(bid.match_type, MatchType::Partial);
    }

    #[test]
    fn test_partial_disabled_falls_to_fuzzy() {
        let engine = small_engine();
        let options = SearchOptions {
            include_partial: false,
            ..SearchOptions::default()
        };
        let results = engine.search_records("bi", &options);
        let bid = results.iter().find(|r| r.code == "bid").unwrap();
        // similarity("bi", "bid") = 2/3, token "bi" substring hit = 0.6
        assert!(bid.score < 0.8);
        assert_eq!(bid.match_type, MatchType::Fuzzy);
    }

    #[test]
    fn test_fuzzy_disabled_no_near_miss() {
        let engine = small_engine();
        let options = SearchOptions {
            fuzzy: false,
            ..SearchOptions::default()
        };
        // one substitution from "bid", not a substring of anything
        let results = engine.search_records("bud", &options);
        assert!(results.is_empty());
    }

    #[test]
    fn test_fuzzy_near_miss_scores_similarity() {
        let engine = small_engine();
        let results = engine.search("bud");
        let bid = results.iter().find(|r| r.code == "bid").unwrap();
        assert!((bid.score - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(bid.match_type, MatchType::Fuzzy);
    }

    #[test]
    fn test_token_pass_multi_code_query() {
        let engine = RxSearch::with_dictionary(Dictionary::with_records(vec![
            Record::new("i", "one", Category::Roman),
            Record::new("po", "by mouth", Category::Route),
            Record::new("prn", "as needed", Category::Latin),
        ]));
        let results = engine.search("i po");

        assert!(results.iter().any(|r| r.code == "i"));
        assert!(results.iter().any(|r| r.code == "po"));
        // the token hits outrank prn's weak fuzzy score
        assert!(results[0].score >= 0.6);
        assert!(results[1].score >= 0.6);
    }

    #[test]
    fn test_token_split_without_separator() {
        let engine = RxSearch::new();
        // "ipo" splits into roman "i" + latin "po"
        let results = engine.search("ipo");
        assert!(results.iter().any(|r| r.code == "po"));
        assert!(results.iter().any(|r| r.code == "i"));
    }

    #[test]
    fn test_matched_parts_keep_duplicates() {
        let engine = small_engine();
        let results = engine.search("po");
        let po = &results[0];
        // full-string exact hit plus token substring hit
        assert_eq!(po.matched_parts, vec!["po", "po"]);
    }

    #[test]
    fn test_blank_query_empty() {
        let engine = small_engine();
        assert!(engine.search("").is_empty());
        assert!(engine.search("   ").is_empty());
        assert!(engine.suggestions("").is_empty());
    }

    #[test]
    fn test_no_match_empty() {
        let engine = small_engine();
        assert!(engine.search("xyzabc").is_empty());
    }

    #[test]
    fn test_max_results_truncation() {
        let engine = RxSearch::new();
        let options = SearchOptions {
            max_results: 3,
            ..SearchOptions::default()
        };
        let results = engine.search_records("q", &options);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_sorted_descending() {
        let engine = RxSearch::new();
        let results = engine.search("pr");
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_idempotent() {
        let engine = RxSearch::new();
        let first = engine.search("q4");
        let second = engine.search("q4");
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.code, b.code);
            assert_eq!(a.score, b.score);
            assert_eq!(a.matched_parts, b.matched_parts);
        }
    }

    #[test]
    fn test_stats() {
        let engine = RxSearch::new();
        let (total, categories) = engine.stats();
        assert_eq!(total, 106);
        assert_eq!(categories, 8);
    }
}
