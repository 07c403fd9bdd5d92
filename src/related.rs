// rx-decoder Related Terms
// Word-overlap relation between record meanings

use crate::dictionary::Dictionary;
use crate::types::{MatchType, SearchResult};

/// Words shorter than this never count as overlap ("a", "day", "the")
const MIN_WORD_LEN: usize = 3;

fn meaning_words(meaning: &str) -> Vec<String> {
    meaning
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Records whose meanings share a long word with `code`'s meaning
///
/// Looks up `code` case-insensitively; unknown codes yield an empty
/// list. Every other record is scored by the number of shared words
/// longer than [`MIN_WORD_LEN`] characters over the larger word count,
/// sorted descending, truncated to `max_results`. The looked-up code is
/// never part of the output.
///
/// # Example
/// ```
/// # use rx_decoder::dictionary::Dictionary;
/// # use rx_decoder::related::related;
/// let dict = Dictionary::new();
/// for result in related(&dict, "bid", 3) {
///     assert_ne!(result.code, "bid");
/// }
/// ```
pub fn related(dict: &Dictionary, code: &str, max_results: usize) -> Vec<SearchResult> {
    let Some(record) = dict.find(code) else {
        return Vec::new();
    };

    let words = meaning_words(&record.meaning);
    let mut results = Vec::new();

    for other in dict.records() {
        if other.code == record.code {
            continue;
        }

        let other_words = meaning_words(&other.meaning);
        let common: Vec<String> = words
            .iter()
            .filter(|word| word.chars().count() > MIN_WORD_LEN && other_words.contains(word))
            .cloned()
            .collect();

        if !common.is_empty() {
            let score = common.len() as f32 / words.len().max(other_words.len()) as f32;
            results.push(
                SearchResult::new(other.code.clone(), other.meaning.clone())
                    .with_score(score)
                    .with_match_type(MatchType::Partial)
                    .with_matched_parts(common),
            );
        }
    }

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(max_results);
    results
}

/// Two-code combination strings for `code`
///
/// For every record related by the same word-overlap rule (any shared
/// long word qualifies; no score threshold, no truncation), emits both
/// orderings `"<code> <other>"` and `"<other> <code>"`, de-duplicated in
/// insertion order. Unknown codes yield an empty list.
pub fn combinations(dict: &Dictionary, code: &str) -> Vec<String> {
    let Some(record) = dict.find(code) else {
        return Vec::new();
    };

    let words = meaning_words(&record.meaning);
    let mut combos: Vec<String> = Vec::new();

    for other in dict.records() {
        if other.code == record.code {
            continue;
        }

        let other_words = meaning_words(&other.meaning);
        let overlaps = words
            .iter()
            .any(|word| word.chars().count() > MIN_WORD_LEN && other_words.contains(word));

        if overlaps {
            for combo in [
                format!("{} {}", record.code, other.code),
                format!("{} {}", other.code, record.code),
            ] {
                if !combos.contains(&combo) {
                    combos.push(combo);
                }
            }
        }
    }

    combos
}
