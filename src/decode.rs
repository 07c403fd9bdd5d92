// rx-decoder Phrase Decoder
// Expands whitespace-separated code phrases into a single sentence

use crate::dictionary::Dictionary;
use crate::types::Record;

/// A decoded phrase: the matched records and the combined sentence
#[derive(Debug, Clone)]
pub struct DecodedPhrase {
    /// Records matched by the phrase tokens, in phrase order
    pub records: Vec<Record>,

    /// The meanings joined into one instruction sentence
    pub sentence: String,
}

/// Decode a phrase of shorthand codes
///
/// The phrase is split on whitespace; each token is looked up by exact
/// case-insensitive code equality only — no fuzzy or partial fallback at
/// this layer. Tokens with no match are silently dropped. Returns `None`
/// when nothing matched, which callers report as "not found".
///
/// Meanings are joined lowercased: the first verbatim, each subsequent
/// one prefixed with `" and "` when it starts with "take" or "use",
/// otherwise with `", "`.
///
/// # Example
/// ```
/// # use rx_decoder::decode::decode_phrase;
/// # use rx_decoder::dictionary::Dictionary;
/// let dict = Dictionary::new();
/// let decoded = decode_phrase(&dict, "po bid prn").unwrap();
/// assert_eq!(decoded.sentence, "by mouth, twice a day, as needed");
/// ```
pub fn decode_phrase(dict: &Dictionary, phrase: &str) -> Option<DecodedPhrase> {
    let records: Vec<Record> = phrase
        .split_whitespace()
        .filter_map(|token| dict.find(token).cloned())
        .collect();

    if records.is_empty() {
        return None;
    }

    let mut sentence = String::new();
    for (position, record) in records.iter().enumerate() {
        let meaning = record.meaning.to_lowercase();
        if position == 0 {
            sentence.push_str(&meaning);
        } else if meaning.starts_with("take") || meaning.starts_with("use") {
            sentence.push_str(" and ");
            sentence.push_str(&meaning);
        } else {
            sentence.push_str(", ");
            sentence.push_str(&meaning);
        }
    }

    Some(DecodedPhrase { records, sentence })
}
