// rx-decoder Dictionary
// Indexed record set with case-insensitive lookup and category grouping

use crate::data;
use crate::types::{Category, Record};
use rustc_hash::FxHashMap;

/// The record set with a pre-built lookup index
///
/// Owns the table for the lifetime of the process; nothing mutates it
/// after construction. Codes are not unique, so the index points at the
/// first record in table order for each code.
#[derive(Clone)]
pub struct Dictionary {
    /// Records in table order (sorted case-insensitively by code)
    records: Vec<Record>,

    /// Lowercased code → position of its first record
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Create a dictionary over the built-in shorthand table
    pub fn new() -> Self {
        Self::with_records(data::records())
    }

    /// Create a dictionary over an injected record set
    ///
    /// # Example
    /// ```
    /// # use rx_decoder::dictionary::Dictionary;
    /// # use rx_decoder::types::{Category, Record};
    /// let dict = Dictionary::with_records(vec![
    ///     Record::new("po", "by mouth", Category::Route),
    /// ]);
    /// assert!(dict.find("PO").is_some());
    /// ```
    pub fn with_records(records: Vec<Record>) -> Self {
        let mut index = FxHashMap::default();
        for (position, record) in records.iter().enumerate() {
            index.entry(record.code.to_lowercase()).or_insert(position);
        }
        Self { records, index }
    }

    /// Look up a code, case-insensitively
    ///
    /// Returns the first record in table order when a code appears in
    /// more than one category; `None` for unknown codes.
    pub fn find(&self, code: &str) -> Option<&Record> {
        self.index
            .get(&code.to_lowercase())
            .map(|&position| &self.records[position])
    }

    /// All records in table order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records belonging to one category, in table order
    pub fn by_category(&self, category: Category) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Records whose code or meaning contains the query, case-insensitively
    pub fn matching(&self, query: &str) -> Vec<&Record> {
        let lowered = query.to_lowercase();
        let needle = lowered.trim();
        self.records
            .iter()
            .filter(|r| {
                r.code.to_lowercase().contains(needle) || r.meaning.to_lowercase().contains(needle)
            })
            .collect()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record counts per category
    pub fn counts_by_category(&self) -> FxHashMap<Category, usize> {
        let mut counts = FxHashMap::default();
        for record in &self.records {
            *counts.entry(record.category).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
