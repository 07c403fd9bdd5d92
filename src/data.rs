// rx-decoder Record Table
// The static shorthand table, assembled once at startup

use crate::types::{Category, Record};

fn group(category: Category, entries: &[(&str, &str)]) -> Vec<Record> {
    entries
        .iter()
        .map(|(code, meaning)| Record::new(*code, *meaning, category))
        .collect()
}

fn roman() -> Vec<Record> {
    group(
        Category::Roman,
        &[
            ("i", "one"),
            ("ii", "two"),
            ("iii", "three"),
            ("iv", "four"),
            ("v", "five"),
            ("vi", "six"),
            ("vii", "seven"),
            ("viii", "eight"),
            ("ix", "nine"),
            ("x", "ten"),
            ("xi", "eleven"),
            ("xii", "twelve"),
        ],
    )
}

/// q1h..q24h and q2d..q14d
fn frequency() -> Vec<Record> {
    let hours = (1..=24).map(|h| {
        Record::new(
            format!("q{}h", h),
            format!("every {} hours", h),
            Category::Frequency,
        )
    });
    let days = (2..=14).map(|d| {
        Record::new(
            format!("q{}d", d),
            format!("every {} days", d),
            Category::Frequency,
        )
    });
    hours.chain(days).collect()
}

fn routes() -> Vec<Record> {
    group(
        Category::Route,
        &[
            ("po", "by mouth"),
            ("iv", "intravenous"),
            ("im", "intramuscular"),
            ("sc", "subcutaneous"),
            ("sl", "sublingual"),
            ("pr", "rectally"),
            ("pv", "vaginally"),
            ("inh", "inhalation"),
            ("top", "topically"),
            ("id", "intradermal"),
        ],
    )
}

fn forms() -> Vec<Record> {
    group(
        Category::Form,
        &[
            ("tab", "tablet"),
            ("cap", "capsule"),
            ("susp", "suspension"),
            ("sol", "solution"),
            ("elix", "elixir"),
            ("ung", "ointment"),
            ("supp", "suppository"),
            ("patch", "transdermal patch"),
            ("odt", "orally disintegrating tablet"),
        ],
    )
}

fn units() -> Vec<Record> {
    group(
        Category::Unit,
        &[
            ("mg", "milligram"),
            ("mcg", "microgram"),
            ("g", "gram"),
            ("mL", "milliliter"),
            ("IU", "international units"),
            ("mEq", "milliequivalent"),
        ],
    )
}

fn latin() -> Vec<Record> {
    group(
        Category::Latin,
        &[
            ("ac", "before meals"),
            ("pc", "after meals"),
            ("hs", "at bedtime"),
            ("prn", "as needed"),
            ("stat", "immediately"),
            ("bid", "twice a day"),
            ("tid", "three times a day"),
            ("qid", "four times a day"),
            ("qam", "every morning"),
            ("qpm", "every evening"),
            ("qod", "every other day"),
            ("qw", "every week"),
            ("qs", "sufficient quantity"),
        ],
    )
}

fn misc() -> Vec<Record> {
    group(
        Category::Misc,
        &[
            ("NPO", "nothing by mouth"),
            ("d/c", "discontinue"),
            ("sig", "write on label"),
            ("disp", "dispense"),
            ("DAW", "dispense as written"),
            ("gtt", "drop"),
            ("ad lib", "as desired"),
            ("KVO", "keep vein open"),
            ("NS", "normal saline"),
            ("DW", "distilled water"),
            ("LA", "long acting"),
            ("ER", "extended release"),
            ("CR", "controlled release"),
            ("XR", "extended release"),
            ("XL", "extended release"),
        ],
    )
}

/// Entries the ISMP error-prone list warns against; they shadow codes
/// in other categories on purpose ("hs", "qod").
fn error_prone() -> Vec<Record> {
    group(
        Category::ErrorProne,
        &[
            ("u", "unit (write \"unit\")"),
            ("qd", "every day (write daily)"),
            ("qod", "every other day (write every other day)"),
            ("hs", "half-strength or bedtime (clarify)"),
        ],
    )
}

/// Build the full record table
///
/// All category groups combined and sorted case-insensitively by code.
/// The sort is stable, so records sharing a code keep their group
/// insertion order (latin "hs" before error-prone "hs").
pub fn records() -> Vec<Record> {
    let mut all: Vec<Record> = Vec::new();
    all.extend(roman());
    all.extend(frequency());
    all.extend(routes());
    all.extend(forms());
    all.extend(units());
    all.extend(latin());
    all.extend(misc());
    all.extend(error_prone());
    all.sort_by(|a, b| a.code.to_lowercase().cmp(&b.code.to_lowercase()));
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_not_empty() {
        assert!(!records().is_empty());
    }

    #[test]
    fn test_table_size() {
        // 12 roman + 24 hourly + 13 daily + 10 routes + 9 forms
        // + 6 units + 13 latin + 15 misc + 4 error-prone
        assert_eq!(records().len(), 106);
    }

    #[test]
    fn test_codes_non_empty() {
        for record in records() {
            assert!(!record.code.is_empty());
            assert!(!record.meaning.is_empty());
        }
    }

    #[test]
    fn test_sorted_case_insensitively() {
        let all = records();
        for pair in all.windows(2) {
            assert!(
                pair[0].code.to_lowercase() <= pair[1].code.to_lowercase(),
                "{} sorts after {}",
                pair[0].code,
                pair[1].code
            );
        }
    }

    #[test]
    fn test_frequency_runs_generated() {
        let all = records();
        for h in 1..=24 {
            let code = format!("q{}h", h);
            let record = all.iter().find(|r| r.code == code).unwrap();
            assert_eq!(record.meaning, format!("every {} hours", h));
            assert_eq!(record.category, Category::Frequency);
        }
        for d in 2..=14 {
            let code = format!("q{}d", d);
            assert!(all.iter().any(|r| r.code == code));
        }
    }

    #[test]
    fn test_every_category_present() {
        let all = records();
        for category in Category::ALL {
            assert!(
                all.iter().any(|r| r.category == category),
                "no records in {}",
                category
            );
        }
    }

    #[test]
    fn test_duplicate_codes_across_categories() {
        let all = records();
        let iv: Vec<_> = all.iter().filter(|r| r.code == "iv").collect();
        assert_eq!(iv.len(), 2);
        assert!(iv.iter().any(|r| r.category == Category::Roman));
        assert!(iv.iter().any(|r| r.category == Category::Route));

        let hs: Vec<_> = all.iter().filter(|r| r.code == "hs").collect();
        assert_eq!(hs.len(), 2);
        // stable sort keeps the latin entry ahead of the error-prone one
        assert_eq!(hs[0].category, Category::Latin);
        assert_eq!(hs[1].category, Category::ErrorProne);
    }
}
