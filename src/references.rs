// rx-decoder References
// Source citations for the shorthand table

/// A published abbreviation reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    /// Short stable identifier
    pub id: &'static str,

    /// Display name
    pub name: &'static str,

    /// Link to the source
    pub url: &'static str,

    /// Short AMA-style citation
    pub citation: &'static str,
}

/// Sources the table was compiled from
pub const REFERENCES: &[Reference] = &[
    Reference {
        id: "drugs",
        name: "Drugs.com – Top 150 Prescription Abbreviations",
        url: "https://www.drugs.com/article/prescription-abbreviations.html",
        citation: "Drugs.com. Top 150 Prescription Abbreviations & Medical Meanings. Accessed 2025-05-13.",
    },
    Reference {
        id: "verywell",
        name: "Verywell Health – Understanding Prescription Abbreviations",
        url: "https://www.verywellhealth.com/prescription-abbreviations-list-1124124",
        citation: "Cohen M. Understanding Prescription Abbreviations. Verywell Health. Accessed 2025-05-13.",
    },
    Reference {
        id: "ismp",
        name: "ISMP – Error-Prone Abbreviation List (PDF)",
        url: "https://www.ismp.org/sites/default/files/attachments/2020-04/Error-Prone%20Abbreviations.pdf",
        citation: "Institute for Safe Medication Practices. ISMP's List of Error-Prone Abbreviations. 2017.",
    },
    Reference {
        id: "mnboard",
        name: "Minnesota Board of Pharmacy – Abbreviation Handout (PDF)",
        url: "https://mn.gov/boards/assets/prescriptionabbreviations_tcm21-29299.pdf",
        citation: "Minnesota Board of Pharmacy. Partial List of Prescription Abbreviations. 2014.",
    },
    Reference {
        id: "charter",
        name: "Charter College – 72 Abbreviations Every Pharmacy Tech Needs to Know",
        url: "https://www.chartercollege.edu/news-hub/72-abbreviations-every-pharmacy-tech-needs-know",
        citation: "Charter College. 72 Abbreviations Every Pharmacy Tech Needs to Know. 2024.",
    },
];

/// Look up a reference by id
pub fn find_reference(id: &str) -> Option<&'static Reference> {
    REFERENCES.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_present() {
        assert_eq!(REFERENCES.len(), 5);
        for reference in REFERENCES {
            assert!(!reference.id.is_empty());
            assert!(reference.url.starts_with("https://"));
            assert!(!reference.citation.is_empty());
        }
    }

    #[test]
    fn test_ids_unique() {
        for (i, a) in REFERENCES.iter().enumerate() {
            for b in &REFERENCES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_reference() {
        assert_eq!(find_reference("ismp").unwrap().id, "ismp");
        assert!(find_reference("nope").is_none());
    }
}
