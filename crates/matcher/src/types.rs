//! Matching subsystem type definitions.

use serde::{Deserialize, Serialize};

/// One entry of the FAQ corpus.
///
/// Field names mirror the corpus document format. Every field except
/// `notes` is required; a document missing one fails at load time rather
/// than later during matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqRecord {
    /// Canonical phrasing of the question
    #[serde(rename = "Question_original")]
    pub canonical_question: String,

    /// Full-form paraphrases of the question
    #[serde(rename = "Question_original_alternatives")]
    pub question_alternatives: Vec<String>,

    /// Abbreviated paraphrases of the question
    #[serde(rename = "Question_short_alternatives")]
    pub short_alternatives: Vec<String>,

    /// Canonical answer text
    #[serde(rename = "Answer")]
    pub answer_text: String,

    /// Free-form notes, may be empty
    #[serde(rename = "Notes", default)]
    pub notes: String,
}

impl FaqRecord {
    /// Iterate this record's variants in indexing order: full-form
    /// alternatives first, then short-form alternatives. This order is
    /// load-bearing for tie-breaking.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.question_alternatives
            .iter()
            .chain(self.short_alternatives.iter())
            .map(String::as_str)
    }

    /// Whether either alternative list contains `variant` verbatim.
    pub fn contains_variant(&self, variant: &str) -> bool {
        self.variants().any(|v| v == variant)
    }
}

/// An ordered, immutable sequence of FAQ records.
///
/// Loaded fresh for every matching operation and owned exclusively by it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    records: Vec<FaqRecord>,
}

impl Corpus {
    pub fn new(records: Vec<FaqRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of variants across all records.
    pub fn variant_count(&self) -> usize {
        self.records.iter().map(|r| r.variants().count()).sum()
    }
}

/// Terminal output of the matching pipeline: the selected variant and
/// its resolved owning record.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    /// The variant string that scored highest
    pub variant: String,

    /// Index of the owning record in corpus order
    pub record_index: usize,

    /// The owning record (supplies answer text and notes downstream)
    pub record: FaqRecord,

    /// Cosine similarity of the query against the selected variant
    pub score: f32,
}

/// Summary statistics for a corpus, used by the corpus tooling.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    /// Number of FAQ records
    pub records: usize,

    /// Number of flattened question variants
    pub variants: usize,

    /// Number of distinct terms across all variants
    pub vocabulary_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FaqRecord {
        FaqRecord {
            canonical_question: "How do I reset my password?".to_string(),
            question_alternatives: vec![
                "How do I reset my password?".to_string(),
                "How can I change my password?".to_string(),
            ],
            short_alternatives: vec!["reset password".to_string()],
            answer_text: "Click forgot password.".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_variants_order_full_then_short() {
        let r = record();
        let variants: Vec<&str> = r.variants().collect();
        assert_eq!(
            variants,
            vec![
                "How do I reset my password?",
                "How can I change my password?",
                "reset password",
            ]
        );
    }

    #[test]
    fn test_contains_variant_exact_equality() {
        let r = record();
        assert!(r.contains_variant("reset password"));
        assert!(!r.contains_variant("Reset Password"));
    }

    #[test]
    fn test_record_deserialization_notes_optional() {
        let json = r#"{
            "Question_original": "Q?",
            "Question_original_alternatives": ["Q?"],
            "Question_short_alternatives": ["q"],
            "Answer": "A."
        }"#;

        let record: FaqRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.canonical_question, "Q?");
        assert_eq!(record.notes, "");
    }

    #[test]
    fn test_corpus_variant_count() {
        let corpus = Corpus::new(vec![record(), record()]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.variant_count(), 6);
    }
}
