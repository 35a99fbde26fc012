//! Corpus loading and validation.
//!
//! The corpus source is a JSON document whose top-level value is an
//! ordered array of FAQ records. Records are strongly typed and
//! validated eagerly; a malformed document fails here with a
//! `DataSource` error instead of failing later on a missing key.

use crate::types::{Corpus, FaqRecord};
use faqdex_core::{AppError, AppResult};
use std::path::Path;

/// Load and validate a corpus from a JSON file.
///
/// Fails with `AppError::DataSource` if the file is unreadable or the
/// document is malformed. No side effects beyond the read.
pub fn load_corpus(path: &Path) -> AppResult<Corpus> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::DataSource(format!("Failed to read corpus file {:?}: {}", path, e))
    })?;

    let corpus = parse_corpus(&contents).map_err(|e| match e {
        AppError::DataSource(msg) => {
            AppError::DataSource(format!("Corpus file {:?}: {}", path, msg))
        }
        other => other,
    })?;

    tracing::debug!(
        "Loaded corpus from {:?}: {} records, {} variants",
        path,
        corpus.len(),
        corpus.variant_count()
    );

    Ok(corpus)
}

/// Parse and validate a corpus from a JSON string.
pub fn parse_corpus(contents: &str) -> AppResult<Corpus> {
    let records: Vec<FaqRecord> = serde_json::from_str(contents)
        .map_err(|e| AppError::DataSource(format!("malformed corpus document: {}", e)))?;

    Ok(Corpus::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqdex_core::AppError;
    use std::io::Write;

    const VALID_CORPUS: &str = r#"[
        {
            "Question_original": "How do I reset my password?",
            "Question_original_alternatives": ["How do I reset my password?"],
            "Question_short_alternatives": ["reset password"],
            "Answer": "Click forgot password.",
            "Notes": ""
        }
    ]"#;

    #[test]
    fn test_parse_valid_corpus() {
        let corpus = parse_corpus(VALID_CORPUS).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(
            corpus.records()[0].canonical_question,
            "How do I reset my password?"
        );
    }

    #[test]
    fn test_parse_rejects_missing_required_field() {
        // No "Answer" key
        let json = r#"[
            {
                "Question_original": "Q?",
                "Question_original_alternatives": ["Q?"],
                "Question_short_alternatives": ["q"]
            }
        ]"#;

        let err = parse_corpus(json).unwrap_err();
        assert!(matches!(err, AppError::DataSource(_)));
    }

    #[test]
    fn test_parse_rejects_non_array_document() {
        let err = parse_corpus(r#"{"Question_original": "Q?"}"#).unwrap_err();
        assert!(matches!(err, AppError::DataSource(_)));
    }

    #[test]
    fn test_load_corpus_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", VALID_CORPUS).unwrap();

        let corpus = load_corpus(file.path()).unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_load_corpus_missing_file() {
        let err = load_corpus(Path::new("/nonexistent/faq.json")).unwrap_err();
        assert!(matches!(err, AppError::DataSource(_)));
    }

    #[test]
    fn test_empty_array_is_a_valid_document() {
        // An empty corpus parses fine; the index builder is the stage
        // that rejects it.
        let corpus = parse_corpus("[]").unwrap();
        assert!(corpus.is_empty());
    }
}
