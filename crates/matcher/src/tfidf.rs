//! TF-IDF vector index over the flattened variant list.
//!
//! Each question variant is one document; the full flattened list is the
//! corpus for IDF computation. Vectors are sparse and L2-normalized, so
//! cosine similarity reduces to a sparse dot product.

use crate::tokenize::tokenize;
use crate::types::Corpus;
use faqdex_core::{AppError, AppResult};
use std::collections::{HashMap, HashSet};

/// A sparse term-weighted vector: `(term_id, weight)` pairs sorted by
/// term id, L2-normalized at construction.
pub type SparseVector = Vec<(usize, f32)>;

/// Derived, ephemeral index over a corpus's question variants.
///
/// Holds the flattened variant strings (corpus order: per record, full
/// alternatives then short alternatives), one TF-IDF vector per variant,
/// the owning-record index per variant, and the shared term space.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct VariantIndex {
    pub(crate) variants: Vec<String>,
    pub(crate) record_indices: Vec<usize>,
    pub(crate) vocabulary: HashMap<String, usize>,
    pub(crate) idf: Vec<f32>,
    pub(crate) vectors: Vec<SparseVector>,
}

impl VariantIndex {
    /// The flattened variant strings in indexing order.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Index of the record owning the variant at `variant_idx`.
    pub fn record_index(&self, variant_idx: usize) -> usize {
        self.record_indices[variant_idx]
    }

    /// Number of indexed variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Number of distinct terms in the trained vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Build a `VariantIndex` from a corpus.
///
/// Fails with `AppError::EmptyCorpus` when the flattened variant list is
/// empty (a corpus of records whose alternative lists are all empty
/// counts as empty here).
pub fn build_index(corpus: &Corpus) -> AppResult<VariantIndex> {
    let mut variants = Vec::new();
    let mut record_indices = Vec::new();

    for (record_idx, record) in corpus.records().iter().enumerate() {
        for variant in record.variants() {
            variants.push(variant.to_string());
            record_indices.push(record_idx);
        }
    }

    if variants.is_empty() {
        return Err(AppError::EmptyCorpus);
    }

    let tokenized: Vec<Vec<String>> = variants.iter().map(|v| tokenize(v)).collect();

    // Vocabulary in first-seen order, with document frequency per term.
    let mut vocabulary: HashMap<String, usize> = HashMap::new();
    let mut document_frequency: Vec<u32> = Vec::new();

    for tokens in &tokenized {
        let mut seen: HashSet<usize> = HashSet::new();
        for token in tokens {
            let next_id = vocabulary.len();
            let term_id = *vocabulary.entry(token.clone()).or_insert(next_id);
            if term_id == document_frequency.len() {
                document_frequency.push(0);
            }
            if seen.insert(term_id) {
                document_frequency[term_id] += 1;
            }
        }
    }

    // Smoothed, log-scaled inverse document frequency:
    // idf(t) = ln((1 + n) / (1 + df(t))) + 1
    let n_docs = variants.len() as f32;
    let idf: Vec<f32> = document_frequency
        .iter()
        .map(|&df| ((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0)
        .collect();

    let vectors: Vec<SparseVector> = tokenized
        .iter()
        .map(|tokens| weighted_vector(tokens, &vocabulary, &idf))
        .collect();

    tracing::debug!(
        "Built variant index: {} variants, {} terms",
        variants.len(),
        vocabulary.len()
    );

    Ok(VariantIndex {
        variants,
        record_indices,
        vocabulary,
        idf,
        vectors,
    })
}

/// Project a token sequence into the term space as an L2-normalized
/// TF-IDF vector. Tokens outside the vocabulary contribute nothing.
pub(crate) fn weighted_vector(
    tokens: &[String],
    vocabulary: &HashMap<String, usize>,
    idf: &[f32],
) -> SparseVector {
    let mut term_counts: HashMap<usize, f32> = HashMap::new();
    for token in tokens {
        if let Some(&term_id) = vocabulary.get(token) {
            *term_counts.entry(term_id).or_insert(0.0) += 1.0;
        }
    }

    let mut vector: SparseVector = term_counts
        .into_iter()
        .map(|(term_id, tf)| (term_id, tf * idf[term_id]))
        .collect();
    vector.sort_unstable_by_key(|&(term_id, _)| term_id);

    let norm: f32 = vector.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, weight) in &mut vector {
            *weight /= norm;
        }
    }

    vector
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::parse_corpus;
    use crate::tokenize::tokenize;

    fn corpus() -> Corpus {
        parse_corpus(
            r#"[
                {
                    "Question_original": "How do I reset my password?",
                    "Question_original_alternatives": ["How do I reset my password?"],
                    "Question_short_alternatives": ["reset password"],
                    "Answer": "Click forgot password."
                },
                {
                    "Question_original": "How do I enable dark mode?",
                    "Question_original_alternatives": ["How do I enable dark mode?"],
                    "Question_short_alternatives": ["dark mode"],
                    "Answer": "Go to settings."
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_flattening_order_is_record_then_full_then_short() {
        let index = build_index(&corpus()).unwrap();
        assert_eq!(
            index.variants(),
            &[
                "How do I reset my password?".to_string(),
                "reset password".to_string(),
                "How do I enable dark mode?".to_string(),
                "dark mode".to_string(),
            ]
        );
        assert_eq!(index.record_index(0), 0);
        assert_eq!(index.record_index(1), 0);
        assert_eq!(index.record_index(2), 1);
        assert_eq!(index.record_index(3), 1);
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let index = build_index(&corpus()).unwrap();
        for vector in &index.vectors {
            let norm: f32 = vector.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-6, "norm was {}", norm);
        }
    }

    #[test]
    fn test_rarer_terms_weigh_more() {
        let index = build_index(&corpus()).unwrap();
        // "my" appears in one variant, "how" in two.
        let how = index.vocabulary["how"];
        let my = index.vocabulary["my"];
        assert!(index.idf[my] > index.idf[how]);
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let empty = parse_corpus("[]").unwrap();
        assert!(matches!(
            build_index(&empty),
            Err(faqdex_core::AppError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_record_with_no_alternatives_rejected() {
        let corpus = parse_corpus(
            r#"[
                {
                    "Question_original": "Q?",
                    "Question_original_alternatives": [],
                    "Question_short_alternatives": [],
                    "Answer": "A."
                }
            ]"#,
        )
        .unwrap();

        assert!(matches!(
            build_index(&corpus),
            Err(faqdex_core::AppError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_out_of_vocabulary_tokens_ignored_in_projection() {
        let index = build_index(&corpus()).unwrap();
        let tokens = tokenize("zebra zeppelin");
        let vector = weighted_vector(&tokens, &index.vocabulary, &index.idf);
        assert!(vector.is_empty());
    }
}
