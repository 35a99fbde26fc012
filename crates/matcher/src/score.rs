//! Query scoring against the variant index.

use crate::tfidf::{weighted_vector, SparseVector, VariantIndex};
use crate::tokenize::tokenize;

/// Score a raw query string against every indexed variant.
///
/// The query is projected into the index's term space; terms outside the
/// trained vocabulary are silently dropped. Returns one cosine
/// similarity per variant, in flattened order. A query with no known
/// terms scores 0.0 against everything; this function never errors.
pub fn score_query(index: &VariantIndex, query: &str) -> Vec<f32> {
    let tokens = tokenize(query);
    let query_vector = weighted_vector(&tokens, &index.vocabulary, &index.idf);

    index
        .vectors
        .iter()
        .map(|variant_vector| sparse_dot(&query_vector, variant_vector))
        .collect()
}

/// Dot product of two sorted sparse vectors.
///
/// Both sides are L2-normalized at construction, so this is their cosine
/// similarity; an empty (zero) vector yields 0.0 against anything.
fn sparse_dot(a: &SparseVector, b: &SparseVector) -> f32 {
    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        let (a_id, a_weight) = a[i];
        let (b_id, b_weight) = b[j];
        match a_id.cmp(&b_id) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a_weight * b_weight;
                i += 1;
                j += 1;
            }
        }
    }

    dot
}
