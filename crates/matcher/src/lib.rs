//! FAQ matching subsystem.
//!
//! Turns a corpus of question variants into a TF-IDF vector index,
//! scores a free-text query against every variant by cosine similarity,
//! selects the single best match with a deterministic tie-break, and
//! resolves it back to the owning FAQ record.
//!
//! The whole pipeline is a linear sequence of pure stages
//! (Load → Index → Score → Select → Resolve); every structure is
//! immutable after construction, so invocations are safe to run
//! concurrently as long as each builds (or shares a cached copy of) its
//! own index.

pub mod cache;
pub mod corpus;
pub mod resolve;
pub mod score;
pub mod select;
pub mod tfidf;
pub mod tokenize;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cache::IndexCache;
pub use corpus::{load_corpus, parse_corpus};
pub use tfidf::{build_index, VariantIndex};
pub use types::{Corpus, CorpusStats, FaqRecord, MatchResult};

use faqdex_core::AppResult;
use std::path::Path;

/// Run the full matching pipeline against a corpus.
///
/// Builds a fresh index for this call (the reference behavior; see
/// [`Matcher`] for the amortized variant), scores the query, selects the
/// top variant, and resolves its owning record.
pub fn match_question(corpus: &Corpus, query: &str) -> AppResult<MatchResult> {
    let index = tfidf::build_index(corpus)?;
    best_match_in(&index, corpus, query)
}

/// Load a corpus from a JSON file and match one query against it.
pub fn load_and_match(corpus_path: &Path, query: &str) -> AppResult<MatchResult> {
    let corpus = corpus::load_corpus(corpus_path)?;
    match_question(&corpus, query)
}

/// Summary statistics for a corpus (records, variants, vocabulary).
pub fn corpus_stats(corpus: &Corpus) -> AppResult<CorpusStats> {
    let index = tfidf::build_index(corpus)?;
    Ok(CorpusStats {
        records: corpus.len(),
        variants: index.len(),
        vocabulary_size: index.vocabulary_size(),
    })
}

/// A corpus with its index built once, serving repeated queries.
///
/// Index construction is the expensive stage of the pipeline; `Matcher`
/// amortizes it across queries within one process. The corpus and index
/// are immutable, so a `Matcher` can be shared across threads.
#[derive(Debug)]
pub struct Matcher {
    corpus: Corpus,
    index: VariantIndex,
}

impl Matcher {
    /// Build the index for `corpus`, failing fast on an empty corpus.
    pub fn new(corpus: Corpus) -> AppResult<Self> {
        let index = tfidf::build_index(&corpus)?;
        Ok(Self { corpus, index })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn index(&self) -> &VariantIndex {
        &self.index
    }

    /// Match one query against the prebuilt index.
    pub fn best_match(&self, query: &str) -> AppResult<MatchResult> {
        best_match_in(&self.index, &self.corpus, query)
    }
}

/// Score → Select → Resolve over an already-built index.
fn best_match_in(index: &VariantIndex, corpus: &Corpus, query: &str) -> AppResult<MatchResult> {
    let scores = score::score_query(index, query);
    let best_idx = select::select_best(&scores)?;
    let variant = &index.variants()[best_idx];
    let (record_index, record) = resolve::resolve_record(corpus, variant)?;

    tracing::debug!(
        "Matched query {:?} to variant {:?} (record {}, score {:.3})",
        query,
        variant,
        record_index,
        scores[best_idx]
    );

    Ok(MatchResult {
        variant: variant.clone(),
        record_index,
        record: record.clone(),
        score: scores[best_idx],
    })
}
