//! Mapping a selected variant back to its owning record.

use crate::types::{Corpus, FaqRecord};
use faqdex_core::{AppError, AppResult};

/// Resolve a selected variant string to its owning record.
///
/// Returns the first record in corpus order whose alternative lists
/// contain the variant by exact string equality. When the same variant
/// text appears in two records, the earlier record wins.
///
/// Failure here is unreachable for variants produced by the index
/// builder over the same corpus; its occurrence means the index and the
/// corpus are out of sync, so it is logged as a bug signal.
pub fn resolve_record<'a>(corpus: &'a Corpus, variant: &str) -> AppResult<(usize, &'a FaqRecord)> {
    for (idx, record) in corpus.records().iter().enumerate() {
        if record.contains_variant(variant) {
            return Ok((idx, record));
        }
    }

    tracing::error!(
        "Selected variant {:?} is not present in any record; \
         the variant index and the corpus are out of sync",
        variant
    );
    Err(AppError::UnresolvedMatch(variant.to_string()))
}
