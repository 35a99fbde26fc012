//! Opt-in cache of built variant indexes.
//!
//! The reference pipeline rebuilds the index from the corpus on every
//! query. Callers that serve many queries against a near-static corpus
//! can share one `IndexCache` instead: entries are keyed by a content
//! fingerprint of the flattened variant list, so any change to the
//! corpus produces a new key and the stale index is simply never hit
//! again.

use crate::tfidf::{build_index, VariantIndex};
use crate::types::Corpus;
use faqdex_core::{AppError, AppResult};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Compute-once index cache keyed by corpus fingerprint.
///
/// The map lock is held across the build, so concurrent callers with the
/// same corpus version trigger at most one build; at FAQ scale a build
/// is sub-second, which keeps the coarse lock acceptable.
#[derive(Debug, Default)]
pub struct IndexCache {
    entries: Mutex<HashMap<String, Arc<VariantIndex>>>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached index for this corpus version, building it on
    /// first access.
    pub fn get_or_build(&self, corpus: &Corpus) -> AppResult<Arc<VariantIndex>> {
        let key = fingerprint(corpus);

        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::Other("index cache lock poisoned".to_string()))?;

        if let Some(index) = entries.get(&key) {
            tracing::debug!("Index cache hit for corpus {}", &key[..12]);
            return Ok(Arc::clone(index));
        }

        tracing::debug!("Index cache miss for corpus {}; building", &key[..12]);
        let index = Arc::new(build_index(corpus)?);
        entries.insert(key, Arc::clone(&index));
        Ok(index)
    }

    /// Number of cached corpus versions.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached indexes.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

/// SHA-256 fingerprint over the flattened variant list.
///
/// Variants are hashed with a separator byte so adjacent strings cannot
/// collide by concatenation.
pub fn fingerprint(corpus: &Corpus) -> String {
    let mut hasher = Sha256::new();
    for record in corpus.records() {
        for variant in record.variants() {
            hasher.update(variant.as_bytes());
            hasher.update([0u8]);
        }
        hasher.update([1u8]);
    }
    format!("{:x}", hasher.finalize())
}
