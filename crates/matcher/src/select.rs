//! Top-1 selection over the score sequence.

use faqdex_core::{AppError, AppResult};

/// Return the index of the highest score.
///
/// Ties break toward the earliest index (single forward scan with a
/// strictly-greater comparison), which keeps selection deterministic and
/// reproducible given identical corpus and query. The score slice is
/// only empty if the flattened variant list was empty, which the index
/// builder already rejects.
pub fn select_best(scores: &[f32]) -> AppResult<usize> {
    if scores.is_empty() {
        return Err(AppError::EmptyCorpus);
    }

    let mut best_idx = 0;
    let mut best_score = scores[0];

    for (idx, &score) in scores.iter().enumerate().skip(1) {
        if score > best_score {
            best_idx = idx;
            best_score = score;
        }
    }

    Ok(best_idx)
}
