//! Ranking and selection.
//!
//! Sorts scored candidates ascending by score and extracts best and
//! second-best. Ties break by ascending source object index so the
//! same room always highlights the same surface across re-renders.

use crate::types::{RecommendationResult, ScoredCandidate};

/// Pick the best and second-best candidate from a scored set.
///
/// Empty input means "no suitable surface" and yields a result with
/// both slots empty. Pure and idempotent: identical inputs always
/// select identical winners.
pub fn select_best(mut scored: Vec<ScoredCandidate>) -> RecommendationResult {
    scored.sort_by(|a, b| {
        a.score
            .total_cmp(&b.score)
            .then(a.candidate.source_object_index.cmp(&b.candidate.source_object_index))
    });

    let mut iter = scored.into_iter();
    RecommendationResult {
        best: iter.next(),
        second_best: iter.next(),
    }
}
