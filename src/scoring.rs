//! Distance scoring for surface candidates.
//!
//! Each candidate gets two signals: mean distance to the recorded
//! movement path and mean distance to the habit's associated
//! furniture. The combined score is their weighted sum; lower is
//! better. An empty sample set makes its signal maximally unfavorable
//! (+inf) — identical for every candidate, so it cannot discriminate,
//! only penalize.
//!
//! Numeric contract: when one side's weight is exactly zero, its term
//! is zero even if the distance is infinite. IEEE `inf * 0` is NaN,
//! which would poison every comparison downstream, so the
//! zero-weight case short-circuits before the multiply. A habit with
//! no furniture association and a bias fully toward the path must
//! still score cleanly.

use rayon::prelude::*;

use crate::types::{
    PathPoint, RecommendationSettings, ScoredCandidate, SurfaceCandidate, Vector3,
};

/// Mean euclidean distance from `from` to every point in `points`,
/// or +inf when there are none.
fn mean_distance(from: &Vector3, points: &[Vector3]) -> f64 {
    if points.is_empty() {
        return f64::INFINITY;
    }
    let total: f64 = points.iter().map(|p| from.distance(p)).sum();
    total / points.len() as f64
}

/// One weighted term. Zero weight contributes zero regardless of the
/// distance, including +inf.
fn weighted_term(distance: f64, weight: f64) -> f64 {
    if weight == 0.0 {
        0.0
    } else {
        distance * weight
    }
}

/// Score every candidate against the path trace and furniture
/// centers. Output order matches input order (parallel map preserves
/// it), so `sourceObjectIndex` lookups stay aligned.
pub fn score_candidates(
    candidates: &[SurfaceCandidate],
    path_points: &[PathPoint],
    furniture_centers: &[Vector3],
    settings: &RecommendationSettings,
) -> Vec<ScoredCandidate> {
    let path_positions: Vec<Vector3> = path_points.iter().map(|p| p.position()).collect();

    candidates
        .par_iter()
        .map(|candidate| {
            let path_distance = mean_distance(&candidate.world_center, &path_positions);
            let furniture_distance = mean_distance(&candidate.world_center, furniture_centers);
            let score = weighted_term(path_distance, settings.path_weight)
                + weighted_term(furniture_distance, settings.furniture_weight);
            ScoredCandidate {
                candidate: *candidate,
                path_distance,
                furniture_distance,
                score,
            }
        })
        .collect()
}
