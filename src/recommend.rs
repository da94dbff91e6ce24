//! Recommendation pipeline.
//!
//! Composes the four stages leaf-first: extract surface candidates,
//! resolve the habit's furniture association, score, select. The
//! whole pipeline is a pure function of its input snapshots — no
//! stage holds state between invocations, and recomputation is
//! always wholesale when the room, path, association, or bias
//! changes.

use crate::furniture::resolve_positions;
use crate::ranking::select_best;
use crate::scoring::score_candidates;
use crate::surfaces::extract_candidates;
use crate::types::{
    HabitFurnitureSpec, PathPoint, RecommendationParams, RecommendationResult,
    RecommendationSettings, RoomModel,
};

/// Recommend the best placement surface for one habit.
///
/// `bias` is the user's preference scalar in [0, 10]: 0 weighs only
/// proximity to the movement path, 10 only proximity to associated
/// furniture. Returns an empty result when no surface qualifies.
pub fn recommend(
    room: &RoomModel,
    path_points: &[PathPoint],
    spec: &HabitFurnitureSpec,
    bias: f64,
) -> RecommendationResult {
    let settings = RecommendationSettings::from_bias(bias);
    let candidates = extract_candidates(room);
    let furniture_centers = resolve_positions(room, spec);
    let scored = score_candidates(&candidates, path_points, &furniture_centers, &settings);
    select_best(scored)
}

/// Run the pipeline on a deserialized request document.
pub fn recommend_params(params: &RecommendationParams) -> RecommendationResult {
    recommend(
        &params.room,
        &params.path_points,
        &params.furniture_spec(),
        params.bias,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surfaces::SURFACE_THICKNESS;
    use crate::types::{Dimensions, FurnitureCategory, RoomObject, Transform};

    /// A unit-height object whose top-face center lands exactly at
    /// (x, 0, z) after the indicator-thickness offset.
    fn surface_at(category: FurnitureCategory, x: f64, z: f64) -> RoomObject {
        RoomObject {
            category,
            dimensions: Dimensions::new(1.0, 1.0, 0.6),
            transform: Transform::at(x, SURFACE_THICKNESS / 2.0 - 0.5, z),
        }
    }

    fn furniture_at(category: FurnitureCategory, x: f64, z: f64) -> RoomObject {
        RoomObject {
            category,
            dimensions: Dimensions::new(1.0, 1.0, 1.0),
            transform: Transform::at(x, 0.0, z),
        }
    }

    /// Two eligible tables at (0,0,0) and (2,0,0), one sofa at
    /// (3,0,0). Path runs through the origin.
    fn two_table_room() -> RoomModel {
        RoomModel {
            walls: vec![],
            objects: vec![
                surface_at(FurnitureCategory::Table, 0.0, 0.0),
                surface_at(FurnitureCategory::Table, 2.0, 0.0),
                furniture_at(FurnitureCategory::Sofa, 3.0, 0.0),
            ],
        }
    }

    fn index_of(result: &RecommendationResult) -> Option<usize> {
        result.best.as_ref().map(|s| s.candidate.source_object_index)
    }

    #[test]
    fn tie_broken_by_ascending_object_index() {
        // Path through the origin, furniture at (3,0,0), bias 5:
        // table A scores 0.5*0 + 0.5*3 = 1.5, table B scores
        // 0.5*2 + 0.5*1 = 1.5. Exact tie; the lower object index wins.
        let room = two_table_room();
        let path = vec![PathPoint::at(0.0, 0.0, 0.0)];
        let spec = HabitFurnitureSpec::for_categories(vec![FurnitureCategory::Sofa]);

        let result = recommend(&room, &path, &spec, 5.0);
        let best = result.best.expect("best");
        let second = result.second_best.expect("second best");

        assert!((best.score - 1.5).abs() < 1e-9);
        assert!((second.score - 1.5).abs() < 1e-9);
        assert_eq!(best.candidate.source_object_index, 0);
        assert_eq!(second.candidate.source_object_index, 1);
        assert!((best.path_distance - 0.0).abs() < 1e-9);
        assert!((best.furniture_distance - 3.0).abs() < 1e-9);
        assert!((second.path_distance - 2.0).abs() < 1e-9);
        assert!((second.furniture_distance - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bias_extremes_pick_the_respective_minimizer() {
        // Path hugs table A; the associated sofa sits next to table B.
        let room = two_table_room();
        let path = vec![
            PathPoint::at(0.0, 0.0, 0.1),
            PathPoint::at(0.0, 0.0, -0.1),
        ];
        let spec = HabitFurnitureSpec::for_categories(vec![FurnitureCategory::Sofa]);

        let at_zero = recommend(&room, &path, &spec, 0.0);
        assert_eq!(index_of(&at_zero), Some(0));

        let at_ten = recommend(&room, &path, &spec, 10.0);
        assert_eq!(index_of(&at_ten), Some(1));
    }

    #[test]
    fn bias_sweep_selects_only_pareto_candidates() {
        // A third table far from both the path and the sofa can
        // never win at any bias.
        let mut room = two_table_room();
        room.objects.push(surface_at(FurnitureCategory::Table, 40.0, 40.0));

        let path = vec![
            PathPoint::at(0.0, 0.0, 0.1),
            PathPoint::at(0.0, 0.0, -0.1),
        ];
        let spec = HabitFurnitureSpec::for_categories(vec![FurnitureCategory::Sofa]);

        for b in 0..=10 {
            let result = recommend(&room, &path, &spec, b as f64);
            let winner = index_of(&result).expect("winner");
            assert!(winner == 0 || winner == 1, "bias {b} picked {winner}");
        }
    }

    #[test]
    fn no_eligible_category_yields_empty_result() {
        let room = RoomModel {
            walls: vec![],
            objects: vec![
                furniture_at(FurnitureCategory::Bed, 0.0, 0.0),
                furniture_at(FurnitureCategory::Sofa, 2.0, 0.0),
            ],
        };
        let path = vec![PathPoint::at(0.0, 0.0, 0.0)];
        let result = recommend(&room, &path, &HabitFurnitureSpec::default(), 5.0);
        assert!(result.best.is_none());
        assert!(result.second_best.is_none());
    }

    #[test]
    fn single_surviving_candidate_has_no_runner_up() {
        let room = RoomModel {
            walls: vec![],
            objects: vec![
                surface_at(FurnitureCategory::Table, 1.0, 0.0),
                furniture_at(FurnitureCategory::Sofa, 3.0, 0.0),
            ],
        };
        let path = vec![PathPoint::at(0.0, 0.0, 0.0)];
        let spec = HabitFurnitureSpec::for_categories(vec![FurnitureCategory::Sofa]);
        let result = recommend(&room, &path, &spec, 5.0);
        assert_eq!(index_of(&result), Some(0));
        assert!(result.second_best.is_none());
    }

    #[test]
    fn no_furniture_and_path_bias_scores_equal_path_distance() {
        let room = two_table_room();
        let path = vec![PathPoint::at(0.5, 0.0, 0.0)];
        let result = recommend(&room, &path, &HabitFurnitureSpec::default(), 0.0);
        let best = result.best.expect("best");
        assert!(!best.score.is_nan());
        assert_eq!(best.score, best.path_distance);
        assert_eq!(best.furniture_distance, f64::INFINITY);
    }

    #[test]
    fn indices_take_priority_over_categories() {
        let mut room = two_table_room();
        // A second sofa on the far side of table A.
        room.objects.push(furniture_at(FurnitureCategory::Sofa, -1.0, 0.0));

        let path = vec![PathPoint::at(1.0, 0.0, 0.0)];
        let with_index = HabitFurnitureSpec {
            associated_furniture_indices: vec![3],
            associated_furniture_types: vec![FurnitureCategory::Sofa],
        };
        let baseline = recommend(&room, &path, &with_index, 10.0);
        assert_eq!(index_of(&baseline), Some(0));

        // Changing the (ignored) category set alone must not move
        // the result.
        let altered = HabitFurnitureSpec {
            associated_furniture_indices: vec![3],
            associated_furniture_types: vec![
                FurnitureCategory::Bed,
                FurnitureCategory::Television,
            ],
        };
        assert_eq!(recommend(&room, &path, &altered, 10.0), baseline);
    }

    #[test]
    fn deterministic_across_invocations() {
        let room = two_table_room();
        let path = vec![
            PathPoint::at(0.3, 0.0, 0.2),
            PathPoint::at(1.1, 0.0, -0.4),
            PathPoint::at(1.9, 0.0, 0.1),
        ];
        let spec = HabitFurnitureSpec::for_categories(vec![FurnitureCategory::Sofa]);

        let r1 = recommend(&room, &path, &spec, 7.0);
        let r2 = recommend(&room, &path, &spec, 7.0);
        assert_eq!(r1, r2);
    }

    #[test]
    fn empty_room_empty_result() {
        let result = recommend(
            &RoomModel::default(),
            &[],
            &HabitFurnitureSpec::default(),
            5.0,
        );
        assert!(result.best.is_none());
        assert!(result.second_best.is_none());
    }
}
