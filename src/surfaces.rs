//! Surface candidate extraction.
//!
//! Turns the raw object list of a captured room into the set of
//! placement candidates: objects of a surface-eligible category whose
//! top face sits at a comfortable, reachable height. The floor plane
//! is not captured directly, so the lowest detected object bottom
//! stands in for it.

use crate::types::{RoomModel, SurfaceCandidate, Vector3};

/// Logical thickness of the placement indicator drawn on a surface,
/// meters. Not a measured property of the furniture.
pub const SURFACE_THICKNESS: f64 = 0.02;

/// Surfaces above this height over the floor baseline are rejected
/// as impractical placement spots. 1.524 m = 5 ft.
pub const EYE_LEVEL: f64 = 1.524;

/// World-space Y of the lowest object bottom, used as the floor
/// plane approximation. `None` for an empty room.
fn floor_baseline_y(room: &RoomModel) -> Option<f64> {
    room.objects
        .iter()
        .map(|obj| obj.transform.world_origin().y - obj.dimensions.height / 2.0)
        .fold(None, |acc: Option<f64>, y| {
            Some(match acc {
                Some(lowest) => lowest.min(y),
                None => y,
            })
        })
}

/// Extract every surface candidate from the room, in object order.
///
/// Each accepted candidate keeps its source object index, so index
/// gaps appear wherever an object was rejected. An empty room yields
/// an empty list; "no candidates" is a result, not an error.
pub fn extract_candidates(room: &RoomModel) -> Vec<SurfaceCandidate> {
    let baseline = match floor_baseline_y(room) {
        Some(y) => y,
        None => return Vec::new(),
    };

    let mut candidates = Vec::new();
    for (index, obj) in room.objects.iter().enumerate() {
        if !obj.category.is_surface_eligible() {
            continue;
        }

        // Center of the top face, offset down by half the indicator
        // thickness. The same local offset is used for the height
        // test and for the world-space center.
        let local_center_y = obj.dimensions.height / 2.0 - SURFACE_THICKNESS / 2.0;
        let top_surface_world_y = obj.transform.world_origin().y + local_center_y;
        let relative_height = top_surface_world_y - baseline;
        if relative_height > EYE_LEVEL {
            continue;
        }

        candidates.push(SurfaceCandidate {
            source_object_index: index,
            world_center: obj.transform.apply(Vector3::new(0.0, local_center_y, 0.0)),
        });
    }
    candidates
}
