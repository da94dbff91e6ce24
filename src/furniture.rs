//! Furniture resolution.
//!
//! Turns a habit's furniture association into the concrete list of
//! world-space positions the scorer measures against. Explicit object
//! indices always win over the category set; a stale index (left over
//! from before a re-scan) is skipped, not an error.

use log::warn;

use crate::types::{HabitFurnitureSpec, RoomModel, Vector3};

/// Bounding-box center of an object, room space. The local box is
/// centered on the object origin, so this is just the transformed
/// origin.
fn bounding_box_center(room: &RoomModel, index: usize) -> Vector3 {
    room.objects[index].transform.apply(Vector3::ZERO)
}

/// Resolve a habit's furniture spec to world-space centers.
///
/// Indices take priority: when `associated_furniture_indices` is
/// non-empty, the category set is ignored entirely. An empty return
/// is a valid outcome (a habit with no furniture association yet);
/// scoring handles it downstream.
pub fn resolve_positions(room: &RoomModel, spec: &HabitFurnitureSpec) -> Vec<Vector3> {
    if !spec.associated_furniture_indices.is_empty() {
        let mut centers = Vec::with_capacity(spec.associated_furniture_indices.len());
        for &index in &spec.associated_furniture_indices {
            if index >= room.objects.len() {
                warn!(
                    "skipping stale furniture index {index} (room has {} objects)",
                    room.objects.len()
                );
                continue;
            }
            centers.push(bounding_box_center(room, index));
        }
        return centers;
    }

    room.objects
        .iter()
        .enumerate()
        .filter(|(_, obj)| spec.associated_furniture_types.contains(&obj.category))
        .map(|(index, _)| bounding_box_center(room, index))
        .collect()
}
