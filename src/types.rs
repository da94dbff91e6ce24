//! Data types matching the room-capture JSON schema.
//!
//! Every struct here derives Serialize + Deserialize so it can
//! round-trip through the JSON interchange format used by the capture
//! subsystem. Field names are camelCase on the wire; path points use
//! the capture side's flattened scalar layout (`positionX` etc.)
//! rather than a nested vector.

use serde::{Deserialize, Serialize};

// -- Geometry / transforms -----------------------------------------

/// A point or direction in room (world) space, meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Vector3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Rigid transform from object-local space to room space.
///
/// The capture subsystem persists transforms in one of two shapes: a
/// rotation matrix + translation pair, or a flat 16-element
/// column-major 4x4 matrix (the scan framework's native layout).
/// Deserialization accepts both; serialization always emits the
/// rotation + translation pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TransformWire")]
pub struct Transform {
    /// Row-major 3x3 rotation.
    pub rotation: [[f64; 3]; 3],
    pub translation: [f64; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            rotation: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            translation: [0.0, 0.0, 0.0],
        }
    }
}

impl Transform {
    /// Identity rotation at the given world position.
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Transform {
            translation: [x, y, z],
            ..Transform::default()
        }
    }

    /// World position of the object-local origin.
    pub fn world_origin(&self) -> Vector3 {
        Vector3::new(self.translation[0], self.translation[1], self.translation[2])
    }

    /// Map an object-local point into room space (rotate, then translate).
    pub fn apply(&self, local: Vector3) -> Vector3 {
        let r = &self.rotation;
        Vector3::new(
            r[0][0] * local.x + r[0][1] * local.y + r[0][2] * local.z + self.translation[0],
            r[1][0] * local.x + r[1][1] * local.y + r[1][2] * local.z + self.translation[1],
            r[2][0] * local.x + r[2][1] * local.y + r[2][2] * local.z + self.translation[2],
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TransformWire {
    Components {
        rotation: [[f64; 3]; 3],
        translation: [f64; 3],
    },
    Matrix {
        matrix: [f64; 16],
    },
}

impl From<TransformWire> for Transform {
    fn from(wire: TransformWire) -> Self {
        match wire {
            TransformWire::Components { rotation, translation } => {
                Transform { rotation, translation }
            }
            TransformWire::Matrix { matrix: m } => {
                // Column-major: m[c*4 + r]. The fourth column holds
                // translation; the fourth row is discarded.
                let mut rotation = [[0.0; 3]; 3];
                for (r, row) in rotation.iter_mut().enumerate() {
                    for (c, cell) in row.iter_mut().enumerate() {
                        *cell = m[c * 4 + r];
                    }
                }
                Transform {
                    rotation,
                    translation: [m[12], m[13], m[14]],
                }
            }
        }
    }
}

/// Object-local bounding dimensions, meters.
///
/// Accepts either the `[width, height, depth]` vector the capture
/// subsystem writes or a named-field object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "DimensionsWire")]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Dimensions { width, height, depth }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DimensionsWire {
    Vector([f64; 3]),
    Fields { width: f64, height: f64, depth: f64 },
}

impl From<DimensionsWire> for Dimensions {
    fn from(wire: DimensionsWire) -> Self {
        match wire {
            DimensionsWire::Vector([width, height, depth]) => {
                Dimensions { width, height, depth }
            }
            DimensionsWire::Fields { width, height, depth } => {
                Dimensions { width, height, depth }
            }
        }
    }
}

// -- Room model ----------------------------------------------------

/// Closed furniture vocabulary. Unknown category strings from the
/// capture side are a deserialization error, not a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureCategory {
    Table,
    Storage,
    Bed,
    Sofa,
    Chair,
    Sink,
    Stove,
    Oven,
    Refrigerator,
    Television,
    Fireplace,
    Washer,
    Toilet,
    Bathtub,
    Stairs,
}

/// Categories whose top face is a legitimate flat placement surface.
/// Fixed policy; geometry alone never qualifies an object.
pub const SURFACE_CATEGORIES: [FurnitureCategory; 2] =
    [FurnitureCategory::Table, FurnitureCategory::Storage];

impl FurnitureCategory {
    pub fn is_surface_eligible(self) -> bool {
        SURFACE_CATEGORIES.contains(&self)
    }
}

/// A categorized furniture object captured in the room scan.
/// Immutable once captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomObject {
    pub category: FurnitureCategory,
    pub dimensions: Dimensions,
    pub transform: Transform,
}

/// A wall surface; carried for the presentation layer, never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub dimensions: Dimensions,
    pub transform: Transform,
}

/// Static snapshot of a captured room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomModel {
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub objects: Vec<RoomObject>,
}

// -- Path trace ----------------------------------------------------

fn default_confidence() -> f64 {
    1.0
}

/// One sample of the user's movement trace, recorded during capture.
///
/// The wire layout is flattened (four scalar position/time fields)
/// to match the capture subsystem's persistence format. `timestamp`
/// is seconds since capture start; `confidence` is a capture-quality
/// signal in [0, 1], carried through but unused by scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPoint {
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    #[serde(default)]
    pub timestamp: f64,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

impl PathPoint {
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        PathPoint {
            position_x: x,
            position_y: y,
            position_z: z,
            timestamp: 0.0,
            confidence: 1.0,
        }
    }

    pub fn position(&self) -> Vector3 {
        Vector3::new(self.position_x, self.position_y, self.position_z)
    }
}

// -- Habit association ---------------------------------------------

/// A habit's furniture association, from the habit store.
///
/// When `associated_furniture_indices` is non-empty it wins outright
/// and the category set is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitFurnitureSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associated_furniture_indices: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associated_furniture_types: Vec<FurnitureCategory>,
}

impl HabitFurnitureSpec {
    pub fn for_indices(indices: Vec<usize>) -> Self {
        HabitFurnitureSpec {
            associated_furniture_indices: indices,
            ..HabitFurnitureSpec::default()
        }
    }

    pub fn for_categories(categories: Vec<FurnitureCategory>) -> Self {
        HabitFurnitureSpec {
            associated_furniture_types: categories,
            ..HabitFurnitureSpec::default()
        }
    }
}

// -- Scoring inputs / outputs --------------------------------------

/// Weight pair derived from the user's bias preference.
/// Invariant: `path_weight + furniture_weight == 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationSettings {
    pub path_weight: f64,
    pub furniture_weight: f64,
}

impl RecommendationSettings {
    /// Derive the weight pair from a bias scalar in [0, 10]:
    /// `furniture_weight = b/10`, `path_weight = (10-b)/10`.
    /// Out-of-range biases are clamped.
    pub fn from_bias(bias: f64) -> Self {
        let b = bias.clamp(0.0, 10.0);
        RecommendationSettings {
            path_weight: (10.0 - b) / 10.0,
            furniture_weight: b / 10.0,
        }
    }
}

/// A room object's top face accepted as physically eligible for
/// placement. Derived per run, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceCandidate {
    /// Back-reference into `RoomModel::objects`.
    pub source_object_index: usize,
    /// Center of the object's top face, room space.
    pub world_center: Vector3,
}

/// A candidate with its two distance signals and combined score.
/// Lower score is better.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: SurfaceCandidate,
    pub path_distance: f64,
    pub furniture_distance: f64,
    pub score: f64,
}

/// Ranked outcome: best and runner-up surface, if any qualified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best: Option<ScoredCandidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_best: Option<ScoredCandidate>,
}

impl RecommendationResult {
    /// Relative score gap between best and second-best, as a
    /// percentage of the best score. `None` unless both exist with a
    /// finite, positive best score. Diagnostic display only.
    pub fn score_margin_percent(&self) -> Option<f64> {
        let best = self.best.as_ref()?;
        let second = self.second_best.as_ref()?;
        if !best.score.is_finite() || best.score <= 0.0 {
            return None;
        }
        Some((second.score - best.score) / best.score * 100.0)
    }
}

// -- Engine I/O ----------------------------------------------------

fn default_bias() -> f64 {
    5.0
}

/// One recommendation request: the room/path snapshot from capture
/// plus the habit's furniture association and bias preference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationParams {
    pub room: RoomModel,
    #[serde(default)]
    pub path_points: Vec<PathPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associated_furniture_indices: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associated_furniture_types: Vec<FurnitureCategory>,
    #[serde(default = "default_bias")]
    pub bias: f64,
}

impl RecommendationParams {
    pub fn furniture_spec(&self) -> HabitFurnitureSpec {
        HabitFurnitureSpec {
            associated_furniture_indices: self.associated_furniture_indices.clone(),
            associated_furniture_types: self.associated_furniture_types.clone(),
        }
    }
}

// -- Tests ---------------------------------------------------------
