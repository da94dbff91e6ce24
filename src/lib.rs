//! Habitat placement-surface recommendation engine.
//!
//! Given a captured 3-D room model, the movement trace recorded
//! during capture, and a habit's furniture association plus a bias
//! preference, ranks the room's flat placement surfaces and returns
//! the best and second-best. The score balances two signals: mean
//! distance to the user's path and mean distance to the associated
//! furniture, weighted by the bias.
//!
//! The in-memory entry point is [`recommend::recommend`]; hosts that
//! speak the capture subsystem's JSON schema can use
//! [`recommend_json`] instead, which accepts a request document and
//! returns the serialized result.

pub mod furniture;
pub mod ranking;
pub mod recommend;
pub mod scoring;
pub mod surfaces;
pub mod types;

use types::RecommendationParams;

/// Run a recommendation from a JSON request document.
///
/// Takes a JSON string matching the `RecommendationParams` schema
/// (room + pathPoints + furniture association + bias) and returns
/// the `RecommendationResult` as JSON. Malformed input surfaces as
/// the deserialization error; every in-range input produces a
/// result, possibly with both slots empty.
pub fn recommend_json(params_json: &str) -> Result<String, serde_json::Error> {
    let params: RecommendationParams = serde_json::from_str(params_json)?;
    let result = recommend::recommend_params(&params);
    serde_json::to_string(&result)
}
