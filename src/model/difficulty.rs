use serde::{Deserialize, Serialize};

/// Server-side difficulty values for one specific mod combination.
///
/// Returned by `POST /beatmaps/{id}/attributes`. AR and OD are absent for
/// rulesets that don't use them.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct DifficultyAttributes {
    /// The final star rating.
    #[serde(rename = "star_rating")]
    pub stars: f64,
    #[serde(default)]
    pub max_combo: u32,
    /// The approach rate with mods applied.
    #[serde(rename = "approach_rate", default)]
    pub ar: Option<f64>,
    /// The overall difficulty with mods applied.
    #[serde(rename = "overall_difficulty", default)]
    pub od: Option<f64>,
}

/// Envelope of the difficulty attributes endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct DifficultyAttributesResponse {
    pub attributes: DifficultyAttributes,
}
