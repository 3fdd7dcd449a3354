use serde::{Deserialize, Serialize};

use super::mode::GameMode;

/// A beatmap's attributes as returned by `GET /beatmaps/{id}`.
///
/// Fetched once per lookup and never modified; mod adjustments are derived
/// through [`resolve`](crate::resolve::resolve).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BeatmapAttributes {
    /// The beatmap id.
    pub id: u32,
    /// The difficulty name.
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub mode: GameMode,
    /// The circle size.
    pub cs: f64,
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    #[serde(rename = "accuracy")]
    pub od: f64,
    /// The health drain rate.
    #[serde(rename = "drain")]
    pub hp: f64,
    /// Beats per minute, missing for some maps.
    #[serde(default)]
    pub bpm: Option<f64>,
    /// The total length in seconds.
    pub total_length: u32,
    /// The drain length in seconds i.e. without breaks.
    #[serde(default)]
    pub hit_length: u32,
    /// The nomod star rating.
    #[serde(rename = "difficulty_rating")]
    pub stars: f64,
    #[serde(default)]
    pub max_combo: Option<u32>,
    #[serde(default)]
    pub beatmapset: Option<BeatmapsetInfo>,
}

/// The parts of a beatmapset that are shown alongside one of its beatmaps.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct BeatmapsetInfo {
    pub id: u32,
    pub artist: String,
    pub title: String,
    pub creator: String,
}

impl BeatmapAttributes {
    /// `"Artist - Title [Version]"`, or just the version if the beatmapset
    /// was not included in the response.
    pub fn full_title(&self) -> String {
        match self.beatmapset {
            Some(ref mapset) => {
                format!("{} - {} [{}]", mapset.artist, mapset.title, self.version)
            }
            None => format!("[{}]", self.version),
        }
    }
}
