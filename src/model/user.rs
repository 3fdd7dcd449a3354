use serde::{Deserialize, Serialize};

/// A player profile as returned by `GET /users/{id_or_name}`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserProfile {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub avatar_url: String,
    /// Missing if the user never played the requested ruleset.
    #[serde(default)]
    pub statistics: Option<UserStatistics>,
}

/// A user's ruleset statistics.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct UserStatistics {
    /// Total performance points.
    #[serde(default)]
    pub pp: f64,
    /// `None` if the user is inactive or unranked.
    #[serde(default)]
    pub global_rank: Option<u32>,
    #[serde(default)]
    pub country_rank: Option<u32>,
    /// Accuracy in percent, e.g. `98.76`.
    #[serde(default)]
    pub hit_accuracy: f64,
    #[serde(default)]
    pub play_count: u32,
    #[serde(default)]
    pub maximum_combo: u32,
    #[serde(default)]
    pub level: UserLevel,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserLevel {
    pub current: u32,
    /// Progress towards the next level in percent.
    pub progress: u32,
}

impl UserStatistics {
    /// Level including progress, e.g. `100.42`.
    pub fn level(&self) -> f64 {
        f64::from(self.level.current) + f64::from(self.level.progress) / 100.0
    }
}
