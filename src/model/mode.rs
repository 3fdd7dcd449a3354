use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// The ruleset a beatmap is played in.
///
/// Serialized the way osu!api v2 names rulesets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Osu,
    Taiko,
    #[serde(rename = "fruits")]
    Catch,
    Mania,
}

impl GameMode {
    /// The ruleset name used in API paths and request bodies.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Osu => "osu",
            Self::Taiko => "taiko",
            Self::Catch => "fruits",
            Self::Mania => "mania",
        }
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
