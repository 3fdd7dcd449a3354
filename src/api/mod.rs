use async_trait::async_trait;

use crate::model::{
    beatmap::BeatmapAttributes, difficulty::DifficultyAttributes, mod_set::ModSet,
    user::UserProfile,
};

pub use self::{
    client::OsuClient,
    config::{AccessToken, ApiConfig},
    error::ApiError,
};

mod client;
mod config;
mod error;

/// The remote osu!api operations the viewer depends on.
///
/// [`OsuClient`] is the HTTP implementation; hosts and tests may provide
/// their own.
#[async_trait]
pub trait OsuApi: Send + Sync {
    /// `GET /beatmaps/{id}`
    async fn beatmap(
        &self,
        token: &AccessToken,
        beatmap_id: u32,
    ) -> Result<BeatmapAttributes, ApiError>;

    /// Star rating, AR, and OD of a beatmap for exactly the given mods.
    async fn difficulty_attributes(
        &self,
        token: &AccessToken,
        beatmap_id: u32,
        mods: &ModSet,
    ) -> Result<DifficultyAttributes, ApiError>;

    /// `GET /users/{id_or_name}`
    async fn user(&self, token: &AccessToken, user: &str) -> Result<UserProfile, ApiError>;
}
