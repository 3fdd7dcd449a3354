#![allow(unused)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use rosu_lens::{
    api::{AccessToken, ApiError, OsuApi},
    model::{
        beatmap::BeatmapAttributes,
        difficulty::DifficultyAttributes,
        mode::GameMode,
        user::{UserProfile, UserStatistics},
    },
    GameMod, ModSet,
};
use tokio::sync::oneshot;

pub use rosu_lens::GameMod::{
    DoubleTime as DT, Easy as EZ, Flashlight as FL, HalfTime as HT, HardRock as HR,
    Hidden as HD, Nightcore as NC, NoFail as NF, NoMod as NM, SpunOut as SO,
};

pub const BEATMAP_ID: u32 = 75;

#[track_caller]
pub fn assert_eq_float<F: Float>(a: F, b: F) {
    assert!((a - b).abs() < F::EPSILON, "{a} != {b}")
}

/// Trait to provide flexibility in the `assert_eq_float` function.
pub trait Float:
    Copy + std::fmt::Display + std::ops::Sub<Output = Self> + PartialOrd + Sized
{
    const EPSILON: Self;

    fn abs(self) -> Self;
}

macro_rules! impl_float {
    ( $( $ty:ty )* ) => {
        $(
            impl Float for $ty {
                const EPSILON: Self = Self::EPSILON;

                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )*
    }
}

impl_float!(f32 f64);

pub fn mods(mods: &[GameMod]) -> ModSet {
    mods.iter().copied().collect()
}

pub fn token() -> AccessToken {
    AccessToken::new("token")
}

pub fn beatmap() -> BeatmapAttributes {
    BeatmapAttributes {
        id: BEATMAP_ID,
        version: "Normal".to_owned(),
        mode: GameMode::Osu,
        cs: 4.0,
        ar: 9.0,
        od: 8.0,
        hp: 8.0,
        bpm: Some(180.0),
        total_length: 120,
        hit_length: 110,
        stars: 5.0,
        max_combo: Some(700),
        beatmapset: None,
    }
}

/// Star rating the mock server reports for the given mods.
pub fn stars_for(mods: &ModSet) -> f64 {
    let mut stars = 5.0;

    for gamemod in mods.iter() {
        stars += match gamemod {
            GameMod::HardRock => 0.5,
            GameMod::Easy => -1.0,
            GameMod::DoubleTime | GameMod::Nightcore => 2.0,
            GameMod::HalfTime => -1.5,
            GameMod::Flashlight => 0.25,
            _ => 0.0,
        };
    }

    stars
}

/// Scripted [`OsuApi`] that counts its calls.
///
/// Difficulty requests for gated mods block until the returned sender fires.
#[derive(Default)]
pub struct MockApi {
    pub beatmap: Option<BeatmapAttributes>,
    pub user: Option<UserProfile>,
    pub fail_difficulty: bool,
    pub calls: AtomicUsize,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            beatmap: Some(beatmap()),
            user: Some(UserProfile {
                id: 2,
                username: "peppy".to_owned(),
                country_code: "AU".to_owned(),
                avatar_url: String::new(),
                statistics: Some(UserStatistics::default()),
            }),
            ..Self::default()
        }
    }

    /// Every difficulty request fails with a decode error.
    pub fn failing() -> Self {
        Self {
            fail_difficulty: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Hold back difficulty responses for `mods` until the sender fires.
    pub fn gate(&self, mods: &ModSet) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(mods.to_string(), rx);

        tx
    }
}

#[async_trait]
impl OsuApi for MockApi {
    async fn beatmap(
        &self,
        _: &AccessToken,
        beatmap_id: u32,
    ) -> Result<BeatmapAttributes, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.beatmap
            .clone()
            .filter(|map| map.id == beatmap_id)
            .ok_or(ApiError::NotFound)
    }

    async fn difficulty_attributes(
        &self,
        _: &AccessToken,
        _: u32,
        mods: &ModSet,
    ) -> Result<DifficultyAttributes, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.gates.lock().unwrap().remove(&mods.to_string());

        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if self.fail_difficulty {
            return Err(ApiError::Decode("expected value at line 1".to_owned()));
        }

        Ok(DifficultyAttributes {
            stars: stars_for(mods),
            max_combo: 700,
            ar: Some(9.0),
            od: (!mods.contains(GameMod::Flashlight)).then_some(8.0),
        })
    }

    async fn user(&self, _: &AccessToken, user: &str) -> Result<UserProfile, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.user
            .clone()
            .filter(|profile| profile.username == user || profile.id.to_string() == user)
            .ok_or(ApiError::NotFound)
    }
}
