//! Mod-aware beatmap attributes and osu!api lookups for beatmap and profile viewers.
//!
//! ## Description
//!
//! `rosu-lens` is the core of a viewer that looks up [osu!] beatmaps and
//! player profiles through [osu!api v2]. Its main job is figuring out what a
//! beatmap looks like with a given set of mods:
//!
//!   - [`ModSet`] keeps the selected mods free of conflicts, e.g. toggling
//!     `HR` evicts `EZ` and toggling `NC` evicts `DT` and `HT`.
//!   - [`resolve`] adjusts CS, HP, length, and BPM locally and takes stars,
//!     AR, and OD from the server's difficulty calculation for the full mod
//!     combination. Every value comes with a color tag for theming.
//!   - [`BeatmapViewer`] ties both together, issuing one tagged request per
//!     mod toggle and discarding responses that arrive after a newer toggle.
//!
//! ## Usage
//!
//! ```no_run
//! use rosu_lens::{
//!     api::{AccessToken, ApiConfig, OsuClient},
//!     model::mods::GameMod,
//!     search_beatmap,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OsuClient::new(&ApiConfig::from_env())?;
//! let token = AccessToken::new("token obtained by the host through OAuth");
//!
//! let mut viewer = search_beatmap(&client, Some(&token), "75").await?;
//! viewer.toggle_and_refresh(&client, &token, GameMod::HardRock).await;
//! viewer.toggle_and_refresh(&client, &token, GameMod::DoubleTime).await;
//!
//! if let Some(attrs) = viewer.attributes() {
//!     for (field, value) in attrs.iter() {
//!         println!("{}: {} ({})", field.label(), value.display(), value.color.hex());
//!     }
//! }
//! # Ok(()) }
//! ```
//!
//! ## Logging
//!
//! Requests, stale responses, and failed lookups are reported through
//! [`tracing`]. Installing a subscriber is up to the host.
//!
//! [osu!]: https://osu.ppy.sh/home
//! [osu!api v2]: https://osu.ppy.sh/docs/index.html
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

#[doc(inline)]
pub use self::{
    error::{LookupError, LookupKind},
    model::{mod_set::ModSet, mods::GameMod},
    resolve::{resolve, EffectiveAttributes},
    search::{search_beatmap, search_user},
    viewer::{BeatmapViewer, DifficultyRequest, ViewState, ViewUpdate},
};

/// The remote osu!api collaborator.
pub mod api;

/// Types used in and around this crate.
pub mod model;

/// Deriving displayed attributes from base attributes and mods.
pub mod resolve;

mod error;
mod search;
mod util;
mod viewer;
