use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use crate::{
    api::{AccessToken, ApiError, OsuApi},
    error::LookupError,
    model::{
        beatmap::BeatmapAttributes, difficulty::DifficultyAttributes, mod_set::ModSet,
        mods::GameMod,
    },
    resolve::{resolve, EffectiveAttributes},
};

/// A difficulty attribute request tagged with the mods and generation it
/// was issued for.
///
/// Only the response to the most recently issued request is ever applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyRequest {
    pub beatmap_id: u32,
    pub mods: ModSet,
    pub generation: u64,
}

/// What is currently shown for the beatmap.
#[derive(Debug)]
pub enum ViewState {
    /// Waiting for the difficulty attributes of the current mods.
    Loading,
    Ready(EffectiveAttributes),
    /// The latest request failed; nothing is guessed in its place.
    Failed(LookupError),
}

/// Result of applying a response, see [`BeatmapViewer::apply`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewUpdate {
    /// The state is now [`ViewState::Ready`] and should be re-rendered.
    Updated,
    /// The state is now [`ViewState::Failed`].
    Failed,
    /// The response was superseded and has been dropped.
    Stale,
}

type Tagged = (DifficultyRequest, Result<DifficultyAttributes, ApiError>);

/// Mod selection and displayed attributes of a single looked-up beatmap.
///
/// Every mod change issues a fresh [`DifficultyRequest`] for the full
/// current [`ModSet`]. Responses are fed back through [`apply`]; those
/// belonging to an outdated request are discarded.
///
/// [`apply`]: BeatmapViewer::apply
#[derive(Debug)]
pub struct BeatmapViewer {
    base: BeatmapAttributes,
    mods: ModSet,
    generation: u64,
    state: ViewState,
    in_flight: usize,
    tx: UnboundedSender<Tagged>,
    rx: UnboundedReceiver<Tagged>,
}

impl BeatmapViewer {
    /// Start viewing a beatmap without mods.
    ///
    /// The state is [`ViewState::Loading`] until the response to
    /// [`request`](Self::request) has been applied.
    pub fn new(base: BeatmapAttributes) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            base,
            mods: ModSet::new(),
            generation: 0,
            state: ViewState::Loading,
            in_flight: 0,
            tx,
            rx,
        }
    }

    pub const fn base(&self) -> &BeatmapAttributes {
        &self.base
    }

    pub const fn mods(&self) -> &ModSet {
        &self.mods
    }

    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// The generation of the most recently issued request.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The displayed attributes, if the latest request succeeded.
    pub fn attributes(&self) -> Option<&EffectiveAttributes> {
        match self.state {
            ViewState::Ready(ref attrs) => Some(attrs),
            ViewState::Loading | ViewState::Failed(_) => None,
        }
    }

    /// Issue a request for the current mods, superseding all previous ones.
    pub fn request(&mut self) -> DifficultyRequest {
        self.generation += 1;
        self.state = ViewState::Loading;

        DifficultyRequest {
            beatmap_id: self.base.id,
            mods: self.mods.clone(),
            generation: self.generation,
        }
    }

    /// Toggle a mod and issue a request for the resulting mods.
    pub fn toggle(&mut self, gamemod: GameMod) -> DifficultyRequest {
        self.toggle_mod(gamemod);

        self.request()
    }

    fn toggle_mod(&mut self, gamemod: GameMod) {
        self.mods.toggle(gamemod);
        tracing::debug!(beatmap_id = self.base.id, %gamemod, mods = %self.mods, "Toggled mod");
    }

    /// Whether a response to `req` would still be applied.
    ///
    /// Fails with [`LookupError::StaleResponse`] if a newer request has been
    /// issued since or `req` belongs to another beatmap.
    pub fn check(&self, req: &DifficultyRequest) -> Result<(), LookupError> {
        if req.generation == self.generation && req.beatmap_id == self.base.id {
            Ok(())
        } else {
            Err(LookupError::StaleResponse)
        }
    }

    /// Apply the response to a request.
    ///
    /// Responses to anything but the latest request are dropped without
    /// touching the state.
    pub fn apply(
        &mut self,
        req: &DifficultyRequest,
        result: Result<DifficultyAttributes, ApiError>,
    ) -> ViewUpdate {
        if let Err(err) = self.check(req) {
            tracing::trace!(
                generation = req.generation,
                latest = self.generation,
                mods = %req.mods,
                "Discarding difficulty attributes: {err}"
            );

            return ViewUpdate::Stale;
        }

        match result {
            Ok(server) => {
                let attrs = resolve(&self.base, &self.mods, &server);
                self.state = ViewState::Ready(attrs);

                ViewUpdate::Updated
            }
            Err(err) => {
                tracing::warn!(
                    beatmap_id = self.base.id,
                    mods = %req.mods,
                    error = %err,
                    "Failed to fetch difficulty attributes"
                );

                self.state = ViewState::Failed(LookupError::RequestFailed(err));

                ViewUpdate::Failed
            }
        }
    }

    /// Request and apply the difficulty attributes for the current mods.
    pub async fn refresh<A>(&mut self, api: &A, token: &AccessToken) -> ViewUpdate
    where
        A: OsuApi + ?Sized,
    {
        let req = self.request();
        let result = api
            .difficulty_attributes(token, req.beatmap_id, &req.mods)
            .await;

        self.apply(&req, result)
    }

    /// Toggle a mod, then request and apply the new attributes.
    pub async fn toggle_and_refresh<A>(
        &mut self,
        api: &A,
        token: &AccessToken,
        gamemod: GameMod,
    ) -> ViewUpdate
    where
        A: OsuApi + ?Sized,
    {
        self.toggle_mod(gamemod);

        self.refresh(api, token).await
    }

    /// Toggle a mod and fetch the new attributes on a background task.
    ///
    /// The response is picked up by [`next_update`](Self::next_update). Must
    /// be called within a tokio runtime.
    pub fn spawn_toggle<A>(
        &mut self,
        api: Arc<A>,
        token: AccessToken,
        gamemod: GameMod,
    ) -> DifficultyRequest
    where
        A: OsuApi + ?Sized + 'static,
    {
        let req = self.toggle(gamemod);
        self.spawn_request(api, token, req.clone());

        req
    }

    /// Fetch the attributes for the current mods on a background task.
    ///
    /// Must be called within a tokio runtime.
    pub fn spawn_refresh<A>(&mut self, api: Arc<A>, token: AccessToken) -> DifficultyRequest
    where
        A: OsuApi + ?Sized + 'static,
    {
        let req = self.request();
        self.spawn_request(api, token, req.clone());

        req
    }

    fn spawn_request<A>(&mut self, api: Arc<A>, token: AccessToken, req: DifficultyRequest)
    where
        A: OsuApi + ?Sized + 'static,
    {
        let tx = self.tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let result = api
                .difficulty_attributes(&token, req.beatmap_id, &req.mods)
                .await;

            // The receiver only disappears together with the viewer.
            let _ = tx.send((req, result));
        });
    }

    /// The number of spawned requests whose response has not been picked up.
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Wait for the next spawned response and apply it.
    ///
    /// Stale responses are returned as [`ViewUpdate::Stale`] so the caller
    /// can keep waiting. Returns `None` once no spawned request is left.
    pub async fn next_update(&mut self) -> Option<ViewUpdate> {
        if self.in_flight == 0 {
            return None;
        }

        let (req, result) = self.rx.recv().await?;
        self.in_flight -= 1;

        Some(self.apply(&req, result))
    }

    /// Apply a spawned response if one has already arrived.
    pub fn try_next_update(&mut self) -> Option<ViewUpdate> {
        match self.rx.try_recv() {
            Ok((req, result)) => {
                self.in_flight = self.in_flight.saturating_sub(1);

                Some(self.apply(&req, result))
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}
