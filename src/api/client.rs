use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT},
    Client, RequestBuilder, StatusCode, Url,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::model::{
    beatmap::BeatmapAttributes,
    difficulty::{DifficultyAttributes, DifficultyAttributesResponse},
    mod_set::ModSet,
    mode::GameMode,
    user::UserProfile,
};

use super::{
    config::{AccessToken, ApiConfig},
    error::ApiError,
    OsuApi,
};

const USER_AGENT_VALUE: &str = concat!("rosu-lens/", env!("CARGO_PKG_VERSION"));

/// [`OsuApi`] implementation talking to osu!api v2 over HTTP.
#[derive(Clone, Debug)]
pub struct OsuClient {
    client: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct AttributesBody<'a> {
    mods: Vec<&'a str>,
    ruleset: &'a str,
}

impl OsuClient {
    /// Create a client for the configured API endpoint.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        let base_url = Url::parse(&config.api_endpoint)
            .map_err(|e| ApiError::Config(format!("invalid API endpoint: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "invalid API endpoint: `{base_url}` cannot have a path"
            )));
        }

        Ok(Self { client, base_url })
    }

    /// Appends each of `segments` as a single percent-encoded path segment.
    fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base_url.clone();

        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        token: &AccessToken,
    ) -> Result<T, ApiError> {
        let response = req.bearer_auth(token.as_str()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Parsing by hand so that non-JSON bodies surface as decode errors
        // regardless of the content type header.
        serde_json::from_str(&body).map_err(ApiError::from)
    }
}

#[async_trait]
impl OsuApi for OsuClient {
    async fn beatmap(
        &self,
        token: &AccessToken,
        beatmap_id: u32,
    ) -> Result<BeatmapAttributes, ApiError> {
        let url = self.url(["beatmaps", &beatmap_id.to_string()]);
        tracing::debug!(%url, "Requesting beatmap");

        self.send(self.client.get(url), token).await
    }

    async fn difficulty_attributes(
        &self,
        token: &AccessToken,
        beatmap_id: u32,
        mods: &ModSet,
    ) -> Result<DifficultyAttributes, ApiError> {
        let url = self.url(["beatmaps", &beatmap_id.to_string(), "attributes"]);
        tracing::debug!(%url, %mods, "Requesting difficulty attributes");

        let body = AttributesBody {
            mods: mods.acronyms(),
            ruleset: GameMode::Osu.as_str(),
        };

        let response: DifficultyAttributesResponse =
            self.send(self.client.post(url).json(&body), token).await?;

        Ok(response.attributes)
    }

    async fn user(&self, token: &AccessToken, user: &str) -> Result<UserProfile, ApiError> {
        // Dot segments are dropped by the URL builder and would hit `/users`.
        if matches!(user, "." | "..") {
            return Err(ApiError::NotFound);
        }

        let url = self.url(["users", user]);
        tracing::debug!(%url, "Requesting user");

        self.send(self.client.get(url), token).await
    }
}
