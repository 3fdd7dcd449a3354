use std::{
    env,
    fmt::{Debug, Formatter, Result as FmtResult},
};

use reqwest::Url;

use super::error::ApiError;

const DEFAULT_API_ENDPOINT: &str = "https://osu.ppy.sh/api/v2";
const DEFAULT_AUTHORIZE_ENDPOINT: &str = "https://osu.ppy.sh/oauth/authorize";
const DEFAULT_TOKEN_ENDPOINT: &str = "https://osu.ppy.sh/oauth/token";
const DEFAULT_REDIRECT_URL: &str = "http://localhost/api/oauth/redirect";
const DEFAULT_SCOPES: [&str; 2] = ["identify", "public"];

const ENV_CLIENT_ID: &str = "OSU_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "OSU_CLIENT_SECRET";
const ENV_API_ENDPOINT: &str = "OSU_API_ENDPOINT";
const ENV_REDIRECT_URL: &str = "OSU_REDIRECT_URL";

/// Endpoints and OAuth client credentials.
///
/// The token exchange itself is performed by the host; this only describes
/// where to send the user and which API to talk to afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_endpoint: String,
    pub authorize_endpoint: String,
    pub token_endpoint: String,
    pub redirect_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub scopes: Vec<String>,
}

impl ApiConfig {
    /// osu! endpoints without client credentials.
    pub fn new() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_owned(),
            authorize_endpoint: DEFAULT_AUTHORIZE_ENDPOINT.to_owned(),
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_owned(),
            redirect_url: DEFAULT_REDIRECT_URL.to_owned(),
            client_id: String::new(),
            client_secret: String::new(),
            scopes: DEFAULT_SCOPES.map(str::to_owned).to_vec(),
        }
    }

    /// Read credentials and overrides from the environment.
    ///
    /// Unset credentials stay empty; unset endpoints keep their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(client_id) = lookup(ENV_CLIENT_ID) {
            config.client_id = client_id;
        }

        if let Some(client_secret) = lookup(ENV_CLIENT_SECRET) {
            config.client_secret = client_secret;
        }

        if let Some(endpoint) = lookup(ENV_API_ENDPOINT).filter(|s| !s.is_empty()) {
            config.api_endpoint = endpoint;
        }

        if let Some(redirect_url) = lookup(ENV_REDIRECT_URL).filter(|s| !s.is_empty()) {
            config.redirect_url = redirect_url;
        }

        config
    }

    #[must_use]
    pub fn api_endpoint(mut self, api_endpoint: impl Into<String>) -> Self {
        self.api_endpoint = api_endpoint.into();

        self
    }

    #[must_use]
    pub fn credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = client_id.into();
        self.client_secret = client_secret.into();

        self
    }

    /// The URL a user has to visit to grant access via the
    /// authorization-code flow.
    pub fn authorize_url(&self, state: &str) -> Result<Url, ApiError> {
        let scope = self.scopes.join(" ");

        Url::parse_with_params(
            &self.authorize_endpoint,
            [
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_url.as_str()),
                ("response_type", "code"),
                ("scope", scope.as_str()),
                ("state", state),
            ],
        )
        .map_err(|e| ApiError::Config(format!("invalid authorize endpoint: {e}")))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ApiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ApiConfig")
            .field("api_endpoint", &self.api_endpoint)
            .field("authorize_endpoint", &self.authorize_endpoint)
            .field("token_endpoint", &self.token_endpoint)
            .field("redirect_url", &self.redirect_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("scopes", &self.scopes)
            .finish()
    }
}

/// A bearer token obtained by the host through OAuth.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(Box<str>);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().into_boxed_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("AccessToken(<redacted>)")
    }
}
