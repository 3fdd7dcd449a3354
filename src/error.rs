use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::api::ApiError;

/// What a failed lookup was searching for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LookupKind {
    Beatmap,
    User,
}

impl Display for LookupKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Beatmap => f.write_str("beatmap"),
            Self::User => f.write_str("user"),
        }
    }
}

/// Errors surfaced by searches and mod toggles.
///
/// All of them are recoverable; the host shows [`user_message`] inline and
/// keeps going.
///
/// [`user_message`]: LookupError::user_message
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// The search field was empty.
    #[error("search input is empty")]
    EmptyInput,

    /// No usable access token.
    #[error("no valid access token")]
    NotAuthenticated,

    /// The remote lookup failed or returned something unusable.
    #[error("could not find {kind}")]
    NotFound {
        kind: LookupKind,
        #[source]
        source: Option<ApiError>,
    },

    /// Fetching the difficulty attributes for the current mods failed.
    #[error("failed to fetch difficulty attributes")]
    RequestFailed(#[source] ApiError),

    /// A newer mod toggle superseded the request.
    #[error("response is stale")]
    StaleResponse,
}

impl LookupError {
    pub(crate) const fn not_found(kind: LookupKind, source: Option<ApiError>) -> Self {
        Self::NotFound { kind, source }
    }

    /// Returns a user-friendly message suitable for display in the UI.
    ///
    /// [`LookupError::StaleResponse`] is never meant to be shown and yields
    /// an empty string.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Search is empty",
            Self::NotAuthenticated => "Could not get authorization",
            Self::NotFound {
                kind: LookupKind::Beatmap,
                ..
            } => "Could not find beatmap",
            Self::NotFound {
                kind: LookupKind::User,
                ..
            } => "Could not find user",
            Self::RequestFailed(_) => "Could not fetch difficulty attributes",
            Self::StaleResponse => "",
        }
    }

    /// Whether the error should be presented to the user at all.
    pub const fn is_visible(&self) -> bool {
        !matches!(self, Self::StaleResponse)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn user_messages() {
        assert_eq!(LookupError::EmptyInput.user_message(), "Search is empty");
        assert_eq!(
            LookupError::NotAuthenticated.user_message(),
            "Could not get authorization"
        );
        assert_eq!(
            LookupError::not_found(LookupKind::Beatmap, None).user_message(),
            "Could not find beatmap"
        );
        assert_eq!(
            LookupError::not_found(LookupKind::User, Some(ApiError::NotFound)).user_message(),
            "Could not find user"
        );
        assert!(!LookupError::StaleResponse.is_visible());
    }

    #[test]
    fn keeps_api_error_as_source() {
        let err = LookupError::RequestFailed(ApiError::Decode("expected value".to_owned()));
        let source = err.source().map(ToString::to_string);

        assert_eq!(source.as_deref(), Some("JSON parse error: expected value"));
    }
}
