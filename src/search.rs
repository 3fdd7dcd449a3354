use crate::{
    api::{AccessToken, OsuApi},
    error::{LookupError, LookupKind},
    model::user::UserProfile,
    viewer::BeatmapViewer,
};

/// Look up a beatmap by its id and fetch its nomod difficulty attributes.
///
/// Empty input and missing authorization are reported without sending a
/// request. If only the difficulty attributes fail, the viewer is still
/// returned with a failed state so the user can retry by toggling mods.
pub async fn search_beatmap<A>(
    api: &A,
    token: Option<&AccessToken>,
    input: &str,
) -> Result<BeatmapViewer, LookupError>
where
    A: OsuApi + ?Sized,
{
    let input = validate(input)?;
    let token = authorize(token)?;

    let Ok(beatmap_id) = input.parse::<u32>() else {
        tracing::warn!(input, "Beatmap id is not numeric");

        return Err(LookupError::not_found(LookupKind::Beatmap, None));
    };

    let map = api.beatmap(token, beatmap_id).await.map_err(|err| {
        tracing::warn!(beatmap_id, error = %err, "Failed to fetch beatmap");

        LookupError::not_found(LookupKind::Beatmap, Some(err))
    })?;

    let mut viewer = BeatmapViewer::new(map);
    viewer.refresh(api, token).await;

    Ok(viewer)
}

/// Look up a user by id or username.
pub async fn search_user<A>(
    api: &A,
    token: Option<&AccessToken>,
    input: &str,
) -> Result<UserProfile, LookupError>
where
    A: OsuApi + ?Sized,
{
    let input = validate(input)?;
    let token = authorize(token)?;

    api.user(token, input).await.map_err(|err| {
        tracing::warn!(user = input, error = %err, "Failed to fetch user");

        LookupError::not_found(LookupKind::User, Some(err))
    })
}

fn validate(input: &str) -> Result<&str, LookupError> {
    let input = input.trim();

    if input.is_empty() {
        Err(LookupError::EmptyInput)
    } else {
        Ok(input)
    }
}

fn authorize(token: Option<&AccessToken>) -> Result<&AccessToken, LookupError> {
    token
        .filter(|token| !token.is_empty())
        .ok_or(LookupError::NotAuthenticated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims() {
        assert_eq!(validate("  75 ").unwrap(), "75");
        assert!(matches!(validate(" \t"), Err(LookupError::EmptyInput)));
    }

    #[test]
    fn empty_token_is_unauthorized() {
        let token = AccessToken::new("");

        assert!(matches!(
            authorize(Some(&token)),
            Err(LookupError::NotAuthenticated)
        ));
        assert!(matches!(authorize(None), Err(LookupError::NotAuthenticated)));
        assert!(authorize(Some(&AccessToken::new("abc"))).is_ok());
    }
}
