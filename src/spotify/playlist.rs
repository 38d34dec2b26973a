use tracing::debug;

use crate::{
    error::{Error, Provider, Result},
    http,
    types::{
        AccessToken, AddTracksBody, AddTracksResponse, CreatePlaylistBody, CreatedPlaylist,
        ObjectType, PlaylistObject, PlaylistPopulationResult, PlaylistSpec,
    },
};

use super::SpotifyClient;

/// Creates an empty playlist owned by the token's user.
///
/// The spec is sent verbatim; an empty name is not rejected here and will be
/// refused by Spotify itself.
pub async fn create(
    client: &SpotifyClient,
    token: &AccessToken,
    spec: &PlaylistSpec,
) -> Result<CreatedPlaylist> {
    let body = CreatePlaylistBody {
        name: spec.name.clone(),
        description: spec.description.clone(),
        public: spec.is_public,
    };

    debug!(name = %spec.name, public = spec.is_public, "Creating Spotify playlist");

    let response = client
        .http
        .post(client.endpoint("/me/playlists"))
        .bearer_auth(token.secret())
        .json(&body)
        .send()
        .await
        .map_err(|e| Error::request(Provider::Spotify, e))?;

    let playlist: PlaylistObject = http::read_json(Provider::Spotify, response).await?;
    if playlist.kind != ObjectType::Playlist {
        return Err(Error::validation(
            Provider::Spotify,
            format!("created object has type {:?}, expected playlist", playlist.kind),
        ));
    }

    Ok(CreatedPlaylist::from(playlist))
}

/// Appends `uris` to a playlist in one request.
///
/// Spotify accepts at most 100 URIs per call; batching larger lists is left
/// to the caller. An empty list is sent as is.
pub async fn add_tracks(
    client: &SpotifyClient,
    token: &AccessToken,
    playlist_id: &str,
    uris: &[String],
) -> Result<PlaylistPopulationResult> {
    let body = AddTracksBody {
        uris: uris.to_vec(),
    };

    debug!(playlist_id, count = uris.len(), "Adding tracks to Spotify playlist");

    let response = client
        .http
        .post(client.endpoint(&format!("/playlists/{playlist_id}/tracks")))
        .bearer_auth(token.secret())
        .json(&body)
        .send()
        .await
        .map_err(|e| Error::request(Provider::Spotify, e))?;

    let added: AddTracksResponse = http::read_json(Provider::Spotify, response).await?;

    Ok(PlaylistPopulationResult {
        snapshot_id: added.snapshot_id,
    })
}
