use tracing::debug;

use crate::{
    error::{Error, Provider, Result},
    http,
    types::{AccessToken, CandidateTrack, ObjectType, TrackSearchResponse},
};

use super::SpotifyClient;

/// Builds the field-filtered search expression Spotify expects.
pub fn search_query(track_name: &str, artist_name: &str) -> String {
    format!("track:{track_name} artist:{artist_name}")
}

/// Searches the catalog for tracks by title and artist.
///
/// The returned candidates keep the order Spotify ranked them in. No
/// filtering happens here; deciding which candidate is the right song is up
/// to the resolver.
///
/// # Errors
///
/// - [`Error::Request`] when the request cannot be sent
/// - [`Error::Authorization`] on 401
/// - [`Error::Upstream`] on any other non-success status
/// - [`Error::Validation`] when the payload does not match the track search
///   schema or contains non-track items
pub async fn search_tracks(
    client: &SpotifyClient,
    token: &AccessToken,
    track_name: &str,
    artist_name: &str,
) -> Result<Vec<CandidateTrack>> {
    let query = search_query(track_name, artist_name);
    debug!(query = %query, "Searching Spotify tracks");

    let response = client
        .http
        .get(client.endpoint("/search"))
        .bearer_auth(token.secret())
        .query(&[("q", query.as_str()), ("type", "track")])
        .send()
        .await
        .map_err(|e| Error::request(Provider::Spotify, e))?;

    let payload: TrackSearchResponse = http::read_json(Provider::Spotify, response).await?;

    for item in &payload.tracks.items {
        if item.kind != ObjectType::Track {
            return Err(Error::validation(
                Provider::Spotify,
                format!("search item {} has type {:?}, expected track", item.id, item.kind),
            ));
        }
        if let Some(artist) = item.artists.iter().find(|a| a.kind != ObjectType::Artist) {
            return Err(Error::validation(
                Provider::Spotify,
                format!(
                    "artist {} of track {} has type {:?}, expected artist",
                    artist.id, item.id, artist.kind
                ),
            ));
        }
    }

    Ok(payload
        .tracks
        .items
        .into_iter()
        .map(CandidateTrack::from)
        .collect())
}
