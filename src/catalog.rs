use async_trait::async_trait;

use crate::{
    error::Result,
    types::{AccessToken, CandidateTrack, CreatedPlaylist, PlaylistPopulationResult, PlaylistSpec},
};

/// Streaming-catalog capabilities the playlist pipeline depends on.
///
/// Every call receives the caller's credential explicitly. Implementations
/// must not retry failed requests; errors go straight back to the caller.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Searches tracks by title and artist. `track_name` is sent as given.
    async fn search_tracks(
        &self,
        token: &AccessToken,
        track_name: &str,
        artist_name: &str,
    ) -> Result<Vec<CandidateTrack>>;

    /// Creates an empty playlist from `spec` for the token's user.
    ///
    /// # Errors
    ///
    /// Fails if the playlist could not be created. Nothing is added to it
    /// in that case.
    async fn create_playlist(
        &self,
        token: &AccessToken,
        spec: &PlaylistSpec,
    ) -> Result<CreatedPlaylist>;

    /// Appends `uris` to the playlist in order in a single request.
    ///
    /// # Errors
    ///
    /// Fails if the request fails or is rejected. The playlist is left as it
    /// was before the call.
    async fn add_tracks(
        &self,
        token: &AccessToken,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<PlaylistPopulationResult>;
}
