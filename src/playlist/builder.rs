use tracing::debug;

use crate::{
    catalog::Catalog,
    error::Result,
    types::{AccessToken, CreatedPlaylist, PlaylistPopulationResult, PlaylistSpec, ResolvedTrack},
};

/// Upper bound of URIs Spotify accepts in one add request.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPlaylist {
    pub playlist: CreatedPlaylist,
    pub population: PlaylistPopulationResult,
}

/// Creates a playlist from `spec` and fills it with `tracks` in order.
///
/// The add request is always sent, also for an empty track list. Lists
/// longer than [`MAX_TRACKS_PER_REQUEST`] go out in consecutive batches and
/// the snapshot of the last batch is returned.
///
/// A failed creation returns before anything is added. A failed add leaves
/// the created playlist in place; nothing is rolled back.
pub async fn build<C: Catalog + ?Sized>(
    catalog: &C,
    token: &AccessToken,
    spec: &PlaylistSpec,
    tracks: &[ResolvedTrack],
) -> Result<BuiltPlaylist> {
    let playlist = catalog.create_playlist(token, spec).await?;
    debug!(id = %playlist.id, uri = %playlist.uri, "Created playlist");

    let uris: Vec<String> = tracks.iter().map(|track| track.uri.clone()).collect();
    let mut batches = uris.chunks(MAX_TRACKS_PER_REQUEST);

    let first = batches.next().unwrap_or(&[]);
    let mut population = catalog.add_tracks(token, &playlist.id, first).await?;
    for batch in batches {
        population = catalog.add_tracks(token, &playlist.id, batch).await?;
    }

    debug!(
        id = %playlist.id,
        snapshot_id = %population.snapshot_id,
        tracks = uris.len(),
        "Populated playlist"
    );

    Ok(BuiltPlaylist {
        playlist,
        population,
    })
}
