use tracing::{debug, warn};

use crate::{
    catalog::Catalog,
    error::Result,
    matching::are_equivalent,
    types::{AccessToken, PerformanceSegment, ResolvedTrack, Song},
};

use super::resolver;

/// All songs of all segments in performance order. Encores are not treated
/// specially.
pub fn flatten(segments: &[PerformanceSegment]) -> impl Iterator<Item = &Song> {
    segments.iter().flat_map(|segment| segment.songs.iter())
}

/// Resolves every performed song and collects one track per distinct song.
///
/// Songs are looked up one at a time; the next search is only sent after the
/// previous one finished. For each song the first matching candidate is
/// taken, unless a track with an equivalent name was already accepted. Songs
/// without any match are skipped, and so are blank titles, which would
/// otherwise match anything.
///
/// The first failing search aborts the whole run.
pub async fn assemble<C: Catalog + ?Sized>(
    catalog: &C,
    token: &AccessToken,
    artist_name: &str,
    segments: &[PerformanceSegment],
) -> Result<Vec<ResolvedTrack>> {
    let mut accepted: Vec<ResolvedTrack> = Vec::new();

    for song in flatten(segments) {
        if song.name.trim().is_empty() {
            debug!("Skipping song entry without a title");
            continue;
        }

        let matches = resolver::resolve(catalog, token, artist_name, &song.name).await?;

        let Some(first) = matches.into_iter().next() else {
            warn!(song = %song.name, artist = artist_name, "No catalog match for song");
            continue;
        };

        if accepted
            .iter()
            .any(|track| are_equivalent(&track.name, &song.name))
        {
            debug!(song = %song.name, uri = %first.uri, "Skipping duplicate song");
            continue;
        }

        debug!(song = %song.name, uri = %first.uri, "Resolved song");
        accepted.push(ResolvedTrack {
            name: song.name.clone(),
            uri: first.uri,
        });
    }

    Ok(accepted)
}
