use crate::{
    catalog::Catalog,
    error::Result,
    matching::are_equivalent,
    types::{AccessToken, CandidateTrack, ResolvedTrack},
};

/// Removes apostrophes from a title before it is used as a search term.
///
/// Spotify's field-filtered search misses tracks when the query contains
/// them. The stripped form is only ever used for the query.
pub fn normalize_search_name(song_name: &str) -> String {
    song_name
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .collect()
}

/// A candidate matches when its title is equivalent to the performed title
/// and at least one of its artists is equivalent to the performing artist.
pub fn is_match(candidate: &CandidateTrack, artist_name: &str, song_name: &str) -> bool {
    are_equivalent(&candidate.name, song_name)
        && candidate
            .artists
            .iter()
            .any(|artist| are_equivalent(&artist.name, artist_name))
}

/// Looks up one performed song and returns the catalog tracks that match it,
/// in the catalog's ranking order.
///
/// Issues exactly one search. Any search failure is returned as is.
pub async fn resolve<C: Catalog + ?Sized>(
    catalog: &C,
    token: &AccessToken,
    artist_name: &str,
    song_name: &str,
) -> Result<Vec<ResolvedTrack>> {
    let query_name = normalize_search_name(song_name);
    let candidates = catalog
        .search_tracks(token, &query_name, artist_name)
        .await?;

    Ok(candidates
        .into_iter()
        .filter(|candidate| is_match(candidate, artist_name, song_name))
        .map(|candidate| ResolvedTrack {
            name: candidate.name,
            uri: candidate.uri,
        })
        .collect())
}
