use chrono::Utc;
use tabled::Table;

use crate::{
    config, error, info,
    playlist::{self, PlaylistFromSetsRequest},
    setlistfm::SetlistFmClient,
    spotify::SpotifyClient,
    success,
    types::{PlaylistSpec, Setlist, TrackTableRow},
    warning,
};

use super::spinner;

#[derive(Debug, Clone, Default)]
pub struct PlaylistOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub private: bool,
}

pub async fn playlist(setlist_id: String, options: PlaylistOptions) {
    // fail on a missing or expired token before any request goes out
    let access_token = match config::spotify_token()
        .and_then(|token| token.ensure_valid(Utc::now()).map(|_| token))
    {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };

    let setlistfm = match SetlistFmClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("Cannot set up setlist.fm client. Err: {}", e),
    };
    let spotify = match SpotifyClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("Cannot set up Spotify client. Err: {}", e),
    };

    let pb = spinner(format!("Fetching setlist {}...", setlist_id));
    let result = setlistfm.get_setlist(&setlist_id).await;
    pb.finish_and_clear();

    let setlist = match result {
        Ok(setlist) => setlist,
        Err(e) => error!("Failed to fetch setlist {}. Err: {}", setlist_id, e),
    };

    if setlist.song_count() == 0 {
        warning!(
            "Setlist {} of {} has no songs yet.",
            setlist.id,
            setlist.artist.name
        );
        return;
    }

    let spec = playlist_spec(&setlist, options);
    if spec.name.trim().is_empty() {
        error!("Playlist name must not be empty.");
    }

    let request = PlaylistFromSetsRequest {
        access_token,
        artist_name: setlist.artist.name.clone(),
        segments: setlist.sets.set.clone(),
        playlist: spec,
    };
    let requested = request.song_count();

    info!(
        "Creating playlist \"{}\" from {} songs by {}",
        request.playlist.name, requested, request.artist_name
    );

    let pb = spinner(format!("Matching {} songs on Spotify...", requested));
    let result = playlist::create_playlist_from_sets(&spotify, &request).await;
    pb.finish_and_clear();

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => error!("Failed to create playlist. Err: {}", e),
    };

    let rows: Vec<TrackTableRow> = outcome
        .tracks
        .iter()
        .enumerate()
        .map(|(i, track)| TrackTableRow {
            position: i + 1,
            song: track.name.clone(),
            uri: track.uri.clone(),
        })
        .collect();
    if !rows.is_empty() {
        println!("{}", Table::new(rows));
    }

    success!(
        "Playlist \"{}\" created with {} of {} songs: {}",
        outcome.playlist.name,
        outcome.tracks.len(),
        requested,
        outcome.playlist.uri
    );

    if outcome.tracks.len() < requested {
        warning!(
            "{} songs were not found on Spotify or were duplicates.",
            requested - outcome.tracks.len()
        );
    }
}

fn playlist_spec(setlist: &Setlist, options: PlaylistOptions) -> PlaylistSpec {
    let name = options
        .name
        .unwrap_or_else(|| setlist.default_playlist_name());
    let description = options
        .description
        .unwrap_or_else(|| format!("Setlist from {}", setlist.url));

    PlaylistSpec::new(name)
        .with_description(description)
        .with_public(!options.private)
}
