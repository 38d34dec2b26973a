//! # Setlist to Playlist Pipeline
//!
//! Turns the songs of a concert into a streaming playlist:
//!
//! ```text
//! segments ──flatten──> songs ──resolve (one at a time)──> tracks ──dedup
//!     ──> create playlist ──> add tracks ──> outcome
//! ```
//!
//! - [`resolver`] looks up one song and filters the catalog candidates
//! - [`assembler`] walks all songs in performance order and deduplicates
//! - [`builder`] creates the playlist and adds the assembled tracks
//!
//! [`create_playlist_from_sets`] is the single entry point for callers. The
//! pipeline is generic over [`Catalog`], so it runs the same against
//! [`crate::spotify::SpotifyClient`] and against test doubles.
//!
//! Songs that do not resolve are left out silently. Callers that care can
//! compare [`PlaylistOutcome::tracks`] with the number of requested songs.

pub mod assembler;
pub mod builder;
pub mod resolver;

use chrono::Utc;
use tracing::info;

use crate::{
    catalog::Catalog,
    error::Result,
    types::{
        AccessToken, CreatedPlaylist, PerformanceSegment, PlaylistPopulationResult, PlaylistSpec,
        ResolvedTrack,
    },
};

#[derive(Debug, Clone)]
pub struct PlaylistFromSetsRequest {
    pub access_token: AccessToken,
    pub artist_name: String,
    pub segments: Vec<PerformanceSegment>,
    pub playlist: PlaylistSpec,
}

impl PlaylistFromSetsRequest {
    pub fn song_count(&self) -> usize {
        assembler::flatten(&self.segments).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistOutcome {
    pub playlist: CreatedPlaylist,
    pub tracks: Vec<ResolvedTrack>,
    pub population: PlaylistPopulationResult,
}

/// Resolves the performed songs and builds a playlist from them.
///
/// The token is checked before any request goes out, so an expired token
/// fails with [`crate::error::Error::Authorization`] without touching the
/// catalog.
pub async fn create_playlist_from_sets<C: Catalog + ?Sized>(
    catalog: &C,
    request: &PlaylistFromSetsRequest,
) -> Result<PlaylistOutcome> {
    request.access_token.ensure_valid(Utc::now())?;

    info!(
        artist = %request.artist_name,
        segments = request.segments.len(),
        songs = request.song_count(),
        "Resolving setlist"
    );

    let tracks = assembler::assemble(
        catalog,
        &request.access_token,
        &request.artist_name,
        &request.segments,
    )
    .await?;

    let built = builder::build(catalog, &request.access_token, &request.playlist, &tracks).await?;

    info!(
        playlist = %built.playlist.id,
        resolved = tracks.len(),
        "Playlist created"
    );

    Ok(PlaylistOutcome {
        playlist: built.playlist,
        tracks,
        population: built.population,
    })
}
