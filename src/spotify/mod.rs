//! # Spotify Integration Module
//!
//! [`SpotifyClient`] implements the [`Catalog`] capabilities against the
//! Spotify Web API:
//!
//! - `GET /search?type=track` - track search by title and artist
//! - `POST /me/playlists` - playlist creation for the token's owner
//! - `POST /playlists/{playlist_id}/tracks` - appending track URIs
//!
//! The client holds no credentials. Each call takes the caller's
//! [`AccessToken`] and sends it as a bearer header, so one client can serve
//! any number of users.
//!
//! Responses are deserialized into the typed payloads in [`crate::types`];
//! anything that does not fit, including objects of the wrong `type`, is
//! reported as [`crate::error::Error::Validation`]. Non-success statuses are
//! surfaced unchanged and nothing is retried, including 429.

pub mod playlist;
pub mod search;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    catalog::Catalog,
    config,
    error::{Provider, Result},
    http,
    types::{AccessToken, CandidateTrack, CreatedPlaylist, PlaylistPopulationResult, PlaylistSpec},
};

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
}

impl SpotifyClient {
    /// Creates a client for the Web API at `api_url`.
    ///
    /// # Arguments
    ///
    /// * `api_url` - Web API base, e.g. `https://api.spotify.com/v1`. A
    ///   trailing slash is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Request`] if the HTTP client cannot be
    /// built, e.g. when no TLS backend is available.
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http: http::build_client(Provider::Spotify)?,
            api_url,
        })
    }

    /// Client for the API URL configured in `SPOTIFY_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(config::spotify_apiurl())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn search_tracks(
        &self,
        token: &AccessToken,
        track_name: &str,
        artist_name: &str,
    ) -> Result<Vec<CandidateTrack>> {
        search::search_tracks(self, token, track_name, artist_name).await
    }

    async fn create_playlist(
        &self,
        token: &AccessToken,
        spec: &PlaylistSpec,
    ) -> Result<CreatedPlaylist> {
        playlist::create(self, token, spec).await
    }

    async fn add_tracks(
        &self,
        token: &AccessToken,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<PlaylistPopulationResult> {
        playlist::add_tracks(self, token, playlist_id, uris).await
    }
}
