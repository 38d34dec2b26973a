use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::{Error, Result};

/// Opaque bearer credential for the streaming provider.
///
/// The token is passed into every catalog call and never stored inside a
/// client, so concurrent requests for different users cannot leak into each
/// other. Obtaining and refreshing it is the caller's job.
#[derive(Clone)]
pub struct AccessToken {
    secret: String,
    expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(Error::Authorization("access token is empty".to_string()));
        }

        Ok(Self {
            secret,
            expires_at: None,
        })
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    /// Fails with [`Error::Authorization`] once the token has expired.
    pub fn ensure_valid(&self, now: DateTime<Utc>) -> Result<()> {
        if self.is_expired(now) {
            return Err(Error::Authorization(
                "access token has expired, obtain a fresh one".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"***")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

// setlist.fm

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetlistArtist {
    pub mbid: String,
    pub name: String,
    pub sort_name: String,
    #[serde(default)]
    pub disambiguation: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSearchPage {
    pub artist: Vec<SetlistArtist>,
    #[serde(rename = "type")]
    pub kind: String,
    pub items_per_page: u32,
    pub page: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    pub country: Country,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub city: Option<City>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub name: String,
}

impl Song {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One "set" of a setlist: consecutively performed songs, possibly an encore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encore: Option<u32>,
    #[serde(rename = "song")]
    pub songs: Vec<Song>,
}

impl PerformanceSegment {
    pub fn new(songs: Vec<Song>) -> Self {
        Self {
            name: None,
            encore: None,
            songs,
        }
    }

    pub fn encore(number: u32, songs: Vec<Song>) -> Self {
        Self {
            name: None,
            encore: Some(number),
            songs,
        }
    }

    pub fn is_encore(&self) -> bool {
        self.encore.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sets {
    pub set: Vec<PerformanceSegment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setlist {
    pub id: String,
    pub artist: SetlistArtist,
    pub venue: Venue,
    pub event_date: String,
    pub url: String,
    #[serde(default)]
    pub tour: Option<Tour>,
    #[serde(default)]
    pub info: Option<String>,
    pub sets: Sets,
}

impl Setlist {
    pub fn segments(&self) -> &[PerformanceSegment] {
        &self.sets.set
    }

    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.sets.set.iter().flat_map(|segment| segment.songs.iter())
    }

    pub fn song_count(&self) -> usize {
        self.songs().count()
    }

    /// setlist.fm dates are formatted `dd-MM-yyyy`.
    pub fn event_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.event_date, "%d-%m-%Y").ok()
    }

    pub fn default_playlist_name(&self) -> String {
        let date = self
            .event_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| self.event_date.clone());
        format!("{} @ {} ({})", self.artist.name, self.venue.name, date)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetlistPage {
    pub setlist: Vec<Setlist>,
    #[serde(rename = "type")]
    pub kind: String,
    pub items_per_page: u32,
    pub page: u32,
    pub total: u32,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub disambiguation: String,
    pub mbid: String,
}

#[derive(Tabled)]
pub struct SetlistTableRow {
    pub id: String,
    pub date: String,
    pub venue: String,
    pub sets: usize,
    pub songs: usize,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub position: usize,
    pub song: String,
    pub uri: String,
}

// Spotify

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Track,
    Artist,
    Album,
    Playlist,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: String,
    pub name: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: ObjectType,
    pub artists: Vec<ArtistObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    pub name: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: ObjectType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistBody {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistObject {
    pub id: String,
    pub uri: String,
    pub name: String,
    pub public: bool,
    #[serde(rename = "type")]
    pub kind: ObjectType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksBody {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

// catalog model

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateArtist {
    pub name: String,
}

/// A track returned by a catalog search; not yet confirmed as a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTrack {
    pub name: String,
    pub uri: String,
    pub artists: Vec<CandidateArtist>,
}

impl From<TrackObject> for CandidateTrack {
    fn from(track: TrackObject) -> Self {
        Self {
            name: track.name,
            uri: track.uri,
            artists: track
                .artists
                .into_iter()
                .map(|a| CandidateArtist { name: a.name })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTrack {
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSpec {
    pub name: String,
    pub description: String,
    pub is_public: bool,
}

impl PlaylistSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            is_public: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPlaylist {
    pub id: String,
    pub uri: String,
    pub name: String,
    pub is_public: bool,
}

impl From<PlaylistObject> for CreatedPlaylist {
    fn from(playlist: PlaylistObject) -> Self {
        Self {
            id: playlist.id,
            uri: playlist.uri,
            name: playlist.name,
            is_public: playlist.public,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistPopulationResult {
    pub snapshot_id: String,
}
