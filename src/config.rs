//! Configuration management for setlistify.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Environment variables that are already
//! set win over the file.
//!
//! | Variable                          | Required | Default                           |
//! |-----------------------------------|----------|-----------------------------------|
//! | `SETLISTFM_API_KEY`               | yes      |                                   |
//! | `SETLISTFM_API_URL`               | no       | `https://api.setlist.fm/rest/1.0` |
//! | `SPOTIFY_ACCESS_TOKEN`            | yes      |                                   |
//! | `SPOTIFY_ACCESS_TOKEN_EXPIRES_AT` | no       | token never expires               |
//! | `SPOTIFY_API_URL`                 | no       | `https://api.spotify.com/v1`      |

use std::{env, path::PathBuf};

use chrono::{DateTime, Utc};

use crate::{
    error::{Error, Result},
    types::AccessToken,
};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SETLISTFM_API_URL: &str = "https://api.setlist.fm/rest/1.0";

/// Path of the `.env` file in the platform-specific local data directory.
///
/// - Linux: `~/.local/share/setlistify/.env`
/// - macOS: `~/Library/Application Support/setlistify/.env`
/// - Windows: `%LOCALAPPDATA%/setlistify/.env`
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("setlistify/.env");
    path
}

/// Loads environment variables from the `.env` file in the local data
/// directory.
///
/// Creates the directory if it doesn't exist. A missing file is fine, since
/// everything can also be provided through the environment directly.
///
/// # Errors
///
/// Fails if the directory cannot be created or the file exists but cannot
/// be parsed.
pub async fn load_env() -> Result<()> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::Config(format!("cannot create {}: {}", parent.display(), e)))?;
    }

    if async_fs::metadata(&path).await.is_err() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| Error::Config(format!("cannot load {}: {}", path.display(), e)))
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn required_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

/// setlist.fm REST API base URL.
pub fn setlistfm_apiurl() -> String {
    var_or("SETLISTFM_API_URL", DEFAULT_SETLISTFM_API_URL)
}

/// API key for setlist.fm, sent as `x-api-key`.
pub fn setlistfm_api_key() -> Result<String> {
    required_var("SETLISTFM_API_KEY")
        .ok_or_else(|| Error::Config("SETLISTFM_API_KEY must be set".to_string()))
}

/// Spotify user access token with playlist-modify scopes.
///
/// Obtaining and refreshing the token happens outside of setlistify, so a
/// missing value is an authorization failure rather than a config error.
pub fn spotify_access_token() -> Result<String> {
    required_var("SPOTIFY_ACCESS_TOKEN")
        .ok_or_else(|| Error::Authorization("SPOTIFY_ACCESS_TOKEN must be set".to_string()))
}

/// Parses a token expiry given as RFC 3339, e.g. `2026-10-14T18:30:00Z`.
///
/// # Errors
///
/// Returns [`Error::Config`] if `raw` is not a valid RFC 3339 timestamp.
pub fn parse_token_expiry(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|expires_at| expires_at.with_timezone(&Utc))
        .map_err(|e| {
            Error::Config(format!(
                "SPOTIFY_ACCESS_TOKEN_EXPIRES_AT is not RFC 3339 ({}): {}",
                raw, e
            ))
        })
}

/// Optional expiry of the Spotify access token.
pub fn spotify_access_token_expiry() -> Result<Option<DateTime<Utc>>> {
    required_var("SPOTIFY_ACCESS_TOKEN_EXPIRES_AT")
        .map(|raw| parse_token_expiry(&raw))
        .transpose()
}

/// Builds the [`AccessToken`] from `SPOTIFY_ACCESS_TOKEN`, with the expiry
/// from `SPOTIFY_ACCESS_TOKEN_EXPIRES_AT` if one is set.
///
/// # Errors
///
/// [`Error::Authorization`] if the token is missing or blank,
/// [`Error::Config`] if the expiry cannot be parsed.
pub fn spotify_token() -> Result<AccessToken> {
    let token = AccessToken::new(spotify_access_token()?)?;
    Ok(match spotify_access_token_expiry()? {
        Some(expires_at) => token.with_expiry(expires_at),
        None => token,
    })
}
