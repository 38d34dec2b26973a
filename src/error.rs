//! Error types shared by the provider clients and the playlist pipeline.

use std::fmt;

use thiserror::Error;

/// The external service a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Spotify,
    SetlistFm,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Spotify => write!(f, "Spotify"),
            Provider::SetlistFm => write!(f, "setlist.fm"),
        }
    }
}

/// Hard failures. A song that simply does not resolve is not an error; it is
/// dropped from the assembled track list.
#[derive(Error, Debug)]
pub enum Error {
    /// Response body did not match the expected schema
    #[error("{provider} returned an unexpected payload: {message}")]
    Validation { provider: Provider, message: String },

    /// Provider answered with a non-success status
    #[error("{provider} request failed with status {status}: {message}")]
    Upstream {
        provider: Provider,
        status: u16,
        message: String,
    },

    /// Request never produced a response
    #[error("{provider} request failed: {source}")]
    Request {
        provider: Provider,
        #[source]
        source: reqwest::Error,
    },

    /// Access token missing, expired or rejected
    #[error("Authorization failed: {0}")]
    Authorization(String),

    /// Required configuration value is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn validation(provider: Provider, message: impl Into<String>) -> Self {
        Error::Validation {
            provider,
            message: message.into(),
        }
    }

    pub(crate) fn request(provider: Provider, source: reqwest::Error) -> Self {
        Error::Request { provider, source }
    }
}

/// Result type for setlistify operations.
pub type Result<T> = std::result::Result<T, Error>;
