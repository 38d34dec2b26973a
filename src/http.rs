use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Provider, Result};

pub(crate) fn build_client(provider: Provider) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(format!(
            "{}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .map_err(|e| Error::request(provider, e))
}

/// Checks the status and deserializes the body into `T`.
///
/// A body that does not fit `T` is a [`Error::Validation`], never a partially
/// filled value. Spotify answers an expired or revoked token with 401, which
/// maps to [`Error::Authorization`].
pub(crate) async fn read_json<T: DeserializeOwned>(
    provider: Provider,
    response: Response,
) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::request(provider, e))?;

    debug!(%provider, status = status.as_u16(), bytes = body.len(), "Received response");

    if status == StatusCode::UNAUTHORIZED && provider == Provider::Spotify {
        return Err(Error::Authorization(error_message(&body)));
    }

    if !status.is_success() {
        return Err(Error::Upstream {
            provider,
            status: status.as_u16(),
            message: error_message(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| Error::validation(provider, e.to_string()))
}

// Spotify: {"error": {"status": 401, "message": "..."}}
// setlist.fm: {"code": 404, "status": "Not Found", "message": "..."}
fn error_message(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let message = parsed.as_ref().and_then(|json| {
        json["error"]["message"]
            .as_str()
            .or_else(|| json["message"].as_str())
            .or_else(|| json["error"].as_str())
            .map(str::to_string)
    });

    match message {
        Some(m) => m,
        None if body.trim().is_empty() => "empty response body".to_string(),
        None => body.chars().take(200).collect(),
    }
}
