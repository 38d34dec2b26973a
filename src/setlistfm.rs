//! Client for the setlist.fm REST API.
//!
//! Only the read endpoints the playlist flow needs are covered: artist
//! search, an artist's setlists and a single setlist. Every request carries
//! the `x-api-key` header and asks for JSON.

use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::debug;

use crate::{
    config,
    error::{Error, Provider, Result},
    http,
    types::{ArtistSearchPage, Setlist, SetlistArtist, SetlistPage},
};

#[derive(Debug, Clone)]
pub struct SetlistFmClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl SetlistFmClient {
    /// Creates a client for the REST API at `api_url`.
    ///
    /// # Arguments
    ///
    /// * `api_url` - REST base, e.g. `https://api.setlist.fm/rest/1.0`
    /// * `api_key` - Key sent as `x-api-key` with every request
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] if the HTTP client cannot be built.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: http::build_client(Provider::SetlistFm)?,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// # Errors
    ///
    /// Returns [`Error::Config`] if `SETLISTFM_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(config::setlistfm_apiurl(), config::setlistfm_api_key()?)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http
            .get(format!("{}{}", self.api_url, path))
            .header("Accept", "application/json")
            .header("x-api-key", &self.api_key)
    }

    /// Searches artists by name, most relevant first.
    ///
    /// setlist.fm answers a search without hits with 404; that is returned as
    /// an empty list rather than an error.
    pub async fn search_artists(&self, name: &str, page: u32) -> Result<Vec<SetlistArtist>> {
        debug!(name, page, "Searching setlist.fm artists");

        let page = page.to_string();
        let response = self
            .get("/search/artists")
            .query(&[
                ("artistName", name),
                ("p", page.as_str()),
                ("sort", "relevance"),
            ])
            .send()
            .await
            .map_err(|e| Error::request(Provider::SetlistFm, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let result: ArtistSearchPage = http::read_json(Provider::SetlistFm, response).await?;
        Ok(result.artist)
    }

    /// Fetches one page of an artist's setlists, newest first.
    pub async fn get_setlists(&self, mbid: &str, page: u32) -> Result<SetlistPage> {
        debug!(mbid, page, "Fetching setlist.fm setlists");

        let response = self
            .get(&format!("/artist/{mbid}/setlists"))
            .query(&[("p", page.to_string())])
            .send()
            .await
            .map_err(|e| Error::request(Provider::SetlistFm, e))?;

        http::read_json(Provider::SetlistFm, response).await
    }

    /// Fetches a single setlist with all its sets and songs.
    ///
    /// # Arguments
    ///
    /// * `setlist_id` - setlist.fm id, the last part of a setlist URL
    ///
    /// # Errors
    ///
    /// - [`Error::Request`] when the request cannot be sent
    /// - [`Error::Upstream`] for any non-success status, including 404 for
    ///   an unknown id
    /// - [`Error::Validation`] when the payload is not a setlist
    pub async fn get_setlist(&self, setlist_id: &str) -> Result<Setlist> {
        debug!(setlist_id, "Fetching setlist.fm setlist");

        let response = self
            .get(&format!("/setlist/{setlist_id}"))
            .send()
            .await
            .map_err(|e| Error::request(Provider::SetlistFm, e))?;

        http::read_json(Provider::SetlistFm, response).await
    }
}
