use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::clients::errors::Result;

/// Default base URL of the Deezer REST API
pub const DEFAULT_API_URL: &str = "https://api.deezer.com";

#[derive(Serialize, Deserialize, Debug)]
pub struct TrackAlbum {
    pub title: String,
    pub cover_big: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchedTrack {
    pub id: u64,
    pub title: String,
    pub album: TrackAlbum,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TrackSearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub data: Vec<SearchedTrack>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Contributor {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TrackResponse {
    pub contributors: Vec<Contributor>,
}

/// Provider operations needed to assemble song metadata - allows substituting
/// a test double
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MusicApi: Send + Sync {
    /// Search tracks matching a free-text query
    async fn search_tracks(&self, query: &str) -> Result<TrackSearchResponse>;
    /// Fetch a single track, including its contributors, by id
    async fn get_track(&self, track_id: u64) -> Result<TrackResponse>;
    /// Fetch the raw bytes behind an image URL
    async fn fetch_image(&self, url: &str) -> Result<Bytes>;
}

/// Deezer implementation of [`MusicApi`] over a shared HTTP client
pub struct DeezerClient {
    http: reqwest::Client,
    base_url: String,
}

impl DeezerClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        DeezerClient {
            http,
            base_url: base_url.into(),
        }
    }

    // Create a DeezerClient against the public API, or the base URL from the
    // DEEZER_API_URL environment variable if set
    pub fn try_default() -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        let base_url =
            std::env::var("DEEZER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Ok(DeezerClient::new(http, base_url))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl MusicApi for DeezerClient {
    async fn search_tracks(&self, query: &str) -> Result<TrackSearchResponse> {
        debug!("Searching tracks for query {query:?}");
        let body = self
            .http
            .get(self.endpoint("search"))
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: TrackSearchResponse = serde_json::from_str(&body)?;
        debug!("Search returned {} total matches", response.total);
        Ok(response)
    }

    async fn get_track(&self, track_id: u64) -> Result<TrackResponse> {
        debug!("Fetching track {track_id}");
        let body = self
            .http
            .get(self.endpoint(&format!("track/{track_id}")))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_image(&self, url: &str) -> Result<Bytes> {
        debug!("Fetching image from {url}");
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(bytes)
    }
}
