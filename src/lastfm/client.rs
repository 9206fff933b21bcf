use std::time::Duration;

use chrono::{Local, NaiveDate};
use reqwest::Client;

use crate::{
    config,
    types::{ApiError, StartEndDate, Track, User},
};

use super::{decode, route::Route};

/// Per-request timeout. There is no overall deadline across a timeline
/// fan-out; total wall time is bounded by the slowest single request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Last.fm web service.
///
/// Holds the shared connection pool together with the API key and base URL
/// that every route needs. One instance is meant to live for the duration of
/// a command and be reused across the timeline fan-out.
#[derive(Debug, Clone)]
pub struct LastfmClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl LastfmClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to construct HTTP client");

        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Constructs a client from the environment configuration
    /// (`LASTFM_API_KEY`, `LASTFM_API_URL`).
    pub fn from_env() -> Self {
        Self::new(config::lastfm_api_key(), config::lastfm_apiurl())
    }

    /// Fetches the plays recorded on the calendar day `day` for `username`.
    ///
    /// The day is widened to its inclusive [00:00:00, 23:59:59] bounds in
    /// the local time zone and sent as the `from`/`to` window. The response
    /// may legitimately be empty; an empty day is data, not an error.
    ///
    /// # Errors
    ///
    /// Transport failures, the service's own error envelope, and
    /// unrecognizable payloads all surface as [`ApiError`]. No retries
    /// happen at this layer.
    pub async fn recent_tracks(
        &self,
        day: NaiveDate,
        username: &str,
    ) -> Result<Vec<Track>, ApiError> {
        let route = Route::RecentTracks {
            window: StartEndDate::for_day(day, &Local),
            username: username.to_string(),
        };

        let bytes = self.get(&route).await?;
        decode::decode_recent_tracks(&bytes)
    }

    /// Fetches the profile of `username`.
    pub async fn user_info(&self, username: &str) -> Result<User, ApiError> {
        let route = Route::UserInfo {
            username: username.to_string(),
        };

        let bytes = self.get(&route).await?;
        decode::decode_user_info(&bytes)
    }

    // The service reports failures through its error envelope, sometimes
    // with a 200 status; the decoder handles both, so the status code is
    // not checked here.
    async fn get(&self, route: &Route) -> Result<Vec<u8>, ApiError> {
        let url = route
            .url(&self.api_key, &self.base_url)
            .map_err(|e| ApiError::wrap("cannot build request", e))?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::wrap("request failed", e))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::wrap("failed to read response body", e))?;

        Ok(bytes.to_vec())
    }
}
