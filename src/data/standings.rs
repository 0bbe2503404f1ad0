//! football-data.org standings API client
//!
//! This module provides the HTTP client that fetches the raw standings
//! payload for a competition. The raw body is returned as-is so that the
//! cache can persist exactly what the API sent.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Base URL for the football-data.org v4 API
const FOOTBALL_DATA_BASE_URL: &str = "https://api.football-data.org/v4";

/// Header carrying the API token
const AUTH_HEADER: &str = "X-Auth-Token";

/// Errors that can occur when fetching standings data
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API responded with a non-success status
    #[error("API returned an error: {0}")]
    Status(StatusCode),

    /// API responded with an empty body
    #[error("API returned no data")]
    EmptyBody,
}

/// Source of raw standings payloads, keyed by competition code
///
/// The provider depends on this trait rather than on the concrete HTTP
/// client, so the cache-freshness logic can be tested against a fake source.
#[async_trait]
pub trait StandingsSource: Send + Sync {
    /// Fetches the raw standings payload for a competition code
    async fn fetch(&self, competition: &str) -> Result<String, FetchError>;
}

/// Client for fetching standings from the football-data.org API
#[derive(Debug, Clone)]
pub struct StandingsClient {
    client: Client,
    base_url: String,
    api_token: String,
}

impl StandingsClient {
    /// Creates a new client with an explicit request timeout
    ///
    /// # Arguments
    /// * `api_token` - Token sent as the X-Auth-Token header
    /// * `timeout` - Timeout applied to the standings request
    ///
    /// # Returns
    /// * `Ok(StandingsClient)` with the timeout applied
    /// * `Err(FetchError)` if the HTTP client cannot be built (TLS backend
    ///   misconfiguration); the timeout is never silently dropped
    pub fn new(
        api_token: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: FOOTBALL_DATA_BASE_URL.to_string(),
            api_token: api_token.into(),
        })
    }

    /// Creates a client pointed at a custom base URL (for testing)
    #[cfg(test)]
    pub fn with_base_url(api_token: impl Into<String>, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_token: api_token.into(),
        }
    }

    /// Builds the standings endpoint URL for a competition code
    fn standings_url(&self, competition: &str) -> String {
        format!(
            "{}/competitions/{}/standings",
            self.base_url,
            competition.to_uppercase()
        )
    }
}

#[async_trait]
impl StandingsSource for StandingsClient {
    /// Fetches the raw standings payload for the given competition
    ///
    /// # Returns
    /// * `Ok(String)` - The raw JSON body exactly as the API sent it
    /// * `Err(FetchError)` - On transport failure, non-success status, or
    ///   an empty body
    async fn fetch(&self, competition: &str) -> Result<String, FetchError> {
        let url = self.standings_url(competition);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTH_HEADER, &self.api_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody);
        }

        Ok(body)
    }
}
