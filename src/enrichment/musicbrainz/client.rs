//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a meaningful User-Agent header and rate
//! limits clients; throttled requests come back as 503 (or 429).

use super::{adapter, dto};
use crate::config::MusicBrainzConfig;
use crate::enrichment::domain::{ExternalRelease, LookupError};
use crate::error::{Error, Result};

/// MusicBrainz API client
#[derive(Debug, Clone)]
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// Build the User-Agent MusicBrainz asks for: `name/version ( contact )`
pub fn user_agent(config: &MusicBrainzConfig) -> String {
    format!(
        "{}/{} ( {} )",
        config.app_name, config.app_version, config.contact
    )
}

impl MusicBrainzClient {
    /// Create a client from the process configuration
    pub fn new(config: &MusicBrainzConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent(config))
            .timeout(config.timeout()?)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up a release by MusicBrainz ID, including the given sub-resources
    pub async fn fetch_release(
        &self,
        release_id: &str,
        include: &[&str],
    ) -> std::result::Result<ExternalRelease, LookupError> {
        let response = self.send_release_request(release_id, include).await?;
        Ok(adapter::to_release(response))
    }

    fn release_url(&self, release_id: &str, include: &[&str]) -> String {
        let mut url = format!(
            "{}/release/{}?fmt=json",
            self.base_url,
            urlencoding::encode(release_id)
        );
        if !include.is_empty() {
            url.push_str("&inc=");
            url.push_str(&include.join("+"));
        }
        url
    }

    /// Send the HTTP request and parse the response
    async fn send_release_request(
        &self,
        release_id: &str,
        include: &[&str],
    ) -> std::result::Result<dto::ReleaseResponse, LookupError> {
        if release_id.trim().is_empty() || release_id.chars().any(char::is_whitespace) {
            return Err(LookupError::InvalidId(release_id.to_string()));
        }

        let url = self.release_url(release_id, include);
        tracing::debug!(%url, "MusicBrainz release lookup");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(release_id.to_string()));
        }

        if status == reqwest::StatusCode::BAD_REQUEST {
            return Err(LookupError::InvalidId(release_id.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::RateLimited);
        }

        if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return Err(LookupError::ServiceUnavailable);
        }

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
            if status.is_server_error() {
                return Err(LookupError::Http {
                    status: status.as_u16(),
                    reason,
                });
            }
            // Try to parse error response
            if let Ok(body) = read_body(response).await
                && let Ok(error) = serde_json::from_slice::<dto::ApiError>(&body)
            {
                return Err(LookupError::ApiError(error.error));
            }
            return Err(LookupError::Http {
                status: status.as_u16(),
                reason,
            });
        }

        let body = read_body(response).await?;
        serde_json::from_slice(&body).map_err(|e| LookupError::Parse(e.to_string()))
    }
}

/// Read the whole body. A connection lost mid-body is a network failure;
/// only a complete body is handed to the JSON parser.
async fn read_body(response: reqwest::Response) -> std::result::Result<Vec<u8>, LookupError> {
    response
        .bytes()
        .await
        .map(|body| body.to_vec())
        .map_err(|e| LookupError::Network(format!("reading response body: {}", e)))
}
