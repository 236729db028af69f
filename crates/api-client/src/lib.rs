//! HTTP client for the remote anime recommendation service.
//!
//! This crate provides a typed client for the service's `/recommend`
//! endpoint. It handles:
//! - Building the request URL with the query encoded into the `anime`
//!   parameter
//! - Decoding the JSON response into [`RecommendationResponse`]
//! - Mapping non-success statuses to [`ApiClientError::Status`] with the
//!   server-supplied message (or a fixed fallback)
//!
//! The similarity computation itself lives entirely behind the service
//! boundary; this client never interprets the scores it relays.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

pub mod error;
pub mod types;

pub use error::{ApiClientError, Result};
pub use types::{
    ErrorPayload, RecommendationResponse, RecommendationResult, SimilarityScore,
    FALLBACK_ERROR_MESSAGE,
};

/// Default endpoint of a locally running recommendation service.
pub const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:5000/recommend";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`RecommendClient`].
///
/// Both values are injected rather than hardcoded so the client can be
/// pointed at a test double or a differently deployed service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the recommendation endpoint.
    pub endpoint_url: String,
    /// Upper bound on one request, enforced by the HTTP transport.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Anything that can answer a recommendation query.
///
/// This is the seam between the request controller and the network: the
/// production implementation is [`RecommendClient`], tests substitute a
/// scripted source.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Fetch recommendations for one query. Exactly one attempt, no retry.
    async fn recommendations(&self, query: &str) -> Result<RecommendationResponse>;
}

/// Client for the recommendation service.
pub struct RecommendClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl RecommendClient {
    /// Build a client from the given configuration.
    ///
    /// Fails if the endpoint is not a valid URL or the HTTP client cannot
    /// be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, endpoint })
    }

    /// URL for one query, with the title encoded into the `anime`
    /// parameter.
    fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("anime", query);
        url
    }

    /// Fetch recommendations for `query`.
    ///
    /// # Returns
    /// * `Ok(RecommendationResponse)` - decoded success payload
    /// * `Err(ApiClientError::Status)` - the service rejected the query
    /// * `Err(_)` - the service could not be reached or understood
    pub async fn recommendations(&self, query: &str) -> Result<RecommendationResponse> {
        let url = self.request_url(query);
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        interpret_response(status, &body)
    }

    /// Endpoint this client was configured with.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RecommendationSource for RecommendClient {
    async fn recommendations(&self, query: &str) -> Result<RecommendationResponse> {
        RecommendClient::recommendations(self, query).await
    }
}

/// Map a raw status/body pair onto the client's result type.
///
/// Non-success bodies are parsed as [`ErrorPayload`] on a best-effort
/// basis; an absent or unparsable body falls back to
/// [`FALLBACK_ERROR_MESSAGE`].
fn interpret_response(status: StatusCode, body: &str) -> Result<RecommendationResponse> {
    if !status.is_success() {
        let message = match serde_json::from_str::<ErrorPayload>(body) {
            Ok(payload) => {
                if let Some(title) = &payload.error {
                    debug!("service error title: {}", title);
                }
                payload.message
            }
            Err(_) => FALLBACK_ERROR_MESSAGE.to_string(),
        };
        warn!("service returned HTTP {}: {}", status.as_u16(), message);
        return Err(ApiClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(body)?)
}
