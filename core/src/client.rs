use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::PremstatsConfig;
use crate::errors::{PremstatsError, PremstatsResult};
use crate::reply::decode_reply;
use crate::types::{AskRequest, SuccessResponse};

/// Path of the question-answering endpoint, relative to the backend origin
pub const ASK_STATS_PATH: &str = "/api/query/ask_stats";

/// Client for the premstats question-answering backend
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    base_url: String,
}

impl StatsClient {
    /// Create a client from configuration
    pub fn new(config: &PremstatsConfig) -> PremstatsResult<Self> {
        let base_url = config.backend_api_url.clone().ok_or_else(|| {
            PremstatsError::ConfigError(
                "A backend URL is required to initialize the stats client".to_string(),
            )
        })?;

        Ok(Self::with_base_url(base_url))
    }

    /// Create a client for the given backend origin
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the ask endpoint
    pub fn endpoint(&self) -> String {
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        format!("{}{}", base, ASK_STATS_PATH)
    }

    /// Ask the backend a question and return its answer.
    ///
    /// Sends exactly one request; nothing is retried. The query is sent as
    /// given, so callers should reject blank input beforehand.
    pub async fn ask(&self, query: &str) -> PremstatsResult<SuccessResponse> {
        let url = self.endpoint();
        let request = AskRequest::new(query);
        debug!(endpoint = %url, query_len = query.len(), "Sending stats query");

        let body = serde_json::to_vec(&request).map_err(|e| {
            PremstatsError::NetworkError(format!("Failed to encode request: {}", e))
        })?;

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| PremstatsError::NetworkError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received reply");

        let bytes = response.bytes().await.map_err(|e| {
            PremstatsError::NetworkError(format!("Failed to read response: {}", e))
        })?;

        let result = decode_reply(status.as_u16(), &bytes);
        if let Err(e) = &result {
            warn!(status = status.as_u16(), error = %e, "Stats query failed");
        }
        result
    }
}
