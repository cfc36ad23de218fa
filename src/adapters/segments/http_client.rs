//! HttpSegmentClient - SegmentRepository over the segment HTTP API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = SegmentApiConfig::new("https://app.formflow.example")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = HttpSegmentClient::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::domain::foundation::SegmentId;
use crate::domain::segment::{Segment, SegmentError};
use crate::ports::{SegmentDraft, SegmentRepository, SegmentUpdate};

/// Configuration for the segment API client.
#[derive(Debug, Clone)]
pub struct SegmentApiConfig {
    /// Base URL of the API (no trailing slash).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl SegmentApiConfig {
    /// Creates a configuration pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Error body shape returned by the segment API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// SegmentRepository implementation calling the segment HTTP API.
pub struct HttpSegmentClient {
    config: SegmentApiConfig,
    client: Client,
}

impl HttpSegmentClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: SegmentApiConfig) -> Result<Self, SegmentError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| SegmentError::persistence(err.to_string()))?;

        Ok(Self { config, client })
    }

    async fn parse_segment(
        response: Response,
        id_for_not_found: Option<&SegmentId>,
    ) -> Result<Segment, SegmentError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<Segment>()
                .await
                .map_err(|err| SegmentError::persistence(err.to_string()));
        }

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id_for_not_found {
                return Err(SegmentError::NotFound { id: id.clone() });
            }
        }

        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("segment API returned {status}"));
        Err(SegmentError::persistence(message))
    }
}

#[async_trait]
impl SegmentRepository for HttpSegmentClient {
    async fn create(&self, draft: SegmentDraft) -> Result<Segment, SegmentError> {
        let url = format!(
            "{}/api/v1/environments/{}/segments",
            self.config.base_url, draft.environment_id
        );
        debug!(%url, survey_id = %draft.survey_id, "creating segment");

        let response = self
            .client
            .post(&url)
            .json(&draft)
            .send()
            .await
            .map_err(|err| SegmentError::persistence(err.to_string()))?;

        Self::parse_segment(response, None).await
    }

    async fn update(&self, id: &SegmentId, update: SegmentUpdate) -> Result<Segment, SegmentError> {
        let url = format!("{}/api/v1/segments/{}", self.config.base_url, id);
        debug!(%url, "updating segment");

        let response = self
            .client
            .patch(&url)
            .json(&update)
            .send()
            .await
            .map_err(|err| SegmentError::persistence(err.to_string()))?;

        Self::parse_segment(response, Some(id)).await
    }
}
