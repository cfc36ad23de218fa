//! Segment API configuration

use std::time::Duration;

use serde::Deserialize;

use crate::adapters::SegmentApiConfig;

use super::error::ConfigValidationError;

/// Segment API endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentApiSettings {
    /// Base URL of the segment API.
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl SegmentApiSettings {
    /// Validates the settings.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigValidationError::InvalidApiBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }

    /// Builds the client configuration for `HttpSegmentClient`.
    pub fn client_config(&self) -> SegmentApiConfig {
        SegmentApiConfig::new(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}
