//! HTTP fetcher backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::domain::entities::Location;
use crate::domain::errors::FetchError;
use crate::domain::ports::FetcherPort;
use crate::infrastructure::config::FetcherConfig;

/// Fetches image bytes over HTTP(S) with a single GET per request.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates fetcher with default settings.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(&FetcherConfig::default())
    }

    /// Creates fetcher from configuration.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_config(config: &FetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::client(e.to_string()))?;

        Ok(Self { client })
    }

    fn map_send_error(error: &reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::timeout(error.to_string())
        } else {
            FetchError::network(error.to_string())
        }
    }
}

#[async_trait]
impl FetcherPort for HttpFetcher {
    async fn request(&self, location: &Location) -> Result<Bytes, FetchError> {
        debug!(url = %location, "Requesting image bytes");

        let response = self
            .client
            .get(location.url().clone())
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::body(e.to_string()))?;

        debug!(url = %location, byte_len = bytes.len(), "Received image bytes");
        Ok(bytes)
    }
}
