//! HTTP client for the backend catalogue endpoint.

use std::time::Duration;

use tracing::instrument;

use crate::config::BackendApiConfig;

use super::types::{ApiEnvelope, ProductRecord};
use super::BackendError;

/// Per-request timeout against the backend API.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Certifurb backend catalogue API.
///
/// Each call issues a fresh request; every page view renders its own
/// immutable snapshot of the catalogue, so there is deliberately no cache
/// in front of this client.
#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalogue client.
    #[must_use]
    pub fn new(config: &BackendApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// Fetch the full product list.
    ///
    /// `GET /api/products`
    ///
    /// An empty catalogue is `Ok(vec![])`; only transport failures,
    /// `success: false` responses, and malformed bodies are errors.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] naming which of those happened.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<ProductRecord>, BackendError> {
        const ENDPOINT: &str = "/api/products";

        let response = self
            .client
            .get(format!("{}{ENDPOINT}", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let body = response.text().await?;

        let envelope: ApiEnvelope<Vec<ProductRecord>> =
            serde_json::from_str(&body).map_err(|source| BackendError::Decode {
                endpoint: ENDPOINT,
                source,
            })?;

        envelope.into_result(ENDPOINT)
    }
}
