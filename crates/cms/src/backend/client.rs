//! HTTP client for the CMS-scoped backend endpoints.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::config::BackendApiConfig;

use super::CmsError;
use super::types::{
    ApiEnvelope, CustomerPage, OrderPage, ProductSummary, SessionUser, UserRecord,
};

/// Per-request timeout against the backend API.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Rows per page for the admin list views.
pub const PAGE_SIZE: u64 = 10;

/// Client for the Certifurb CMS backend endpoints.
#[derive(Clone)]
pub struct CmsClient {
    client: reqwest::Client,
    base_url: String,
}

impl CmsClient {
    /// Create a new CMS backend client.
    #[must_use]
    pub fn new(config: &BackendApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    async fn get_envelope<T>(
        &self,
        endpoint: &'static str,
        query: &[(&str, String)],
    ) -> Result<T, CmsError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .get(self.url(endpoint))
            .query(query)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let body = response.text().await?;

        let envelope: ApiEnvelope<T> =
            serde_json::from_str(&body).map_err(|source| CmsError::Decode { endpoint, source })?;

        envelope.into_result(endpoint)
    }

    /// Authenticate against the backend.
    ///
    /// `POST /api/cms/login`
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::Api`] with the backend's exact message (e.g.
    /// "Invalid credentials") when the login is rejected, or a transport
    /// error when the backend is unreachable.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, CmsError> {
        const ENDPOINT: &str = "/api/cms/login";

        let response = self
            .client
            .post(self.url(ENDPOINT))
            .json(&json!({ "email": email, "password": password }))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let body = response.text().await?;

        let envelope: ApiEnvelope<SessionUser> = serde_json::from_str(&body)
            .map_err(|source| CmsError::Decode {
                endpoint: ENDPOINT,
                source,
            })?;

        envelope.into_result(ENDPOINT)
    }

    /// Fetch one page of customers, optionally narrowed by a search term.
    ///
    /// `GET /api/cms/customers?page&limit&search`
    ///
    /// # Errors
    ///
    /// Returns a [`CmsError`] on transport, application, or decode failure.
    #[instrument(skip(self))]
    pub async fn get_customers(
        &self,
        page: u32,
        search: Option<&str>,
    ) -> Result<CustomerPage, CmsError> {
        let mut query = vec![
            ("page", page.to_string()),
            ("limit", PAGE_SIZE.to_string()),
        ];
        if let Some(term) = search.filter(|t| !t.is_empty()) {
            query.push(("search", term.to_string()));
        }
        self.get_envelope("/api/cms/customers", &query).await
    }

    /// Fetch one page of orders, optionally narrowed by a search term.
    ///
    /// `GET /api/cms/orders?page&limit&search`
    ///
    /// # Errors
    ///
    /// Returns a [`CmsError`] on transport, application, or decode failure.
    #[instrument(skip(self))]
    pub async fn get_orders(
        &self,
        page: u32,
        search: Option<&str>,
    ) -> Result<OrderPage, CmsError> {
        let mut query = vec![
            ("page", page.to_string()),
            ("limit", PAGE_SIZE.to_string()),
        ];
        if let Some(term) = search.filter(|t| !t.is_empty()) {
            query.push(("search", term.to_string()));
        }
        self.get_envelope("/api/cms/orders", &query).await
    }

    /// Fetch the CMS user list (dashboard counts only).
    ///
    /// `GET /api/cms/users` - note this endpoint returns a bare
    /// `{ data: [...] }` without the success flag.
    ///
    /// # Errors
    ///
    /// Returns a [`CmsError`] on transport or decode failure.
    #[instrument(skip(self))]
    pub async fn get_users(&self) -> Result<Vec<UserRecord>, CmsError> {
        const ENDPOINT: &str = "/api/cms/users";

        #[derive(Deserialize)]
        struct Payload {
            #[serde(default)]
            data: Vec<UserRecord>,
        }

        let response = self
            .client
            .get(self.url(ENDPOINT))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let body = response.text().await?;

        let payload: Payload = serde_json::from_str(&body).map_err(|source| CmsError::Decode {
            endpoint: ENDPOINT,
            source,
        })?;

        Ok(payload.data)
    }

    /// Fetch the product list (dashboard counts only).
    ///
    /// `GET /api/products`
    ///
    /// # Errors
    ///
    /// Returns a [`CmsError`] on transport, application, or decode failure.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<ProductSummary>, CmsError> {
        self.get_envelope("/api/products", &[]).await
    }
}
