//! Certifurb backend API client for the CMS.
//!
//! The CMS talks to the admin-scoped endpoints (`/api/cms/...`) plus the
//! public catalogue endpoint for dashboard counts. Responses are parsed
//! into typed records here at the boundary.
//!
//! The failure taxonomy matches the storefront's: [`CmsError::Http`] for
//! transport failures, [`CmsError::Api`] for `success: false` answers, and
//! a valid-but-empty page is simply an empty `Vec`.

mod client;
pub mod types;

pub use client::{CmsClient, PAGE_SIZE};
pub use types::{
    ApiEnvelope, CustomerPage, CustomerRecord, OrderCustomer, OrderPage, OrderRecord,
    PageMeta, ProductSummary, SessionUser, UserRecord,
};

use thiserror::Error;

/// Errors that can occur when talking to the Certifurb backend API.
#[derive(Debug, Error)]
pub enum CmsError {
    /// HTTP request failed (network-level).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with `success: false`.
    #[error("API error: {0}")]
    Api(String),

    /// Response body did not match the expected schema.
    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        /// Endpoint path the response came from.
        endpoint: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The backend reported success but sent no data payload.
    #[error("empty response from {0}")]
    EmptyData(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = CmsError::Api("Invalid credentials".to_string());
        assert_eq!(err.to_string(), "API error: Invalid credentials");
    }

    #[test]
    fn test_empty_data_display() {
        let err = CmsError::EmptyData("/api/cms/customers");
        assert_eq!(err.to_string(), "empty response from /api/cms/customers");
    }
}
