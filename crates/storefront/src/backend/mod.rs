//! Certifurb backend API client.
//!
//! All catalogue data lives behind the backend's REST API. This module owns
//! the boundary: the HTTP client, the response envelope, and the typed wire
//! records. Responses are validated here; nothing downstream ever sees an
//! undefined field.
//!
//! Three failure conditions are kept distinct (and the views render them
//! distinctly):
//! - [`BackendError::Http`] - the request itself failed (connection refused,
//!   timeout)
//! - [`BackendError::Api`] - the backend answered with `success: false`
//! - an empty product list, which is `Ok(vec![])`, not an error

mod client;
pub mod types;

pub use client::CatalogClient;
pub use types::{ApiEnvelope, ProductRecord};

use thiserror::Error;

/// Errors that can occur when talking to the Certifurb backend API.
#[derive(Debug, Error)]
pub enum BackendError {
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
