//! Application state shared across handlers.

use std::sync::{Arc, Mutex};

use crate::backend::CmsClient;
use crate::config::CmsConfig;
use crate::metrics::MetricsState;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The dashboard metric walk is the only
/// shared mutable state; everything else renders from per-request fetches.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CmsConfig,
    backend: CmsClient,
    metrics: Mutex<MetricsState>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: CmsConfig) -> Self {
        let backend = CmsClient::new(&config.api);
        let metrics = Mutex::new(MetricsState::seed(
            &mut rand::rng(),
            chrono::Utc::now().date_naive(),
        ));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                metrics,
            }),
        }
    }

    /// Get a reference to the CMS configuration.
    #[must_use]
    pub fn config(&self) -> &CmsConfig {
        &self.inner.config
    }

    /// Get a reference to the backend API client.
    #[must_use]
    pub fn backend(&self) -> &CmsClient {
        &self.inner.backend
    }

    /// Get the dashboard metric state.
    #[must_use]
    pub fn metrics(&self) -> &Mutex<MetricsState> {
        &self.inner.metrics
    }
}
