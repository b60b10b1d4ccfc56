//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /          - Home page (product rails)
//! GET  /category  - Category browser (filter + pagination)
//! GET  /health    - Health check
//! ```

pub mod category;
pub mod home;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/category", get(category::index))
}
