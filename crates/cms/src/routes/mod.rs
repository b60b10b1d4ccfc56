//! HTTP route handlers for the CMS.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Login page
//! POST /login              - Login action
//! POST /logout             - Logout action
//!
//! # Protected (RequireCmsAuth)
//! GET  /dashboard          - Dashboard (role-gated)
//! GET  /dashboard/metrics  - Metric tiles fragment (HTMX, polled)
//! GET  /customers          - Customers list
//! GET  /customers/table    - Customers table fragment (HTMX)
//! GET  /orders             - Orders list
//! GET  /orders/table       - Orders table fragment (HTMX)
//! GET  /refund             - Refund screen (static mock)
//! ```

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod refund;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the CMS.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::login_page))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/dashboard/metrics", get(dashboard::metrics))
        .route("/customers", get(customers::index))
        .route("/customers/table", get(customers::table))
        .route("/orders", get(orders::index))
        .route("/orders/table", get(orders::table))
        .route("/refund", get(refund::index))
}
