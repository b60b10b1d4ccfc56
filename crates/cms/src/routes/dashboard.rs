//! Dashboard route handlers.
//!
//! The dashboard is role-gated on top of login. Its two backend fetches
//! exist only to gate the loading state and fill the users/products
//! counters; the headline metrics are a mock random walk (there is no
//! aggregation endpoint yet), and chart drawing is delegated to Chart.js
//! in the template.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::metrics::{DayPoint, MetricsSnapshot};
use crate::middleware::auth::RequireCmsAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

/// Logged-in user view for templates.
#[derive(Debug, Clone)]
pub struct UserView {
    pub name: String,
    pub email: String,
}

impl From<&CurrentUser> for UserView {
    fn from(user: &CurrentUser) -> Self {
        Self {
            name: user.display_name().to_string(),
            email: user.email.clone().unwrap_or_default(),
        }
    }
}

/// Headline metric tiles, formatted for display.
#[derive(Debug, Clone)]
pub struct MetricsView {
    pub total_orders: u64,
    pub new_customers: u64,
    pub orders_change: String,
    pub customers_change: String,
    pub new_orders: u64,
    pub orders_on_hold: u64,
    pub out_of_stock: u64,
}

fn format_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{change}%")
    } else {
        format!("{change}%")
    }
}

impl From<&MetricsSnapshot> for MetricsView {
    fn from(snapshot: &MetricsSnapshot) -> Self {
        Self {
            total_orders: snapshot.total_orders,
            new_customers: snapshot.new_customers,
            orders_change: format_change(snapshot.orders_change),
            customers_change: format_change(snapshot.customers_change),
            new_orders: snapshot.new_orders,
            orders_on_hold: snapshot.orders_on_hold,
            out_of_stock: snapshot.out_of_stock,
        }
    }
}

/// Chart payload handed to Chart.js as JSON.
#[derive(Serialize)]
struct ChartData {
    labels: Vec<String>,
    sales: Vec<u64>,
    projected: Vec<f64>,
    customers: Vec<u64>,
    orders: Vec<u64>,
}

#[allow(clippy::cast_precision_loss)]
fn chart_json(series: &[DayPoint]) -> Result<String, AppError> {
    let data = ChartData {
        labels: series.iter().map(|d| d.date.clone()).collect(),
        sales: series.iter().map(|d| d.sales).collect(),
        projected: series.iter().map(|d| d.sales as f64 * 0.8).collect(),
        customers: series.iter().map(|d| d.customers).collect(),
        orders: series.iter().map(|d| d.orders).collect(),
    };
    serde_json::to_string(&data).map_err(|e| AppError::Internal(e.to_string()))
}

/// Metric tiles fragment template (polled via HTMX).
#[derive(Template)]
#[template(path = "dashboard/metrics.html")]
pub struct MetricsFragmentTemplate {
    pub metrics: MetricsView,
}

/// Dashboard page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub user: UserView,
    pub current_path: String,
    pub users_count: usize,
    pub products_count: usize,
    pub metrics_html: String,
    pub chart_json: String,
}

/// Dashboard page handler.
///
/// GET /dashboard
#[instrument(skip(user, state))]
pub async fn dashboard(
    RequireCmsAuth(user): RequireCmsAuth,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !user.can_view_dashboard() {
        return Ok(Redirect::to("/").into_response());
    }

    // Both fetches gate the loading state only; either failing degrades to
    // a zero count, never an error page.
    let (users_result, products_result) =
        tokio::join!(state.backend().get_users(), state.backend().get_products());

    let users_count = users_result.map_or_else(
        |e| {
            tracing::error!("Failed to fetch users: {e}");
            0
        },
        |users| users.len(),
    );
    let products_count = products_result.map_or_else(
        |e| {
            tracing::error!("Failed to fetch products: {e}");
            0
        },
        |products| products.len(),
    );

    let (metrics_view, chart) = {
        let guard = state
            .metrics()
            .lock()
            .map_err(|_| AppError::Internal("metrics lock poisoned".to_string()))?;
        (MetricsView::from(&guard.snapshot), chart_json(&guard.series)?)
    };

    let metrics_html = MetricsFragmentTemplate {
        metrics: metrics_view,
    }
    .render()?;

    let template = DashboardTemplate {
        user: UserView::from(&user),
        current_path: "/dashboard".to_string(),
        users_count,
        products_count,
        metrics_html,
        chart_json: chart,
    };

    Ok(Html(template.render()?).into_response())
}

/// Metric tiles fragment handler, polled every 5 seconds by the dashboard.
/// Each poll advances the mock walk one tick; when the page is left the
/// polling stops with it, so no timer outlives the view.
///
/// GET /dashboard/metrics
#[instrument(skip(user, state))]
pub async fn metrics(
    RequireCmsAuth(user): RequireCmsAuth,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !user.can_view_dashboard() {
        return Ok(axum::http::StatusCode::FORBIDDEN.into_response());
    }

    let view = {
        let mut guard = state
            .metrics()
            .lock()
            .map_err(|_| AppError::Internal("metrics lock poisoned".to_string()))?;
        guard.snapshot.step(&mut rand::rng());
        MetricsView::from(&guard.snapshot)
    };

    let template = MetricsFragmentTemplate { metrics: view };
    Ok(Html(template.render()?).into_response())
}
