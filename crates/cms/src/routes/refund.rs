//! Refund screen route handler.
//!
//! A static mock: one hard-coded order and a summary card, rendered
//! read-only. There is no settlement logic behind it.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::RequireCmsAuth;
use crate::state::AppState;

use super::dashboard::UserView;

/// One line item on the refund screen.
#[derive(Clone)]
pub struct RefundItem {
    pub name: String,
    pub size: String,
    pub image: String,
}

/// The refund totals card.
#[derive(Clone)]
pub struct RefundSummary {
    pub subtotal: String,
    pub discount: String,
    pub tax: String,
    pub shipping: String,
    pub total: String,
}

/// Refund page template.
#[derive(Template)]
#[template(path = "refund.html")]
pub struct RefundTemplate {
    pub user: UserView,
    pub current_path: String,
    pub order_id: String,
    pub customer_id: String,
    pub items: Vec<RefundItem>,
    pub summary: RefundSummary,
}

fn item(name: &str, size: &str) -> RefundItem {
    RefundItem {
        name: name.to_string(),
        size: size.to_string(),
        image: "/static/images/mini-laptop.png".to_string(),
    }
}

/// The mock order shown on the refund screen.
fn mock_items() -> Vec<RefundItem> {
    vec![
        item(
            "Fitbit Sense Advanced Smartwatch with Tools for Heart Health, \
             Stress Management & Skin Temperature Trends...",
            "42",
        ),
        item("2021 Apple 12.9-inch iPad Pro (Wi-Fi, 128GB) - Space Gray", "Pro"),
        item("PlayStation 5 DualSense Wireless Controller", "Regular"),
        item("Apple MacBook Pro 13 inch-M1-8/256GB-space", "Pro"),
        item(
            "Apple iMac 24\" 4K Retina Display M1 8 Core CPU, 7 Core GPU, \
             256GB SSD, Green (MIV832P/A) 2021",
            "21\"",
        ),
        item("Apple Magic Mouse (Wireless, Rechargable) - Silver", "Regular"),
    ]
}

/// Refund page handler.
///
/// GET /refund
#[instrument(skip(user, _state))]
pub async fn index(
    RequireCmsAuth(user): RequireCmsAuth,
    State(_state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let template = RefundTemplate {
        user: UserView::from(&user),
        current_path: "/refund".to_string(),
        order_id: "#349".to_string(),
        customer_id: "2364847".to_string(),
        items: mock_items(),
        summary: RefundSummary {
            subtotal: "$7,686".to_string(),
            discount: "-$59".to_string(),
            tax: "$126.2".to_string(),
            shipping: "$30".to_string(),
            total: "$695.20".to_string(),
        },
    };
    Ok(Html(template.render()?))
}
