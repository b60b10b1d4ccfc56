//! Orders list route handlers.
//!
//! Same shape as the customers list: page shell plus an HTMX table
//! fragment. Status cells go through the closed badge enumeration; values
//! the enumeration does not know degrade to a neutral badge instead of
//! breaking the row.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use certifurb_core::{FulfillmentStatus, PaymentStatus, StatusBadge};

use crate::backend::{CmsError, OrderRecord, PAGE_SIZE};
use crate::components::data_table::{DataTableConfig, TableColumn, orders_table_config};
use crate::components::pagination::{self, PaginationView};
use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::RequireCmsAuth;
use crate::state::AppState;

use super::customers::{avatar_class, initials};
use super::dashboard::UserView;

/// Query parameters for the list and its table fragment.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub search: Option<String>,
}

/// Map a raw payment status label to its badge.
fn payment_badge(status: Option<&str>) -> StatusBadge {
    status.map_or_else(
        || StatusBadge::neutral("N/A"),
        |raw| PaymentStatus::parse(raw).map_or_else(|| StatusBadge::neutral(raw), PaymentStatus::badge),
    )
}

/// Map a raw fulfillment status label to its badge.
fn fulfillment_badge(status: Option<&str>) -> StatusBadge {
    status.map_or_else(
        || StatusBadge::neutral("N/A"),
        |raw| {
            FulfillmentStatus::parse(raw)
                .map_or_else(|| StatusBadge::neutral(raw), FulfillmentStatus::badge)
        },
    )
}

/// One rendered order row.
pub struct OrderRow {
    pub id: i64,
    pub order_number: String,
    pub total: String,
    pub customer_name: String,
    pub initials: String,
    pub avatar_class: &'static str,
    pub payment_badge: StatusBadge,
    pub fulfillment_badge: StatusBadge,
    pub delivery_type: String,
    pub date: String,
}

impl OrderRow {
    fn from_record(record: &OrderRecord, index: usize) -> Self {
        let customer_name = record
            .customer
            .as_ref()
            .map_or_else(|| "Guest".to_string(), |c| c.name.clone());
        Self {
            id: record.id.as_i64(),
            order_number: record
                .order_number
                .clone()
                .unwrap_or_else(|| format!("#{}", record.id)),
            total: record.total.clone().unwrap_or_else(|| "$0".to_string()),
            initials: initials(&customer_name),
            avatar_class: avatar_class(index),
            customer_name,
            payment_badge: payment_badge(record.payment_status.as_deref()),
            fulfillment_badge: fulfillment_badge(record.fulfillment_status.as_deref()),
            delivery_type: record.delivery_type.clone().unwrap_or_else(|| "-".to_string()),
            date: record.date.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Orders table fragment template.
#[derive(Template)]
#[template(path = "orders/table.html")]
pub struct OrdersTableTemplate {
    pub table_id: String,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<OrderRow>,
    pub pagination: PaginationView,
    pub error: Option<String>,
    pub search: String,
    pub search_param: String,
    pub empty_title: String,
    pub empty_hint: String,
}

/// Orders list page template.
#[derive(Template)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub user: UserView,
    pub current_path: String,
    pub search: String,
    pub search_placeholder: String,
    pub total_items: u64,
    pub table_html: String,
}

/// Orders list page handler.
///
/// GET /orders
#[instrument(skip(user, state))]
pub async fn index(
    RequireCmsAuth(user): RequireCmsAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let config = orders_table_config();
    let page = query.page.unwrap_or(1).max(1);
    let search = query.search.unwrap_or_default();

    let (table_html, total_items) = render_table(&state, &config, page, &search).await?;

    let template = OrdersIndexTemplate {
        user: UserView::from(&user),
        current_path: "/orders".to_string(),
        search_placeholder: config.search_placeholder,
        search,
        total_items,
        table_html,
    };
    Ok(Html(template.render()?))
}

/// Orders table fragment handler (HTMX).
///
/// GET /orders/table
#[instrument(skip(_user, state))]
pub async fn table(
    RequireCmsAuth(_user): RequireCmsAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let config = orders_table_config();
    let page = query.page.unwrap_or(1).max(1);
    let search = query.search.unwrap_or_default();

    let (html, _) = render_table(&state, &config, page, &search).await?;
    Ok(Html(html))
}

/// Fetch one page and render the table fragment.
async fn render_table(
    state: &AppState,
    config: &DataTableConfig,
    page: u32,
    search: &str,
) -> Result<(String, u64), AppError> {
    let result = state.backend().get_orders(page, Some(search)).await;

    let (rows, view, error, total_items) = match result {
        Ok(data) => {
            let rows: Vec<OrderRow> = data
                .orders
                .iter()
                .enumerate()
                .map(|(index, record)| OrderRow::from_record(record, index))
                .collect();
            let view = pagination::build(
                page,
                data.pagination.total_pages,
                data.pagination.total_items,
                PAGE_SIZE,
            );
            let total = data.pagination.total_items;
            (rows, view, None, total)
        }
        Err(e) => {
            tracing::error!("Failed to fetch orders: {e}");
            let message = match &e {
                CmsError::Api(message) => message.clone(),
                _ => "Failed to connect to server".to_string(),
            };
            (vec![], pagination::build(page, 0, 0, PAGE_SIZE), Some(message), 0)
        }
    };

    let empty_hint = if search.is_empty() {
        config.empty_description.clone()
    } else {
        "Try adjusting your search terms".to_string()
    };

    let template = OrdersTableTemplate {
        table_id: config.table_id.clone(),
        columns: config.columns.clone(),
        rows,
        pagination: view,
        error,
        search: search.to_string(),
        search_param: urlencoding::encode(search).into_owned(),
        empty_title: config.empty_title.clone(),
        empty_hint,
    };

    Ok((template.render()?, total_items))
}
