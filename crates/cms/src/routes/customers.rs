//! Customers list route handlers.
//!
//! The page shell renders once; the table itself is an HTMX fragment
//! re-fetched whenever the page number changes or the (debounced) search
//! input settles. Swapping the fragment wholesale is what clears row
//! selection on every re-fetch.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use crate::backend::{CmsError, CustomerRecord, PAGE_SIZE};
use crate::components::data_table::{DataTableConfig, TableColumn, customers_table_config};
use crate::components::pagination::{self, PaginationView};
use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::RequireCmsAuth;
use crate::state::AppState;

use super::dashboard::UserView;

/// Avatar background classes, cycled by row index.
pub(crate) const AVATAR_CLASSES: [&str; 5] = [
    "avatar-orange",
    "avatar-blue",
    "avatar-green",
    "avatar-purple",
    "avatar-red",
];

/// Uppercase initials for the avatar circle.
pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// Avatar class for a row index.
pub(crate) fn avatar_class(index: usize) -> &'static str {
    AVATAR_CLASSES
        .get(index % AVATAR_CLASSES.len())
        .copied()
        .unwrap_or("avatar-blue")
}

/// Query parameters for the list and its table fragment.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub search: Option<String>,
}

/// One rendered customer row.
pub struct CustomerRow {
    pub id: i64,
    pub name: String,
    pub initials: String,
    pub avatar_class: &'static str,
    pub email: String,
    pub orders: i64,
    pub total_spent: String,
    pub has_card: bool,
    pub last_order: String,
}

impl CustomerRow {
    fn from_record(record: &CustomerRecord, index: usize) -> Self {
        Self {
            id: record.id.as_i64(),
            name: record.name.clone(),
            initials: initials(&record.name),
            avatar_class: avatar_class(index),
            email: record.email.clone().unwrap_or_default(),
            orders: record.orders,
            total_spent: record.total_spent.clone().unwrap_or_else(|| "$0".to_string()),
            has_card: record.has_card,
            last_order: record.last_order_date.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Customers table fragment template.
#[derive(Template)]
#[template(path = "customers/table.html")]
pub struct CustomersTableTemplate {
    pub table_id: String,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<CustomerRow>,
    pub pagination: PaginationView,
    pub error: Option<String>,
    pub search: String,
    pub search_param: String,
    pub empty_title: String,
    pub empty_hint: String,
}

/// Customers list page template.
#[derive(Template)]
#[template(path = "customers/index.html")]
pub struct CustomersIndexTemplate {
    pub user: UserView,
    pub current_path: String,
    pub search: String,
    pub search_placeholder: String,
    pub total_items: u64,
    pub table_html: String,
}

/// Customers list page handler.
///
/// GET /customers
#[instrument(skip(user, state))]
pub async fn index(
    RequireCmsAuth(user): RequireCmsAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let config = customers_table_config();
    let page = query.page.unwrap_or(1).max(1);
    let search = query.search.unwrap_or_default();

    let (table_html, total_items) = render_table(&state, &config, page, &search).await?;

    let template = CustomersIndexTemplate {
        user: UserView::from(&user),
        current_path: "/customers".to_string(),
        search_placeholder: config.search_placeholder,
        search,
        total_items,
        table_html,
    };
    Ok(Html(template.render()?))
}

/// Customers table fragment handler (HTMX).
///
/// GET /customers/table
#[instrument(skip(_user, state))]
pub async fn table(
    RequireCmsAuth(_user): RequireCmsAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let config = customers_table_config();
    let page = query.page.unwrap_or(1).max(1);
    let search = query.search.unwrap_or_default();

    let (html, _) = render_table(&state, &config, page, &search).await?;
    Ok(Html(html))
}

/// Fetch one page and render the table fragment.
///
/// Returns the rendered HTML plus the total item count (for the page
/// shell's status tabs).
async fn render_table(
    state: &AppState,
    config: &DataTableConfig,
    page: u32,
    search: &str,
) -> Result<(String, u64), AppError> {
    let result = state.backend().get_customers(page, Some(search)).await;

    let (rows, view, error, total_items) = match result {
        Ok(data) => {
            let rows: Vec<CustomerRow> = data
                .customers
                .iter()
                .enumerate()
                .map(|(index, record)| CustomerRow::from_record(record, index))
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
            tracing::error!("Failed to fetch customers: {e}");
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

    let template = CustomersTableTemplate {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Carry Anna"), "CA");
        assert_eq!(initials("Stanly Drinkwater"), "SD");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_avatar_class_cycles() {
        assert_eq!(avatar_class(0), "avatar-orange");
        assert_eq!(avatar_class(4), "avatar-red");
        assert_eq!(avatar_class(5), "avatar-orange");
    }
}
