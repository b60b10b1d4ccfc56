//! Data table component types.
//!
//! These types define the configuration for the admin list tables. The
//! sortable flag only controls whether the header renders sort arrows;
//! no sorting semantics hang off it.

use serde::{Deserialize, Serialize};

/// Column definition for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column header renders sort arrows.
    pub sortable: bool,
}

impl TableColumn {
    /// Create a new sortable-looking column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: true,
        }
    }

    /// Create a new plain column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: String,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            search_placeholder: "Search...".to_string(),
            empty_title: "No items found".to_string(),
            empty_description: String::new(),
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, title: &str, description: &str) -> Self {
        self.empty_title = title.to_string();
        self.empty_description = description.to_string();
        self
    }
}

/// Build the customers table configuration.
#[must_use]
pub fn customers_table_config() -> DataTableConfig {
    DataTableConfig::new("customers")
        .column(TableColumn::sortable("customer", "Customer"))
        .column(TableColumn::sortable("email", "Email"))
        .column(TableColumn::sortable("orders", "Orders"))
        .column(TableColumn::sortable("total_spent", "Total Spent"))
        .column(TableColumn::sortable("has_card", "Has Card"))
        .column(TableColumn::sortable("last_order", "Last Order"))
        .search_placeholder("Search customers by name or email")
        .empty_state(
            "No customers found",
            "Customers will appear here when they register",
        )
}

/// Build the orders table configuration.
#[must_use]
pub fn orders_table_config() -> DataTableConfig {
    DataTableConfig::new("orders")
        .column(TableColumn::sortable("order", "Order"))
        .column(TableColumn::sortable("total", "Total"))
        .column(TableColumn::sortable("customer", "Customer"))
        .column(TableColumn::sortable("payment_status", "Payment Status"))
        .column(TableColumn::sortable("fulfillment_status", "Fulfillment Status"))
        .column(TableColumn::new("delivery_type", "Delivery Type"))
        .column(TableColumn::sortable("date", "Date"))
        .search_placeholder("Search orders, customers, or products")
        .empty_state("No orders found", "Orders will appear here once placed")
}
