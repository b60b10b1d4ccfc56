//! The product filter: price range AND category AND brand.

use rust_decimal::Decimal;

use crate::backend::ProductRecord;

use super::PriceRange;

/// The aggregate category label that spans both raw monitor categories.
pub const MONITOR_AGGREGATE: &str = "Monitors";

/// Raw backend categories covered by the [`MONITOR_AGGREGATE`] label.
const MONITOR_CATEGORIES: [&str; 2] = ["LCD", "LED"];

/// A full filter selection for the category browser.
///
/// Absent category/brand means "match all". The three facets combine with
/// AND. `matches` is a pure predicate; `apply` keeps the fetch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub price: PriceRange,
    pub category: Option<String>,
    pub brand: Option<String>,
}

impl Selection {
    /// Build a selection, treating empty strings as no selection.
    #[must_use]
    pub fn new(price: PriceRange, category: Option<String>, brand: Option<String>) -> Self {
        Self {
            price,
            category: category.filter(|c| !c.is_empty()),
            brand: brand.filter(|b| !b.is_empty()),
        }
    }

    /// Whether a product passes all three facets.
    ///
    /// A product without a price is excluded outright - never treated as
    /// costing zero.
    #[must_use]
    pub fn matches(&self, product: &ProductRecord) -> bool {
        let Some(price) = product.price() else {
            return false;
        };

        let amount = price.amount();
        if amount < Decimal::from(self.price.min()) || amount > Decimal::from(self.price.max()) {
            return false;
        }

        if let Some(category) = &self.category {
            let product_category = product.category().unwrap_or("");
            let in_category = if category == MONITOR_AGGREGATE {
                MONITOR_CATEGORIES.contains(&product_category)
            } else {
                product_category == category
            };
            if !in_category {
                return false;
            }
        }

        if let Some(brand) = &self.brand {
            match product.brand() {
                Some(product_brand) => {
                    if !product_brand.eq_ignore_ascii_case(brand) {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }

    /// Filter a product list, preserving the original fetch order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [ProductRecord]) -> Vec<&'a ProductRecord> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
