//! Home page route handler.
//!
//! One catalogue fetch feeds every product rail. Each rail keeps its own
//! loaded/empty/failed rendering so a bad fetch degrades the sections
//! independently instead of taking down the page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::backend::{BackendError, ProductRecord};
use crate::catalog::{CATEGORY_TILES, CategoryTile};
use crate::filters;
use crate::state::AppState;

use super::category::category_url;

/// Markup of new-device pricing over renewed stock; the card badge shows
/// the inverse percentage.
const NEW_PRICE_MARKUP: f64 = 1.45;

/// Category label for G.O.A.T products.
const GOAT_CATEGORY: &str = "GOAT Product";

/// How many laptops the renewed-laptops rail shows.
const LAPTOP_RAIL_COUNT: usize = 3;

/// How many products the promotion rail shows.
const PROMOTION_RAIL_COUNT: usize = 10;

// =============================================================================
// View Types
// =============================================================================

/// Product display data for rail cards.
#[derive(Clone)]
pub struct ProductCard {
    pub name: String,
    pub specs: String,
    pub price: Option<String>,
    pub image: String,
    pub discount: Option<String>,
}

impl From<&ProductRecord> for ProductCard {
    fn from(record: &ProductRecord) -> Self {
        let price = record.price().map(|p| p.format());
        let discount = price
            .as_ref()
            .map(|_| format!("{}% vs. new", discount_vs_new()));
        Self {
            name: record.name.clone(),
            specs: record.specs().to_string(),
            price,
            image: record.image().to_string(),
            discount,
        }
    }
}

/// A horizontal product rail with its own loading outcome.
#[derive(Clone)]
pub struct RailView {
    pub title: String,
    pub see_all_url: Option<String>,
    pub cards: Vec<ProductCard>,
    pub empty_label: String,
    pub error: Option<String>,
}

/// A customer testimonial card.
#[derive(Clone)]
pub struct TestimonialView {
    pub name: String,
    pub review: String,
    pub description: String,
}

/// A certified-renewed category tile with its target URL.
#[derive(Clone)]
pub struct TileView {
    pub name: String,
    pub image: String,
    pub url: String,
}

// =============================================================================
// Static Content
// =============================================================================

/// Static testimonials for the homepage carousel.
fn get_testimonials() -> Vec<TestimonialView> {
    let testimonial = TestimonialView {
        name: "John Doe".to_string(),
        review: "Was good. This the second laptop I have....".to_string(),
        description: "Lorem Ipsum is simply dummy text of the printing and typesetting \
                      industry. Lorem Ipsum has been the industry's standard"
            .to_string(),
    };
    vec![testimonial; 4]
}

/// Badge percentage for renewed stock against new pricing.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn discount_vs_new() -> u32 {
    (((NEW_PRICE_MARKUP - 1.0) / NEW_PRICE_MARKUP) * 100.0).round() as u32
}

// =============================================================================
// Template
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Certified-renewed category tiles.
    pub tiles: Vec<TileView>,
    /// G.O.A.T products rail.
    pub goat: RailView,
    /// Renewed laptops rail.
    pub laptops: RailView,
    /// Promotion rail.
    pub promotion: RailView,
    /// Customer testimonials.
    pub testimonials: Vec<TestimonialView>,
}

fn tile_view(tile: &CategoryTile) -> TileView {
    TileView {
        name: tile.name.to_string(),
        image: tile.image.to_string(),
        url: category_url(Some(tile.filter), None, None, None),
    }
}

fn rail(
    title: &str,
    see_all_filter: Option<&str>,
    empty_label: &str,
    cards: Vec<ProductCard>,
    error: Option<String>,
) -> RailView {
    RailView {
        title: title.to_string(),
        see_all_url: see_all_filter.map(|f| category_url(Some(f), None, None, None)),
        cards,
        empty_label: empty_label.to_string(),
        error,
    }
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let result = state.catalog().get_products().await;

    let (goat, laptops, promotion) = match &result {
        Ok(products) => {
            let goat_cards: Vec<ProductCard> = products
                .iter()
                .filter(|p| p.category() == Some(GOAT_CATEGORY))
                .map(ProductCard::from)
                .collect();

            let laptop_cards: Vec<ProductCard> = products
                .iter()
                .filter(|p| {
                    p.category()
                        .is_some_and(|c| c.eq_ignore_ascii_case("Laptop"))
                })
                .take(LAPTOP_RAIL_COUNT)
                .map(ProductCard::from)
                .collect();

            let promotion_cards: Vec<ProductCard> = products
                .iter()
                .take(PROMOTION_RAIL_COUNT)
                .map(ProductCard::from)
                .collect();

            (
                rail(
                    "Shop G.O.A.T Products",
                    Some(GOAT_CATEGORY),
                    "No GOAT products found",
                    goat_cards,
                    None,
                ),
                rail(
                    "Certifurb Renewed Laptops",
                    Some("Laptop"),
                    "No laptops found",
                    laptop_cards,
                    None,
                ),
                rail(
                    "Certifurb Promotion",
                    None,
                    "No products found",
                    promotion_cards,
                    None,
                ),
            )
        }
        Err(e) => {
            tracing::error!("Failed to fetch products for home page: {e}");
            let message = match e {
                BackendError::Api(msg) => msg.clone(),
                _ => "Error connecting to server".to_string(),
            };
            (
                rail(
                    "Shop G.O.A.T Products",
                    Some(GOAT_CATEGORY),
                    "No GOAT products found",
                    vec![],
                    Some(message.clone()),
                ),
                rail(
                    "Certifurb Renewed Laptops",
                    Some("Laptop"),
                    "No laptops found",
                    vec![],
                    Some("Failed to load laptops".to_string()),
                ),
                rail(
                    "Certifurb Promotion",
                    None,
                    "No products found",
                    vec![],
                    Some(message),
                ),
            )
        }
    };

    HomeTemplate {
        tiles: CATEGORY_TILES.iter().map(tile_view).collect(),
        goat,
        laptops,
        promotion,
        testimonials: get_testimonials(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_vs_new() {
        // a 45% markup over renewed inverts to a 31% badge
        assert_eq!(discount_vs_new(), 31);
    }

    #[test]
    fn test_tile_views_link_into_category_browser() {
        let tiles: Vec<TileView> = CATEGORY_TILES.iter().map(tile_view).collect();
        assert_eq!(tiles.len(), 9);
        let monitors = tiles.iter().find(|t| t.name == "Monitors");
        assert_eq!(
            monitors.map(|t| t.url.as_str()),
            Some("/category?filter=Monitors")
        );
        let desktop = tiles.iter().find(|t| t.name == "Desktop PC");
        assert_eq!(
            desktop.map(|t| t.url.as_str()),
            Some("/category?filter=Desktop%20PC")
        );
    }
}
