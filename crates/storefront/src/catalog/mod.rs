//! Category browser view-state logic.
//!
//! The category page is a pure function of its query parameters: a price
//! range, an optional category, an optional brand, and a visible-count
//! window over the filtered result. Everything here is synchronous and
//! unit-tested; the route handler only glues it to the fetched catalogue.

mod filter;
mod range;
mod window;

pub use filter::{Selection, MONITOR_AGGREGATE};
pub use range::{PriceRange, MIN_GAP, PRICE_MAX, PRICE_MIN};
pub use window::{VisibleWindow, DEFAULT_VISIBLE, SHOW_MORE_STEP};

/// A category tile: display name, the `filter` value it selects, and its
/// tile image.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTile {
    pub name: &'static str,
    pub filter: &'static str,
    pub image: &'static str,
}

/// The certified-renewed category tiles, in display order.
pub const CATEGORY_TILES: &[CategoryTile] = &[
    CategoryTile {
        name: "Laptops",
        filter: "Laptop",
        image: "/static/images/laptop.png",
    },
    CategoryTile {
        name: "Desktop PC",
        filter: "Desktop PC",
        image: "/static/images/pc-1.jpg",
    },
    CategoryTile {
        name: "Mouse",
        filter: "Mouse",
        image: "/static/images/mouse-1.jpg",
    },
    CategoryTile {
        name: "Keyboard",
        filter: "Keyboard",
        image: "/static/images/keyboard-1.png",
    },
    CategoryTile {
        name: "Monitors",
        filter: "Monitors",
        image: "/static/images/monitor-1.png",
    },
    CategoryTile {
        name: "Drive",
        filter: "Drive",
        image: "/static/images/drive-1.jpg",
    },
    CategoryTile {
        name: "Network",
        filter: "Network",
        image: "/static/images/network-router.png",
    },
    CategoryTile {
        name: "Printer",
        filter: "Printer",
        image: "/static/images/printer-1.png",
    },
    CategoryTile {
        name: "Tablet",
        filter: "Tablet",
        image: "/static/images/ipad-1.jpg",
    },
];
