//! Integration tests for Certifurb.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the backend API, then the two binaries:
//! cargo run -p certifurb-storefront
//! cargo run -p certifurb-cms
//!
//! # Run integration tests
//! cargo test -p certifurb-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_category` - Category browser page tests
//! - `cms_auth` - CMS login flow tests
//! - `cms_tables` - Customers/orders list tests

#![cfg_attr(not(test), forbid(unsafe_code))]
