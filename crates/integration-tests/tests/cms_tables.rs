//! Integration tests for the CMS list views.
//!
//! These tests require:
//! - The Certifurb backend API running (CERTIFURB_API_URL)
//! - The CMS server running (cargo run -p certifurb-cms)
//! - Valid CMS credentials in CMS_TEST_EMAIL / CMS_TEST_PASSWORD
//!
//! Run with: cargo test -p certifurb-integration-tests -- --ignored

use reqwest::{Client, StatusCode};

/// Base URL for the CMS (configurable via environment).
fn cms_base_url() -> String {
    std::env::var("CMS_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Create an authenticated client by logging in through the real flow.
async fn authenticated_client() -> Client {
    let client = Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client");

    let email = std::env::var("CMS_TEST_EMAIL").unwrap_or_else(|_| "admin@email.com".to_string());
    let password = std::env::var("CMS_TEST_PASSWORD").unwrap_or_else(|_| "admin".to_string());

    let base_url = cms_base_url();
    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("email", email.as_str()), ("password", password.as_str())])
        .send()
        .await
        .expect("Failed to log in");
    assert!(resp.status().is_success());

    client
}

#[tokio::test]
#[ignore = "Requires running CMS server, backend API, and credentials"]
async fn test_customers_list_renders_table() {
    let client = authenticated_client().await;
    let base_url = cms_base_url();

    let resp = client
        .get(format!("{base_url}/customers"))
        .send()
        .await
        .expect("Failed to get customers list");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");

    // The search input carries the debounce and replace-sync attributes
    assert!(body.contains("delay:500ms"));
    assert!(body.contains("hx-sync"));
    // Table container for fragment swaps
    assert!(body.contains("customers-table-container"));
}

#[tokio::test]
#[ignore = "Requires running CMS server, backend API, and credentials"]
async fn test_customers_table_fragment_pagination() {
    let client = authenticated_client().await;
    let base_url = cms_base_url();

    let resp = client
        .get(format!("{base_url}/customers/table?page=2"))
        .header("HX-Request", "true")
        .send()
        .await
        .expect("Failed to get table fragment");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");

    // A fragment, not a full page
    assert!(!body.contains("<!DOCTYPE html>"));
}

#[tokio::test]
#[ignore = "Requires running CMS server, backend API, and credentials"]
async fn test_orders_list_renders_status_badges() {
    let client = authenticated_client().await;
    let base_url = cms_base_url();

    let resp = client
        .get(format!("{base_url}/orders"))
        .send()
        .await
        .expect("Failed to get orders list");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");

    assert!(body.contains("orders-table-container"));
    // Status cells render as badge pills when rows exist
    assert!(body.contains("badge") || body.contains("No orders found"));
}

#[tokio::test]
#[ignore = "Requires running CMS server, backend API, and credentials"]
async fn test_dashboard_polls_metrics_fragment() {
    let client = authenticated_client().await;
    let base_url = cms_base_url();

    let resp = client
        .get(format!("{base_url}/dashboard"))
        .send()
        .await
        .expect("Failed to get dashboard");

    // Either the dashboard renders (role allows it) or we are bounced home
    if resp.status() == StatusCode::OK {
        let body = resp.text().await.expect("Failed to read response");
        assert!(body.contains("hx-trigger=\"every 5s\""));
        assert!(body.contains("Total Orders"));

        let fragment = client
            .get(format!("{base_url}/dashboard/metrics"))
            .header("HX-Request", "true")
            .send()
            .await
            .expect("Failed to get metrics fragment");
        assert_eq!(fragment.status(), StatusCode::OK);
    }
}
