//! Session middleware configuration for the CMS.
//!
//! Sessions live in the in-memory store for the lifetime of the process;
//! the cookie is a session cookie (`Expiry::OnSessionEnd`), so the login
//! lasts exactly as long as the browser session. The backend API owns all
//! durable state, so there is no database-backed store here.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::CmsConfig;

/// Session cookie name for the CMS.
pub const SESSION_COOKIE_NAME: &str = "certifurb_cms_session";

/// Create the session layer with the in-memory store.
#[must_use]
pub fn create_session_layer(config: &CmsConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    // Determine if we're in production (HTTPS)
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnSessionEnd)
        .with_secure(is_secure)
        // SameSite=Strict for the admin console
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
