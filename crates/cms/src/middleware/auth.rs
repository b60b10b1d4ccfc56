//! Authentication middleware and extractors for the CMS.
//!
//! Provides an extractor for requiring a logged-in user in route handlers.
//! The session object is read on every protected-route check.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// Extractor that requires CMS authentication.
///
/// If nobody is logged in, full-page requests are redirected to the login
/// page; HTMX fragment requests get a bare 401 instead (swapping a login
/// page into a table container helps nobody).
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireCmsAuth(user): RequireCmsAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.display_name())
/// }
/// ```
pub struct RequireCmsAuth(pub CurrentUser);

/// Error returned when authentication is required but nobody is logged in.
pub enum CmsAuthRejection {
    /// Redirect to the login page (for full-page requests).
    RedirectToLogin,
    /// Unauthorized response (for HTMX fragment requests).
    Unauthorized,
}

impl IntoResponse for CmsAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireCmsAuth
where
    S: Send + Sync,
{
    type Rejection = CmsAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(CmsAuthRejection::Unauthorized)?;

        // Get the current user from the session
        let user: CurrentUser = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten()
            .ok_or_else(|| {
                // HTMX fragment requests carry the HX-Request header
                if parts.headers.contains_key("hx-request") {
                    CmsAuthRejection::Unauthorized
                } else {
                    CmsAuthRejection::RedirectToLogin
                }
            })?;

        Ok(Self(user))
    }
}

/// Helper to set the current user in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear the current user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await?;
    Ok(())
}
