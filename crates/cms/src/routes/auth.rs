//! Authentication route handlers for the CMS.
//!
//! The login form posts to the backend's login endpoint; this crate never
//! sees how credentials are checked. One request is one transition of the
//! `idle -> submitting -> redirect | idle+error` machine: on success the
//! session user is persisted before the redirect, on failure the form
//! re-renders with the backend's exact message and stays submittable.

use askama::Template;
use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use certifurb_core::Email;

use crate::backend::CmsError;
use crate::error::AppError;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::state::AppState;

/// Shown when the request to the backend itself fails.
const CONNECTION_ERROR_MESSAGE: &str = "Connection error. Please try again.";

/// Login page template.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    /// Error message from the previous attempt, if any.
    pub error: Option<String>,
    /// Email from the previous attempt, so the form stays editable.
    pub email: String,
}

/// Login form fields.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Render the login page.
///
/// GET /
pub async fn login_page() -> Result<Html<String>, AppError> {
    let template = LoginTemplate {
        error: None,
        email: String::new(),
    };
    Ok(Html(template.render()?))
}

/// Submit credentials to the backend and start a session.
///
/// POST /login
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if Email::parse(&form.email).is_err() {
        return rerender(form.email, "Please enter a valid email address".to_string());
    }

    match state.backend().login(&form.email, &form.password).await {
        Ok(user) => {
            // Persist the session before navigating
            let current = CurrentUser::from(user);
            set_current_user(&session, &current).await?;
            Ok(Redirect::to("/dashboard").into_response())
        }
        Err(CmsError::Api(message)) => {
            // The backend's message is shown verbatim ("Invalid credentials")
            rerender(form.email, message)
        }
        Err(e) => {
            tracing::error!("Login request failed: {e}");
            rerender(form.email, CONNECTION_ERROR_MESSAGE.to_string())
        }
    }
}

fn rerender(email: String, message: String) -> Result<Response, AppError> {
    let template = LoginTemplate {
        error: Some(message),
        email,
    };
    Ok(Html(template.render()?).into_response())
}

/// Logout and clear the session.
///
/// POST /logout
pub async fn logout(session: Session) -> Result<Response, AppError> {
    clear_current_user(&session).await?;
    Ok(Redirect::to("/").into_response())
}
