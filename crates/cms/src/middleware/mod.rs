//! HTTP middleware stack for the CMS.

pub mod auth;
pub mod request_id;
pub mod session;

pub use auth::{RequireCmsAuth, clear_current_user, set_current_user};
pub use request_id::request_id_middleware;
pub use session::create_session_layer;
