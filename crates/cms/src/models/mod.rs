//! Domain models for the CMS.

pub mod session;

pub use session::{CurrentUser, session_keys};
