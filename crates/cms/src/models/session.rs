//! Session-related types for CMS authentication.
//!
//! The login endpoint hands back a session object; the parts the CMS needs
//! are stored in the server-side session under a fixed key and read on
//! every protected-route check.

use serde::{Deserialize, Serialize};

use certifurb_core::{CmsRole, UserId};

use crate::backend::SessionUser;

/// Session-stored identity of the logged-in CMS user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's backend ID.
    pub id: UserId,
    /// User's email address, if the backend sent one.
    pub email: Option<String>,
    /// User's display name, if the backend sent one.
    pub name: Option<String>,
    /// Parsed role; `None` when the backend's role string is outside the
    /// known set (such users stay logged in but cannot view the dashboard).
    pub role: Option<CmsRole>,
}

impl CurrentUser {
    /// Name to show in the header, falling back to email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("CMS User")
    }

    /// Whether this user may view the dashboard.
    #[must_use]
    pub fn can_view_dashboard(&self) -> bool {
        self.role.is_some_and(CmsRole::can_view_dashboard)
    }
}

impl From<SessionUser> for CurrentUser {
    fn from(user: SessionUser) -> Self {
        let role = user.role.as_deref().and_then(CmsRole::parse);
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role,
        }
    }
}

/// Session keys for CMS authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_user(role: Option<&str>) -> SessionUser {
        SessionUser {
            id: UserId::new(1),
            email: Some("admin@email.com".to_string()),
            name: Some("Admin".to_string()),
            role: role.map(String::from),
        }
    }

    #[test]
    fn test_known_roles_gate_the_dashboard() {
        for role in ["admin", "marketer", "sales"] {
            let user = CurrentUser::from(session_user(Some(role)));
            assert!(user.can_view_dashboard(), "role {role} should have access");
        }
    }

    #[test]
    fn test_unknown_or_missing_role_is_denied() {
        assert!(!CurrentUser::from(session_user(Some("viewer"))).can_view_dashboard());
        assert!(!CurrentUser::from(session_user(None)).can_view_dashboard());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = CurrentUser::from(session_user(Some("admin")));
        assert_eq!(user.display_name(), "Admin");
        user.name = None;
        assert_eq!(user.display_name(), "admin@email.com");
        user.email = None;
        assert_eq!(user.display_name(), "CMS User");
    }
}
