//! Status enumerations for orders and CMS users.
//!
//! The backend API reports statuses as free-form label strings. These enums
//! are the closed set the UI knows how to render; anything outside it falls
//! back to a neutral badge instead of crashing the view.

use serde::{Deserialize, Serialize};

/// Badge color tone, mapped to a CSS class by the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Green,
    Blue,
    Orange,
    Red,
    Neutral,
}

impl Tone {
    /// CSS class suffix for this tone.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Green => "badge-green",
            Self::Blue => "badge-blue",
            Self::Orange => "badge-orange",
            Self::Red => "badge-red",
            Self::Neutral => "badge-neutral",
        }
    }
}

/// A status rendered as a colored pill in the admin tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    /// Uppercase display label.
    pub label: String,
    /// Badge color tone.
    pub tone: Tone,
}

impl StatusBadge {
    /// A neutral badge carrying a raw label, for status values outside the
    /// known enumeration.
    #[must_use]
    pub fn neutral(label: &str) -> Self {
        Self {
            label: label.to_uppercase(),
            tone: Tone::Neutral,
        }
    }
}

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Cancelled,
    Failed,
}

impl PaymentStatus {
    /// Parse a backend label, case-insensitively.
    ///
    /// Returns `None` for labels outside the known set; callers render
    /// those with [`StatusBadge::neutral`].
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "PAID" => Some(Self::Paid),
            "PENDING" => Some(Self::Pending),
            "CANCELLED" => Some(Self::Cancelled),
            "FAILED" => Some(Self::Failed),
            _ => None,
        }
    }

    /// The badge this status renders as.
    #[must_use]
    pub fn badge(self) -> StatusBadge {
        let (label, tone) = match self {
            Self::Paid => ("PAID", Tone::Green),
            Self::Pending => ("PENDING", Tone::Orange),
            Self::Cancelled => ("CANCELLED", Tone::Neutral),
            Self::Failed => ("FAILED", Tone::Red),
        };
        StatusBadge {
            label: label.to_string(),
            tone,
        }
    }
}

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentStatus {
    Fulfilled,
    ReadyToPickup,
    PartiallyFulfilled,
    Cancelled,
}

impl FulfillmentStatus {
    /// Parse a backend label, case-insensitively.
    ///
    /// Accepts both the bare form (`"FULFILLED"`) and the prefixed form the
    /// backend uses in order payloads (`"ORDER FULFILLED"`).
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "FULFILLED" | "ORDER FULFILLED" => Some(Self::Fulfilled),
            "READY TO PICKUP" => Some(Self::ReadyToPickup),
            "PARTIAL FULFILLED" | "PARTIALLY FULFILLED" => Some(Self::PartiallyFulfilled),
            "CANCELLED" | "ORDER CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// The badge this status renders as.
    #[must_use]
    pub fn badge(self) -> StatusBadge {
        let (label, tone) = match self {
            Self::Fulfilled => ("ORDER FULFILLED", Tone::Green),
            Self::ReadyToPickup => ("READY TO PICKUP", Tone::Blue),
            Self::PartiallyFulfilled => ("PARTIAL FULFILLED", Tone::Orange),
            Self::Cancelled => ("ORDER CANCELLED", Tone::Neutral),
        };
        StatusBadge {
            label: label.to_string(),
            tone,
        }
    }
}

/// Role of a CMS user, as reported by the login endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CmsRole {
    Admin,
    Marketer,
    Sales,
}

impl CmsRole {
    /// Parse a backend role string, case-insensitively.
    #[must_use]
    pub fn parse(role: &str) -> Option<Self> {
        match role.trim().to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "marketer" => Some(Self::Marketer),
            "sales" => Some(Self::Sales),
            _ => None,
        }
    }

    /// Whether this role may view the CMS dashboard.
    #[must_use]
    pub const fn can_view_dashboard(self) -> bool {
        matches!(self, Self::Admin | Self::Marketer | Self::Sales)
    }

    /// Lowercase label, as the backend spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Marketer => "marketer",
            Self::Sales => "sales",
        }
    }
}
