//! Wire types for the CMS-scoped backend endpoints.

use serde::Deserialize;

use certifurb_core::{CustomerId, OrderId, ProductId, UserId};

use super::CmsError;

/// The `{ success, data, message }` envelope the CMS endpoints use.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope into its payload.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::Api`] carrying the backend's message when
    /// `success` is false, and [`CmsError::EmptyData`] when the backend
    /// claims success without a payload.
    pub fn into_result(self, endpoint: &'static str) -> Result<T, CmsError> {
        if !self.success {
            return Err(CmsError::Api(
                self.message
                    .unwrap_or_else(|| format!("request to {endpoint} failed")),
            ));
        }
        self.data.ok_or(CmsError::EmptyData(endpoint))
    }
}

/// A customer row as the backend reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub orders: i64,
    #[serde(default)]
    pub total_spent: Option<String>,
    #[serde(default)]
    pub has_card: bool,
    #[serde(default)]
    pub last_order_date: Option<String>,
}

/// The customer a CMS order belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCustomer {
    pub name: String,
}

/// An order row as the backend reports it.
///
/// The status fields are free-form label strings; the view layer maps them
/// into the closed badge enumeration and degrades unknown values to a
/// neutral badge.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: OrderId,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub total: Option<String>,
    #[serde(default)]
    pub customer: Option<OrderCustomer>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub fulfillment_status: Option<String>,
    #[serde(default)]
    pub delivery_type: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Server-side pagination metadata.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub total_items: u64,
}

/// One page of customers plus pagination metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerPage {
    #[serde(default)]
    pub customers: Vec<CustomerRecord>,
    pub pagination: PageMeta,
}

/// One page of orders plus pagination metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderPage {
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    pub pagination: PageMeta,
}

/// The session object the login endpoint returns.
///
/// Treated as mostly opaque: the CMS cares about the id for identity, the
/// name/email for the header, and the role for dashboard gating.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// A CMS user row (dashboard counts only).
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
}

/// A product row, reduced to what the dashboard counts.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSummary {
    #[serde(rename = "ProductID")]
    pub id: ProductId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_page_deserializes_backend_shape() {
        let json = r#"{
            "customers": [
                {
                    "id": 1,
                    "name": "Carry Anna",
                    "email": "annac34@gmail.com",
                    "orders": 89,
                    "totalSpent": "$23,987",
                    "hasCard": true,
                    "lastOrderDate": "Dec 12, 12:56 PM"
                }
            ],
            "pagination": { "totalPages": 4, "totalItems": 37 }
        }"#;
        let page: CustomerPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.customers.len(), 1);
        let customer = page.customers.first().unwrap();
        assert_eq!(customer.name, "Carry Anna");
        assert!(customer.has_card);
        assert_eq!(page.pagination.total_pages, 4);
        assert_eq!(page.pagination.total_items, 37);
    }

    #[test]
    fn test_order_record_tolerates_missing_fields() {
        let json = r#"{ "id": 2453 }"#;
        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(order.id.as_i64(), 2453);
        assert!(order.payment_status.is_none());
        assert!(order.customer.is_none());
    }

    #[test]
    fn test_login_failure_envelope_carries_exact_message() {
        let json = r#"{ "success": false, "message": "Invalid credentials" }"#;
        let envelope: ApiEnvelope<SessionUser> = serde_json::from_str(json).unwrap();
        let err = envelope.into_result("/api/cms/login").unwrap_err();
        match err {
            CmsError::Api(message) => assert_eq!(message, "Invalid credentials"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_session_user_tolerates_extra_fields() {
        let json = r#"{
            "id": 5,
            "email": "admin@email.com",
            "name": "Admin",
            "role": "admin",
            "createdAt": "2024-01-01"
        }"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.role.as_deref(), Some("admin"));
    }
}
