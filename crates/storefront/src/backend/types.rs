//! Wire types for the backend API.

use rust_decimal::Decimal;
use serde::Deserialize;

use certifurb_core::{Price, ProductId};

use super::BackendError;

/// Fallback description for products missing one.
const DEFAULT_SPECS: &str = "High-quality refurbished product";

/// Fallback image for products missing one.
const DEFAULT_IMAGE: &str = "/static/images/laptop.png";

/// The `{ success, data, message }` envelope every backend endpoint uses.
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
    /// Returns [`BackendError::Api`] carrying the backend's message when
    /// `success` is false, and [`BackendError::EmptyData`] when the backend
    /// claims success without a payload.
    pub fn into_result(self, endpoint: &'static str) -> Result<T, BackendError> {
        if !self.success {
            return Err(BackendError::Api(
                self.message
                    .unwrap_or_else(|| format!("request to {endpoint} failed")),
            ));
        }
        self.data.ok_or(BackendError::EmptyData(endpoint))
    }
}

/// A product as the backend API reports it.
///
/// Everything beyond the id and name is optional; the accessors below apply
/// the display fallbacks so templates never deal with missing fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "ProductID")]
    pub id: ProductId,
    #[serde(rename = "ProductName")]
    pub name: String,
    #[serde(rename = "ProductDesc", default)]
    pub description: Option<String>,
    #[serde(
        rename = "ProductPrice",
        default,
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(rename = "ProductImageURL", default)]
    pub image_url: Option<String>,
    #[serde(rename = "ProductCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "ProductBrand", default)]
    pub brand: Option<String>,
    #[serde(rename = "ProductStorage", default)]
    pub storage: Option<String>,
    #[serde(rename = "ProductRam", default)]
    pub ram: Option<String>,
    #[serde(rename = "ProductKeyboard", default)]
    pub keyboard: Option<String>,
    #[serde(rename = "ProductScreenSize", default)]
    pub screen_size: Option<String>,
}

impl ProductRecord {
    /// The product price, if the backend supplied one.
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        self.price.map(Price::new)
    }

    /// Short spec line, falling back to a generic description.
    #[must_use]
    pub fn specs(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_SPECS)
    }

    /// Image URL, falling back to the placeholder.
    #[must_use]
    pub fn image(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_IMAGE)
    }

    /// Category label, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Brand label, if any.
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref().filter(|b| !b.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    /// Build a product record for tests.
    pub(crate) fn product(id: i64, name: &str, price: Option<&str>) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(id),
            name: name.to_string(),
            description: None,
            price: price.map(|p| p.parse().unwrap()),
            image_url: None,
            category: None,
            brand: None,
            storage: None,
            ram: None,
            keyboard: None,
            screen_size: None,
        }
    }

    #[test]
    fn test_envelope_success() {
        let envelope = ApiEnvelope {
            success: true,
            data: Some(vec![1, 2, 3]),
            message: None,
        };
        assert_eq!(envelope.into_result("/api/products").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_failure_carries_message() {
        let envelope: ApiEnvelope<Vec<i32>> = ApiEnvelope {
            success: false,
            data: None,
            message: Some("Failed to fetch products".to_string()),
        };
        let err = envelope.into_result("/api/products").unwrap_err();
        assert_eq!(err.to_string(), "API error: Failed to fetch products");
    }

    #[test]
    fn test_envelope_success_without_data() {
        let envelope: ApiEnvelope<Vec<i32>> = ApiEnvelope {
            success: true,
            data: None,
            message: None,
        };
        assert!(matches!(
            envelope.into_result("/api/products"),
            Err(BackendError::EmptyData("/api/products"))
        ));
    }

    #[test]
    fn test_product_record_deserializes_backend_shape() {
        let json = r#"{
            "ProductID": 17,
            "ProductName": "Lenovo Thinkpad T470s Core-i7-7th-Gen",
            "ProductDesc": "8GB-256 GB SSD-14\"-Win 10",
            "ProductPrice": 130000,
            "ProductImageURL": "/laptop.png",
            "ProductCategory": "Laptop",
            "ProductBrand": "Lenovo"
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_i64(), 17);
        assert_eq!(record.price().unwrap().format(), "PKR 130,000");
        assert_eq!(record.category(), Some("Laptop"));
    }

    #[test]
    fn test_missing_optional_fields_degrade_to_placeholders() {
        let json = r#"{ "ProductID": 1, "ProductName": "Mystery Device" }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.specs(), "High-quality refurbished product");
        assert_eq!(record.image(), "/static/images/laptop.png");
        assert!(record.price().is_none());
        assert!(record.category().is_none());
        assert!(record.brand().is_none());
    }

    #[test]
    fn test_empty_strings_treated_as_missing() {
        let record = ProductRecord {
            description: Some(String::new()),
            image_url: Some(String::new()),
            category: Some(String::new()),
            brand: Some(String::new()),
            ..product(1, "x", None)
        };
        assert_eq!(record.specs(), "High-quality refurbished product");
        assert_eq!(record.image(), "/static/images/laptop.png");
        assert!(record.category().is_none());
        assert!(record.brand().is_none());
    }
}
