//! Menu Item Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::category::CategoryRef;
use super::product::ProductRef;
use super::serde_helpers::double_option;
use crate::error::FieldError;
use crate::validation::{MAX_NOTE_LEN, Schema, check_max_len, check_uuid};

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub product_id: Option<String>,
    pub category_id: Option<String>,
    pub product: Option<ProductRef>,
    pub category: Option<CategoryRef>,
    pub created_at: i64,
}

/// List filter for `GET /api/menu-items`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Case-insensitive substring of name or description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

/// Create menu item payload
///
/// At least one of `productId` / `categoryId` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Name must be 1 to 200 characters"))]
    pub name: String,
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.01, max = 1000000.0, message = "Price must be between 0.01 and 1000000"))]
    pub price: f64,
    #[validate(custom(function = "crate::validation::uuid"))]
    pub product_id: Option<String>,
    #[validate(custom(function = "crate::validation::uuid"))]
    pub category_id: Option<String>,
}

impl Schema for MenuItemCreate {
    fn extra_rules(&self, errors: &mut Vec<FieldError>) {
        if self.product_id.is_none() && self.category_id.is_none() {
            errors.push(FieldError::new(
                "productId",
                "Either productId or categoryId is required",
            ));
        }
    }
}

/// Update menu item payload
///
/// `description`, `productId` and `categoryId` accept `null`. Clearing both
/// links is allowed here even though create requires one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "Name must be 1 to 200 characters"))]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.01, max = 1000000.0, message = "Price must be between 0.01 and 1000000"))]
    pub price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_id: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<Option<String>>,
}

impl Schema for MenuItemUpdate {
    fn extra_rules(&self, errors: &mut Vec<FieldError>) {
        if let Some(Some(text)) = &self.description {
            check_max_len(errors, "description", text, MAX_NOTE_LEN);
        }
        if let Some(Some(id)) = &self.product_id {
            check_uuid(errors, "productId", id);
        }
        if let Some(Some(id)) = &self.category_id {
            check_uuid(errors, "categoryId", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_ID: &str = "0b6c3a1e-7d2f-4b8e-9a51-3f0d2c4e6a78";

    fn with_price(price: f64) -> MenuItemCreate {
        MenuItemCreate {
            name: "Latte".into(),
            price,
            product_id: Some(PRODUCT_ID.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_price_bounds() {
        assert!(with_price(0.01).check().is_ok());
        assert!(with_price(4.5).check().is_ok());
        for bad in [0.005, 0.0, -1.0] {
            let errors = with_price(bad).check().unwrap_err();
            assert_eq!(errors[0].field, "price", "price {bad}");
        }
    }

    #[test]
    fn test_create_requires_a_link() {
        let payload = MenuItemCreate {
            product_id: None,
            ..with_price(3.0)
        };
        let errors = payload.check().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "productId");

        let by_category = MenuItemCreate {
            product_id: None,
            category_id: Some(PRODUCT_ID.into()),
            ..with_price(3.0)
        };
        assert!(by_category.check().is_ok());
    }

    #[test]
    fn test_create_missing_fields() {
        let payload: MenuItemCreate =
            serde_json::from_str(&format!(r#"{{"productId":"{PRODUCT_ID}"}}"#)).unwrap();
        let errors = payload.check().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "price"]);
    }

    #[test]
    fn test_create_rejects_malformed_ids() {
        let payload = MenuItemCreate {
            category_id: Some("abc".into()),
            ..with_price(1.0)
        };
        assert_eq!(payload.check().unwrap_err()[0].field, "categoryId");
    }

    #[test]
    fn test_update_accepts_any_subset() {
        assert!(MenuItemUpdate::default().check().is_ok());
        let price_only: MenuItemUpdate = serde_json::from_str(r#"{"price":2.25}"#).unwrap();
        assert!(price_only.check().is_ok());
        let clear_links: MenuItemUpdate =
            serde_json::from_str(r#"{"productId":null,"categoryId":null}"#).unwrap();
        assert!(clear_links.check().is_ok());
        assert_eq!(clear_links.product_id, Some(None));
    }

    #[test]
    fn test_update_rejects_present_fields_like_create() {
        let patch: MenuItemUpdate =
            serde_json::from_str(r#"{"name":"","price":0.005,"productId":"x"}"#).unwrap();
        let errors = patch.check().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "price", "productId"]);
    }
}
