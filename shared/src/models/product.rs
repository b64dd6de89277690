//! Product Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::category::CategoryRef;
use super::serde_helpers::double_option;
use crate::error::FieldError;
use crate::validation::{
    MAX_SHORT_TEXT_LEN, Schema, check_max_len, check_url_list, check_uuid,
};

/// Product entity
///
/// `category` is the embedded owner (`null` when unlinked).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub main_image_url: String,
    #[serde(default)]
    pub gallery_image_urls: Vec<String>,
    pub badge_text: Option<String>,
    pub badge_color: Option<String>,
    pub badge_icon: Option<String>,
    pub category_id: Option<String>,
    pub category: Option<CategoryRef>,
    pub created_at: i64,
}

/// Product embedded in menu item responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: String,
    pub title: String,
}

/// List filter for `GET /api/products`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Case-insensitive substring of title or description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

/// Create product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 5000,
        message = "Description must be 1 to 5000 characters"
    ))]
    pub description: String,
    #[serde(default)]
    #[validate(
        url(message = "Main image URL must be a valid URL"),
        length(max = 2048, message = "Main image URL is too long")
    )]
    pub main_image_url: String,
    #[serde(default)]
    #[validate(length(max = 20, message = "At most 20 gallery images"))]
    pub gallery_image_urls: Vec<String>,
    #[validate(length(max = 100, message = "Badge text must be at most 100 characters"))]
    pub badge_text: Option<String>,
    #[validate(length(max = 100, message = "Badge color must be at most 100 characters"))]
    pub badge_color: Option<String>,
    #[validate(length(max = 100, message = "Badge icon must be at most 100 characters"))]
    pub badge_icon: Option<String>,
    #[validate(custom(function = "crate::validation::uuid"))]
    pub category_id: Option<String>,
}

impl Schema for ProductCreate {
    fn extra_rules(&self, errors: &mut Vec<FieldError>) {
        check_url_list(errors, "galleryImageUrls", &self.gallery_image_urls);
    }
}

/// Update product payload
///
/// Badge fields and `categoryId` accept `null` to clear them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(
        min = 1,
        max = 5000,
        message = "Description must be 1 to 5000 characters"
    ))]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        url(message = "Main image URL must be a valid URL"),
        length(max = 2048, message = "Main image URL is too long")
    )]
    pub main_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 20, message = "At most 20 gallery images"))]
    pub gallery_image_urls: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub badge_text: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub badge_color: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub badge_icon: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<Option<String>>,
}

impl Schema for ProductUpdate {
    fn extra_rules(&self, errors: &mut Vec<FieldError>) {
        if let Some(urls) = &self.gallery_image_urls {
            check_url_list(errors, "galleryImageUrls", urls);
        }
        for (field, value) in [
            ("badgeText", &self.badge_text),
            ("badgeColor", &self.badge_color),
            ("badgeIcon", &self.badge_icon),
        ] {
            if let Some(Some(text)) = value {
                check_max_len(errors, field, text, MAX_SHORT_TEXT_LEN);
            }
        }
        if let Some(Some(id)) = &self.category_id {
            check_uuid(errors, "categoryId", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ProductCreate {
        ProductCreate {
            title: "Sourdough".into(),
            description: "Naturally leavened".into(),
            main_image_url: "https://cdn.example.com/bread.jpg".into(),
            ..Default::default()
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_create_valid() {
        assert!(valid().check().is_ok());
    }

    #[test]
    fn test_create_missing_required_fields() {
        let payload: ProductCreate = serde_json::from_str("{}").unwrap();
        let errors = payload.check().unwrap_err();
        assert_eq!(fields(&errors), vec!["description", "mainImageUrl", "title"]);
    }

    #[test]
    fn test_create_gallery_entries_indexed() {
        let payload = ProductCreate {
            gallery_image_urls: vec![
                "https://cdn.example.com/1.jpg".into(),
                "https://cdn.example.com/2.jpg".into(),
                "not a url".into(),
            ],
            ..valid()
        };
        let errors = payload.check().unwrap_err();
        assert_eq!(fields(&errors), vec!["galleryImageUrls.2"]);
    }

    #[test]
    fn test_create_rejects_bad_category_id() {
        let payload = ProductCreate {
            category_id: Some("nope".into()),
            ..valid()
        };
        assert_eq!(fields(&payload.check().unwrap_err()), vec!["categoryId"]);
    }

    #[test]
    fn test_update_accepts_any_subset() {
        assert!(ProductUpdate::default().check().is_ok());
        let title_only: ProductUpdate = serde_json::from_str(r#"{"title":"New"}"#).unwrap();
        assert!(title_only.check().is_ok());
        let unlink: ProductUpdate =
            serde_json::from_str(r#"{"categoryId":null,"badgeText":null}"#).unwrap();
        assert_eq!(unlink.category_id, Some(None));
        assert_eq!(unlink.badge_text, Some(None));
        assert!(unlink.check().is_ok());
    }

    #[test]
    fn test_update_applies_create_rules_to_present_fields() {
        let patch: ProductUpdate = serde_json::from_str(
            r#"{"title":"","mainImageUrl":"nope","badgeIcon":"xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx","categoryId":"123"}"#,
        )
        .unwrap();
        let errors = patch.check().unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["badgeIcon", "categoryId", "mainImageUrl", "title"]
        );
    }

    #[test]
    fn test_update_serializes_only_present_fields() {
        let patch = ProductUpdate {
            category_id: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"categoryId":null}"#);
    }
}
