//! Misc Content Model
//!
//! Generic page content keyed by a free-text `section`
//! (`hero`, `location`, `our-story`, ...).

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::serde_helpers::double_option;
use crate::error::FieldError;
use crate::validation::{
    MAX_BODY_LEN, MAX_HEADING_LEN, MAX_SHORT_TEXT_LEN, MAX_SMALL_TEXT_LEN, Schema,
    check_max_len, check_url,
};

/// Well-known sections read by the public page
pub mod sections {
    pub const HERO: &str = "hero";
    pub const LOCATION: &str = "location";
    pub const OUR_STORY: &str = "our-story";
}

/// Misc content entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct MiscContent {
    pub id: String,
    pub section: String,
    pub image_url: Option<String>,
    pub icon: Option<String>,
    pub large_text: Option<String>,
    pub small_text: Option<String>,
    pub message: Option<String>,
    pub created_at: i64,
}

/// List filter for `GET /api/misc-content`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MiscContentFilter {
    /// Exact section match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Create misc content payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MiscContentCreate {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Section must be 1 to 100 characters"))]
    pub section: String,
    #[validate(
        url(message = "Image URL must be a valid URL"),
        length(max = 2048, message = "Image URL is too long")
    )]
    pub image_url: Option<String>,
    #[validate(length(max = 100, message = "Icon must be at most 100 characters"))]
    pub icon: Option<String>,
    #[validate(length(max = 500, message = "Large text must be at most 500 characters"))]
    pub large_text: Option<String>,
    #[validate(length(max = 2000, message = "Small text must be at most 2000 characters"))]
    pub small_text: Option<String>,
    #[validate(length(max = 5000, message = "Message must be at most 5000 characters"))]
    pub message: Option<String>,
}

impl Schema for MiscContentCreate {}

/// Update misc content payload; every optional field accepts `null`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MiscContentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "Section must be 1 to 100 characters"))]
    pub section: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub large_text: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub small_text: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<Option<String>>,
}

impl Schema for MiscContentUpdate {
    fn extra_rules(&self, errors: &mut Vec<FieldError>) {
        if let Some(Some(url)) = &self.image_url {
            check_url(errors, "imageUrl", url);
        }
        for (field, value, max) in [
            ("icon", &self.icon, MAX_SHORT_TEXT_LEN),
            ("largeText", &self.large_text, MAX_HEADING_LEN),
            ("smallText", &self.small_text, MAX_SMALL_TEXT_LEN),
            ("message", &self.message, MAX_BODY_LEN),
        ] {
            if let Some(Some(text)) = value {
                check_max_len(errors, field, text, max);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_required() {
        let payload: MiscContentCreate =
            serde_json::from_str(r#"{"largeText":"Welcome"}"#).unwrap();
        let errors = payload.check().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "section");
    }

    #[test]
    fn test_optional_fields_validated_when_present() {
        let payload = MiscContentCreate {
            section: sections::HERO.into(),
            image_url: Some("not-a-url".into()),
            small_text: Some("s".repeat(2001)),
            ..Default::default()
        };
        let fields: Vec<String> = payload
            .check()
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["imageUrl", "smallText"]);
    }

    #[test]
    fn test_update_clears_with_null() {
        let patch: MiscContentUpdate =
            serde_json::from_str(r#"{"imageUrl":null,"message":"Hi"}"#).unwrap();
        assert_eq!(patch.image_url, Some(None));
        assert_eq!(patch.message, Some(Some("Hi".into())));
        assert!(patch.icon.is_none());
        assert!(patch.check().is_ok());
    }

    #[test]
    fn test_update_validates_present_values() {
        let patch: MiscContentUpdate =
            serde_json::from_str(r#"{"imageUrl":"bad","section":""}"#).unwrap();
        let fields: Vec<String> = patch
            .check()
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["imageUrl", "section"]);
    }
}
