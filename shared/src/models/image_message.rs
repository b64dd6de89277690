//! Image Message Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::Schema;

/// Image + message pair shown as a page highlight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct ImageMessage {
    pub id: String,
    pub image_url: String,
    pub message: String,
    pub icon: String,
    pub created_at: i64,
}

/// Create image message payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ImageMessageCreate {
    #[serde(default)]
    #[validate(
        url(message = "Image URL must be a valid URL"),
        length(max = 2048, message = "Image URL is too long")
    )]
    pub image_url: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 1000, message = "Message must be 1 to 1000 characters"))]
    pub message: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Icon must be 1 to 100 characters"))]
    pub icon: String,
}

impl Schema for ImageMessageCreate {}

/// Update image message payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ImageMessageUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        url(message = "Image URL must be a valid URL"),
        length(max = 2048, message = "Image URL is too long")
    )]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 1000, message = "Message must be 1 to 1000 characters"))]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "Icon must be 1 to 100 characters"))]
    pub icon: Option<String>,
}

impl Schema for ImageMessageUpdate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_required() {
        let payload: ImageMessageCreate = serde_json::from_str("{}").unwrap();
        let fields: Vec<String> = payload
            .check()
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["icon", "imageUrl", "message"]);
    }

    #[test]
    fn test_valid_payload() {
        let payload = ImageMessageCreate {
            image_url: "https://cdn.example.com/oven.jpg".into(),
            message: "Baked every morning".into(),
            icon: "sun".into(),
        };
        assert!(payload.check().is_ok());
    }

    #[test]
    fn test_update_rejects_bad_url() {
        let patch = ImageMessageUpdate {
            image_url: Some("ftp//broken".into()),
            ..Default::default()
        };
        assert_eq!(patch.check().unwrap_err()[0].field, "imageUrl");
    }
}
