//! Category Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::FieldError;
use crate::validation::{MAX_NAME_LEN, Schema};

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub created_at: i64,
}

/// Category list entry with dependent row counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithCounts {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub category: Category,
    pub product_count: i64,
    pub menu_item_count: i64,
}

/// Category embedded in product and menu item responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

/// Create category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    #[serde(default)]
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub name: String,
}

/// Names are stored trimmed, so the limit applies to the trimmed text
fn check_name_len(errors: &mut Vec<FieldError>, name: &str) {
    if name.trim().chars().count() > MAX_NAME_LEN {
        errors.push(FieldError::new(
            "name",
            format!("Name must be at most {MAX_NAME_LEN} characters"),
        ));
    }
}

impl Schema for CategoryCreate {
    fn extra_rules(&self, errors: &mut Vec<FieldError>) {
        check_name_len(errors, &self.name);
    }
}

/// Update category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub name: Option<String>,
}

impl Schema for CategoryUpdate {
    fn extra_rules(&self, errors: &mut Vec<FieldError>) {
        if let Some(name) = &self.name {
            check_name_len(errors, name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_reported() {
        let payload: CategoryCreate = serde_json::from_str("{}").unwrap();
        let errors = payload.check().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_blank_and_long_names_rejected() {
        let blank = CategoryCreate { name: "   ".into() };
        assert!(blank.check().is_err());
        let long = CategoryCreate {
            name: "x".repeat(101),
        };
        assert_eq!(long.check().unwrap_err()[0].field, "name");
        let ok = CategoryCreate {
            name: "x".repeat(100),
        };
        assert!(ok.check().is_ok());
    }

    #[test]
    fn test_length_measured_after_trim() {
        let padded = CategoryCreate {
            name: format!("  {}  ", "x".repeat(99)),
        };
        assert!(padded.check().is_ok());
        let rename = CategoryUpdate {
            name: Some(format!(" {} ", "x".repeat(101))),
        };
        let errors = rename.check().unwrap_err();
        assert_eq!(errors[0].message, "Name must be at most 100 characters");
    }

    #[test]
    fn test_update_accepts_empty_patch() {
        assert!(CategoryUpdate::default().check().is_ok());
        let blank = CategoryUpdate {
            name: Some(" ".into()),
        };
        assert!(blank.check().is_err());
    }

    #[test]
    fn test_counts_serialize_flat() {
        let entry = CategoryWithCounts {
            category: Category {
                id: "c1".into(),
                name: "Cakes".into(),
                created_at: 1,
            },
            product_count: 2,
            menu_item_count: 3,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "Cakes");
        assert_eq!(json["createdAt"], 1);
        assert_eq!(json["productCount"], 2);
        assert_eq!(json["menuItemCount"], 3);
    }
}
