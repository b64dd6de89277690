//! Payload validation
//!
//! Payload structs declare their field rules with `#[derive(Validate)]`.
//! [`Schema::check`] runs those rules plus any cross-field rules and flattens
//! the result into a sorted list of [`FieldError`]s keyed by camelCase JSON
//! paths. Nested and list errors become dotted paths (`galleryImageUrls.2`).
//!
//! Required string fields are declared `#[serde(default)]` so an omitted key
//! decodes to `""` and is reported by its length rule under its own name.

use std::borrow::Cow;

use uuid::Uuid;
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors, ValidationErrorsKind};

pub use crate::error::FieldError;

// ── Text length limits ──────────────────────────────────────────────

/// Category names
pub const MAX_NAME_LEN: usize = 100;

/// Product titles and menu item names
pub const MAX_TITLE_LEN: usize = 200;

/// Badge text/color/icon, image message icons
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Menu item descriptions, image messages
pub const MAX_NOTE_LEN: usize = 1000;

/// FAQ questions, misc content large text
pub const MAX_HEADING_LEN: usize = 500;

/// Product descriptions, FAQ answers, misc content messages
pub const MAX_BODY_LEN: usize = 5000;

/// Misc content small text
pub const MAX_SMALL_TEXT_LEN: usize = 2000;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Gallery size
pub const MAX_GALLERY_IMAGES: usize = 20;

/// Smallest accepted menu item price
pub const MIN_PRICE: f64 = 0.01;

/// Largest accepted menu item price
pub const MAX_PRICE: f64 = 1_000_000.0;

/// A validated payload
///
/// Implementors get the derive rules for free and may add rules the derive
/// cannot express (tri-state fields, either-or requirements, list entries).
pub trait Schema: Validate {
    /// Cross-field or tri-state rules
    fn extra_rules(&self, _errors: &mut Vec<FieldError>) {}

    /// Run every rule and return the failures sorted by field path
    fn check(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(e) => flatten(&e),
        };
        self.extra_rules(&mut errors);
        if errors.is_empty() {
            return Ok(());
        }
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        Err(errors)
    }
}

/// Flatten validator output into dotted camelCase paths
pub fn flatten(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    flatten_into(errors, "", &mut out);
    out
}

fn flatten_into(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let name: &str = field;
        let path = join_path(prefix, &to_camel_case(name));
        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    out.push(FieldError::new(path.clone(), describe(name, err)));
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_into(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_into(nested, &join_path(&path, &index.to_string()), out);
                }
            }
        }
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

fn describe(field: &str, err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }
    let field = to_camel_case(field);
    match &*err.code {
        "length" => format!("{field} has an invalid length"),
        "url" => format!("{field} must be a valid URL"),
        "range" => format!("{field} is out of range"),
        "required" => format!("{field} is required"),
        other => format!("{field} is invalid ({other})"),
    }
}

/// `main_image_url` → `mainImageUrl`; already camelCase input is unchanged
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for ch in name.chars() {
        if ch == '_' {
            upper = !out.is_empty();
            continue;
        }
        if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

// ── Custom rules (used from `#[validate(custom(...))]`) ─────────────

/// Reject strings that are empty once trimmed
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "must not be blank"));
    }
    Ok(())
}

/// Require a hyphenated UUID
pub fn uuid(value: &str) -> Result<(), ValidationError> {
    if Uuid::parse_str(value).is_err() {
        return Err(error("uuid", "must be a valid UUID"));
    }
    Ok(())
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

// ── Helpers for rules the derive cannot express ─────────────────────

/// Push a length failure when `value` exceeds `max` characters
pub fn check_max_len(errors: &mut Vec<FieldError>, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
}

/// Push a URL failure when `value` is not a URL
pub fn check_url(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if !value.validate_url() || value.len() > MAX_URL_LEN {
        errors.push(FieldError::new(field, "must be a valid URL"));
    }
}

/// Push a UUID failure when `value` is not a UUID
pub fn check_uuid(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if Uuid::parse_str(value).is_err() {
        errors.push(FieldError::new(field, "must be a valid UUID"));
    }
}

/// Validate every entry of a URL list under indexed paths
pub fn check_url_list(errors: &mut Vec<FieldError>, field: &str, values: &[String]) {
    for (index, value) in values.iter().enumerate() {
        check_url(errors, &format!("{field}.{index}"), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Inner {
        #[validate(length(min = 1, message = "color is required"))]
        badge_color: String,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Outer {
        #[validate(length(min = 1, max = 5))]
        short_name: String,
        #[validate(nested)]
        inner: Inner,
        #[validate(nested)]
        items: Vec<Inner>,
    }

    impl Schema for Outer {}

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("main_image_url"), "mainImageUrl");
        assert_eq!(to_camel_case("question"), "question");
        assert_eq!(to_camel_case("galleryImageUrls"), "galleryImageUrls");
        assert_eq!(to_camel_case("_private"), "private");
    }

    #[test]
    fn test_flatten_nested_and_list_paths() {
        let value = Outer {
            short_name: "too long name".into(),
            inner: Inner {
                badge_color: String::new(),
            },
            items: vec![
                Inner {
                    badge_color: "red".into(),
                },
                Inner {
                    badge_color: String::new(),
                },
            ],
        };
        let errors = value.check().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["inner.badgeColor", "items.1.badgeColor", "shortName"]);
        assert_eq!(errors[0].message, "color is required");
        assert_eq!(errors[2].message, "shortName has an invalid length");
    }

    #[test]
    fn test_custom_rules() {
        assert!(not_blank("  x ").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(uuid("67e55044-10b1-426f-9247-bb680e5fe0c8").is_ok());
        assert!(uuid("not-a-uuid").is_err());
    }

    #[test]
    fn test_url_list_indexes() {
        let mut errors = Vec::new();
        check_url_list(
            &mut errors,
            "galleryImageUrls",
            &["https://example.com/a.jpg".into(), "nope".into()],
        );
        assert_eq!(errors, vec![FieldError::new("galleryImageUrls.1", "must be a valid URL")]);
    }

    #[test]
    fn test_check_max_len_counts_chars() {
        let mut errors = Vec::new();
        check_max_len(&mut errors, "icon", "ééé", 3);
        assert!(errors.is_empty());
        check_max_len(&mut errors, "icon", "éééé", 3);
        assert_eq!(errors.len(), 1);
    }
}
