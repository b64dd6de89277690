//! Request extractors

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_path_to_error::{Path, Segment};

use shared::error::{AppError, ErrorCode, FieldError};
use shared::validation::{Schema, to_camel_case};

/// JSON body that has passed its [`Schema`]
///
/// Syntactically broken bodies become `MalformedBody` (400, decoder message,
/// no details). A value of the wrong type, or a missing non-string field,
/// becomes `ValidationFailed` with the failing field path, as do schema
/// failures.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Schema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::with_message(ErrorCode::MalformedBody, rejection.body_text())
            })?;
        let value: T = serde_path_to_error::deserialize(raw).map_err(data_error)?;
        value.check().map_err(AppError::validation)?;
        Ok(Self(value))
    }
}

/// Query string decoded into `T`, rejected with a JSON error body
#[derive(Debug, Clone, Default)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::with_message(ErrorCode::InvalidRequest, rejection.body_text())
            })?;
        Ok(Self(value))
    }
}

/// Attribute a typed decode failure to its field
fn data_error(err: serde_path_to_error::Error<serde_json::Error>) -> AppError {
    let message = err.inner().to_string();
    let mut field = field_path(err.path());
    // serde reports a missing field against its parent
    if let Some(missing) = missing_field(&message) {
        field = if field.is_empty() {
            to_camel_case(missing)
        } else {
            format!("{field}.{}", to_camel_case(missing))
        };
    }
    if field.is_empty() {
        return AppError::with_message(ErrorCode::MalformedBody, message);
    }
    AppError::validation(vec![FieldError::new(field, message)])
}

/// `items[2].badgeColor` as `items.2.badgeColor`
fn field_path(path: &Path) -> String {
    path.iter()
        .filter_map(|segment| match segment {
            Segment::Seq { index } => Some(index.to_string()),
            Segment::Map { key } => Some(to_camel_case(key)),
            Segment::Enum { variant } => Some(variant.clone()),
            Segment::Unknown => None,
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(dead_code)]
    struct Payload {
        question: String,
        price: f64,
        #[serde(default)]
        gallery_image_urls: Vec<String>,
    }

    fn decode(json: &str) -> AppError {
        let raw: serde_json::Value = serde_json::from_str(json).unwrap();
        let decoded: Result<Payload, _> = serde_path_to_error::deserialize(raw);
        data_error(decoded.unwrap_err())
    }

    #[test]
    fn test_null_field_is_attributed() {
        let err = decode(r#"{"question": null, "price": 1.0}"#);
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.unwrap()[0].field, "question");
    }

    #[test]
    fn test_nested_index_path() {
        let err = decode(r#"{"question": "Q", "price": 1.0, "galleryImageUrls": ["a", 7]}"#);
        assert_eq!(err.details.unwrap()[0].field, "galleryImageUrls.1");
    }

    #[test]
    fn test_missing_field_is_attributed() {
        let err = decode(r#"{"question": "Q"}"#);
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.unwrap()[0].field, "price");
    }

    #[test]
    fn test_wrong_top_level_shape_is_malformed() {
        let err = decode(r#""just text""#);
        assert_eq!(err.code, ErrorCode::MalformedBody);
        assert!(err.details.is_none());
    }
}
