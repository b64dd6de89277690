//! Serde helpers for update payloads

use serde::{Deserialize, Deserializer};

/// Tri-state field: absent → `None`, `null` → `Some(None)`, value → `Some(Some(v))`
///
/// Use together with `#[serde(default)]`:
///
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Patch {
///     #[serde(default, deserialize_with = "shared::models::serde_helpers::double_option")]
///     badge: Option<Option<String>>,
/// }
///
/// let p: Patch = serde_json::from_str("{}").unwrap();
/// assert_eq!(p.badge, None);
/// let p: Patch = serde_json::from_str(r#"{"badge":null}"#).unwrap();
/// assert_eq!(p.badge, Some(None));
/// ```
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
