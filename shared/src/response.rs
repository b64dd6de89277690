//! API response types that are not entities

use serde::{Deserialize, Serialize};

/// Body of every successful `DELETE`
///
/// ```json
/// { "deleted": true, "id": "4f0c..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: String,
}

impl DeleteResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            deleted: true,
            id: id.into(),
        }
    }
}

/// Result of `POST /api/upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Public URL of the stored image
    pub url: String,
    /// Storage key (`images/{sha256}.jpg`)
    pub key: String,
    /// Stored size in bytes
    pub size: u64,
    pub content_type: String,
}

/// Row counts for the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub categories: i64,
    pub products: i64,
    pub menu_items: i64,
    pub faqs: i64,
    pub image_messages: i64,
    pub misc_content: i64,
}

/// `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// ok | degraded
    pub status: String,
    pub version: String,
    /// ok | error
    pub database: String,
}
