//! Storefront Client - typed HTTP client for the storefront server
//!
//! - [`HttpClient`]: one method per endpoint, error bodies mapped back to
//!   [`ClientError`] with validation details preserved
//! - [`ListState`]: admin list kept in memory and spliced after each
//!   mutation, with a case-insensitive search over the loaded items

pub mod config;
pub mod error;
pub mod http;
pub mod list;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use list::{ListState, Searchable};

// Re-export shared types for convenience
pub use shared::error::{ErrorBody, ErrorCode, FieldError};
pub use shared::models;
pub use shared::response::{AdminSummary, DeleteResponse, HealthResponse, UploadResponse};
