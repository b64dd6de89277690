//! Shared types for the storefront
//!
//! Domain models, validation schemas, error codes and the API error body used
//! by both the server and the typed client.

pub mod error;
pub mod models;
pub mod response;
pub mod util;
pub mod validation;

// Re-exports
pub use error::{AppError, AppResult, ErrorBody, ErrorCode, FieldError};
pub use response::{AdminSummary, DeleteResponse, HealthResponse, UploadResponse};
pub use validation::Schema;
