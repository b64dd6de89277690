//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

use shared::error::{ErrorBody, ErrorCode, FieldError};

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Payload rejected field by field
    #[error("Validation error: {}", format_details(.0))]
    Validation(Vec<FieldError>),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other error response
    #[error("{status}: {}", .body.error)]
    Api { status: StatusCode, body: ErrorBody },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-2xx response body to an error
    pub fn from_response(status: StatusCode, text: &str) -> Self {
        let Ok(body) = serde_json::from_str::<ErrorBody>(text) else {
            return match status {
                StatusCode::NOT_FOUND => Self::NotFound(text.to_string()),
                _ => Self::InvalidResponse(format!("{status}: {text}")),
            };
        };
        match (status, body.code) {
            (StatusCode::NOT_FOUND, _) => Self::NotFound(body.error),
            (_, ErrorCode::ValidationFailed) => Self::Validation(body.details.unwrap_or_default()),
            _ => Self::Api { status, body },
        }
    }

    /// Server error code, when the response carried one
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Validation(_) => Some(ErrorCode::ValidationFailed),
            Self::Api { body, .. } => Some(body.code),
            _ => None,
        }
    }

    /// Field-level details, empty when the error is not field-attributable
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(details) => details,
            Self::Api { body, .. } => body.details.as_deref().unwrap_or_default(),
            _ => &[],
        }
    }

    /// Message for the first failure on `field`
    pub fn field_message(&self, field: &str) -> Option<&str> {
        self.field_errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn format_details(details: &[FieldError]) -> String {
    details
        .iter()
        .map(|d| format!("{}: {}", d.field, d.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
