//! Unified error codes for the storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Catalog errors (categories, products, menu items)
//! - 7xxx: Content errors (FAQs, image messages, misc content)
//! - 8xxx: Upload errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a plain `u16` so the frontend can switch on it without
/// knowing the Rust names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Request body could not be decoded
    MalformedBody = 6,

    // ==================== 6xxx: Catalog ====================
    /// Category not found
    CategoryNotFound = 6001,
    /// Category name already in use
    CategoryNameExists = 6002,
    /// Category still owns products or menu items
    CategoryHasChildren = 6003,
    /// Product not found
    ProductNotFound = 6101,
    /// Menu item not found
    MenuItemNotFound = 6201,
    /// Menu item references neither a product nor a category
    MenuItemUnlinked = 6202,
    /// Referenced product or category does not exist
    ReferenceNotFound = 6203,

    // ==================== 7xxx: Content ====================
    /// FAQ not found
    FaqNotFound = 7001,
    /// Image message not found
    ImageMessageNotFound = 7101,
    /// Misc content record not found
    MiscContentNotFound = 7201,

    // ==================== 8xxx: Upload ====================
    /// No file field in the multipart body
    UploadMissingFile = 8001,
    /// File exceeds the configured size limit
    UploadTooLarge = 8002,
    /// File extension not accepted
    UploadUnsupportedFormat = 8003,
    /// File content is not a decodable image
    UploadInvalidImage = 8004,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
    /// Object storage error
    StorageError = 9004,
    /// Third-party service error
    ExternalServiceError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::MalformedBody => "Request body could not be parsed",

            // Catalog
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::CategoryNameExists => "A category with this name already exists",
            ErrorCode::CategoryHasChildren => {
                "Cannot delete category with associated products or menu items"
            }
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemUnlinked => "Menu item must reference a product or a category",
            ErrorCode::ReferenceNotFound => "Referenced record does not exist",

            // Content
            ErrorCode::FaqNotFound => "FAQ not found",
            ErrorCode::ImageMessageNotFound => "Image message not found",
            ErrorCode::MiscContentNotFound => "Content not found",

            // Upload
            ErrorCode::UploadMissingFile => "No file provided",
            ErrorCode::UploadTooLarge => "File too large",
            ErrorCode::UploadUnsupportedFormat => "Unsupported file format",
            ErrorCode::UploadInvalidImage => "File is not a valid image",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StorageError => "Storage error",
            ErrorCode::ExternalServiceError => "External service error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::MalformedBody),

            // Catalog
            6001 => Ok(ErrorCode::CategoryNotFound),
            6002 => Ok(ErrorCode::CategoryNameExists),
            6003 => Ok(ErrorCode::CategoryHasChildren),
            6101 => Ok(ErrorCode::ProductNotFound),
            6201 => Ok(ErrorCode::MenuItemNotFound),
            6202 => Ok(ErrorCode::MenuItemUnlinked),
            6203 => Ok(ErrorCode::ReferenceNotFound),

            // Content
            7001 => Ok(ErrorCode::FaqNotFound),
            7101 => Ok(ErrorCode::ImageMessageNotFound),
            7201 => Ok(ErrorCode::MiscContentNotFound),

            // Upload
            8001 => Ok(ErrorCode::UploadMissingFile),
            8002 => Ok(ErrorCode::UploadTooLarge),
            8003 => Ok(ErrorCode::UploadUnsupportedFormat),
            8004 => Ok(ErrorCode::UploadInvalidImage),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),
            9004 => Ok(ErrorCode::StorageError),
            9005 => Ok(ErrorCode::ExternalServiceError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::CategoryHasChildren.code(), 6003);
        assert_eq!(ErrorCode::FaqNotFound.code(), 7001);
        assert_eq!(ErrorCode::UploadTooLarge.code(), 8002);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_roundtrip_every_code() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::AlreadyExists,
            ErrorCode::InvalidRequest,
            ErrorCode::MalformedBody,
            ErrorCode::CategoryNotFound,
            ErrorCode::CategoryNameExists,
            ErrorCode::CategoryHasChildren,
            ErrorCode::ProductNotFound,
            ErrorCode::MenuItemNotFound,
            ErrorCode::MenuItemUnlinked,
            ErrorCode::ReferenceNotFound,
            ErrorCode::FaqNotFound,
            ErrorCode::ImageMessageNotFound,
            ErrorCode::MiscContentNotFound,
            ErrorCode::UploadMissingFile,
            ErrorCode::UploadTooLarge,
            ErrorCode::UploadUnsupportedFormat,
            ErrorCode::UploadInvalidImage,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
            ErrorCode::ConfigError,
            ErrorCode::StorageError,
            ErrorCode::ExternalServiceError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::ProductNotFound).unwrap();
        assert_eq!(json, "6101");
        let back: ErrorCode = serde_json::from_str("6101").unwrap();
        assert_eq!(back, ErrorCode::ProductNotFound);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
    }
}
