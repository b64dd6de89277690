//! Repository Module
//!
//! Free functions over a `SqlitePool`, one module per table. Each operation is
//! one or two statements with static joins and order clauses.

pub mod category;
pub mod faq;
pub mod image_message;
pub mod menu_item;
pub mod misc_content;
pub mod product;
pub mod summary;

use shared::error::{AppError, ErrorCode};
use sqlx::SqlitePool;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{} ({id})", .code.message())]
    NotFound { code: ErrorCode, id: String },

    #[error("{message}")]
    Duplicate {
        code: ErrorCode,
        field: &'static str,
        message: String,
    },

    /// A body field points at a row that does not exist
    #[error("{message}")]
    MissingReference {
        field: &'static str,
        message: String,
    },

    #[error("{1}")]
    Business(ErrorCode, String),

    #[error("Database error: {0}")]
    Database(String),
}

impl RepoError {
    pub fn not_found(code: ErrorCode, id: &str) -> Self {
        Self::NotFound {
            code,
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { code, id } => AppError::not_found(code, &id),
            RepoError::Duplicate {
                code,
                field,
                message,
            } => AppError::with_message(code, message.clone()).with_field(field, message),
            RepoError::MissingReference { field, message } => {
                AppError::with_message(ErrorCode::ReferenceNotFound, message.clone())
                    .with_field(field, message)
            }
            RepoError::Business(code, message) => AppError::with_message(code, message),
            RepoError::Database(message) => AppError::database(message),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Tables that body fields may reference
#[derive(Debug, Clone, Copy)]
pub(crate) enum RefTable {
    Category,
    Product,
}

impl RefTable {
    fn sql(self) -> &'static str {
        match self {
            RefTable::Category => "SELECT COUNT(*) FROM category WHERE id = ?",
            RefTable::Product => "SELECT COUNT(*) FROM product WHERE id = ?",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RefTable::Category => "Category",
            RefTable::Product => "Product",
        }
    }
}

/// Fail with `MissingReference` on `field` unless `id` exists in `table`
pub(crate) async fn ensure_ref(
    pool: &SqlitePool,
    table: RefTable,
    field: &'static str,
    id: &str,
) -> RepoResult<()> {
    let count: i64 = sqlx::query_scalar(table.sql())
        .bind(id)
        .fetch_one(pool)
        .await?;
    if count == 0 {
        return Err(RepoError::MissingReference {
            field,
            message: format!("{} {id} does not exist", table.label()),
        });
    }
    Ok(())
}

/// `%term%` for `LIKE ... ESCAPE '\'`, with wildcards in the term escaped
///
/// SQLite `LIKE` is case-insensitive for ASCII.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Trimmed, non-empty search term
pub(crate) fn search_term(q: Option<&str>) -> Option<&str> {
    q.map(str::trim).filter(|q| !q.is_empty())
}
