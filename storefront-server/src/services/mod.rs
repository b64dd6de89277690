//! Service layer
//!
//! - [`storage`] - upload backends (local directory, S3)
//! - [`reviews`] - Places API reviews with sample fallback
//! - [`site`] - public page composition
//! - [`fallback`] - placeholder page content

pub mod fallback;
pub mod reviews;
pub mod site;
pub mod storage;

pub use reviews::ReviewsService;
pub use storage::{ImageStore, LocalStore, S3Store, StorageError};
