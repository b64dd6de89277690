//! Data models
//!
//! Shared between storefront-server and its clients (via API).
//! Simple rows derive `sqlx::FromRow` behind the `db` feature; rows with
//! embedded relations are assembled by the server repositories.
//! All IDs are UUIDv4 strings, all timestamps are epoch milliseconds.

pub mod category;
pub mod faq;
pub mod image_message;
pub mod menu_item;
pub mod misc_content;
pub mod product;
pub mod review;
pub mod serde_helpers;
pub mod site;

// Re-exports
pub use category::*;
pub use faq::*;
pub use image_message::*;
pub use menu_item::*;
pub use misc_content::*;
pub use product::*;
pub use review::*;
pub use site::*;
