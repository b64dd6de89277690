//! Core module - configuration, state and server
//!
//! - [`Config`] - environment configuration
//! - [`ServerState`] - shared handler state
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, StorageBackend};
pub use server::{Server, serve};
pub use state::ServerState;
