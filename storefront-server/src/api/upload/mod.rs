//! Upload Routes
//!
//! `POST /api/upload` accepts one image in the multipart field `file`,
//! re-encodes it as JPEG and hands it to the configured storage backend.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/upload", post(handler::upload))
}
