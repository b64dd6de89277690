//! Public page API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/site | GET | Every public section, with per-section fallback flags |

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use crate::services::site;
use shared::models::SitePage;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/site", get(page))
}

async fn page(State(state): State<ServerState>) -> Json<SitePage> {
    let page = site::compose(&state).await;
    let fallbacks = page.fallback_sections();
    if !fallbacks.is_empty() {
        tracing::debug!(sections = ?fallbacks, "Serving fallback content");
    }
    Json(page)
}
