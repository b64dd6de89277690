//! Reviews API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/reviews | GET | Places API reviews, or the sample set |

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use shared::models::ReviewSummary;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/reviews", get(list))
}

/// Always succeeds; `source` tells live and sample data apart
async fn list(State(state): State<ServerState>) -> Json<ReviewSummary> {
    Json(state.reviews.summary().await)
}
