//! Admin dashboard API

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use crate::db::repository::summary;
use shared::error::AppResult;
use shared::response::AdminSummary;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/admin/summary", get(get_summary))
}

/// Row counts per entity
async fn get_summary(State(state): State<ServerState>) -> AppResult<Json<AdminSummary>> {
    let counts = summary::counts(state.pool()).await?;
    Ok(Json(counts))
}
