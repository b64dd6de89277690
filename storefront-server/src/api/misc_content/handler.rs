//! Misc Content API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::{ApiQuery, ValidatedJson};
use crate::core::ServerState;
use crate::db::repository::misc_content;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MiscContent, MiscContentCreate, MiscContentFilter, MiscContentUpdate};
use shared::response::DeleteResponse;

/// GET /api/misc-content?section= - oldest first
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(filter): ApiQuery<MiscContentFilter>,
) -> AppResult<Json<Vec<MiscContent>>> {
    let rows = misc_content::find_all(state.pool(), &filter).await?;
    Ok(Json(rows))
}

/// GET /api/misc-content/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MiscContent>> {
    let row = misc_content::find_by_id(state.pool(), &id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::MiscContentNotFound, &id))?;
    Ok(Json(row))
}

/// POST /api/misc-content
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<MiscContentCreate>,
) -> AppResult<(StatusCode, Json<MiscContent>)> {
    let row = misc_content::create(state.pool(), payload).await?;
    tracing::info!(id = %row.id, section = %row.section, "Misc content created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/misc-content/{id} - `null` clears an optional field
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<MiscContentUpdate>,
) -> AppResult<Json<MiscContent>> {
    let row = misc_content::update(state.pool(), &id, payload).await?;
    tracing::info!(id = %id, "Misc content updated");
    Ok(Json(row))
}

/// DELETE /api/misc-content/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    misc_content::delete(state.pool(), &id).await?;
    tracing::info!(id = %id, "Misc content deleted");
    Ok(Json(DeleteResponse::new(id)))
}
