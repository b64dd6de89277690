//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::ValidatedJson;
use crate::core::ServerState;
use crate::db::repository::category;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CategoryCreate, CategoryUpdate, CategoryWithCounts};
use shared::response::DeleteResponse;

/// GET /api/categories - all categories by name, with dependent counts
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<CategoryWithCounts>>> {
    let categories = category::find_all(state.pool()).await?;
    Ok(Json(categories))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CategoryWithCounts>> {
    let category = category::find_by_id(state.pool(), &id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::CategoryNotFound, &id))?;
    Ok(Json(category))
}

/// POST /api/categories
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<CategoryCreate>,
) -> AppResult<(StatusCode, Json<CategoryWithCounts>)> {
    let category = category::create(state.pool(), payload).await?;
    tracing::info!(id = %category.category.id, name = %category.category.name, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CategoryUpdate>,
) -> AppResult<Json<CategoryWithCounts>> {
    let category = category::update(state.pool(), &id, payload).await?;
    tracing::info!(id = %id, "Category updated");
    Ok(Json(category))
}

/// DELETE /api/categories/{id} - refused while products or menu items use it
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    category::delete(state.pool(), &id).await?;
    tracing::info!(id = %id, "Category deleted");
    Ok(Json(DeleteResponse::new(id)))
}
