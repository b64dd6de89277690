//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::{ApiQuery, ValidatedJson};
use crate::core::ServerState;
use crate::db::repository::menu_item;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MenuItem, MenuItemCreate, MenuItemFilter, MenuItemUpdate};
use shared::response::DeleteResponse;

/// GET /api/menu-items?productId=&categoryId=&q=
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(filter): ApiQuery<MenuItemFilter>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu_item::find_all(state.pool(), &filter).await?;
    Ok(Json(items))
}

/// GET /api/menu-items/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let item = menu_item::find_by_id(state.pool(), &id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::MenuItemNotFound, &id))?;
    Ok(Json(item))
}

/// POST /api/menu-items - needs a product or a category
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    let item = menu_item::create(state.pool(), payload).await?;
    tracing::info!(id = %item.id, name = %item.name, price = item.price, "Menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/menu-items/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    let item = menu_item::update(state.pool(), &id, payload).await?;
    tracing::info!(id = %id, "Menu item updated");
    Ok(Json(item))
}

/// DELETE /api/menu-items/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    menu_item::delete(state.pool(), &id).await?;
    tracing::info!(id = %id, "Menu item deleted");
    Ok(Json(DeleteResponse::new(id)))
}
