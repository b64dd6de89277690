//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::{ApiQuery, ValidatedJson};
use crate::core::ServerState;
use crate::db::repository::product;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Product, ProductCreate, ProductFilter, ProductUpdate};
use shared::response::DeleteResponse;

/// GET /api/products?categoryId=&q= - newest first
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(filter): ApiQuery<ProductFilter>,
) -> AppResult<Json<Vec<Product>>> {
    let products = product::find_all(state.pool(), &filter).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = product::find_by_id(state.pool(), &id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::ProductNotFound, &id))?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = product::create(state.pool(), payload).await?;
    tracing::info!(id = %product.id, title = %product.title, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let product = product::update(state.pool(), &id, payload).await?;
    tracing::info!(id = %id, "Product updated");
    Ok(Json(product))
}

/// DELETE /api/products/{id} - menu items are kept and unlinked
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    product::delete(state.pool(), &id).await?;
    tracing::info!(id = %id, "Product deleted");
    Ok(Json(DeleteResponse::new(id)))
}
