//! FAQ API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::{ApiQuery, ValidatedJson};
use crate::core::ServerState;
use crate::db::repository::faq;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Faq, FaqCreate, FaqFilter, FaqUpdate};
use shared::response::DeleteResponse;

/// GET /api/faqs?q=
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(filter): ApiQuery<FaqFilter>,
) -> AppResult<Json<Vec<Faq>>> {
    let faqs = faq::find_all(state.pool(), &filter).await?;
    Ok(Json(faqs))
}

/// GET /api/faqs/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Faq>> {
    let faq = faq::find_by_id(state.pool(), &id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::FaqNotFound, &id))?;
    Ok(Json(faq))
}

/// POST /api/faqs
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<FaqCreate>,
) -> AppResult<(StatusCode, Json<Faq>)> {
    let faq = faq::create(state.pool(), payload).await?;
    tracing::info!(id = %faq.id, "FAQ created");
    Ok((StatusCode::CREATED, Json(faq)))
}

/// PUT /api/faqs/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<FaqUpdate>,
) -> AppResult<Json<Faq>> {
    let faq = faq::update(state.pool(), &id, payload).await?;
    tracing::info!(id = %id, "FAQ updated");
    Ok(Json(faq))
}

/// DELETE /api/faqs/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    faq::delete(state.pool(), &id).await?;
    tracing::info!(id = %id, "FAQ deleted");
    Ok(Json(DeleteResponse::new(id)))
}
