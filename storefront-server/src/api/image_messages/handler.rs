//! Image Message API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::ValidatedJson;
use crate::core::ServerState;
use crate::db::repository::image_message;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{ImageMessage, ImageMessageCreate, ImageMessageUpdate};
use shared::response::DeleteResponse;

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ImageMessage>>> {
    let messages = image_message::find_all(state.pool()).await?;
    Ok(Json(messages))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ImageMessage>> {
    let message = image_message::find_by_id(state.pool(), &id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::ImageMessageNotFound, &id))?;
    Ok(Json(message))
}

pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<ImageMessageCreate>,
) -> AppResult<(StatusCode, Json<ImageMessage>)> {
    let message = image_message::create(state.pool(), payload).await?;
    tracing::info!(id = %message.id, "Image message created");
    Ok((StatusCode::CREATED, Json(message)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ImageMessageUpdate>,
) -> AppResult<Json<ImageMessage>> {
    let message = image_message::update(state.pool(), &id, payload).await?;
    tracing::info!(id = %id, "Image message updated");
    Ok(Json(message))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    image_message::delete(state.pool(), &id).await?;
    tracing::info!(id = %id, "Image message deleted");
    Ok(Json(DeleteResponse::new(id)))
}
