//! Image Message Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{ImageMessage, ImageMessageCreate, ImageMessageUpdate};
use shared::util::{new_id, now_millis};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ImageMessage>> {
    let messages = sqlx::query_as::<_, ImageMessage>(
        "SELECT id, image_url, message, icon, created_at FROM image_message \
         ORDER BY created_at DESC, rowid DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(messages)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<ImageMessage>> {
    let message = sqlx::query_as::<_, ImageMessage>(
        "SELECT id, image_url, message, icon, created_at FROM image_message WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(message)
}

pub async fn create(pool: &SqlitePool, data: ImageMessageCreate) -> RepoResult<ImageMessage> {
    let message = ImageMessage {
        id: new_id(),
        image_url: data.image_url,
        message: data.message,
        icon: data.icon,
        created_at: now_millis(),
    };
    sqlx::query(
        "INSERT INTO image_message (id, image_url, message, icon, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&message.id)
    .bind(&message.image_url)
    .bind(&message.message)
    .bind(&message.icon)
    .bind(message.created_at)
    .execute(pool)
    .await?;
    Ok(message)
}

pub async fn update(
    pool: &SqlitePool,
    id: &str,
    data: ImageMessageUpdate,
) -> RepoResult<ImageMessage> {
    let result = sqlx::query(
        "UPDATE image_message SET image_url = COALESCE(?1, image_url), \
         message = COALESCE(?2, message), icon = COALESCE(?3, icon) WHERE id = ?4",
    )
    .bind(data.image_url)
    .bind(data.message)
    .bind(data.icon)
    .bind(id)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::not_found(ErrorCode::ImageMessageNotFound, id));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::not_found(ErrorCode::ImageMessageNotFound, id))
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM image_message WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::not_found(ErrorCode::ImageMessageNotFound, id));
    }
    Ok(())
}
