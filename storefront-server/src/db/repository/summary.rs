//! Row counts for the admin dashboard

use super::RepoResult;
use shared::response::AdminSummary;
use sqlx::SqlitePool;

pub async fn counts(pool: &SqlitePool) -> RepoResult<AdminSummary> {
    let summary = sqlx::query_as::<_, AdminSummary>(
        "SELECT \
         (SELECT COUNT(*) FROM category) AS categories, \
         (SELECT COUNT(*) FROM product) AS products, \
         (SELECT COUNT(*) FROM menu_item) AS menu_items, \
         (SELECT COUNT(*) FROM faq) AS faqs, \
         (SELECT COUNT(*) FROM image_message) AS image_messages, \
         (SELECT COUNT(*) FROM misc_content) AS misc_content",
    )
    .fetch_one(pool)
    .await?;
    Ok(summary)
}
