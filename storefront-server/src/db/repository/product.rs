//! Product Repository
//!
//! Gallery URLs are stored as a JSON array in a TEXT column.

use super::{RefTable, RepoError, RepoResult, ensure_ref, like_pattern, search_term};
use shared::error::ErrorCode;
use shared::models::{CategoryRef, Product, ProductCreate, ProductFilter, ProductUpdate};
use shared::util::{new_id, now_millis};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const SELECT_PRODUCT: &str = "SELECT p.id, p.title, p.description, p.main_image_url, \
     p.gallery_image_urls, p.badge_text, p.badge_color, p.badge_icon, p.category_id, \
     c.name AS category_name, p.created_at \
     FROM product p LEFT JOIN category c ON c.id = p.category_id";

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: String,
    title: String,
    description: String,
    main_image_url: String,
    gallery_image_urls: String,
    badge_text: Option<String>,
    badge_color: Option<String>,
    badge_icon: Option<String>,
    category_id: Option<String>,
    category_name: Option<String>,
    created_at: i64,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepoError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let gallery_image_urls = serde_json::from_str(&row.gallery_image_urls).map_err(|e| {
            RepoError::Database(format!("Corrupt gallery for product {}: {e}", row.id))
        })?;
        let category = match (&row.category_id, row.category_name) {
            (Some(id), Some(name)) => Some(CategoryRef {
                id: id.clone(),
                name,
            }),
            _ => None,
        };
        Ok(Product {
            id: row.id,
            title: row.title,
            description: row.description,
            main_image_url: row.main_image_url,
            gallery_image_urls,
            badge_text: row.badge_text,
            badge_color: row.badge_color,
            badge_icon: row.badge_icon,
            category_id: row.category_id,
            category,
            created_at: row.created_at,
        })
    }
}

/// Newest first; rows created in the same millisecond keep insertion order
pub async fn find_all(pool: &SqlitePool, filter: &ProductFilter) -> RepoResult<Vec<Product>> {
    let mut qb = QueryBuilder::<Sqlite>::new(SELECT_PRODUCT);
    qb.push(" WHERE 1 = 1");
    if let Some(category_id) = &filter.category_id {
        qb.push(" AND p.category_id = ").push_bind(category_id.clone());
    }
    if let Some(q) = search_term(filter.q.as_deref()) {
        let pattern = like_pattern(q);
        qb.push(" AND (p.title LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR p.description LIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }
    qb.push(" ORDER BY p.created_at DESC, p.rowid DESC");

    let rows = qb.build_query_as::<ProductRow>().fetch_all(pool).await?;
    rows.into_iter().map(Product::try_from).collect()
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Product>> {
    let row = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_PRODUCT} WHERE p.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(Product::try_from).transpose()
}

pub async fn create(pool: &SqlitePool, data: ProductCreate) -> RepoResult<Product> {
    if let Some(category_id) = &data.category_id {
        ensure_ref(pool, RefTable::Category, "categoryId", category_id).await?;
    }
    let gallery = encode_gallery(&data.gallery_image_urls)?;

    let id = new_id();
    sqlx::query(
        "INSERT INTO product (id, title, description, main_image_url, gallery_image_urls, \
         badge_text, badge_color, badge_icon, category_id, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&data.title)
    .bind(&data.description)
    .bind(&data.main_image_url)
    .bind(&gallery)
    .bind(&data.badge_text)
    .bind(&data.badge_color)
    .bind(&data.badge_icon)
    .bind(&data.category_id)
    .bind(now_millis())
    .execute(pool)
    .await?;

    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

/// Apply the fields present in `data`; `null` badge/category fields clear them
pub async fn update(pool: &SqlitePool, id: &str, data: ProductUpdate) -> RepoResult<Product> {
    let current = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::not_found(ErrorCode::ProductNotFound, id))?;

    if let Some(Some(category_id)) = &data.category_id {
        ensure_ref(pool, RefTable::Category, "categoryId", category_id).await?;
    }

    let gallery = encode_gallery(
        data.gallery_image_urls
            .as_ref()
            .unwrap_or(&current.gallery_image_urls),
    )?;

    let result = sqlx::query(
        "UPDATE product SET title = ?, description = ?, main_image_url = ?, \
         gallery_image_urls = ?, badge_text = ?, badge_color = ?, badge_icon = ?, \
         category_id = ? WHERE id = ?",
    )
    .bind(data.title.unwrap_or(current.title))
    .bind(data.description.unwrap_or(current.description))
    .bind(data.main_image_url.unwrap_or(current.main_image_url))
    .bind(gallery)
    .bind(data.badge_text.unwrap_or(current.badge_text))
    .bind(data.badge_color.unwrap_or(current.badge_color))
    .bind(data.badge_icon.unwrap_or(current.badge_icon))
    .bind(data.category_id.unwrap_or(current.category_id))
    .bind(id)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::not_found(ErrorCode::ProductNotFound, id));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::not_found(ErrorCode::ProductNotFound, id))
}

/// Delete a product; its menu items stay, unlinked
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    let detached = sqlx::query("UPDATE menu_item SET product_id = NULL WHERE product_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let result = sqlx::query("DELETE FROM product WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(RepoError::not_found(ErrorCode::ProductNotFound, id));
    }

    tx.commit().await?;
    if detached > 0 {
        tracing::debug!(product_id = %id, detached, "Menu items unlinked from deleted product");
    }
    Ok(())
}

fn encode_gallery(urls: &[String]) -> RepoResult<String> {
    serde_json::to_string(urls).map_err(|e| RepoError::Database(format!("Encode gallery: {e}")))
}
