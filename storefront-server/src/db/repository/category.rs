//! Category Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Category, CategoryCreate, CategoryUpdate, CategoryWithCounts};
use shared::util::{new_id, now_millis};
use sqlx::SqlitePool;

const SELECT_WITH_COUNTS: &str = "SELECT c.id, c.name, c.created_at, \
     (SELECT COUNT(*) FROM product p WHERE p.category_id = c.id) AS product_count, \
     (SELECT COUNT(*) FROM menu_item m WHERE m.category_id = c.id) AS menu_item_count \
     FROM category c";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<CategoryWithCounts>> {
    let categories = sqlx::query_as::<_, CategoryWithCounts>(&format!(
        "{SELECT_WITH_COUNTS} ORDER BY c.name ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<CategoryWithCounts>> {
    let category =
        sqlx::query_as::<_, CategoryWithCounts>(&format!("{SELECT_WITH_COUNTS} WHERE c.id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(category)
}

/// Exact (case-sensitive) name lookup
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, name, created_at FROM category WHERE name = ? LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

pub async fn create(pool: &SqlitePool, data: CategoryCreate) -> RepoResult<CategoryWithCounts> {
    let name = data.name.trim().to_string();
    if find_by_name(pool, &name).await?.is_some() {
        return Err(duplicate(&name));
    }

    let id = new_id();
    sqlx::query("INSERT INTO category (id, name, created_at) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(&name)
        .bind(now_millis())
        .execute(pool)
        .await
        .map_err(|e| unique_to_duplicate(e, &name))?;

    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create category".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: &str,
    data: CategoryUpdate,
) -> RepoResult<CategoryWithCounts> {
    if find_by_id(pool, id).await?.is_none() {
        return Err(RepoError::not_found(ErrorCode::CategoryNotFound, id));
    }

    if let Some(name) = data.name {
        let name = name.trim().to_string();
        if let Some(existing) = find_by_name(pool, &name).await?
            && existing.id != id
        {
            return Err(duplicate(&name));
        }
        sqlx::query("UPDATE category SET name = ? WHERE id = ?")
            .bind(&name)
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| unique_to_duplicate(e, &name))?;
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::not_found(ErrorCode::CategoryNotFound, id))
}

/// Delete a category that no product or menu item references
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<()> {
    let category = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::not_found(ErrorCode::CategoryNotFound, id))?;

    if category.product_count > 0 || category.menu_item_count > 0 {
        return Err(RepoError::Business(
            ErrorCode::CategoryHasChildren,
            format!(
                "Category '{}' still has {} product(s) and {} menu item(s)",
                category.category.name, category.product_count, category.menu_item_count
            ),
        ));
    }

    let result = sqlx::query("DELETE FROM category WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::not_found(ErrorCode::CategoryNotFound, id));
    }
    Ok(())
}

fn duplicate(name: &str) -> RepoError {
    RepoError::Duplicate {
        code: ErrorCode::CategoryNameExists,
        field: "name",
        message: format!("Category '{name}' already exists"),
    }
}

/// A concurrent insert can still hit the UNIQUE index after the lookup
fn unique_to_duplicate(err: sqlx::Error, name: &str) -> RepoError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => duplicate(name),
        _ => err.into(),
    }
}
