//! Menu Item Repository

use super::{RefTable, RepoError, RepoResult, ensure_ref, like_pattern, search_term};
use shared::error::ErrorCode;
use shared::models::{
    CategoryRef, MenuItem, MenuItemCreate, MenuItemFilter, MenuItemUpdate, ProductRef,
};
use shared::util::{new_id, now_millis};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const SELECT_MENU_ITEM: &str = "SELECT m.id, m.name, m.description, m.price, \
     m.product_id, p.title AS product_title, m.category_id, c.name AS category_name, \
     m.created_at \
     FROM menu_item m \
     LEFT JOIN product p ON p.id = m.product_id \
     LEFT JOIN category c ON c.id = m.category_id";

#[derive(Debug, sqlx::FromRow)]
struct MenuItemRow {
    id: String,
    name: String,
    description: Option<String>,
    price: f64,
    product_id: Option<String>,
    product_title: Option<String>,
    category_id: Option<String>,
    category_name: Option<String>,
    created_at: i64,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        let product = row
            .product_id
            .clone()
            .zip(row.product_title)
            .map(|(id, title)| ProductRef { id, title });
        let category = row
            .category_id
            .clone()
            .zip(row.category_name)
            .map(|(id, name)| CategoryRef { id, name });
        MenuItem {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            product_id: row.product_id,
            category_id: row.category_id,
            product,
            category,
            created_at: row.created_at,
        }
    }
}

pub async fn find_all(pool: &SqlitePool, filter: &MenuItemFilter) -> RepoResult<Vec<MenuItem>> {
    let mut qb = QueryBuilder::<Sqlite>::new(SELECT_MENU_ITEM);
    qb.push(" WHERE 1 = 1");
    if let Some(product_id) = &filter.product_id {
        qb.push(" AND m.product_id = ").push_bind(product_id.clone());
    }
    if let Some(category_id) = &filter.category_id {
        qb.push(" AND m.category_id = ").push_bind(category_id.clone());
    }
    if let Some(q) = search_term(filter.q.as_deref()) {
        let pattern = like_pattern(q);
        qb.push(" AND (m.name LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR m.description LIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }
    qb.push(" ORDER BY m.name ASC, m.rowid ASC");

    let rows = qb.build_query_as::<MenuItemRow>().fetch_all(pool).await?;
    Ok(rows.into_iter().map(MenuItem::from).collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<MenuItem>> {
    let row = sqlx::query_as::<_, MenuItemRow>(&format!("{SELECT_MENU_ITEM} WHERE m.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(MenuItem::from))
}

/// Create a menu item linked to an existing product and/or category
pub async fn create(pool: &SqlitePool, data: MenuItemCreate) -> RepoResult<MenuItem> {
    if data.product_id.is_none() && data.category_id.is_none() {
        return Err(RepoError::Business(
            ErrorCode::MenuItemUnlinked,
            "A menu item needs a product or a category".into(),
        ));
    }
    if let Some(product_id) = &data.product_id {
        ensure_ref(pool, RefTable::Product, "productId", product_id).await?;
    }
    if let Some(category_id) = &data.category_id {
        ensure_ref(pool, RefTable::Category, "categoryId", category_id).await?;
    }

    let id = new_id();
    sqlx::query(
        "INSERT INTO menu_item (id, name, description, price, product_id, category_id, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(&data.product_id)
    .bind(&data.category_id)
    .bind(now_millis())
    .execute(pool)
    .await?;

    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

/// Apply the fields present in `data`
///
/// Links may be cleared with `null`, including both at once.
pub async fn update(pool: &SqlitePool, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
    let current = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::not_found(ErrorCode::MenuItemNotFound, id))?;

    if let Some(Some(product_id)) = &data.product_id {
        ensure_ref(pool, RefTable::Product, "productId", product_id).await?;
    }
    if let Some(Some(category_id)) = &data.category_id {
        ensure_ref(pool, RefTable::Category, "categoryId", category_id).await?;
    }

    let result = sqlx::query(
        "UPDATE menu_item SET name = ?, description = ?, price = ?, product_id = ?, \
         category_id = ? WHERE id = ?",
    )
    .bind(data.name.unwrap_or(current.name))
    .bind(data.description.unwrap_or(current.description))
    .bind(data.price.unwrap_or(current.price))
    .bind(data.product_id.unwrap_or(current.product_id))
    .bind(data.category_id.unwrap_or(current.category_id))
    .bind(id)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::not_found(ErrorCode::MenuItemNotFound, id));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::not_found(ErrorCode::MenuItemNotFound, id))
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM menu_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::not_found(ErrorCode::MenuItemNotFound, id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::product;
    use shared::models::ProductCreate;

    async fn pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    async fn seed_product(pool: &SqlitePool) -> String {
        product::create(
            pool,
            ProductCreate {
                title: "Espresso blend".into(),
                description: "Dark roast".into(),
                main_image_url: "https://cdn.example.com/e.jpg".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .id
    }

    fn item(name: &str, product_id: Option<String>) -> MenuItemCreate {
        MenuItemCreate {
            name: name.into(),
            description: None,
            price: 3.5,
            product_id,
            category_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_embeds_product() {
        let pool = pool().await;
        let pid = seed_product(&pool).await;
        let created = create(&pool, item("Double shot", Some(pid.clone())))
            .await
            .unwrap();
        let product = created.product.unwrap();
        assert_eq!(product.id, pid);
        assert_eq!(product.title, "Espresso blend");
        assert!(created.category.is_none());
    }

    #[tokio::test]
    async fn test_create_with_missing_product() {
        let pool = pool().await;
        let err = create(&pool, item("Ghost", Some(new_id())))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RepoError::MissingReference {
                field: "productId",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_product_delete_unlinks_items() {
        let pool = pool().await;
        let pid = seed_product(&pool).await;
        let created = create(&pool, item("Ristretto", Some(pid.clone())))
            .await
            .unwrap();
        product::delete(&pool, &pid).await.unwrap();

        let after = find_by_id(&pool, &created.id).await.unwrap().unwrap();
        assert!(after.product_id.is_none());
        assert!(after.product.is_none());
        assert_eq!(after.name, "Ristretto");
    }

    #[tokio::test]
    async fn test_update_may_clear_both_links() {
        let pool = pool().await;
        let pid = seed_product(&pool).await;
        let created = create(&pool, item("Lungo", Some(pid))).await.unwrap();
        let updated = update(
            &pool,
            &created.id,
            MenuItemUpdate {
                product_id: Some(None),
                category_id: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(updated.product_id.is_none());
        assert!(updated.category_id.is_none());
        assert_eq!(updated.price, 3.5);
    }

    #[tokio::test]
    async fn test_list_sorted_by_name_and_filtered() {
        let pool = pool().await;
        let pid = seed_product(&pool).await;
        create(&pool, item("Mocha", Some(pid.clone()))).await.unwrap();
        create(&pool, item("Americano", Some(pid.clone()))).await.unwrap();

        let all = find_all(&pool, &MenuItemFilter::default()).await.unwrap();
        let names: Vec<&str> = all.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Americano", "Mocha"]);

        let filtered = find_all(
            &pool,
            &MenuItemFilter {
                q: Some("moc".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(filtered.len(), 1);

        let by_product = find_all(
            &pool,
            &MenuItemFilter {
                product_id: Some(pid),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(by_product.len(), 2);
    }
}
