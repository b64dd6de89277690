//! Misc Content Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{MiscContent, MiscContentCreate, MiscContentFilter, MiscContentUpdate};
use shared::util::{new_id, now_millis};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const SELECT_MISC: &str = "SELECT id, section, image_url, icon, large_text, small_text, \
     message, created_at FROM misc_content";

/// Oldest first so page sections read top to bottom
pub async fn find_all(
    pool: &SqlitePool,
    filter: &MiscContentFilter,
) -> RepoResult<Vec<MiscContent>> {
    let mut qb = QueryBuilder::<Sqlite>::new(SELECT_MISC);
    if let Some(section) = &filter.section {
        qb.push(" WHERE section = ").push_bind(section.clone());
    }
    qb.push(" ORDER BY created_at ASC, rowid ASC");
    let rows = qb.build_query_as::<MiscContent>().fetch_all(pool).await?;
    Ok(rows)
}

/// Records of one section
pub async fn find_by_section(pool: &SqlitePool, section: &str) -> RepoResult<Vec<MiscContent>> {
    find_all(
        pool,
        &MiscContentFilter {
            section: Some(section.to_string()),
        },
    )
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<MiscContent>> {
    let row = sqlx::query_as::<_, MiscContent>(&format!("{SELECT_MISC} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: MiscContentCreate) -> RepoResult<MiscContent> {
    let row = MiscContent {
        id: new_id(),
        section: data.section,
        image_url: data.image_url,
        icon: data.icon,
        large_text: data.large_text,
        small_text: data.small_text,
        message: data.message,
        created_at: now_millis(),
    };
    sqlx::query(
        "INSERT INTO misc_content (id, section, image_url, icon, large_text, small_text, message, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&row.id)
    .bind(&row.section)
    .bind(&row.image_url)
    .bind(&row.icon)
    .bind(&row.large_text)
    .bind(&row.small_text)
    .bind(&row.message)
    .bind(row.created_at)
    .execute(pool)
    .await?;
    Ok(row)
}

/// Apply the fields present in `data`; `null` clears optional fields
pub async fn update(
    pool: &SqlitePool,
    id: &str,
    data: MiscContentUpdate,
) -> RepoResult<MiscContent> {
    let current = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::not_found(ErrorCode::MiscContentNotFound, id))?;

    let result = sqlx::query(
        "UPDATE misc_content SET section = ?, image_url = ?, icon = ?, large_text = ?, \
         small_text = ?, message = ? WHERE id = ?",
    )
    .bind(data.section.unwrap_or(current.section))
    .bind(data.image_url.unwrap_or(current.image_url))
    .bind(data.icon.unwrap_or(current.icon))
    .bind(data.large_text.unwrap_or(current.large_text))
    .bind(data.small_text.unwrap_or(current.small_text))
    .bind(data.message.unwrap_or(current.message))
    .bind(id)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::not_found(ErrorCode::MiscContentNotFound, id));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::not_found(ErrorCode::MiscContentNotFound, id))
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM misc_content WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::not_found(ErrorCode::MiscContentNotFound, id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use shared::models::sections;

    fn block(section: &str, large_text: &str) -> MiscContentCreate {
        MiscContentCreate {
            section: section.into(),
            large_text: Some(large_text.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_section_filter() {
        let pool = DbService::in_memory().await.unwrap().pool;
        create(&pool, block(sections::HERO, "Welcome")).await.unwrap();
        create(&pool, block(sections::LOCATION, "Main St")).await.unwrap();
        create(&pool, block(sections::HERO, "Second slide")).await.unwrap();

        let hero = find_by_section(&pool, sections::HERO).await.unwrap();
        assert_eq!(hero.len(), 2);
        assert!(hero.iter().all(|r| r.section == sections::HERO));
        assert_eq!(hero[0].large_text.as_deref(), Some("Welcome"));
        assert_eq!(
            find_all(&pool, &MiscContentFilter::default())
                .await
                .unwrap()
                .len(),
            3
        );
    }

    #[tokio::test]
    async fn test_update_clears_field() {
        let pool = DbService::in_memory().await.unwrap().pool;
        let created = create(
            &pool,
            MiscContentCreate {
                icon: Some("pin".into()),
                ..block(sections::LOCATION, "Main St")
            },
        )
        .await
        .unwrap();
        let updated = update(
            &pool,
            &created.id,
            MiscContentUpdate {
                icon: Some(None),
                small_text: Some(Some("Open 7-15".into())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(updated.icon.is_none());
        assert_eq!(updated.small_text.as_deref(), Some("Open 7-15"));
        assert_eq!(updated.large_text.as_deref(), Some("Main St"));
    }
}
