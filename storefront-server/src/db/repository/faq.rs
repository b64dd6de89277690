//! FAQ Repository

use super::{RepoError, RepoResult, like_pattern, search_term};
use shared::error::ErrorCode;
use shared::models::{Faq, FaqCreate, FaqFilter, FaqUpdate};
use shared::util::{new_id, now_millis};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Newest first; same-millisecond rows by insertion order, newest first
pub async fn find_all(pool: &SqlitePool, filter: &FaqFilter) -> RepoResult<Vec<Faq>> {
    let mut qb = QueryBuilder::<Sqlite>::new("SELECT id, question, answer, created_at FROM faq");
    if let Some(q) = search_term(filter.q.as_deref()) {
        let pattern = like_pattern(q);
        qb.push(" WHERE question LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR answer LIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\'");
    }
    qb.push(" ORDER BY created_at DESC, rowid DESC");
    let faqs = qb.build_query_as::<Faq>().fetch_all(pool).await?;
    Ok(faqs)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Faq>> {
    let faq = sqlx::query_as::<_, Faq>(
        "SELECT id, question, answer, created_at FROM faq WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(faq)
}

pub async fn create(pool: &SqlitePool, data: FaqCreate) -> RepoResult<Faq> {
    let faq = Faq {
        id: new_id(),
        question: data.question,
        answer: data.answer,
        created_at: now_millis(),
    };
    sqlx::query("INSERT INTO faq (id, question, answer, created_at) VALUES (?, ?, ?, ?)")
        .bind(&faq.id)
        .bind(&faq.question)
        .bind(&faq.answer)
        .bind(faq.created_at)
        .execute(pool)
        .await?;
    Ok(faq)
}

pub async fn update(pool: &SqlitePool, id: &str, data: FaqUpdate) -> RepoResult<Faq> {
    let result = sqlx::query(
        "UPDATE faq SET question = COALESCE(?1, question), answer = COALESCE(?2, answer) WHERE id = ?3",
    )
    .bind(data.question)
    .bind(data.answer)
    .bind(id)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::not_found(ErrorCode::FaqNotFound, id));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::not_found(ErrorCode::FaqNotFound, id))
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM faq WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::not_found(ErrorCode::FaqNotFound, id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn faq(question: &str, answer: &str) -> FaqCreate {
        FaqCreate {
            question: question.into(),
            answer: answer.into(),
        }
    }

    #[tokio::test]
    async fn test_round_trip() {
        let pool = DbService::in_memory().await.unwrap().pool;
        let created = create(&pool, faq("Q?", "A")).await.unwrap();
        let fetched = find_by_id(&pool, &created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.question, "Q?");
        assert_eq!(fetched.answer, "A");
    }

    #[tokio::test]
    async fn test_newest_first() {
        let pool = DbService::in_memory().await.unwrap().pool;
        let first = create(&pool, faq("First?", "1")).await.unwrap();
        let second = create(&pool, faq("Second?", "2")).await.unwrap();
        let ids: Vec<String> = find_all(&pool, &FaqFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_partial_update_and_search() {
        let pool = DbService::in_memory().await.unwrap().pool;
        let created = create(&pool, faq("Do you deliver?", "No")).await.unwrap();
        let updated = update(
            &pool,
            &created.id,
            FaqUpdate {
                question: None,
                answer: Some("Yes, within 5km".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.question, "Do you deliver?");
        assert_eq!(updated.answer, "Yes, within 5km");

        let hits = find_all(
            &pool,
            &FaqFilter {
                q: Some("5KM".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_then_lookup() {
        let pool = DbService::in_memory().await.unwrap().pool;
        let created = create(&pool, faq("Parking?", "Street")).await.unwrap();
        delete(&pool, &created.id).await.unwrap();
        assert!(find_by_id(&pool, &created.id).await.unwrap().is_none());
        assert!(matches!(
            delete(&pool, &created.id).await,
            Err(RepoError::NotFound { .. })
        ));
    }
}
