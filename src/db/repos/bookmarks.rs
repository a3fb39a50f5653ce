//! Bookmark repository
//!
//! Creation relies on the `(user_id, article_id)` unique key: the insert is
//! attempted directly and a unique-violation maps to `DbError::Duplicate`,
//! so two concurrent saves of the same article cannot both succeed.

use chrono::NaiveDateTime;
use sqlx::{FromRow, MySqlPool};

use super::DbError;

/// Bookmark record from database
#[derive(Debug, Clone, FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub user_id: i64,
    pub article_id: i64,
    pub created_at: NaiveDateTime,
}

/// Bookmark repository
pub struct BookmarkRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> BookmarkRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List a user's bookmarks, newest first.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Bookmark>, DbError> {
        let bookmarks = sqlx::query_as(
            r#"
            SELECT id, user_id, article_id, created_at
            FROM bookmarks
            WHERE user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(bookmarks)
    }

    /// Insert a bookmark, returning the generated id.
    pub async fn create(&self, user_id: i64, article_id: i64) -> Result<i64, DbError> {
        let result = sqlx::query(
            "INSERT INTO bookmarks (user_id, article_id, created_at) VALUES (?, ?, NOW())",
        )
        .bind(user_id)
        .bind(article_id)
        .execute(self.pool)
        .await;

        match result {
            Ok(result) => super::generated_id(result.last_insert_id()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DbError::Duplicate("Article already bookmarked"))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a bookmark by id. Errors with `NotFound` if no row matched.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "Bookmark",
                id,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_insert_is_rejected() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        let repo = BookmarkRepo::new(&pool);

        let id = repo.create(9001, 9001).await.expect("first insert");
        let second = repo.create(9001, 9001).await;
        assert!(matches!(second, Err(DbError::Duplicate(_))));

        repo.delete(id).await.expect("cleanup");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_missing_is_not_found() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");

        let result = BookmarkRepo::new(&pool).delete(i64::MAX).await;
        assert!(matches!(result, Err(DbError::NotFound { .. })));
    }
}
