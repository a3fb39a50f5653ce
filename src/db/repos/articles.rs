//! Article repository
//!
//! Articles are read-only from this service's perspective: rows come from
//! an external ingest, so the repo only counts and lists.

use chrono::NaiveDateTime;
use sqlx::{FromRow, MySqlPool};

use super::DbError;

/// Article record from database
#[derive(Debug, Clone, FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub date: NaiveDateTime,
}

/// Article repository
pub struct ArticleRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ArticleRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Count all article rows (used by the connectivity check).
    pub async fn count(&self) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// List articles, newest first, optionally filtered by category
    /// and/or a substring match against title or content.
    ///
    /// Substring matching uses `LIKE`, so case behavior follows the
    /// column collation.
    pub async fn list(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Article>, DbError> {
        let sql = list_query(category.is_some(), search.is_some());

        let mut query = sqlx::query_as::<_, Article>(&sql);
        if let Some(category) = category {
            query = query.bind(category);
        }
        if let Some(search) = search {
            // Bound twice: once for title, once for content
            query = query.bind(search).bind(search);
        }

        Ok(query.fetch_all(self.pool).await?)
    }
}

/// Build the article list statement for the given filter combination.
///
/// The search term is wrapped in wildcards server-side via CONCAT so the
/// bound value stays the raw term.
fn list_query(category: bool, search: bool) -> String {
    let mut sql = String::from("SELECT id, title, content, category, date FROM articles");

    if category {
        sql.push_str(" WHERE category = ?");
    }

    if search {
        sql.push_str(if category { " AND" } else { " WHERE" });
        sql.push_str(
            " (title LIKE CONCAT('%', ?, '%') OR content LIKE CONCAT('%', ?, '%'))",
        );
    }

    sql.push_str(" ORDER BY date DESC");
    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_unfiltered() {
        assert_eq!(
            list_query(false, false),
            "SELECT id, title, content, category, date FROM articles ORDER BY date DESC"
        );
    }

    #[test]
    fn list_query_category_only() {
        let sql = list_query(true, false);
        assert!(sql.contains("WHERE category = ?"));
        assert!(!sql.contains("LIKE"));
        assert!(sql.ends_with("ORDER BY date DESC"));
    }

    #[test]
    fn list_query_search_only() {
        let sql = list_query(false, true);
        assert!(sql.contains("WHERE (title LIKE"));
        assert!(sql.contains("OR content LIKE"));
        assert!(!sql.contains("category = ?"));
    }

    #[test]
    fn list_query_combines_with_and() {
        let sql = list_query(true, true);
        assert!(sql.contains("WHERE category = ? AND (title LIKE"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn category_filter_matches_only_that_category() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");

        let articles = ArticleRepo::new(&pool)
            .list(Some("tech"), None)
            .await
            .expect("list failed");

        assert!(articles.iter().all(|a| a.category == "tech"));
    }
}
