//! User repository
//!
//! The `password` column holds a bcrypt hash, never the raw credential.
//! Username and email uniqueness come from unique keys, surfaced as
//! `DbError::Duplicate` on conflict.

use chrono::NaiveDateTime;
use sqlx::{FromRow, MySqlPool};

use super::DbError;

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: NaiveDateTime,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a user, returning the generated id.
    ///
    /// `password_hash` must already be hashed by the caller.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, DbError> {
        let result = sqlx::query(
            "INSERT INTO users (username, email, password, created_at) VALUES (?, ?, ?, NOW())",
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .execute(self.pool)
        .await;

        match result {
            Ok(result) => super::generated_id(result.last_insert_id()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DbError::Duplicate("Username or email already exists"))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Look up a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as(
            "SELECT id, username, email, password, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_username_is_rejected() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        let repo = UserRepo::new(&pool);

        repo.create("repo_test_user", "repo_test@example.com", "hash")
            .await
            .expect("first insert");

        // Same username, different email: still a conflict
        let second = repo
            .create("repo_test_user", "other@example.com", "hash")
            .await;
        assert!(matches!(second, Err(DbError::Duplicate(_))));
    }
}
