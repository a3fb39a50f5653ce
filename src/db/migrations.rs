//! Startup schema migrations
//!
//! Idempotent CREATE TABLE IF NOT EXISTS statements. Uniqueness lives in
//! the schema (unique keys), not in application-level pre-insert lookups,
//! so concurrent duplicate inserts lose at the database instead of racing.

use sqlx::MySqlPool;

/// Create the three application tables if they do not exist.
pub async fn run(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    // Articles are populated externally; this service only reads them.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            id BIGINT AUTO_INCREMENT PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            content TEXT NOT NULL,
            category VARCHAR(100) NOT NULL,
            date DATETIME NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGINT AUTO_INCREMENT PRIMARY KEY,
            username VARCHAR(100) NOT NULL,
            email VARCHAR(255) NOT NULL,
            password VARCHAR(255) NOT NULL,
            created_at DATETIME NOT NULL,
            UNIQUE KEY users_username (username),
            UNIQUE KEY users_email (email)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookmarks (
            id BIGINT AUTO_INCREMENT PRIMARY KEY,
            user_id BIGINT NOT NULL,
            article_id BIGINT NOT NULL,
            created_at DATETIME NOT NULL,
            UNIQUE KEY bookmarks_user_article (user_id, article_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
