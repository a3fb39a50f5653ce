//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits and mandatory TLS.

use std::str::FromStr;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlSslMode};

/// Maximum connections for the pool. Excess acquisitions queue.
const MAX_CONNECTIONS: u32 = 10;

/// Create a MySQL connection pool.
///
/// Transport is always encrypted and the server certificate (including
/// hostname) is validated. This is a hard requirement and cannot be
/// disabled through the connection string.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the connection fails.
pub async fn create_pool(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    let options = connect_options(database_url)?;

    MySqlPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

fn connect_options(database_url: &str) -> Result<MySqlConnectOptions, sqlx::Error> {
    Ok(MySqlConnectOptions::from_str(database_url)?.ssl_mode(MySqlSslMode::VerifyIdentity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_options_parse() {
        let options = connect_options("mysql://user:pw@db.example.com:3306/articles");
        assert!(options.is_ok());
    }

    #[test]
    fn connect_options_reject_garbage() {
        assert!(connect_options("not a url").is_err());
    }

    // Integration tests require a real database with TLS
    // Run with: DATABASE_URL=mysql://... cargo test -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        // More tasks than pool slots; the extras must queue, not fail
        let handles: Vec<_> = (0..20)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT ?")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }
}
