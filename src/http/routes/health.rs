//! Liveness and database connectivity endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::ArticleRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Liveness response
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Connectivity check response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDbResponse {
    pub message: &'static str,
    pub article_count: i64,
}

/// GET / - static liveness message
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "New Articles API is running!",
    })
}

/// GET /test-db - round-trip to the database by counting articles
async fn test_db(State(state): State<AppState>) -> Result<Json<TestDbResponse>, ApiError> {
    let article_count = ArticleRepo::new(state.pool()).count().await?;

    Ok(Json(TestDbResponse {
        message: "Database connected!",
        article_count,
    }))
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/test-db", get(test_db))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_returns_liveness_message() {
        let Json(body) = root().await;
        assert_eq!(body.message, "New Articles API is running!");
    }

    #[test]
    fn test_db_response_uses_camel_case() {
        let body = TestDbResponse {
            message: "Database connected!",
            article_count: 3,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["articleCount"], 3);
    }
}
