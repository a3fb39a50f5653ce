//! Bookmark endpoints
//!
//! `user_id` defaults to 1 everywhere it is optional; there is no session
//! mechanism, so the caller says who they are.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Bookmark, BookmarkRepo};
use crate::http::error::ApiError;
use crate::http::extractors::empty_as_none_i64;
use crate::http::server::AppState;

const DEFAULT_USER_ID: i64 = 1;

/// Bookmark list query params. `?user_id=` counts as absent and falls
/// back to the default user.
#[derive(Deserialize, Default)]
pub struct BookmarkListParams {
    #[serde(default, deserialize_with = "empty_as_none_i64")]
    pub user_id: Option<i64>,
}

/// Create bookmark request
#[derive(Deserialize)]
pub struct CreateBookmarkRequest {
    pub user_id: Option<i64>,
    pub article_id: Option<i64>,
}

/// Bookmark response
#[derive(Serialize)]
pub struct BookmarkResponse {
    pub id: i64,
    pub user_id: i64,
    pub article_id: i64,
    pub created_at: String,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(b: Bookmark) -> Self {
        Self {
            id: b.id,
            user_id: b.user_id,
            article_id: b.article_id,
            created_at: b.created_at.and_utc().to_rfc3339(),
        }
    }
}

/// Created response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: i64,
}

/// Deleted response
#[derive(Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

/// GET /bookmarks - list a user's bookmarks, newest first
async fn list_bookmarks(
    State(state): State<AppState>,
    Query(params): Query<BookmarkListParams>,
) -> Result<Json<Vec<BookmarkResponse>>, ApiError> {
    let user_id = params.user_id.unwrap_or(DEFAULT_USER_ID);

    let bookmarks = BookmarkRepo::new(state.pool())
        .list_for_user(user_id)
        .await?;

    Ok(Json(
        bookmarks.into_iter().map(BookmarkResponse::from).collect(),
    ))
}

/// POST /bookmarks - bookmark an article for a user
async fn create_bookmark(
    State(state): State<AppState>,
    Json(req): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Some(article_id) = req.article_id else {
        return Err(ApiError::Validation("article_id is required"));
    };
    let user_id = req.user_id.unwrap_or(DEFAULT_USER_ID);

    let id = BookmarkRepo::new(state.pool())
        .create(user_id, article_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Bookmark added successfully",
            id,
        }),
    ))
}

/// DELETE /bookmarks/{id} - remove a bookmark by id
async fn delete_bookmark(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    BookmarkRepo::new(state.pool()).delete(id).await?;

    Ok(Json(DeletedResponse {
        message: "Bookmark removed successfully",
    }))
}

/// Bookmark routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route("/bookmarks/{id}", delete(delete_bookmark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    #[test]
    fn empty_user_id_falls_back_to_default() {
        let uri: Uri = "http://localhost/bookmarks?user_id=".parse().unwrap();
        let Query(params) = Query::<BookmarkListParams>::try_from_uri(&uri).unwrap();

        assert_eq!(params.user_id, None);
        assert_eq!(params.user_id.unwrap_or(DEFAULT_USER_ID), 1);
    }

    #[test]
    fn numeric_user_id_is_kept() {
        let uri: Uri = "http://localhost/bookmarks?user_id=7".parse().unwrap();
        let Query(params) = Query::<BookmarkListParams>::try_from_uri(&uri).unwrap();

        assert_eq!(params.user_id, Some(7));
    }
}
