//! Article endpoints

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Article, ArticleRepo};
use crate::http::error::ApiError;
use crate::http::extractors::empty_as_none;
use crate::http::server::AppState;

/// Article list filters. Empty values count as absent, so `?category=`
/// returns all articles rather than filtering on the empty category.
#[derive(Deserialize, Default)]
pub struct ArticleListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub search: Option<String>,
}

/// Article response
#[derive(Serialize)]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub date: String,
}

impl From<Article> for ArticleResponse {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            title: a.title,
            content: a.content,
            category: a.category,
            date: a.date.and_utc().to_rfc3339(),
        }
    }
}

/// GET /articles - list articles, date-descending, with optional
/// category and search filters
async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ArticleListParams>,
) -> Result<Json<Vec<ArticleResponse>>, ApiError> {
    let articles = ArticleRepo::new(state.pool())
        .list(params.category.as_deref(), params.search.as_deref())
        .await?;

    Ok(Json(articles.into_iter().map(ArticleResponse::from).collect()))
}

/// Article routes
pub fn router() -> Router<AppState> {
    Router::new().route("/articles", get(list_articles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;
    use chrono::NaiveDate;

    #[test]
    fn empty_filters_mean_no_filtering() {
        let uri: Uri = "http://localhost/articles?category=&search=".parse().unwrap();
        let Query(params) = Query::<ArticleListParams>::try_from_uri(&uri).unwrap();

        assert_eq!(params.category, None);
        assert_eq!(params.search, None);
    }

    #[test]
    fn present_filters_are_kept() {
        let uri: Uri = "http://localhost/articles?category=tech&search=rust"
            .parse()
            .unwrap();
        let Query(params) = Query::<ArticleListParams>::try_from_uri(&uri).unwrap();

        assert_eq!(params.category.as_deref(), Some("tech"));
        assert_eq!(params.search.as_deref(), Some("rust"));
    }

    #[test]
    fn response_date_is_rfc3339() {
        let article = Article {
            id: 1,
            title: "t".into(),
            content: "c".into(),
            category: "tech".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
        };

        let response = ArticleResponse::from(article);
        assert_eq!(response.date, "2024-03-01T12:30:00+00:00");
    }
}
