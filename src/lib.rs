//! articles-api: HTTP service for articles, bookmarks, and user accounts
//!
//! Axum server over a pooled MySQL connection. Every route is a single
//! linear handler: validate request inputs, run one parameterized query,
//! serialize the result (or an error) to JSON.

pub mod db;
pub mod http;

pub use db::create_pool;
pub use http::{build_router, run_server, AppState, ServerConfig};
