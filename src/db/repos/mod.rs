//! Repository implementations for database access
//!
//! Each repository borrows the pool, runs one parameterized statement per
//! operation, and returns typed rows or affected-row metadata. Uniqueness
//! conflicts are surfaced as `DbError::Duplicate` via unique-key violations.

pub mod articles;
pub mod bookmarks;
pub mod users;

pub use articles::{Article, ArticleRepo};
pub use bookmarks::{Bookmark, BookmarkRepo};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },

    #[error("{0}")]
    Duplicate(&'static str),
}

/// Convert a MySQL generated id to the signed id type the row structs use.
pub(crate) fn generated_id(id: u64) -> Result<i64, DbError> {
    i64::try_from(id)
        .map_err(|_| DbError::Sqlx(sqlx::Error::Decode("generated id exceeds i64 range".into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_passes_through() {
        assert_eq!(generated_id(42).unwrap(), 42);
    }

    #[test]
    fn generated_id_rejects_out_of_range() {
        assert!(matches!(generated_id(u64::MAX), Err(DbError::Sqlx(_))));
    }
}
