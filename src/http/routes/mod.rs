//! Route handlers organized by resource

pub mod articles;
pub mod bookmarks;
pub mod health;
pub mod users;
