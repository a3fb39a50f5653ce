//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Bounded connection pool injected through `AppState` - no globals
//! - One parameterized statement per operation - no multi-statement transactions
//! - Rely on DB constraints, handle conflicts - no check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
