//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements with runtime-checked bindings.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - URL record storage and retrieval
//! - [`SqliteStatsRepository`] - Click tracking and analytics queries

pub mod sqlite_stats_repository;
pub mod sqlite_url_repository;

pub use sqlite_stats_repository::SqliteStatsRepository;
pub use sqlite_url_repository::SqliteUrlRepository;
