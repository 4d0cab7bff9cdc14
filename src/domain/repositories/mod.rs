//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`, and mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - URL record creation and lookup
//! - [`StatsRepository`] - Click tracking and statistics

pub mod stats_repository;
pub mod url_repository;

pub use stats_repository::{StatsRepository, UrlStats};
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use stats_repository::MockStatsRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
