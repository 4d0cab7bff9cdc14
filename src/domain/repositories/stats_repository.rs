//! Repository trait for click recording and statistics.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Aggregated statistics for a single URL record.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlStats {
    pub url_id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub total_clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

/// Repository interface for click tracking and statistics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStatsRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_stats.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Records a click event and bumps the record's counters.
    ///
    /// Runs as a single transaction: the click row is inserted and the parent
    /// record's `clicks` / `last_clicked_at` are updated together, so the
    /// counter always equals the number of click rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the referenced record does not
    /// exist; the transaction is rolled back and no click row remains.
    /// Returns [`AppError::Storage`] on database errors.
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Retrieves the statistics projection for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlStats))` if the record exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn stats_by_code(&self, code: &str) -> Result<Option<UrlStats>, AppError>;

    /// Counts the click rows referencing a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count_clicks(&self, url_id: i64) -> Result<i64, AppError>;
}
