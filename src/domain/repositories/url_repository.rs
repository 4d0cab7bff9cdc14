//! Repository trait for URL record data access.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Creates a new URL record and mints its short code from the assigned id.
    ///
    /// Runs as a single transaction: the row is inserted, the rowid is read
    /// back, and the short code derived from it is written before commit. A
    /// concurrent reader never observes a record without its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the original URL (or, impossibly for
    /// distinct ids, the short code) is already stored.
    /// Returns [`AppError::Storage`] on database errors.
    async fn create(&self, original_url: &str) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// Exact string lookup against the stored `short_code` column; the code
    /// is never decoded back into an id here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its original URL, compared as an exact string.
    ///
    /// Used to make creation idempotent: resubmitting the same URL string
    /// returns the existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError>;
}
