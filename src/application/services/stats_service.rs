//! Click accounting and statistics service.

use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{StatsRepository, UrlStats};
use crate::error::AppError;
use serde_json::json;

/// Service for recording clicks and reading the statistics projection.
pub struct StatsService<R: StatsRepository> {
    repository: Arc<R>,
}

impl<R: StatsRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Records a click event for a URL record.
    ///
    /// # Note
    ///
    /// In production, clicks are recorded asynchronously via the background
    /// worker (`click_worker`). This method exists for testing and direct
    /// recording scenarios.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn track_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        self.repository.record_click(new_click).await
    }

    /// Retrieves the statistics projection for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn get_stats(&self, code: &str) -> Result<UrlStats, AppError> {
        self.repository
            .stats_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Statistics not found", json!({ "code": code })))
    }
}
