//! DTOs for per-code click statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::repositories::UrlStats;

/// Statistics for a single short code.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub total_clicks: i64,

    /// `null` until the first redirect lands.
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl From<UrlStats> for StatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            short_code: stats.short_code,
            original_url: stats.original_url,
            created_at: stats.created_at,
            total_clicks: stats.total_clicks,
            last_clicked_at: stats.last_clicked_at,
        }
    }
}
