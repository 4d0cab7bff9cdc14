//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored URL record: the mapping between a short code and the original URL,
/// plus its click counters.
///
/// `short_code` is a pure function of `id` (see [`crate::utils::codec`]), so
/// two records never share a code. `original_url` is the exact string the
/// client submitted.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl UrlRecord {
    /// Returns true if the record has never been clicked.
    pub fn is_unclicked(&self) -> bool {
        self.clicks == 0 && self.last_clicked_at.is_none()
    }
}
