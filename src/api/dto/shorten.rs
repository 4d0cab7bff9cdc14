//! DTOs for the URL shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlRecord;

/// Request to shorten a URL, submitted as a JSON body.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be HTTP or HTTPS).
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// Query-string variant of the shorten request (`GET /s?u=...`).
#[derive(Debug, Deserialize)]
pub struct ShortenQuery {
    pub u: Option<String>,
}

/// Response for a shortened URL.
///
/// Returned for fresh creations and for repeated submissions of the same
/// URL alike, so clients never have to branch on idempotent hits.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortenResponse {
    pub fn from_record(record: UrlRecord, short_url: String) -> Self {
        Self {
            short_code: record.short_code,
            short_url,
            original_url: record.original_url,
            created_at: record.created_at,
        }
    }
}
