//! URL shortening service: idempotent creation and code lookup.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// Service for creating and retrieving shortened URLs.
///
/// Creation is idempotent over the exact URL string: submitting the same
/// string twice returns the same record, codes are never reissued.
pub struct ShortenerService<R: UrlRepository> {
    url_repository: Arc<R>,
}

impl<R: UrlRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(url_repository: Arc<R>) -> Self {
        Self { url_repository }
    }

    /// Returns the record for a URL, creating it on first sight.
    ///
    /// # Idempotency
    ///
    /// URLs are compared as exact strings. `https://example.com` and
    /// `https://EXAMPLE.COM` are two different records.
    ///
    /// # Races
    ///
    /// Two concurrent first submissions of the same string may both miss the
    /// lookup; the storage UNIQUE constraint then rejects one insert, and the
    /// loser re-reads the winner's record instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty, unparseable,
    /// uses a scheme other than `http`/`https`, or lacks a host.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn create_or_get(&self, raw_url: &str) -> Result<UrlRecord, AppError> {
        validate_url(raw_url)?;

        if let Some(existing) = self.url_repository.find_by_original_url(raw_url).await? {
            return Ok(existing);
        }

        match self.url_repository.create(raw_url).await {
            Ok(record) => Ok(record),
            Err(e) if e.is_conflict() => {
                tracing::debug!(url = raw_url, "lost creation race, re-reading");
                self.url_repository
                    .find_by_original_url(raw_url)
                    .await?
                    .ok_or(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Retrieves a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is empty or no record
    /// matches it.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn get_by_code(&self, code: &str) -> Result<UrlRecord, AppError> {
        if code.is_empty() {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        self.url_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;

    fn test_record(id: i64, code: &str, url: &str) -> UrlRecord {
        UrlRecord {
            id,
            short_code: code.to_string(),
            original_url: url.to_string(),
            created_at: Utc::now(),
            clicks: 0,
            last_clicked_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_or_get_creates_new_record() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_original_url()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|_| Ok(None));

        let created = test_record(10, "Hld8N", "https://example.com");
        mock_repo
            .expect_create()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let record = service.create_or_get("https://example.com").await.unwrap();
        assert_eq!(record.id, 10);
        assert_eq!(record.short_code, "Hld8N");
    }

    #[tokio::test]
    async fn test_create_or_get_returns_existing_record() {
        let mut mock_repo = MockUrlRepository::new();

        let existing = test_record(5, "1to7HG", "https://example.com");
        mock_repo
            .expect_find_by_original_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        mock_repo.expect_create().times(0);

        let service = ShortenerService::new(Arc::new(mock_repo));

        let record = service.create_or_get("https://example.com").await.unwrap();
        assert_eq!(record.id, 5);
        assert_eq!(record.short_code, "1to7HG");
    }

    #[tokio::test]
    async fn test_create_or_get_exact_string_match_only() {
        let mut mock_repo = MockUrlRepository::new();

        // The uppercase variant is a different string, so the lookup misses
        // and a new record is created.
        mock_repo
            .expect_find_by_original_url()
            .withf(|url| url == "https://EXAMPLE.COM")
            .times(1)
            .returning(|_| Ok(None));

        let created = test_record(11, "2kQx9a", "https://EXAMPLE.COM");
        mock_repo
            .expect_create()
            .withf(|url| url == "https://EXAMPLE.COM")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let record = service.create_or_get("https://EXAMPLE.COM").await.unwrap();
        assert_eq!(record.original_url, "https://EXAMPLE.COM");
    }

    #[tokio::test]
    async fn test_create_or_get_retries_lookup_on_conflict() {
        let mut mock_repo = MockUrlRepository::new();

        let winner = test_record(7, "3mPz1b", "https://example.com");
        let winner_again = winner.clone();

        let mut seq = mockall::Sequence::new();
        mock_repo
            .expect_find_by_original_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(AppError::conflict(
                    "Unique constraint violation",
                    json!({}),
                ))
            });
        mock_repo
            .expect_find_by_original_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(winner_again.clone())));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let record = service.create_or_get("https://example.com").await.unwrap();
        assert_eq!(record.id, 7);
    }

    #[tokio::test]
    async fn test_create_or_get_rejects_invalid_urls() {
        for bad in ["", "not-a-url", "ftp://example.com", "https://"] {
            let mock_repo = MockUrlRepository::new();
            let service = ShortenerService::new(Arc::new(mock_repo));

            let result = service.create_or_get(bad).await;
            assert!(
                matches!(result, Err(AppError::Validation { .. })),
                "expected validation error for {bad:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_get_by_code_success() {
        let mut mock_repo = MockUrlRepository::new();

        let existing = test_record(1, "1to7HG", "https://example.com");
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "1to7HG")
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let record = service.get_by_code("1to7HG").await.unwrap();
        assert_eq!(record.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_get_by_code_not_found() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let result = service.get_by_code("zzzzz").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_by_code_empty_is_not_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_find_by_code().times(0);

        let service = ShortenerService::new(Arc::new(mock_repo));

        let result = service.get_by_code("").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
