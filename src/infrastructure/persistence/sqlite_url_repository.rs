//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::codec;

/// SQLite repository for URL record storage and retrieval.
///
/// Uses prepared statements with runtime-checked bindings. The short code is
/// derived from the database-assigned rowid, so minting a code requires the
/// insert to happen first.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn create(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        let now = Utc::now();

        // The code depends on the assigned id, so the row is inserted with a
        // placeholder first. SQLite serializes writers, and both statements
        // commit together, so the placeholder is never visible outside this
        // transaction.
        let insert = sqlx::query(
            r#"
            INSERT INTO urls (short_code, original_url, created_at)
            VALUES ('', ?1, ?2)
            "#,
        )
        .bind(original_url)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(AppError::from)?;

        let id = insert.last_insert_rowid();
        let code = codec::encode(id);

        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            UPDATE urls SET short_code = ?1
            WHERE id = ?2
            RETURNING id, short_code, original_url, created_at, clicks, last_clicked_at
            "#,
        )
        .bind(&code)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::from)?;

        tx.commit().await.map_err(AppError::from)?;

        tracing::debug!(id, code = %record.short_code, "created url record");
        Ok(record)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, short_code, original_url, created_at, clicks, last_clicked_at
            FROM urls
            WHERE short_code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(AppError::from)?;

        Ok(record)
    }

    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, short_code, original_url, created_at, clicks, last_clicked_at
            FROM urls
            WHERE original_url = ?1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(AppError::from)?;

        Ok(record)
    }
}
