//! SQLite implementation of the statistics repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{StatsRepository, UrlStats};
use crate::error::AppError;

/// SQLite repository for click tracking and analytics.
pub struct SqliteStatsRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for SqliteStatsRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        let now = Utc::now();

        // Bump the counter first: zero affected rows means the record does
        // not exist, and rolling back here leaves no orphan click row.
        let updated = sqlx::query(
            r#"
            UPDATE urls
            SET clicks = clicks + 1, last_clicked_at = ?1
            WHERE id = ?2
            "#,
        )
        .bind(now)
        .bind(new_click.url_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::from)?;

        if updated.rows_affected() == 0 {
            tx.rollback().await.map_err(AppError::from)?;
            return Err(AppError::not_found(
                "URL record not found",
                json!({ "url_id": new_click.url_id }),
            ));
        }

        let click = sqlx::query_as::<_, Click>(
            r#"
            INSERT INTO clicks (url_id, clicked_at, user_agent, referer, ip_address)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, url_id, clicked_at, user_agent, referer, ip_address
            "#,
        )
        .bind(new_click.url_id)
        .bind(now)
        .bind(&new_click.user_agent)
        .bind(&new_click.referer)
        .bind(&new_click.ip_address)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::from)?;

        tx.commit().await.map_err(AppError::from)?;

        Ok(click)
    }

    async fn stats_by_code(&self, code: &str) -> Result<Option<UrlStats>, AppError> {
        let stats = sqlx::query_as::<_, UrlStats>(
            r#"
            SELECT
                id AS url_id,
                short_code,
                original_url,
                created_at,
                clicks AS total_clicks,
                last_clicked_at
            FROM urls
            WHERE short_code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(AppError::from)?;

        Ok(stats)
    }

    async fn count_clicks(&self, url_id: i64) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM clicks WHERE url_id = ?1
            "#,
        )
        .bind(url_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(AppError::from)?;

        Ok(count)
    }
}
