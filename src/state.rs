//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::mpsc;

use crate::application::services::{ShortenerService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::persistence::{SqliteStatsRepository, SqliteUrlRepository};

/// Application state shared by all handlers.
///
/// Handlers share only the pool (through the services), the click channel and
/// the configured base URL. Everything else is per-request.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService<SqliteUrlRepository>>,
    pub stats_service: Arc<StatsService<SqliteStatsRepository>>,
    pub click_tx: mpsc::Sender<ClickEvent>,
    pub base_url: String,
    pub db: SqlitePool,
}

impl AppState {
    /// Wires repositories and services over the given pool.
    pub fn new(db: SqlitePool, click_tx: mpsc::Sender<ClickEvent>, base_url: String) -> Self {
        let pool = Arc::new(db.clone());
        let url_repository = Arc::new(SqliteUrlRepository::new(pool.clone()));
        let stats_repository = Arc::new(SqliteStatsRepository::new(pool));

        Self {
            shortener_service: Arc::new(ShortenerService::new(url_repository)),
            stats_service: Arc::new(StatsService::new(stats_repository)),
            click_tx,
            base_url,
            db,
        }
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
