#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use snaplink::domain::click_event::ClickEvent;
use snaplink::domain::entities::NewClick;
use snaplink::domain::repositories::StatsRepository;
use snaplink::infrastructure::persistence::SqliteStatsRepository;
use snaplink::state::AppState;
use sqlx::SqlitePool;
use tokio::sync::mpsc;

pub const TEST_BASE_URL: &str = "http://sn.test";

/// Builds an [`AppState`] over the given pool, returning the receiving end
/// of the click channel so tests can inspect queued events.
pub fn create_test_state(pool: SqlitePool) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(100);
    let state = AppState::new(pool, tx, TEST_BASE_URL.to_string());
    (state, rx)
}

/// Inserts a URL record with a fixed short code, bypassing code derivation.
pub async fn create_test_record(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO urls (short_code, original_url, created_at) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(code)
    .bind(url)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Records a click through the real repository, so both the counter and the
/// click row are written exactly as in production.
pub async fn record_test_click(pool: &SqlitePool, url_id: i64, ip: &str) {
    let repo = SqliteStatsRepository::new(Arc::new(pool.clone()));
    repo.record_click(NewClick {
        url_id,
        user_agent: Some("TestBot/1.0".to_string()),
        referer: None,
        ip_address: Some(ip.to_string()),
    })
    .await
    .unwrap();
}

/// Counts rows in the clicks table for a record.
pub async fn count_click_rows(pool: &SqlitePool, url_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM clicks WHERE url_id = ?1")
        .bind(url_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
