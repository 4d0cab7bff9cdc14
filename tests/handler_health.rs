mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use snaplink::api::handlers::health_handler;
use sqlx::SqlitePool;

fn health_app(state: snaplink::state::AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_health_endpoint_success(pool: SqlitePool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(health_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["click_queue"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[sqlx::test]
async fn test_health_endpoint_structure(pool: SqlitePool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(health_app(state)).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("click_queue").is_some());
}

#[sqlx::test]
async fn test_health_degraded_when_click_channel_closed(pool: SqlitePool) {
    let (state, rx) = common::create_test_state(pool);
    drop(rx);

    let server = TestServer::new(health_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_service_unavailable();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["click_queue"]["status"], "failed");
}
