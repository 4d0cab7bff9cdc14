//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /s`            - Shorten a URL (JSON body)
//! - `GET  /s?u={url}`    - Shorten a URL (query-string variant)
//! - `GET  /health`       - Health check: DB, click queue
//! - `GET  /{code}`       - Short link redirect
//! - `GET  /{code}/stats` - Click statistics for a code
//! - `GET  /{code}/qr`    - QR code PNG for a short URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling
//!
//! Route registration order matters for the wildcard: `/s` and `/health`
//! are literal segments and take precedence over `/{code}`, so those two
//! strings can never be issued as live lookups even though the codec could
//! in principle produce them.

use crate::api::handlers::{
    health_handler, qr_handler, redirect_handler, shorten_handler, shorten_query_handler,
    stats_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/s", get(shorten_query_handler).post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .route("/{code}/stats", get(stats_handler))
        .route("/{code}/qr", get(qr_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
