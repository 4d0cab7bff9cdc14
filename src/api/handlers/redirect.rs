//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;
use tracing::debug;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the record for the code
/// 2. Send a click event to the background worker
/// 3. Return 307 Temporary Redirect to the original URL
///
/// # Click Tracking
///
/// Click events are sent to a bounded channel for async processing.
/// If the queue is full, the click is dropped (fire-and-forget); the
/// redirect itself never waits on click persistence.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist or is malformed.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.shortener_service.get_by_code(&code).await?;

    let click_event = ClickEvent::new(
        record.id,
        Some(addr.ip().to_string()),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
    );

    if state.click_tx.try_send(click_event).is_err() {
        debug!(code = %record.short_code, "click queue full, dropping event");
    }

    Ok(Redirect::temporary(&record.original_url))
}
