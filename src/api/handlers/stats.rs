//! Handler for per-code click statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves click statistics for a short code.
///
/// # Endpoint
///
/// `GET /{code}/stats`
///
/// # Response
///
/// ```json
/// {
///   "short_code": "1to7HG",
///   "original_url": "https://example.com",
///   "created_at": "2025-01-01T00:00:00Z",
///   "total_clicks": 5,
///   "last_clicked_at": "2025-01-02T12:00:00Z"
/// }
/// ```
///
/// `total_clicks` is 0 and `last_clicked_at` is `null` for a code that has
/// never been followed.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_stats(&code).await?;

    Ok(Json(StatsResponse::from(stats)))
}
