//! Handlers for the URL shortening endpoints.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenQuery, ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST /s`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// Always `201 Created`, whether the code was just issued or the URL had
/// been shortened before. Submitting the same URL twice returns the same
/// code and the original `created_at`.
///
/// ```json
/// {
///   "short_code": "1to7HG",
///   "short_url": "http://localhost:3000/1to7HG",
///   "original_url": "https://example.com/some/long/path",
///   "created_at": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is empty, unparseable, or uses a
/// scheme other than http/https.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    shorten_url(&state, &payload.url).await
}

/// Query-string variant of the shorten endpoint.
///
/// # Endpoint
///
/// `GET /s?u={url}`
///
/// Convenience form for clients that cannot send a body (bookmarklets,
/// plain links). Semantics match `POST /s` exactly, including the 201
/// status on idempotent hits.
///
/// # Errors
///
/// Returns 400 Bad Request if the `u` parameter is missing or invalid.
pub async fn shorten_query_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortenQuery>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let url = query.u.ok_or_else(|| {
        AppError::validation("Missing query parameter 'u'", json!({ "field": "u" }))
    })?;

    shorten_url(&state, &url).await
}

async fn shorten_url(
    state: &AppState,
    url: &str,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let record = state.shortener_service.create_or_get(url).await?;
    let short_url = state.short_url(&record.short_code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse::from_record(record, short_url)),
    ))
}
