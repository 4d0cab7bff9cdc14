//! Handler serving QR code images for short URLs.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use qrcode::EcLevel;
use serde_json::json;

use crate::error::AppError;
use crate::infrastructure::qr;
use crate::state::AppState;

/// Returns a PNG QR code encoding the short URL for a code.
///
/// # Endpoint
///
/// `GET /{code}/qr`
///
/// # Response
///
/// `200 OK` with `Content-Type: image/png`. The image encodes the full
/// short URL (base URL + code), not the original URL, so scans route
/// through the redirect and are counted as clicks. QR images are immutable
/// per code and served with a one-day cache header.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn qr_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.shortener_service.get_by_code(&code).await?;

    let short_url = state.short_url(&record.short_code);

    let png = qr::encode_png(&short_url, EcLevel::M).map_err(|e| {
        tracing::error!(code = %record.short_code, error = %e, "QR encoding failed");
        AppError::storage("Failed to generate QR code", json!({ "code": record.short_code }))
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        png,
    ))
}
