//! Input validation for URLs submitted for shortening.
//!
//! Validation only: the stored `original_url` is the exact string the client
//! supplied. Two URLs that differ in case, default ports, or fragments are
//! distinct records on purpose.

use url::Url;

/// Errors that can occur while validating a submitted URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Validates that a string is an absolute HTTP(S) URL with a host.
///
/// # Validation Rules
///
/// 1. **Non-empty**: the empty string is rejected outright
/// 2. **Parseable**: must be an absolute URL per the WHATWG URL standard
/// 3. **Protocol**: only `http` and `https` are allowed
/// 4. **Host**: a non-empty host is required
///
/// The input is never rewritten. `HTTPS://EXAMPLE.COM` and
/// `https://example.com` both pass and remain distinct strings.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for the empty string,
/// [`UrlValidationError::InvalidFormat`] for anything `Url::parse` rejects,
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes, and
/// [`UrlValidationError::MissingHost`] when the host part is absent or empty.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
