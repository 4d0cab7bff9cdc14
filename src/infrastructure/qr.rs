//! QR code rendering for short links.
//!
//! The rest of the crate only sees strings in and PNG bytes out; the QR and
//! image crates never leak past this module.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Luma};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

/// Minimum rendered dimensions of the QR image in pixels.
pub const QR_MIN_DIMENSIONS: u32 = 256;

/// Errors that can occur while rendering a QR code to PNG bytes.
#[derive(Debug, Error)]
pub enum QrEncodeError {
    #[error("failed to build QR code: {0}")]
    Build(#[from] QrError),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] image::ImageError),
}

/// Renders `data` as a PNG QR image at the given error-correction level.
///
/// The image is grayscale, at least [`QR_MIN_DIMENSIONS`] pixels on each
/// side, with the standard quiet zone.
pub fn encode_png(data: &str, level: EcLevel) -> Result<Vec<u8>, QrEncodeError> {
    let code = QrCode::with_error_correction_level(data, level)?;

    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(QR_MIN_DIMENSIONS, QR_MIN_DIMENSIONS)
        .build();

    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::L8,
    )?;

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_produces_png_bytes() {
        let bytes = encode_png("http://localhost:3000/1to7HG", EcLevel::M).unwrap();
        assert!(bytes.len() > PNG_SIGNATURE.len());
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_handles_long_payloads() {
        let long_url = format!("https://example.com/{}", "a".repeat(500));
        let bytes = encode_png(&long_url, EcLevel::M).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_rejects_oversized_payloads() {
        // Version 40 at level M caps out near 2.3 KB; 5 KB cannot fit.
        let oversized = "x".repeat(5_000);
        assert!(encode_png(&oversized, EcLevel::M).is_err());
    }
}
