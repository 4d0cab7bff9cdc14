//! Pure helper functions with no I/O.
//!
//! - [`codec`] - Reversible id obfuscation and base62 short codes
//! - [`url_validator`] - Input validation for submitted URLs

pub mod codec;
pub mod url_validator;
