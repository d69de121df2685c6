//! Data-URL construction (RFC 2397).
//!
//! The pure half of file encoding: the widget reads a candidate's
//! bytes asynchronously, then hands them here to build the embeddable
//! `data:` URL stored on every accepted file.

use base64::{Engine, engine::general_purpose};

/// MIME type substituted when a candidate reports none.
///
/// Matches what browsers embed in a data URL read from a file with no
/// recognized type.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode `bytes` as a base64 `data:` URL.
///
/// An empty `mime_type` falls back to [`FALLBACK_MIME`]. The payload
/// uses the standard base64 alphabet with padding.
#[must_use]
pub fn encode(mime_type: &str, bytes: &[u8]) -> String {
    let mime = if mime_type.is_empty() {
        FALLBACK_MIME
    } else {
        mime_type
    };
    let payload = general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{payload}")
}
