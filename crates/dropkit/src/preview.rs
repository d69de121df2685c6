//! Object-URL preview handles for accepted files.
//!
//! Accepted files carry a temporary handle the host can put in an
//! `<img src>` or open in a tab. The handle is an object URL backed by
//! a Blob built from the file's bytes; it must be revoked when the
//! entry leaves the list or the browser keeps the Blob alive.

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur while creating a preview handle.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for PreviewError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Create an object URL displaying `bytes` with the given MIME type.
///
/// The returned URL must be revoked via [`revoke_preview_url`] when no
/// longer needed to avoid memory leaks.
///
/// # Errors
///
/// Returns [`PreviewError::JsError`] if Blob or URL creation fails.
pub fn create_preview_url(mime_type: &str, bytes: &[u8]) -> Result<String, PreviewError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Revoke a preview handle created by [`create_preview_url`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked. Handles that are not object URLs (a data-URL
/// fallback) hold no browser resources and are skipped.
pub fn revoke_preview_url(url: &str) {
    if !is_object_url(url) {
        return;
    }
    let _ = web_sys::Url::revoke_object_url(url);
}

/// Returns `true` for `blob:` URLs, the only kind of preview handle
/// that needs revocation.
fn is_object_url(url: &str) -> bool {
    url.starts_with("blob:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_urls_are_detected_by_scheme() {
        assert!(is_object_url("blob:https://app.example/3f2a64c0"));
        assert!(!is_object_url("data:image/png;base64,iVBORw0KGgo="));
        assert!(!is_object_url(""));
    }
}
