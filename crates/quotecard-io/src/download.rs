//! File download via a synthesized anchor click.
//!
//! Dioxus has no built-in file download API. This module triggers
//! downloads by creating a temporary `<a download>` element pointing
//! at a data URL and programmatically clicking it. Data URLs need no
//! revocation, unlike Blob object URLs.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Trigger a file download of `href` (typically a PNG data URL) under
/// `filename`.
///
/// Creates a temporary `<a href download="filename">` element, appends
/// it to the body, clicks it, and removes it again.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if the window, document, or body
/// is unavailable or element creation fails.
pub fn trigger_download(href: &str, filename: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(href);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // Best-effort cleanup — the download is already initiated.
    // Failures here should not be reported as "download failed".
    let _ = body.remove_child(&anchor);

    Ok(())
}
