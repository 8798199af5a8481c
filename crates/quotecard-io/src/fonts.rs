//! Web font readiness.
//!
//! `document.fonts.ready` resolves once all loading web fonts are
//! usable, so the captured bitmap is rendered with the final glyphs
//! rather than a fallback face. Platforms without the Font Loading
//! API simply proceed; readiness is best-effort, never an error.

use wasm_bindgen_futures::JsFuture;

/// Wait for web fonts to finish loading, if the platform can tell us.
///
/// Resolves immediately when the window, document, or Font Loading
/// API is unavailable, and ignores a rejected readiness promise.
#[allow(clippy::future_not_send)] // WASM is single-threaded
pub async fn fonts_ready() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(promise) = document.fonts().ready() else {
        return;
    };
    let _ = JsFuture::from(promise).await;
}
