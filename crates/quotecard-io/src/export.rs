//! The export orchestrator: current preview → PNG download.
//!
//! Sequence: locate the preview root, wait for web fonts plus a short
//! settle delay, widen the glow and shadow offsets for the capture
//! window, try each capture backend in order, download the first
//! successful result as `citation.png`, and restore the overridden
//! styles on every exit path.

use gloo_timers::future::TimeoutFuture;
use quotecard_core::CaptureSpec;
use quotecard_core::export::{PREVIEW_ID, SETTLE_DELAY_MS};
use web_sys::console;

use crate::capture::{CaptureError, CaptureMethod};
use crate::download::{self, DownloadError};
use crate::fonts;
use crate::overrides::ExportOverrides;

/// Errors surfaced to the UI after an export attempt.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The preview root element is not in the document.
    #[error("preview element #{0} not found")]
    MissingPreview(&'static str),

    /// Every capture backend failed; carries the last failure.
    #[error("all capture methods failed: {0}")]
    CaptureFailed(#[source] CaptureError),

    /// A capture succeeded but the download could not be synthesized.
    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// Export the current preview to a PNG download.
///
/// A second export must not be started while one is in flight — the
/// style override/restore windows would race on the recorded values.
/// The download button enforces this by disabling itself.
///
/// # Errors
///
/// Returns [`ExportError`] when the preview root is missing, every
/// capture backend fails, or the download cannot be triggered. Capture
/// failures are also logged to the console: a warning when the primary
/// backend falls through, an error when all backends fail.
#[allow(clippy::future_not_send)] // WASM is single-threaded
pub async fn export_card(spec: &CaptureSpec) -> Result<(), ExportError> {
    let root = preview_root()?;

    fonts::fonts_ready().await;
    TimeoutFuture::new(SETTLE_DELAY_MS).await;

    let overrides = ExportOverrides::apply(&root);
    let outcome = capture_and_download(&root, spec).await;
    overrides.restore();
    outcome
}

fn preview_root() -> Result<web_sys::Element, ExportError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PREVIEW_ID))
        .ok_or(ExportError::MissingPreview(PREVIEW_ID))
}

/// Try each capture backend in order; download the first success.
///
/// The fallback is never attempted once a backend succeeds.
#[allow(clippy::future_not_send)] // WASM is single-threaded
async fn capture_and_download(
    root: &web_sys::Element,
    spec: &CaptureSpec,
) -> Result<(), ExportError> {
    let mut last_failure = None;

    for (i, method) in CaptureMethod::ORDERED.into_iter().enumerate() {
        match method.capture(root, spec).await {
            Ok(data_url) => {
                download::trigger_download(&data_url, spec.filename)?;
                return Ok(());
            }
            Err(err) => {
                if i + 1 < CaptureMethod::ORDERED.len() {
                    console::warn_1(
                        &format!("{} failed, falling back: {err}", method.label()).into(),
                    );
                }
                last_failure = Some(err);
            }
        }
    }

    console::error_1(&"All capture methods failed".into());
    Err(ExportError::CaptureFailed(last_failure.unwrap_or(
        CaptureError::Unavailable("no capture method"),
    )))
}
