//! Download button driving the export orchestrator.

use dioxus::prelude::*;
use quotecard_core::CaptureSpec;

use crate::export;

/// Button that exports the current preview to `citation.png`.
///
/// Concurrent exports are rejected: the button disables itself while
/// an export is in flight, so the style override/restore window of
/// one export cannot race another. A total capture failure is shown
/// next to the button (the console carries the detailed warning and
/// error logs).
#[component]
pub fn DownloadButton() -> Element {
    let mut exporting = use_signal(|| false);
    let mut export_error = use_signal(|| Option::<String>::None);

    let onclick = move |_| async move {
        if exporting() {
            return;
        }
        exporting.set(true);
        export_error.set(None);

        let spec = CaptureSpec::default();
        if let Err(err) = export::export_card(&spec).await {
            export_error.set(Some(format!("Échec de l'export : {err}")));
        }

        exporting.set(false);
    };

    rsx! {
        div { class: "download-area",
            if let Some(ref err) = export_error() {
                p { class: "export-error", "{err}" }
            }
            button {
                class: "download-button",
                disabled: exporting(),
                onclick: onclick,
                if exporting() {
                    "Export en cours..."
                } else {
                    "Télécharger"
                }
            }
        }
    }
}
