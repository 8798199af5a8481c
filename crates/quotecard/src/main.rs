use dioxus::prelude::*;
use quotecard_core::CardState;
use quotecard_io::{CardPreview, DownloadButton, PalettePicker, QuoteEditor};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the card state signal and wires the editor fields, palette
/// picker, live preview, and download button together. Every state
/// change re-renders the preview before the next frame, so the
/// exported bitmap always reflects the latest committed input.
fn app() -> Element {
    let mut card = use_signal(CardState::default);

    let on_quote = move |value: String| card.with_mut(|c| c.quote = value);
    let on_author = move |value: String| card.with_mut(|c| c.author = value);
    let on_context = move |value: String| card.with_mut(|c| c.context = value);
    let on_select = move |color: &'static str| {
        card.with_mut(|c| {
            c.select_background(color);
        });
    };

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/app.css") }

        // Rasterizers for the PNG export, reached through window
        // globals. Capture degrades into the normal fallback/error
        // path if either script is blocked.
        script { src: "https://unpkg.com/html-to-image@1.11.13/dist/html-to-image.js" }
        script { src: "https://unpkg.com/html2canvas@1.4.1/dist/html2canvas.min.js" }

        div { class: "page",
            h1 { class: "page-title", "Générateur de citations" }

            QuoteEditor {
                quote: card().quote,
                author: card().author,
                context: card().context,
                on_quote: on_quote,
                on_author: on_author,
                on_context: on_context,
            }

            PalettePicker {
                selected: card().background.to_owned(),
                on_select: on_select,
            }

            CardPreview { card: card() }

            DownloadButton {}
        }
    }
}
