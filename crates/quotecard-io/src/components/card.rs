//! The live quote card preview.

use dioxus::prelude::*;
use quotecard_core::CardState;
use quotecard_core::export::{CARD_ID, CARD_SHADOW_PREVIEW, GLOW_ID, GLOW_PREVIEW, PREVIEW_ID};

/// Props for the [`CardPreview`] component.
#[derive(Props, Clone, PartialEq)]
pub struct CardPreviewProps {
    /// The card to render. The preview is a pure function of this value.
    card: CardState,
}

/// Renders the 1080×1350 card exactly as it will be exported: selected
/// background fill, a rotated quoted-text card with a blurred white
/// glow behind it, the optional context line above, and the author
/// line below, right-aligned.
///
/// The glow geometry and card shadow are inline styles, not classes,
/// so the exporter can record, override, and restore them on the
/// elements directly.
#[component]
pub fn CardPreview(props: CardPreviewProps) -> Element {
    let quote = props.card.display_quote();
    let author = props.card.display_author();
    let context = props.card.display_context();
    let background = props.card.background;
    let glow_style = format!(
        "top: {}; left: {}; width: {}; height: {};",
        GLOW_PREVIEW.top, GLOW_PREVIEW.left, GLOW_PREVIEW.width, GLOW_PREVIEW.height,
    );

    rsx! {
        div {
            id: PREVIEW_ID,
            class: "post-canvas",
            style: "background-color: {background};",
            div { class: "post-inner",
                div { class: "quote-block",
                    if let Some(ref ctx) = context {
                        p { class: "context-text", "{ctx}" }
                    }
                    div { class: "card-stack",
                        div {
                            id: GLOW_ID,
                            class: "glow-rect",
                            style: "{glow_style}",
                        }
                        div {
                            id: CARD_ID,
                            class: "card-rect",
                            style: "box-shadow: {CARD_SHADOW_PREVIEW};",
                            p { class: "quote-text", "{quote}" }
                        }
                    }
                }
                div { class: "author-row",
                    p { class: "author-text", "{author}" }
                }
            }
        }
    }
}
