//! Scoped inline-style overrides for the capture window.
//!
//! The on-screen preview uses a smaller glow offset and softer card
//! shadow than what must appear in the exported bitmap; live display
//! and rasterized output disagree on how those effects scale.
//! [`ExportOverrides::apply`] records the elements' current inline
//! values and writes the export values; [`restore`](ExportOverrides::restore)
//! puts the recorded values back, falling back to the preview defaults
//! where no inline value existed. The exporter calls `restore` on
//! every exit path, including total capture failure.

use quotecard_core::export::{
    CARD_ID, CARD_SHADOW_EXPORT, CARD_SHADOW_PREVIEW, GLOW_EXPORT, GLOW_ID, GLOW_PREVIEW,
};
use wasm_bindgen::JsCast;

/// Glow properties with their export value and preview fallback.
const GLOW_PROPS: [(&str, &str, &str); 4] = [
    ("top", GLOW_EXPORT.top, GLOW_PREVIEW.top),
    ("left", GLOW_EXPORT.left, GLOW_PREVIEW.left),
    ("width", GLOW_EXPORT.width, GLOW_PREVIEW.width),
    ("height", GLOW_EXPORT.height, GLOW_PREVIEW.height),
];

/// Inline styles recorded from one element before overriding.
struct Recorded {
    element: web_sys::HtmlElement,
    /// `(property, previous inline value, preview fallback)`.
    values: Vec<(&'static str, String, &'static str)>,
}

/// The applied export overrides, holding what is needed to undo them.
pub struct ExportOverrides {
    glow: Option<Recorded>,
    card: Option<Recorded>,
}

impl ExportOverrides {
    /// Record the glow and card inline styles under `root` and apply
    /// the export values.
    ///
    /// A missing glow or card element is tolerated: its override is
    /// skipped and `restore` will skip it too.
    #[must_use]
    pub fn apply(root: &web_sys::Element) -> Self {
        let glow = find(root, GLOW_ID).map(|element| {
            let style = element.style();
            let mut values = Vec::with_capacity(GLOW_PROPS.len());
            for (prop, export_value, fallback) in GLOW_PROPS {
                values.push((prop, style.get_property_value(prop).unwrap_or_default(), fallback));
                let _ = style.set_property(prop, export_value);
            }
            Recorded { element, values }
        });

        let card = find(root, CARD_ID).map(|element| {
            let style = element.style();
            let values = vec![(
                "box-shadow",
                style.get_property_value("box-shadow").unwrap_or_default(),
                CARD_SHADOW_PREVIEW,
            )];
            let _ = style.set_property("box-shadow", CARD_SHADOW_EXPORT);
            Recorded { element, values }
        });

        Self { glow, card }
    }

    /// Put the recorded inline values back, defaulting to the preview
    /// values where no inline value was recorded.
    pub fn restore(self) {
        for recorded in [self.glow, self.card].into_iter().flatten() {
            let style = recorded.element.style();
            for (prop, previous, fallback) in &recorded.values {
                let _ = style.set_property(prop, restore_value(previous, fallback));
            }
        }
    }
}

/// The value to restore: the recorded inline value, or the preview
/// fallback when none was recorded.
fn restore_value<'a>(previous: &'a str, fallback: &'a str) -> &'a str {
    if previous.is_empty() { fallback } else { previous }
}

fn find(root: &web_sys::Element, id: &str) -> Option<web_sys::HtmlElement> {
    root.query_selector(&format!("#{id}"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_prefers_the_recorded_inline_value() {
        assert_eq!(restore_value("-25px", "-30px"), "-25px");
    }

    #[test]
    fn restore_falls_back_to_the_preview_default() {
        assert_eq!(restore_value("", "-30px"), "-30px");
        assert_eq!(restore_value("", CARD_SHADOW_PREVIEW), CARD_SHADOW_PREVIEW);
    }

    #[test]
    fn glow_override_covers_offset_and_size() {
        let props: Vec<&str> = GLOW_PROPS.iter().map(|(p, _, _)| *p).collect();
        assert_eq!(props, ["top", "left", "width", "height"]);
    }
}
