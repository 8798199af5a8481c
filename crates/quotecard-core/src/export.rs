//! Capture parameters and preview/export visual constants.
//!
//! The exported bitmap does not look identical to the live preview:
//! rasterized output scales the glow offset and card shadow
//! differently than on-screen display. The exporter therefore widens
//! both for the duration of the capture and restores the preview
//! values afterwards. Both sets of values live here so the preview
//! component and the exporter agree on them.

/// DOM id of the preview root element captured during export.
pub const PREVIEW_ID: &str = "post";

/// DOM id of the blurred glow rectangle behind the card.
pub const GLOW_ID: &str = "glow-rect";

/// DOM id of the white card surface bearing the quote.
pub const CARD_ID: &str = "card-rect";

/// Delay between font readiness and capture, letting layout and paint
/// settle before the rasterizer reads the DOM.
pub const SETTLE_DELAY_MS: u32 = 50;

/// Fixed parameters of the PNG capture.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureSpec {
    /// Output width in logical pixels.
    pub width: u32,
    /// Output height in logical pixels.
    pub height: u32,
    /// Device pixel ratio applied by the rasterizer.
    pub pixel_ratio: f64,
    /// Filename of the synthesized download.
    pub filename: &'static str,
}

impl Default for CaptureSpec {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1350,
            pixel_ratio: 2.0,
            filename: "citation.png",
        }
    }
}

/// Inline glow geometry: offset from the card and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlowFrame {
    pub top: &'static str,
    pub left: &'static str,
    pub width: &'static str,
    pub height: &'static str,
}

/// Glow geometry shown in the live preview.
pub const GLOW_PREVIEW: GlowFrame = GlowFrame {
    top: "-30px",
    left: "-30px",
    width: "100%",
    height: "100%",
};

/// Glow geometry applied during capture.
pub const GLOW_EXPORT: GlowFrame = GlowFrame {
    top: "-40px",
    left: "-40px",
    width: "100%",
    height: "100%",
};

/// Card shadow shown in the live preview.
pub const CARD_SHADOW_PREVIEW: &str = "30px 30px 70px rgba(0, 0, 0, 0.35)";

/// Card shadow applied during capture.
pub const CARD_SHADOW_EXPORT: &str = "40px -40px 90px rgba(0, 0, 0, 0.35)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_spec_matches_the_published_card_format() {
        let spec = CaptureSpec::default();
        assert_eq!(spec.width, 1080);
        assert_eq!(spec.height, 1350);
        assert!((spec.pixel_ratio - 2.0).abs() < f64::EPSILON);
        assert_eq!(spec.filename, "citation.png");
    }

    #[test]
    fn capture_canvas_is_portrait_four_by_five() {
        let spec = CaptureSpec::default();
        assert_eq!(spec.width * 5, spec.height * 4);
    }

    #[test]
    fn export_offsets_differ_from_preview_offsets() {
        assert_ne!(GLOW_EXPORT.top, GLOW_PREVIEW.top);
        assert_ne!(GLOW_EXPORT.left, GLOW_PREVIEW.left);
        assert_ne!(CARD_SHADOW_EXPORT, CARD_SHADOW_PREVIEW);
    }

    #[test]
    fn export_glow_fully_covers_its_container() {
        assert_eq!(GLOW_EXPORT.width, "100%");
        assert_eq!(GLOW_EXPORT.height, "100%");
    }

    #[test]
    fn dom_ids_are_distinct() {
        assert_ne!(PREVIEW_ID, GLOW_ID);
        assert_ne!(PREVIEW_ID, CARD_ID);
        assert_ne!(GLOW_ID, CARD_ID);
    }
}
