//! Card state and display decoration.
//!
//! The four inputs that jointly determine the rendered card, plus the
//! decoration rules the preview applies: the quote is wrapped in curly
//! quotation marks, the author line is prefixed with `- `, and the
//! context line is prefixed with `*` and only shown when non-empty.

use crate::palette;

/// Everything the user has typed or picked for the current card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    /// Free-form quote text. May be empty.
    pub quote: String,
    /// Author name, empty if unset.
    pub author: String,
    /// Context line shown above the card, empty if unset.
    pub context: String,
    /// Selected background color, always a palette member.
    pub background: &'static str,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            quote: String::new(),
            author: String::new(),
            context: String::new(),
            background: palette::DEFAULT,
        }
    }
}

impl CardState {
    /// The quote as displayed on the card, wrapped in curly quotation
    /// marks. An empty quote renders as an empty quoted string.
    #[must_use]
    pub fn display_quote(&self) -> String {
        format!("\u{201c}{}\u{201d}", self.quote)
    }

    /// The author line, always rendered, prefixed with `- `.
    #[must_use]
    pub fn display_author(&self) -> String {
        format!("- {}", self.author)
    }

    /// The context line prefixed with `*`, or `None` when the context
    /// is empty (the paragraph is omitted entirely).
    #[must_use]
    pub fn display_context(&self) -> Option<String> {
        if self.context.is_empty() {
            None
        } else {
            Some(format!("*{}", self.context))
        }
    }

    /// Select a background swatch. Colors outside the palette are
    /// ignored and leave the current selection in place.
    pub fn select_background(&mut self, color: &'static str) -> bool {
        if palette::contains(color) {
            self.background = color;
            true
        } else {
            false
        }
    }

    /// Whether `color` is the currently selected swatch.
    #[must_use]
    pub fn is_selected(&self, color: &str) -> bool {
        self.background == color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_is_wrapped_in_curly_quotation_marks() {
        let card = CardState {
            quote: "La vie est belle".into(),
            ..CardState::default()
        };
        assert_eq!(card.display_quote(), "\u{201c}La vie est belle\u{201d}");
    }

    #[test]
    fn empty_quote_renders_as_empty_quoted_string() {
        let card = CardState::default();
        assert_eq!(card.display_quote(), "\u{201c}\u{201d}");
    }

    #[test]
    fn author_line_is_dash_prefixed_even_when_empty() {
        let mut card = CardState::default();
        assert_eq!(card.display_author(), "- ");
        card.author = "Victor Hugo".into();
        assert_eq!(card.display_author(), "- Victor Hugo");
    }

    #[test]
    fn context_is_asterisk_prefixed_and_omitted_when_empty() {
        let mut card = CardState::default();
        assert_eq!(card.display_context(), None);
        card.context = "en plein cours de maths".into();
        assert_eq!(
            card.display_context().as_deref(),
            Some("*en plein cours de maths")
        );
    }

    #[test]
    fn text_is_passed_through_without_transformation() {
        // No trimming, escaping, or case changes beyond the fixed affixes.
        let card = CardState {
            quote: "  spaced  ".into(),
            author: "<b>".into(),
            context: "100% \"sûr\"".into(),
            ..CardState::default()
        };
        assert_eq!(card.display_quote(), "\u{201c}  spaced  \u{201d}");
        assert_eq!(card.display_author(), "- <b>");
        assert_eq!(card.display_context().as_deref(), Some("*100% \"sûr\""));
    }

    #[test]
    fn default_background_is_the_first_palette_entry() {
        assert_eq!(CardState::default().background, palette::DEFAULT);
    }

    #[test]
    fn selection_accepts_palette_members_only() {
        let mut card = CardState::default();
        assert!(card.select_background(palette::COLORS[3]));
        assert_eq!(card.background, palette::COLORS[3]);

        assert!(!card.select_background("#000000"));
        assert_eq!(card.background, palette::COLORS[3], "rejected color must not stick");
    }

    #[test]
    fn at_most_one_swatch_is_selected() {
        let mut card = CardState::default();
        for color in palette::COLORS {
            assert!(card.select_background(color));
            let selected = palette::COLORS
                .iter()
                .filter(|c| card.is_selected(c))
                .count();
            assert_eq!(selected, 1, "exactly one swatch selected after picking {color}");
        }
    }
}
