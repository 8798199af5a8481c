//! End-to-end card state scenarios (no DOM required).

use quotecard_core::export::CaptureSpec;
use quotecard_core::{CardState, palette};

#[test]
fn hello_world_without_context_renders_no_context_paragraph() {
    let card = CardState {
        quote: "Hello".into(),
        author: "World".into(),
        ..CardState::default()
    };

    assert_eq!(card.display_quote(), "\u{201c}Hello\u{201d}");
    assert_eq!(card.display_author(), "- World");
    assert_eq!(card.display_context(), None);
    assert_eq!(card.background, palette::DEFAULT);
}

#[test]
fn context_paragraph_appears_once_context_is_set() {
    let card = CardState {
        context: "essayant de négocier des points".into(),
        ..CardState::default()
    };
    assert_eq!(
        card.display_context().as_deref(),
        Some("*essayant de négocier des points")
    );
}

#[test]
fn empty_inputs_still_produce_a_renderable_card() {
    // Export with empty quote and author must not be blocked by
    // validation; the card model renders the decorations regardless.
    let card = CardState::default();
    assert_eq!(card.display_quote(), "\u{201c}\u{201d}");
    assert_eq!(card.display_author(), "- ");
    assert_eq!(card.display_context(), None);
}

#[test]
fn switching_swatches_deselects_the_previous_one() {
    let mut card = CardState::default();
    let first = palette::COLORS[1];
    let second = palette::COLORS[9];

    assert!(card.select_background(first));
    assert!(card.is_selected(first));

    assert!(card.select_background(second));
    assert!(card.is_selected(second));
    assert!(!card.is_selected(first));
}

#[test]
fn export_filename_and_dimensions_are_fixed() {
    let spec = CaptureSpec::default();
    assert_eq!(
        (spec.width, spec.height, spec.filename),
        (1080, 1350, "citation.png")
    );
}
