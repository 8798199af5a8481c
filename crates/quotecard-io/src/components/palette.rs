//! Background color palette picker.

use dioxus::prelude::*;
use quotecard_core::palette;

/// Props for the [`PalettePicker`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PalettePickerProps {
    /// The currently selected color.
    selected: String,
    /// Called with the picked palette color.
    on_select: EventHandler<&'static str>,
}

/// A grid of round swatches, one per palette color.
///
/// The selected swatch carries a black border; all others are
/// transparent-bordered, so at most one swatch ever appears selected.
#[component]
pub fn PalettePicker(props: PalettePickerProps) -> Element {
    // EventHandler is Copy; bind it before the per-swatch closures.
    let on_select = props.on_select;

    rsx! {
        div { class: "palette-grid",
            for color in palette::COLORS {
                button {
                    key: "{color}",
                    class: if props.selected == color {
                        "palette-swatch swatch-selected"
                    } else {
                        "palette-swatch"
                    },
                    style: "background-color: {color};",
                    aria_label: "Couleur {color}",
                    onclick: move |_| on_select.call(color),
                }
            }
        }
    }
}
