//! Quote, author, and context input fields.

use dioxus::prelude::*;

/// Props for the [`QuoteEditor`] component.
#[derive(Props, Clone, PartialEq)]
pub struct QuoteEditorProps {
    /// Current quote text.
    quote: String,
    /// Current author text.
    author: String,
    /// Current context text.
    context: String,
    /// Called with the new quote on every keystroke.
    on_quote: EventHandler<String>,
    /// Called with the new author on every keystroke.
    on_author: EventHandler<String>,
    /// Called with the new context on every keystroke.
    on_context: EventHandler<String>,
}

/// A multi-line quote field plus single-line author and context fields.
///
/// No validation: empty values are legal everywhere and flow through
/// to the preview and the exporter unchanged.
#[component]
pub fn QuoteEditor(props: QuoteEditorProps) -> Element {
    // EventHandler is Copy; bind before the closures so the closures
    // do not capture `props` itself.
    let on_quote = props.on_quote;
    let on_author = props.on_author;
    let on_context = props.on_context;

    rsx! {
        textarea {
            class: "editor-field",
            rows: "3",
            placeholder: "Écris ta citation...",
            value: "{props.quote}",
            oninput: move |e| on_quote.call(e.value()),
        }
        input {
            r#type: "text",
            class: "editor-field",
            placeholder: "Auteur",
            value: "{props.author}",
            oninput: move |e| on_author.call(e.value()),
        }
        input {
            r#type: "text",
            class: "editor-field",
            placeholder: "Contexte (ex: essayant de négocier des points pour un contrôle)",
            value: "{props.context}",
            oninput: move |e| on_context.call(e.value()),
        }
    }
}
