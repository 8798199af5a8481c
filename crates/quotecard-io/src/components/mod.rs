//! Dioxus UI components for quotecard.
//!
//! Provides the quote/author/context editor fields, the background
//! palette picker, the live card preview, and the download button.

mod card;
mod editor;
mod export;
mod palette;

pub use card::CardPreview;
pub use editor::QuoteEditor;
pub use export::DownloadButton;
pub use palette::PalettePicker;
