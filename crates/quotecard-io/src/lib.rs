//! quotecard-io: Browser I/O and Dioxus component library.
//!
//! JS rasterizer bindings, web-font readiness, scoped style overrides,
//! data-URL downloads, the export orchestrator, and the UI components
//! for the quotecard web application.

pub mod capture;
pub mod components;
pub mod download;
pub mod export;
pub mod fonts;
pub mod overrides;

pub use components::{CardPreview, DownloadButton, PalettePicker, QuoteEditor};
pub use export::{ExportError, export_card};
