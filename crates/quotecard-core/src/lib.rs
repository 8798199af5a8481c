//! quotecard-core: browser-free card model.
//!
//! Holds everything about a quote card that does not need a DOM:
//! the fixed background palette, the card state and its display
//! decoration rules, and the capture parameters for PNG export.

pub mod card;
pub mod export;
pub mod palette;

pub use card::CardState;
pub use export::CaptureSpec;
