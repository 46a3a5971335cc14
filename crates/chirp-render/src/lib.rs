//! Chirp Render
//!
//! HTML output for the chirp engine: the [`Autolinker`] wraps extracted
//! entities in anchor markup, and the [`HitHighlighter`] wraps
//! caller-supplied ranges in highlight tags.

pub mod autolink;
pub mod escape;
pub mod highlight;

pub use autolink::{Autolinker, Modifier, TextRewriter};
pub use escape::escape_html;
pub use highlight::{HitHighlighter, DEFAULT_HIGHLIGHT_TAG};
