//! Syntax highlighting.
//!
//! [`rules`] holds the static file-type database and [`highlighter`] the per-row
//! classification pass.

pub mod highlighter;
pub mod rules;

pub use highlighter::{highlight, is_separator, Highlight, LineHighlight};
pub use rules::{select_for, KeywordClass, SyntaxFlags, SyntaxRules, SYNTAX_DB};
