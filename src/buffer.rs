//! Document storage.
//!
//! [`TextBuffer`] owns the rows and keeps their derived state current; [`editing`] layers the
//! cursor-relative operations (typing, newline, backspace) on top of the row primitives.

pub mod editing;
pub mod row;
pub mod text_buffer;

pub use row::{expand_tabs, Row};
pub use text_buffer::TextBuffer;
