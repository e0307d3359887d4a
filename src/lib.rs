//! # kedit - A small terminal text editor
//!
//! kedit keeps one document in memory as a list of rows, renders a scrolling window of it
//! with tab expansion and syntax coloring, and supports incremental search.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - Tab stop, quit confirmations and message lifetime
//! - [`buffer`] - Rows, the text buffer and cursor-level edits
//! - [`syntax`] - File-type rules and the highlighter
//! - [`view`] - Cursor, viewport and column conversions
//! - [`search`] - Incremental search with highlight overlay
//! - [`render`] - Frame composition into a single output buffer
//! - [`input`] / [`ui`] - Key decoding and the terminal seam
//! - [`app`] - The editor state, key dispatch, prompts and the run loop

// Core modules
pub mod config;
pub mod error;
pub mod file_handler;

// Document model
pub mod buffer;
pub mod search;
pub mod syntax;
pub mod view;

// Terminal side
pub mod input;
pub mod render;
pub mod ui;

pub mod app;

// Re-export commonly used types for convenience
pub use app::{Editor, KeyOutcome, PromptListener};
pub use buffer::{Row, TextBuffer};
pub use config::EditorConfig;
pub use error::{EditorError, Result};
pub use input::Key;
pub use syntax::{Highlight, SyntaxRules};
pub use ui::{TerminalUI, UIRenderer};
pub use view::{CursorPos, Viewport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
