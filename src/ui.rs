//! Terminal abstraction.
//!
//! The editor talks to the terminal only through [`UIRenderer`]: push a finished frame, read
//! one key, query the size. [`TerminalUI`] is the crossterm implementation; tests substitute
//! a scripted renderer.

pub mod renderer;
pub mod terminal;

pub use renderer::UIRenderer;
pub use terminal::TerminalUI;

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;
