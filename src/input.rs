//! Keyboard input.
//!
//! [`key`] defines the editor's key vocabulary and [`raw`] turns crossterm events into it.

pub mod key;
pub mod raw;

pub use key::{ctrl, Key};
pub use raw::KeyCollector;
