//! UI renderer trait
//!
//! This module defines the UIRenderer trait the editor drives: one composed frame out, one
//! decoded key in.

use crate::error::Result;
use crate::input::Key;

/// Core trait for terminal output and key input
pub trait UIRenderer {
    /// Write one complete frame to the terminal in a single flush
    fn render(&mut self, frame: &[u8]) -> Result<()>;

    /// Block until the next key arrives
    ///
    /// Idle read timeouts are retried internally; an `Err` is fatal.
    fn read_key(&mut self) -> Result<Key>;

    /// Initialize the terminal UI
    ///
    /// This method should:
    /// - Set up raw mode
    /// - Switch to the alternate screen
    fn initialize(&mut self) -> Result<()>;

    /// Clean up and restore terminal state
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)
}
