//! Terminal UI implementation using crossterm
//!
//! Raw mode and the alternate screen are entered on [`UIRenderer::initialize`] and always
//! left again, on cleanup or when the value is dropped.

use crate::error::{EditorError, Result};
use crate::input::{Key, KeyCollector};
use crate::ui::UIRenderer;
use ratatui::crossterm::{
    cursor, execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// How long a single key poll waits before it is retried.
const KEY_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Terminal UI backed by stdout.
pub struct TerminalUI {
    stdout: Stdout,
    keys: KeyCollector,
    active: bool,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Ok(Self {
            stdout: io::stdout(),
            keys: KeyCollector::new(),
            active: false,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, frame: &[u8]) -> Result<()> {
        let mut lock = self.stdout.lock();
        lock.write_all(frame)
            .and_then(|()| lock.flush())
            .map_err(|err| EditorError::ui(format!("failed to write frame: {err}")))
    }

    fn read_key(&mut self) -> Result<Key> {
        loop {
            let key = self
                .keys
                .poll_key(Some(KEY_POLL_TIMEOUT))
                .map_err(|err| EditorError::ui(format!("failed to read key: {err}")))?;
            if let Some(key) = key {
                return Ok(key);
            }
        }
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode().map_err(|err| EditorError::ui(format!("enable raw mode: {err}")))?;
        self.active = true;
        execute!(self.stdout, EnterAlternateScreen)
            .map_err(|err| EditorError::ui(format!("enter alternate screen: {err}")))?;
        log::debug!("terminal initialized");
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.active {
            self.active = false;
            execute!(self.stdout, LeaveAlternateScreen, cursor::Show)?;
            disable_raw_mode()?;
            log::debug!("terminal restored");
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        terminal::size().map_err(|err| EditorError::ui(format!("query terminal size: {err}")))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_ui_creation() {
        let ui = TerminalUI::new().unwrap();
        assert!(!ui.is_active());
    }

    #[test]
    fn test_cleanup_without_initialize_is_noop() {
        let mut ui = TerminalUI::new().unwrap();
        assert!(ui.cleanup().is_ok());
        assert!(!ui.is_active());
    }
}
