//! Blocking edit loop.

use crate::app::{Editor, KeyOutcome};
use crate::error::Result;

impl Editor {
    /// Run until the user quits. The terminal is restored even when the loop fails.
    pub fn run(&mut self) -> Result<()> {
        self.ui.initialize()?;
        let result = self.event_loop();
        let cleanup = self.ui.cleanup();
        result.and(cleanup)
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.refresh_screen()?;
            let key = self.ui.read_key()?;
            if self.process_key(key)? == KeyOutcome::Quit {
                log::debug!("quit requested");
                return Ok(());
            }
        }
    }
}
