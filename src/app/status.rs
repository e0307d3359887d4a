//! Transient status message.

use std::time::{Duration, Instant};

/// Last message shown in the message bar and when it was set.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    text: String,
    set_at: Option<Instant>,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.set_at = Some(Instant::now());
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The message, if non-empty and younger than `timeout`.
    pub fn visible(&self, timeout: Duration) -> Option<&str> {
        let set_at = self.set_at?;
        (!self.text.is_empty() && set_at.elapsed() < timeout).then_some(self.text.as_str())
    }
}
