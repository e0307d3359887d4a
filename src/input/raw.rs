//! Low-level input collection: crossterm polling and translation of key events into
//! [`Key`]s. A single terminal event may expand into several keys (a non-ASCII character
//! is delivered as its UTF-8 bytes), so decoded keys are queued.

use crate::error::Result;
use crate::input::key::{ctrl, Key};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::time::Duration;

/// Poll timeout used when the caller does not provide one.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 100;

/// Collector that polls crossterm for events and decodes them into keys.
#[derive(Debug, Default)]
pub struct KeyCollector {
    pending_keys: VecDeque<Key>,
}

impl KeyCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether decoded keys are waiting to be consumed.
    pub fn is_idle(&self) -> bool {
        self.pending_keys.is_empty()
    }

    /// Process a synthetic event (primarily used by unit tests).
    pub fn process_event(&mut self, event: Event) {
        self.enqueue_event(event);
    }

    /// Retrieve the next key, blocking up to `timeout`. `Ok(None)` means the wait expired.
    pub fn poll_key(&mut self, timeout: Option<Duration>) -> Result<Option<Key>> {
        if let Some(key) = self.pop_pending() {
            return Ok(Some(key));
        }

        let poll_timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));
        if !event::poll(poll_timeout)? {
            return Ok(None);
        }

        let event = event::read()?;
        self.enqueue_event(event);
        Ok(self.pop_pending())
    }

    /// Pop the next decoded key without polling crossterm.
    pub fn pop_pending(&mut self) -> Option<Key> {
        self.pending_keys.pop_front()
    }

    fn enqueue_event(&mut self, event: Event) {
        // resize, mouse, focus and paste events are not editor input
        if let Event::Key(key_event) = event {
            if key_event.kind == KeyEventKind::Release {
                return;
            }
            self.decode_key(key_event);
        }
    }

    fn decode_key(&mut self, key_event: KeyEvent) {
        let key = match key_event.code {
            // a meta prefix is an unrecognised escape sequence
            KeyCode::Char(_) if key_event.modifiers.contains(KeyModifiers::ALT) => Key::Escape,
            KeyCode::Char(c) if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                if c.is_ascii() {
                    Key::Char(ctrl(c as u8))
                } else {
                    Key::Escape
                }
            }
            KeyCode::Char(c) => {
                let mut utf8 = [0u8; 4];
                for &byte in c.encode_utf8(&mut utf8).as_bytes() {
                    self.pending_keys.push_back(Key::Char(byte));
                }
                return;
            }
            KeyCode::Tab => Key::Char(b'\t'),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Left => Key::ArrowLeft,
            KeyCode::Right => Key::ArrowRight,
            KeyCode::Up => Key::ArrowUp,
            KeyCode::Down => Key::ArrowDown,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Escape,
        };
        self.pending_keys.push_back(key);
    }
}
