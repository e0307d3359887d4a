//! Modal line input in the message bar.

use crate::app::{Editor, CTRL_H};
use crate::error::Result;
use crate::input::Key;
use crate::search::SearchSession;

/// Receives every keystroke typed into a prompt, with the input as it stands afterwards.
pub trait PromptListener {
    fn on_keystroke(&mut self, editor: &mut Editor, input: &str, key: Key);
}

impl PromptListener for SearchSession {
    fn on_keystroke(&mut self, editor: &mut Editor, input: &str, key: Key) {
        self.handle_key(&mut editor.buffer, &mut editor.view, input, key);
    }
}

impl Editor {
    /// Read a line of input in the message bar. `template` is shown with `{}` replaced by the
    /// input so far.
    ///
    /// Returns `None` when the user presses Escape. Enter only accepts non-empty input.
    pub fn prompt(
        &mut self,
        template: &str,
        mut listener: Option<&mut dyn PromptListener>,
    ) -> Result<Option<String>> {
        let mut input = String::new();
        loop {
            self.set_status_message(template.replace("{}", &input));
            self.refresh_screen()?;

            let key = self.ui.read_key()?;
            match key {
                Key::Backspace | Key::Delete | Key::Char(CTRL_H) => {
                    input.pop();
                }
                Key::Escape => {
                    self.set_status_message("");
                    if let Some(listener) = listener.as_deref_mut() {
                        listener.on_keystroke(self, &input, key);
                    }
                    return Ok(None);
                }
                Key::Enter if !input.is_empty() => {
                    self.set_status_message("");
                    if let Some(listener) = listener.as_deref_mut() {
                        listener.on_keystroke(self, &input, key);
                    }
                    return Ok(Some(input));
                }
                _ => {
                    if let Some(c) = key.printable() {
                        input.push(c);
                    }
                }
            }

            if let Some(listener) = listener.as_deref_mut() {
                listener.on_keystroke(self, &input, key);
            }
        }
    }
}
