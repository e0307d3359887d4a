//! Editor orchestration layer
//!
//! [`Editor`] owns the single document, the viewport and the terminal handle, and turns keys
//! into buffer, cursor and search operations. The outer loop lives in [`runtime`].

pub mod prompt;
pub mod runtime;
pub mod status;

pub use prompt::PromptListener;
pub use status::StatusMessage;

use crate::buffer::TextBuffer;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::file_handler;
use crate::input::{ctrl, Key};
use crate::render::{ColorTheme, FrameCompositor, FrameContext};
use crate::search::SearchSession;
use crate::syntax::select_for;
use crate::ui::UIRenderer;
use crate::view::{CursorPos, Direction, Viewport};
use std::path::{Path, PathBuf};

const CTRL_F: u8 = ctrl(b'f');
const CTRL_H: u8 = ctrl(b'h');
const CTRL_L: u8 = ctrl(b'l');
const CTRL_N: u8 = ctrl(b'n');
const CTRL_P: u8 = ctrl(b'p');
const CTRL_Q: u8 = ctrl(b'q');
const CTRL_S: u8 = ctrl(b's');

/// Message shown when the editor starts.
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

const SAVE_AS_PROMPT: &str = "Save as: {} (ESC to cancel)";
const SEARCH_PROMPT: &str = "Search: {} (Use ESC/Arrows/Enter)";

/// What the run loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// The editor: one document, one viewport, one terminal.
pub struct Editor {
    buffer: TextBuffer,
    view: Viewport,
    filename: Option<PathBuf>,
    status: StatusMessage,
    /// Quit requests still to be rejected while the buffer is dirty.
    quit_times: u32,
    config: EditorConfig,
    compositor: FrameCompositor,
    ui: Box<dyn UIRenderer>,
}

impl Editor {
    /// Create an empty, unnamed editor sized to the terminal behind `ui`.
    pub fn new(config: EditorConfig, ui: Box<dyn UIRenderer>) -> Result<Self> {
        Self::with_theme(config, ui, ColorTheme::from_env())
    }

    pub fn with_theme(
        config: EditorConfig,
        ui: Box<dyn UIRenderer>,
        theme: ColorTheme,
    ) -> Result<Self> {
        let (cols, rows) = ui.get_terminal_size()?;
        log::debug!("terminal size {}x{}", cols, rows);
        Ok(Self {
            buffer: TextBuffer::new(config.tab_stop),
            view: Viewport::for_terminal(cols, rows),
            filename: None,
            status: StatusMessage::default(),
            quit_times: config.quit_times,
            config,
            compositor: FrameCompositor::new(theme),
            ui,
        })
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn view(&self) -> &Viewport {
        &self.view
    }

    pub fn cursor(&self) -> CursorPos {
        self.view.cursor
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Current status message text, regardless of age.
    pub fn status_message(&self) -> &str {
        self.status.text()
    }

    /// Replace the status message and restart its display timer.
    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status.set(message);
    }

    /// Load `path` as the document, replacing the current buffer.
    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        let lines = file_handler::read_lines(path)?;
        let syntax = select_for(&path.to_string_lossy());
        self.buffer = TextBuffer::from_lines(lines, self.config.tab_stop, syntax);
        self.filename = Some(path.to_path_buf());
        self.view.cursor = CursorPos::default();
        self.view.row_offset = 0;
        self.view.col_offset = 0;
        log::info!(
            "opened {} ({} lines, syntax {})",
            path.display(),
            self.buffer.num_rows(),
            syntax.map_or("none", |rules| rules.file_type)
        );
        Ok(())
    }

    /// Write the buffer to its file, asking for a name first if it has none.
    ///
    /// Write failures and a cancelled name prompt are reported in the status message; only a
    /// terminal failure during the prompt is returned as an error.
    pub fn save(&mut self) -> Result<()> {
        if self.filename.is_none() {
            let Some(name) = self.prompt(SAVE_AS_PROMPT, None)? else {
                self.set_status_message("Save aborted");
                return Ok(());
            };
            self.buffer.select_syntax(&name);
            self.filename = Some(PathBuf::from(name));
        }
        let Some(path) = self.filename.clone() else {
            return Ok(());
        };

        let content = self.buffer.serialize();
        match file_handler::write_truncating(&path, &content) {
            Ok(()) => {
                self.buffer.mark_clean();
                log::info!("wrote {} bytes to {}", content.len(), path.display());
                self.set_status_message(format!("{} bytes written to disk", content.len()));
            }
            Err(err) => {
                log::warn!("save to {} failed: {}", path.display(), err);
                self.set_status_message(format!("Can't save! I/O error: {err}"));
            }
        }
        Ok(())
    }

    /// Scroll the viewport to the cursor and compose the next frame.
    pub fn refresh_frame(&mut self) -> Result<Vec<u8>> {
        self.view.scroll(&self.buffer);
        let filename = self.filename.as_ref().map(|path| path.to_string_lossy());
        let frame = self.compositor.compose(&FrameContext {
            buffer: &self.buffer,
            view: &self.view,
            filename: filename.as_deref(),
            message: self.status.visible(self.config.message_timeout),
        })?;
        Ok(frame.into_bytes())
    }

    /// Compose a frame and hand it to the terminal.
    pub fn refresh_screen(&mut self) -> Result<()> {
        let frame = self.refresh_frame()?;
        self.ui.render(&frame)
    }

    /// Dispatch one key.
    pub fn process_key(&mut self, key: Key) -> Result<KeyOutcome> {
        match key {
            Key::Enter => self.buffer.insert_newline_at(&mut self.view.cursor),
            Key::Char(CTRL_Q) => {
                if self.buffer.is_dirty() && self.quit_times > 0 {
                    log::debug!("quit rejected, {} confirmations left", self.quit_times);
                    self.set_status_message(format!(
                        "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                        self.quit_times
                    ));
                    self.quit_times -= 1;
                    return Ok(KeyOutcome::Continue);
                }
                return Ok(KeyOutcome::Quit);
            }
            Key::Char(CTRL_S) => self.save()?,
            Key::Char(CTRL_F) => self.find()?,
            Key::Home => self.view.cursor.cx = 0,
            Key::End => self.view.cursor.cx = self.buffer.row_len(self.view.cursor.cy),
            Key::Backspace | Key::Char(CTRL_H) => {
                self.buffer.delete_char_before(&mut self.view.cursor)
            }
            Key::Delete => {
                self.view.move_cursor(Direction::Right, &self.buffer);
                self.buffer.delete_char_before(&mut self.view.cursor);
            }
            Key::PageUp => self.view.page_up(&self.buffer),
            Key::PageDown => self.view.page_down(&self.buffer),
            Key::ArrowUp | Key::Char(CTRL_P) => self.view.move_cursor(Direction::Up, &self.buffer),
            Key::ArrowDown | Key::Char(CTRL_N) => {
                self.view.move_cursor(Direction::Down, &self.buffer)
            }
            Key::ArrowLeft => self.view.move_cursor(Direction::Left, &self.buffer),
            Key::ArrowRight => self.view.move_cursor(Direction::Right, &self.buffer),
            Key::Char(CTRL_L) | Key::Escape => {}
            Key::Char(byte) => self.buffer.insert_char_at(&mut self.view.cursor, byte),
        }
        self.quit_times = self.config.quit_times;
        Ok(KeyOutcome::Continue)
    }

    /// Incremental search. Cancelling puts the cursor and scroll position back.
    fn find(&mut self) -> Result<()> {
        let saved = self.view.snapshot();
        let mut session = SearchSession::new();
        if self.prompt(SEARCH_PROMPT, Some(&mut session))?.is_none() {
            self.view.restore(saved);
        }
        Ok(())
    }
}
