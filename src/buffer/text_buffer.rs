//! Ordered row storage.
//!
//! Every mutating operation leaves row indices, render bytes and highlight tags consistent
//! before it returns: the next thing to happen may be a frame render. Out-of-range
//! arguments are clamped or ignored, never reported.

use crate::buffer::row::Row;
use crate::config::DEFAULT_TAB_STOP;
use crate::syntax::{highlight, select_for, SyntaxRules};

/// The document: an ordered list of rows plus its dirty flag and active syntax.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rows: Vec<Row>,
    dirty: bool,
    syntax: Option<&'static SyntaxRules>,
    tab_stop: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl TextBuffer {
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: false,
            syntax: None,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Build a clean buffer from already split lines, highlighted with `syntax`.
    pub fn from_lines<I, L>(lines: I, tab_stop: usize, syntax: Option<&'static SyntaxRules>) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut buffer = Self::new(tab_stop);
        let tab_stop = buffer.tab_stop;
        buffer.rows = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| Row::new(index, line.into(), tab_stop))
            .collect();
        buffer.set_syntax(syntax);
        buffer.dirty = false;
        buffer
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    /// Length of row `at`; the virtual row past the end has length 0.
    pub fn row_len(&self, at: usize) -> usize {
        self.rows.get(at).map_or(0, Row::len)
    }

    pub(crate) fn row_mut(&mut self, at: usize) -> Option<&mut Row> {
        self.rows.get_mut(at)
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record that the content now matches what is on disk.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn syntax(&self) -> Option<&'static SyntaxRules> {
        self.syntax
    }

    /// Replace the active syntax and re-highlight every row.
    pub fn set_syntax(&mut self, syntax: Option<&'static SyntaxRules>) {
        self.syntax = syntax;
        for at in 0..self.rows.len() {
            let starts_in_comment = at > 0 && self.rows[at - 1].open_comment();
            let result = highlight(self.rows[at].render(), self.syntax, starts_in_comment);
            self.rows[at].apply_highlight(result);
        }
    }

    /// Select the syntax entry matching `filename` and apply it.
    pub fn select_syntax(&mut self, filename: &str) -> Option<&'static SyntaxRules> {
        let syntax = select_for(filename);
        log::debug!(
            "syntax for {}: {}",
            filename,
            syntax.map_or("none", |rules| rules.file_type)
        );
        self.set_syntax(syntax);
        syntax
    }

    /// Insert a new row at `at` (clamped to `[0, num_rows]`), shifting later rows down.
    pub fn insert_row(&mut self, at: usize, bytes: impl Into<Vec<u8>>) {
        let at = at.min(self.rows.len());
        self.rows.insert(at, Row::new(at, bytes.into(), self.tab_stop));
        self.reindex_from(at + 1);
        self.highlight_from(at);
        // the row that used to sit at `at` now follows a different predecessor
        if at + 1 < self.rows.len() {
            self.highlight_from(at + 1);
        }
        self.dirty = true;
    }

    /// Remove row `at`; ignored when out of range.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.reindex_from(at);
        if at < self.rows.len() {
            self.highlight_from(at);
        }
        self.dirty = true;
    }

    /// Insert `byte` into row `row` at `col` (clamped to the row length).
    pub fn insert_char(&mut self, row: usize, col: usize, byte: u8) {
        let tab_stop = self.tab_stop;
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        target.insert_byte(col, byte, tab_stop);
        self.highlight_from(row);
        self.dirty = true;
    }

    /// Remove the byte at `col` of row `row`; ignored when `col` is not in `[0, len)`.
    pub fn delete_char(&mut self, row: usize, col: usize) {
        let tab_stop = self.tab_stop;
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        if target.remove_byte(col, tab_stop).is_none() {
            return;
        }
        self.highlight_from(row);
        self.dirty = true;
    }

    /// Concatenate `bytes` onto the end of row `row`.
    pub fn append_bytes(&mut self, row: usize, bytes: &[u8]) {
        let tab_stop = self.tab_stop;
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        target.append(bytes, tab_stop);
        self.highlight_from(row);
        self.dirty = true;
    }

    /// Cut row `row` down to `len` bytes.
    pub fn truncate_row(&mut self, row: usize, len: usize) {
        let tab_stop = self.tab_stop;
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        if len >= target.len() {
            return;
        }
        target.truncate(len, tab_stop);
        self.highlight_from(row);
        self.dirty = true;
    }

    /// Every row's bytes followed by `\n`, in order.
    pub fn serialize(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|row| row.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.chars());
            out.push(b'\n');
        }
        out
    }

    fn reindex_from(&mut self, start: usize) {
        for (index, row) in self.rows.iter_mut().enumerate().skip(start) {
            row.set_index(index);
        }
    }

    /// Re-highlight row `start`, then keep going down while the open-comment state handed
    /// to the next row keeps changing.
    fn highlight_from(&mut self, start: usize) {
        let mut at = start;
        while at < self.rows.len() {
            let starts_in_comment = at > 0 && self.rows[at - 1].open_comment();
            let result = highlight(self.rows[at].render(), self.syntax, starts_in_comment);
            if !self.rows[at].apply_highlight(result) {
                break;
            }
            at += 1;
        }
        if at > start + 1 {
            log::trace!("comment state cascaded over rows {}..{}", start, at);
        }
    }
}
