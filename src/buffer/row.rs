//! A single logical line and its derived display forms.

use crate::syntax::{Highlight, LineHighlight};
use std::ops::Range;

/// One line of the document.
///
/// `chars` is the authoritative content. `render` (tabs expanded) and `highlight` (one tag
/// per rendered byte) are derived from it; every mutator rebuilds `render` immediately, and
/// the owning [`TextBuffer`](crate::buffer::TextBuffer) recomputes `highlight` before its own
/// operation returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    index: usize,
    chars: Vec<u8>,
    render: Vec<u8>,
    highlight: Vec<Highlight>,
    open_comment: bool,
}

impl Row {
    pub(crate) fn new(index: usize, chars: Vec<u8>, tab_stop: usize) -> Self {
        let mut row = Self {
            index,
            chars,
            render: Vec::new(),
            highlight: Vec::new(),
            open_comment: false,
        };
        row.update_render(tab_stop);
        row
    }

    /// Position of this row in its buffer.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Raw bytes, without a line terminator.
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Bytes as displayed, tabs expanded to spaces.
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    /// A block comment is still open at the end of this row.
    pub fn open_comment(&self) -> bool {
        self.open_comment
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn insert_byte(&mut self, at: usize, byte: u8, tab_stop: usize) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, byte);
        self.update_render(tab_stop);
    }

    pub(crate) fn remove_byte(&mut self, at: usize, tab_stop: usize) -> Option<u8> {
        if at >= self.chars.len() {
            return None;
        }
        let removed = self.chars.remove(at);
        self.update_render(tab_stop);
        Some(removed)
    }

    pub(crate) fn append(&mut self, bytes: &[u8], tab_stop: usize) {
        self.chars.extend_from_slice(bytes);
        self.update_render(tab_stop);
    }

    pub(crate) fn truncate(&mut self, len: usize, tab_stop: usize) {
        self.chars.truncate(len);
        self.update_render(tab_stop);
    }

    /// Rebuild the render form. Tags are reset to `Normal` at the new length so the two
    /// never disagree in size.
    pub(crate) fn update_render(&mut self, tab_stop: usize) {
        self.render = expand_tabs(&self.chars, tab_stop);
        self.highlight.clear();
        self.highlight.resize(self.render.len(), Highlight::Normal);
    }

    /// Store a highlight result, returning whether the open-comment state flipped.
    pub(crate) fn apply_highlight(&mut self, result: LineHighlight) -> bool {
        debug_assert_eq!(result.tags.len(), self.render.len());
        let changed = self.open_comment != result.open_comment;
        self.highlight = result.tags;
        self.open_comment = result.open_comment;
        changed
    }

    /// Paint `range` of the rendered bytes with `tag`, clamped to the row.
    pub(crate) fn overlay(&mut self, range: Range<usize>, tag: Highlight) {
        let end = range.end.min(self.highlight.len());
        let start = range.start.min(end);
        self.highlight[start..end].fill(tag);
    }

    /// Put back tags saved before an overlay. Ignored if the row changed size since.
    pub(crate) fn restore_highlight(&mut self, tags: Vec<Highlight>) {
        if tags.len() == self.highlight.len() {
            self.highlight = tags;
        }
    }
}

/// Expand every tab to spaces up to the next multiple of `tab_stop`.
pub fn expand_tabs(chars: &[u8], tab_stop: usize) -> Vec<u8> {
    let tab_stop = tab_stop.max(1);
    let tabs = chars.iter().filter(|&&byte| byte == b'\t').count();
    let mut render = Vec::with_capacity(chars.len() + tabs * (tab_stop - 1));
    for &byte in chars {
        if byte == b'\t' {
            render.push(b' ');
            while render.len() % tab_stop != 0 {
                render.push(b' ');
            }
        } else {
            render.push(byte);
        }
    }
    render
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_tab_expands_to_full_stop() {
        let row = Row::new(0, b"\tx".to_vec(), 8);
        assert_eq!(row.render(), b"        x");
        assert_eq!(row.highlight().len(), row.render().len());
    }

    #[test]
    fn tabs_align_to_multiples() {
        assert_eq!(expand_tabs(b"ab\tc", 4), b"ab  c");
        assert_eq!(expand_tabs(b"abcd\te", 4), b"abcd    e");
        assert_eq!(expand_tabs(b"\t\t", 2), b"    ");
    }

    #[test]
    fn mutators_keep_render_in_sync() {
        let mut row = Row::new(0, b"ac".to_vec(), 8);
        row.insert_byte(1, b'\t', 8);
        assert_eq!(row.chars(), b"a\tc");
        assert_eq!(row.render(), b"a       c");

        assert_eq!(row.remove_byte(1, 8), Some(b'\t'));
        assert_eq!(row.render(), b"ac");
        assert_eq!(row.remove_byte(9, 8), None);

        row.append(b"\tz", 8);
        assert_eq!(row.render(), b"ac      z");
        row.truncate(1, 8);
        assert_eq!(row.render(), b"a");
        assert_eq!(row.highlight().len(), 1);
    }

    #[test]
    fn insert_past_end_appends() {
        let mut row = Row::new(0, b"ab".to_vec(), 8);
        row.insert_byte(10, b'c', 8);
        assert_eq!(row.chars(), b"abc");
    }

    #[test]
    fn overlay_and_restore() {
        let mut row = Row::new(0, b"hello".to_vec(), 8);
        let saved = row.highlight().to_vec();
        row.overlay(1..3, Highlight::SearchMatch);
        assert_eq!(row.highlight()[1], Highlight::SearchMatch);
        assert_eq!(row.highlight()[3], Highlight::Normal);
        row.overlay(4..99, Highlight::SearchMatch);
        assert_eq!(row.highlight()[4], Highlight::SearchMatch);

        row.restore_highlight(saved);
        assert!(row.highlight().iter().all(|tag| *tag == Highlight::Normal));
    }
}
