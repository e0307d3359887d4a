//! Incremental search.
//!
//! A [`SearchSession`] lives for one search prompt. It is fed the current query after every
//! keystroke, moves the cursor to the next match in the chosen direction (wrapping around the
//! document) and paints the match with [`Highlight::SearchMatch`], restoring the row's
//! previous tags before the next step.

use crate::buffer::TextBuffer;
use crate::input::Key;
use crate::syntax::Highlight;
use crate::view::{rx_to_cx, Viewport};
use memchr::memmem;

/// Direction in which the next match is looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SavedHighlight {
    row: usize,
    tags: Vec<Highlight>,
}

/// State carried between keystrokes of one search prompt.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    last_match: Option<usize>,
    direction: SearchDirection,
    saved: Option<SavedHighlight>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    /// React to `key` having been pressed with `query` as the prompt's input. Returns the row
    /// of the match the cursor moved to, if any.
    ///
    /// Enter and Escape end the session. Arrow keys step to the next or previous match; any
    /// other key restarts the search from the top of the document.
    pub fn handle_key(
        &mut self,
        buffer: &mut TextBuffer,
        view: &mut Viewport,
        query: &str,
        key: Key,
    ) -> Option<usize> {
        self.restore_highlight(buffer);

        match key {
            Key::Enter | Key::Escape => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
                return None;
            }
            Key::ArrowRight | Key::ArrowDown => self.direction = SearchDirection::Forward,
            Key::ArrowLeft | Key::ArrowUp => self.direction = SearchDirection::Backward,
            _ => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
            }
        }

        if self.last_match.is_none() {
            self.direction = SearchDirection::Forward;
        }
        if query.is_empty() {
            return None;
        }

        let (row_index, offset) = self.find_next(buffer, query.as_bytes())?;
        self.last_match = Some(row_index);

        let row = buffer.row(row_index)?;
        view.cursor.cy = row_index;
        view.cursor.cx = rx_to_cx(row, offset, buffer.tab_stop());
        // forces the next scroll pass to put the match row at the top of the screen
        view.row_offset = buffer.num_rows();

        self.saved = Some(SavedHighlight {
            row: row_index,
            tags: row.highlight().to_vec(),
        });
        if let Some(row) = buffer.row_mut(row_index) {
            row.overlay(offset..offset + query.len(), Highlight::SearchMatch);
        }
        log::debug!("search match at row {} render column {}", row_index, offset);
        Some(row_index)
    }

    /// Put back the tags of the row painted by the last match.
    pub fn restore_highlight(&mut self, buffer: &mut TextBuffer) {
        if let Some(saved) = self.saved.take() {
            if let Some(row) = buffer.row_mut(saved.row) {
                row.restore_highlight(saved.tags);
            }
        }
    }

    /// Visit every row once, starting next to the last match, and return the first row and
    /// render offset containing `needle`.
    fn find_next(&self, buffer: &TextBuffer, needle: &[u8]) -> Option<(usize, usize)> {
        let num_rows = buffer.num_rows();
        if num_rows == 0 {
            return None;
        }
        let finder = memmem::Finder::new(needle);
        let mut current = self.last_match;
        for _ in 0..num_rows {
            let next = match (current, self.direction) {
                (None, _) => 0,
                (Some(at), SearchDirection::Forward) => (at + 1) % num_rows,
                (Some(0), SearchDirection::Backward) => num_rows - 1,
                (Some(at), SearchDirection::Backward) => at - 1,
            };
            current = Some(next);
            if let Some(offset) = buffer.row(next).and_then(|row| finder.find(row.render())) {
                return Some((next, offset));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::select_for;

    fn setup(lines: &[&str]) -> (TextBuffer, Viewport) {
        let buffer = TextBuffer::from_lines(lines.iter().map(|line| line.as_bytes()), 8, None);
        (buffer, Viewport::new(10, 80))
    }

    #[test]
    fn typing_finds_first_match_from_top() {
        let (mut buffer, mut view) = setup(&["alpha", "beta", "gamma beta"]);
        view.cursor.cy = 2;
        let mut session = SearchSession::new();

        assert_eq!(session.handle_key(&mut buffer, &mut view, "beta", Key::Char(b'a')), Some(1));
        assert_eq!(view.cursor.cy, 1);
        assert_eq!(view.cursor.cx, 0);
        assert_eq!(view.row_offset, 3);
        assert_eq!(
            &buffer.row(1).unwrap().highlight()[0..4],
            &[Highlight::SearchMatch; 4]
        );
    }

    #[test]
    fn arrows_step_and_wrap() {
        let (mut buffer, mut view) = setup(&["x one", "two", "x three"]);
        let mut session = SearchSession::new();

        assert_eq!(session.handle_key(&mut buffer, &mut view, "x", Key::Char(b'x')), Some(0));
        assert_eq!(session.handle_key(&mut buffer, &mut view, "x", Key::ArrowDown), Some(2));
        assert_eq!(session.handle_key(&mut buffer, &mut view, "x", Key::ArrowRight), Some(0));
        assert_eq!(session.handle_key(&mut buffer, &mut view, "x", Key::ArrowUp), Some(2));
        assert_eq!(session.direction(), SearchDirection::Backward);
        assert_eq!(session.handle_key(&mut buffer, &mut view, "x", Key::ArrowLeft), Some(0));
    }

    #[test]
    fn single_match_wraps_to_itself() {
        let (mut buffer, mut view) = setup(&["needle", "hay"]);
        let mut session = SearchSession::new();
        session.handle_key(&mut buffer, &mut view, "needle", Key::Char(b'e'));
        assert_eq!(
            session.handle_key(&mut buffer, &mut view, "needle", Key::ArrowDown),
            Some(0)
        );
    }

    #[test]
    fn backward_without_previous_match_searches_forward() {
        let (mut buffer, mut view) = setup(&["a", "b", "a"]);
        let mut session = SearchSession::new();
        assert_eq!(session.handle_key(&mut buffer, &mut view, "a", Key::ArrowUp), Some(0));
        assert_eq!(session.direction(), SearchDirection::Forward);
    }

    #[test]
    fn overlay_is_restored_on_next_step_and_on_exit() {
        let mut buffer = TextBuffer::from_lines(
            ["int x;", "int y;"].iter().map(|line| line.as_bytes()),
            8,
            select_for("main.c"),
        );
        let before: Vec<Vec<Highlight>> =
            buffer.rows().iter().map(|row| row.highlight().to_vec()).collect();
        let mut view = Viewport::new(10, 80);
        let mut session = SearchSession::new();

        session.handle_key(&mut buffer, &mut view, "int", Key::Char(b't'));
        assert_eq!(buffer.row(0).unwrap().highlight()[0], Highlight::SearchMatch);

        session.handle_key(&mut buffer, &mut view, "int", Key::ArrowDown);
        assert_eq!(buffer.row(0).unwrap().highlight(), before[0].as_slice());
        assert_eq!(buffer.row(1).unwrap().highlight()[0], Highlight::SearchMatch);

        assert_eq!(session.handle_key(&mut buffer, &mut view, "int", Key::Escape), None);
        assert_eq!(buffer.row(1).unwrap().highlight(), before[1].as_slice());
        assert_eq!(session.last_match(), None);
    }

    #[test]
    fn match_after_tab_maps_back_to_logical_column() {
        let (mut buffer, mut view) = setup(&["\tfoo"]);
        let mut session = SearchSession::new();
        session.handle_key(&mut buffer, &mut view, "foo", Key::Char(b'o'));
        assert_eq!(view.cursor.cx, 1);
        assert_eq!(&buffer.row(0).unwrap().highlight()[8..11], &[Highlight::SearchMatch; 3]);
    }

    #[test]
    fn no_match_leaves_cursor() {
        let (mut buffer, mut view) = setup(&["abc"]);
        view.cursor.cx = 2;
        let mut session = SearchSession::new();
        assert_eq!(session.handle_key(&mut buffer, &mut view, "zzz", Key::Char(b'z')), None);
        assert_eq!(view.cursor.cx, 2);
        assert_eq!(session.last_match(), None);
    }

    #[test]
    fn empty_query_and_empty_buffer_find_nothing() {
        let (mut buffer, mut view) = setup(&["abc"]);
        let mut session = SearchSession::new();
        assert_eq!(session.handle_key(&mut buffer, &mut view, "", Key::Backspace), None);

        let (mut empty, mut view) = setup(&[]);
        assert_eq!(session.handle_key(&mut empty, &mut view, "a", Key::Char(b'a')), None);
    }
}
