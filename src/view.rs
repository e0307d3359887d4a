//! Cursor and viewport state.
//!
//! The cursor lives in logical space (`cx` is a byte offset into a row's raw bytes); the
//! viewport scrolls in render space, so `rx` is recomputed from `cx` on every scroll pass.

use crate::buffer::{Row, TextBuffer};

/// Logical cursor position. `cy` may equal the row count (the virtual row past the end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPos {
    pub cx: usize,
    pub cy: usize,
}

impl CursorPos {
    pub fn new(cx: usize, cy: usize) -> Self {
        Self { cx, cy }
    }
}

/// Single-step cursor motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Cursor and scroll offsets captured before a modal operation, for restoring on cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSnapshot {
    cursor: CursorPos,
    row_offset: usize,
    col_offset: usize,
}

/// Visible window over the document plus the cursor inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub cursor: CursorPos,
    /// Render column of the cursor, derived by [`Viewport::scroll`].
    pub rx: usize,
    pub row_offset: usize,
    pub col_offset: usize,
    /// Text rows available, excluding the status and message bars.
    pub screen_rows: usize,
    pub screen_cols: usize,
}

/// Lines reserved below the text area for the status bar and the message bar.
pub const RESERVED_ROWS: usize = 2;

impl Viewport {
    pub fn new(screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            cursor: CursorPos::default(),
            rx: 0,
            row_offset: 0,
            col_offset: 0,
            screen_rows,
            screen_cols,
        }
    }

    /// Size the text area for a terminal of `cols` x `rows` cells.
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(
            usize::from(rows).saturating_sub(RESERVED_ROWS),
            usize::from(cols),
        )
    }

    /// Recompute `rx` and pull the offsets so the cursor is on screen.
    pub fn scroll(&mut self, buffer: &TextBuffer) {
        self.rx = buffer
            .row(self.cursor.cy)
            .map_or(0, |row| cx_to_rx(row, self.cursor.cx, buffer.tab_stop()));

        if self.cursor.cy < self.row_offset {
            self.row_offset = self.cursor.cy;
        }
        if self.cursor.cy >= self.row_offset + self.screen_rows {
            self.row_offset = (self.cursor.cy + 1).saturating_sub(self.screen_rows);
        }
        if self.rx < self.col_offset {
            self.col_offset = self.rx;
        }
        if self.rx >= self.col_offset + self.screen_cols {
            self.col_offset = (self.rx + 1).saturating_sub(self.screen_cols);
        }
    }

    /// Move one step, wrapping Left/Right across row ends, then snap `cx` to the row.
    pub fn move_cursor(&mut self, direction: Direction, buffer: &TextBuffer) {
        let num_rows = buffer.num_rows();
        let cursor = &mut self.cursor;
        match direction {
            Direction::Left => {
                if cursor.cx > 0 {
                    cursor.cx -= 1;
                } else if cursor.cy > 0 {
                    cursor.cy -= 1;
                    cursor.cx = buffer.row_len(cursor.cy);
                }
            }
            Direction::Right => {
                if let Some(row) = buffer.row(cursor.cy) {
                    if cursor.cx < row.len() {
                        cursor.cx += 1;
                    } else {
                        cursor.cy += 1;
                        cursor.cx = 0;
                    }
                }
            }
            Direction::Up => {
                cursor.cy = cursor.cy.saturating_sub(1);
            }
            Direction::Down => {
                if cursor.cy < num_rows {
                    cursor.cy += 1;
                }
            }
        }
        self.clamp_cursor(buffer);
    }

    /// Keep `cy` within `[0, num_rows]` and `cx` within the current row.
    pub fn clamp_cursor(&mut self, buffer: &TextBuffer) {
        self.cursor.cy = self.cursor.cy.min(buffer.num_rows());
        self.cursor.cx = self.cursor.cx.min(buffer.row_len(self.cursor.cy));
    }

    /// Jump to the top of the screen, then move up a full screen.
    pub fn page_up(&mut self, buffer: &TextBuffer) {
        self.cursor.cy = self.row_offset;
        for _ in 0..self.screen_rows {
            self.move_cursor(Direction::Up, buffer);
        }
        self.clamp_cursor(buffer);
    }

    /// Jump to the bottom of the screen, then move down a full screen.
    pub fn page_down(&mut self, buffer: &TextBuffer) {
        self.cursor.cy = (self.row_offset + self.screen_rows)
            .saturating_sub(1)
            .min(buffer.num_rows());
        for _ in 0..self.screen_rows {
            self.move_cursor(Direction::Down, buffer);
        }
        self.clamp_cursor(buffer);
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            cursor: self.cursor,
            row_offset: self.row_offset,
            col_offset: self.col_offset,
        }
    }

    pub fn restore(&mut self, snapshot: ViewSnapshot) {
        self.cursor = snapshot.cursor;
        self.row_offset = snapshot.row_offset;
        self.col_offset = snapshot.col_offset;
    }
}

/// Render column of logical column `cx` in `row`.
pub fn cx_to_rx(row: &Row, cx: usize, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    row.chars()
        .iter()
        .take(cx)
        .fold(0, |rx, &byte| {
            if byte == b'\t' {
                rx + tab_stop - rx % tab_stop
            } else {
                rx + 1
            }
        })
}

/// Logical column whose rendered cell covers render column `rx`.
pub fn rx_to_cx(row: &Row, rx: usize, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    let mut current = 0;
    for (cx, &byte) in row.chars().iter().enumerate() {
        if byte == b'\t' {
            current += tab_stop - current % tab_stop;
        } else {
            current += 1;
        }
        if current > rx {
            return cx;
        }
    }
    row.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> TextBuffer {
        TextBuffer::from_lines(lines.iter().map(|line| line.as_bytes()), 8, None)
    }

    #[test]
    fn tab_columns() {
        let buffer = buffer(&["\tx", "a\tb"]);
        let row = buffer.row(0).unwrap();
        assert_eq!(cx_to_rx(row, 0, 8), 0);
        assert_eq!(cx_to_rx(row, 1, 8), 8);
        assert_eq!(cx_to_rx(row, 2, 8), 9);
        assert_eq!(rx_to_cx(row, 0, 8), 0);
        assert_eq!(rx_to_cx(row, 5, 8), 0);
        assert_eq!(rx_to_cx(row, 8, 8), 1);

        let row = buffer.row(1).unwrap();
        assert_eq!(cx_to_rx(row, 2, 8), 8);
        assert_eq!(rx_to_cx(row, 8, 8), 2);
        assert_eq!(rx_to_cx(row, 100, 8), 3);
    }

    #[test]
    fn up_from_first_row_stays() {
        let buffer = buffer(&["abc", "de"]);
        let mut view = Viewport::new(10, 80);
        view.move_cursor(Direction::Up, &buffer);
        assert_eq!(view.cursor, CursorPos::new(0, 0));
    }

    #[test]
    fn down_past_last_row_reaches_virtual_row() {
        let buffer = buffer(&["abc", "de"]);
        let mut view = Viewport::new(10, 80);
        view.cursor = CursorPos::new(3, 1);
        view.move_cursor(Direction::Down, &buffer);
        view.move_cursor(Direction::Down, &buffer);
        assert_eq!(view.cursor.cy, 2);
        view.move_cursor(Direction::Down, &buffer);
        assert_eq!(view.cursor, CursorPos::new(0, 2));
    }

    #[test]
    fn vertical_moves_clamp_cx() {
        let buffer = buffer(&["abcdef", "de"]);
        let mut view = Viewport::new(10, 80);
        view.cursor = CursorPos::new(6, 0);
        view.move_cursor(Direction::Down, &buffer);
        assert_eq!(view.cursor, CursorPos::new(2, 1));
    }

    #[test]
    fn horizontal_moves_wrap() {
        let buffer = buffer(&["ab", "cd"]);
        let mut view = Viewport::new(10, 80);
        view.cursor = CursorPos::new(2, 0);
        view.move_cursor(Direction::Right, &buffer);
        assert_eq!(view.cursor, CursorPos::new(0, 1));
        view.move_cursor(Direction::Left, &buffer);
        assert_eq!(view.cursor, CursorPos::new(2, 0));

        view.cursor = CursorPos::new(0, 0);
        view.move_cursor(Direction::Left, &buffer);
        assert_eq!(view.cursor, CursorPos::new(0, 0));

        // nothing to the right of the virtual row
        view.cursor = CursorPos::new(0, 2);
        view.move_cursor(Direction::Right, &buffer);
        assert_eq!(view.cursor, CursorPos::new(0, 2));
    }

    #[test]
    fn scroll_follows_cursor() {
        let lines: Vec<String> = (0..50).map(|i| format!("line {i}")).collect();
        let buffer =
            TextBuffer::from_lines(lines.iter().map(|line| line.as_bytes()), 8, None);
        let mut view = Viewport::new(10, 4);

        view.cursor = CursorPos::new(6, 30);
        view.scroll(&buffer);
        assert_eq!(view.row_offset, 21);
        assert_eq!(view.rx, 6);
        assert_eq!(view.col_offset, 3);

        view.cursor = CursorPos::new(0, 5);
        view.scroll(&buffer);
        assert_eq!(view.row_offset, 5);
        assert_eq!(view.col_offset, 0);
    }

    #[test]
    fn scroll_uses_render_columns() {
        let buffer = buffer(&["\t\tx"]);
        let mut view = Viewport::new(10, 10);
        view.cursor = CursorPos::new(2, 0);
        view.scroll(&buffer);
        assert_eq!(view.rx, 16);
        assert_eq!(view.col_offset, 7);
    }

    #[test]
    fn out_of_range_row_offset_recenters_on_cursor() {
        let lines: Vec<String> = (0..50).map(|i| i.to_string()).collect();
        let buffer =
            TextBuffer::from_lines(lines.iter().map(|line| line.as_bytes()), 8, None);
        let mut view = Viewport::new(10, 80);
        view.cursor = CursorPos::new(0, 40);
        view.row_offset = buffer.num_rows();
        view.scroll(&buffer);
        assert_eq!(view.row_offset, 40);
    }

    #[test]
    fn paging() {
        let lines: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        let buffer =
            TextBuffer::from_lines(lines.iter().map(|line| line.as_bytes()), 8, None);
        let mut view = Viewport::new(10, 80);

        view.page_down(&buffer);
        assert_eq!(view.cursor.cy, 19);
        view.scroll(&buffer);
        view.page_down(&buffer);
        assert_eq!(view.cursor.cy, 29);

        view.scroll(&buffer);
        assert_eq!(view.row_offset, 20);
        view.page_up(&buffer);
        assert_eq!(view.cursor.cy, 10);
    }

    #[test]
    fn snapshot_round_trip() {
        let mut view = Viewport::new(10, 80);
        view.cursor = CursorPos::new(3, 4);
        view.row_offset = 2;
        let snapshot = view.snapshot();
        view.cursor = CursorPos::new(0, 9);
        view.row_offset = 9;
        view.col_offset = 1;
        view.restore(snapshot);
        assert_eq!(view.cursor, CursorPos::new(3, 4));
        assert_eq!(view.row_offset, 2);
        assert_eq!(view.col_offset, 0);
    }

    #[test]
    fn terminal_size_reserves_bars() {
        let view = Viewport::for_terminal(80, 24);
        assert_eq!(view.screen_rows, 22);
        assert_eq!(view.screen_cols, 80);
        assert_eq!(Viewport::for_terminal(80, 1).screen_rows, 0);
    }
}
