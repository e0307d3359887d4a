//! Cursor-relative edits.

use crate::buffer::TextBuffer;
use crate::view::CursorPos;

impl TextBuffer {
    /// Type `byte` at the cursor. On the virtual row a new empty row is appended first.
    pub fn insert_char_at(&mut self, cursor: &mut CursorPos, byte: u8) {
        if cursor.cy >= self.num_rows() {
            cursor.cy = self.num_rows();
            self.insert_row(cursor.cy, Vec::new());
        }
        let cx = cursor.cx.min(self.row_len(cursor.cy));
        self.insert_char(cursor.cy, cx, byte);
        cursor.cx = cx + 1;
    }

    /// Split the current row at the cursor and move to the start of the new row.
    pub fn insert_newline_at(&mut self, cursor: &mut CursorPos) {
        if cursor.cx == 0 || cursor.cy >= self.num_rows() {
            let at = cursor.cy.min(self.num_rows());
            self.insert_row(at, Vec::new());
            cursor.cy = at;
        } else {
            let cx = cursor.cx.min(self.row_len(cursor.cy));
            let suffix = self
                .row(cursor.cy)
                .map(|row| row.chars()[cx..].to_vec())
                .unwrap_or_default();
            self.truncate_row(cursor.cy, cx);
            self.insert_row(cursor.cy + 1, suffix);
        }
        cursor.cy += 1;
        cursor.cx = 0;
    }

    /// Backspace: remove the byte left of the cursor, or join the row onto the previous one
    /// when the cursor is at column 0. Does nothing at the very start or on the virtual row.
    pub fn delete_char_before(&mut self, cursor: &mut CursorPos) {
        if cursor.cy >= self.num_rows() || (cursor.cx == 0 && cursor.cy == 0) {
            return;
        }
        if cursor.cx > 0 {
            let cx = cursor.cx.min(self.row_len(cursor.cy));
            if cx == 0 {
                cursor.cx = 0;
                return;
            }
            self.delete_char(cursor.cy, cx - 1);
            cursor.cx = cx - 1;
        } else {
            let joined = self
                .row(cursor.cy)
                .map(|row| row.chars().to_vec())
                .unwrap_or_default();
            let previous_len = self.row_len(cursor.cy - 1);
            self.append_bytes(cursor.cy - 1, &joined);
            self.delete_row(cursor.cy);
            cursor.cy -= 1;
            cursor.cx = previous_len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> TextBuffer {
        TextBuffer::from_lines(lines.iter().map(|line| line.as_bytes()), 8, None)
    }

    fn lines(buffer: &TextBuffer) -> Vec<String> {
        buffer
            .rows()
            .iter()
            .map(|row| String::from_utf8_lossy(row.chars()).into_owned())
            .collect()
    }

    #[test]
    fn typing_into_empty_buffer_creates_a_row() {
        let mut buffer = TextBuffer::default();
        let mut cursor = CursorPos::default();
        buffer.insert_char_at(&mut cursor, b'h');
        buffer.insert_char_at(&mut cursor, b'i');
        assert_eq!(lines(&buffer), ["hi"]);
        assert_eq!(cursor, CursorPos::new(2, 0));
        assert!(buffer.is_dirty());
    }

    #[test]
    fn typing_on_virtual_row_appends() {
        let mut buffer = buffer(&["a"]);
        let mut cursor = CursorPos::new(0, 1);
        buffer.insert_char_at(&mut cursor, b'b');
        assert_eq!(lines(&buffer), ["a", "b"]);
        assert_eq!(cursor, CursorPos::new(1, 1));
    }

    #[test]
    fn newline_splits_row() {
        let mut buffer = buffer(&["hello"]);
        let mut cursor = CursorPos::new(2, 0);
        buffer.insert_newline_at(&mut cursor);
        assert_eq!(lines(&buffer), ["he", "llo"]);
        assert_eq!(cursor, CursorPos::new(0, 1));
    }

    #[test]
    fn newline_at_column_zero_inserts_above() {
        let mut buffer = buffer(&["hello"]);
        let mut cursor = CursorPos::new(0, 0);
        buffer.insert_newline_at(&mut cursor);
        assert_eq!(lines(&buffer), ["", "hello"]);
        assert_eq!(cursor, CursorPos::new(0, 1));
    }

    #[test]
    fn newline_at_end_of_row_and_on_virtual_row() {
        let mut buffer = buffer(&["ab"]);
        let mut cursor = CursorPos::new(2, 0);
        buffer.insert_newline_at(&mut cursor);
        assert_eq!(lines(&buffer), ["ab", ""]);

        let mut cursor = CursorPos::new(0, 2);
        buffer.insert_newline_at(&mut cursor);
        assert_eq!(lines(&buffer), ["ab", "", ""]);
        assert_eq!(cursor, CursorPos::new(0, 3));
    }

    #[test]
    fn backspace_removes_previous_byte() {
        let mut buffer = buffer(&["abc"]);
        let mut cursor = CursorPos::new(2, 0);
        buffer.delete_char_before(&mut cursor);
        assert_eq!(lines(&buffer), ["ac"]);
        assert_eq!(cursor, CursorPos::new(1, 0));
    }

    #[test]
    fn backspace_at_column_zero_joins_rows() {
        let mut buffer = buffer(&["ab", "cd"]);
        let mut cursor = CursorPos::new(0, 1);
        buffer.delete_char_before(&mut cursor);
        assert_eq!(lines(&buffer), ["abcd"]);
        assert_eq!(cursor, CursorPos::new(2, 0));
        assert_eq!(buffer.row(0).unwrap().index(), 0);
    }

    #[test]
    fn backspace_at_start_or_virtual_row_is_noop() {
        let mut buffer = buffer(&["ab"]);
        let mut cursor = CursorPos::new(0, 0);
        buffer.delete_char_before(&mut cursor);
        let mut cursor_past = CursorPos::new(0, 1);
        buffer.delete_char_before(&mut cursor_past);
        assert_eq!(lines(&buffer), ["ab"]);
        assert_eq!(cursor, CursorPos::new(0, 0));
        assert_eq!(cursor_past, CursorPos::new(0, 1));
        assert!(!buffer.is_dirty());
    }

    #[test]
    fn newline_then_backspace_restores_content() {
        let mut buffer = buffer(&["split here"]);
        let mut cursor = CursorPos::new(5, 0);
        buffer.insert_newline_at(&mut cursor);
        buffer.delete_char_before(&mut cursor);
        assert_eq!(lines(&buffer), ["split here"]);
        assert_eq!(cursor, CursorPos::new(5, 0));
    }
}
