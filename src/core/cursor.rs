//! Cursor position and movement over a [`LineBuffer`].
//!
//! `Cursor` holds no reference to the buffer; each movement method takes the
//! buffer and the current screen geometry explicitly, so the dependency stays
//! visible at the call site.
//!
//! Left/Right never cross a line boundary. Only Enter, Backspace and Delete
//! move content (and the cursor) between lines.

use super::buffer::LineBuffer;

/// Screen dimensions as reported by the terminal.
///
/// The last row is reserved for the status line, so `rows - 1` buffer lines
/// are displayable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub rows: usize,
    pub cols: usize,
}

impl Geometry {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of rows available for buffer content.
    pub fn content_rows(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Index of the last row the cursor may occupy.
    pub fn last_content_row(&self) -> usize {
        self.rows.saturating_sub(2)
    }
}

/// Edit position: row `y` into the buffer, column `x` as a character offset.
///
/// `x == line_len(y)` means "after the last character".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub y: usize,
    pub x: usize,
}

impl Cursor {
    pub fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }

    pub fn move_up(&mut self, buffer: &LineBuffer) {
        if self.y > 0 {
            self.y -= 1;
        }
        self.clamp_column(buffer);
    }

    pub fn move_down(&mut self, buffer: &LineBuffer, geometry: Geometry) {
        let limit = buffer.line_count().min(geometry.content_rows());
        if self.y + 1 < limit {
            self.y += 1;
        }
        self.clamp_column(buffer);
    }

    pub fn move_left(&mut self) {
        if self.x > 0 {
            self.x -= 1;
        }
    }

    pub fn move_right(&mut self, buffer: &LineBuffer, geometry: Geometry) {
        if self.x < buffer.line_len(self.y) && self.x + 1 < geometry.cols {
            self.x += 1;
        }
    }

    /// Pull `x` back onto line `y` if it points past the end.
    pub fn clamp_column(&mut self, buffer: &LineBuffer) {
        self.x = self.x.min(buffer.line_len(self.y));
    }

    /// Re-establish the cursor invariants after the buffer or the screen
    /// changed underneath it.
    pub fn clamp(&mut self, buffer: &LineBuffer, geometry: Geometry) {
        let last_row = buffer
            .line_count()
            .saturating_sub(1)
            .min(geometry.last_content_row());
        self.y = self.y.min(last_row);
        self.clamp_column(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> LineBuffer {
        LineBuffer::from_lines(lines.iter().map(|l| l.to_string()).collect())
    }

    const SCREEN: Geometry = Geometry { rows: 24, cols: 80 };

    #[test]
    fn test_geometry_reserves_status_row() {
        assert_eq!(SCREEN.content_rows(), 23);
        assert_eq!(SCREEN.last_content_row(), 22);
    }

    #[test]
    fn test_move_up_clamps_column_to_shorter_line() {
        let buf = buffer(&["ab", "abcdef"]);
        let mut cursor = Cursor::new(1, 6);
        cursor.move_up(&buf);
        assert_eq!(cursor, Cursor::new(0, 2));
    }

    #[test]
    fn test_move_up_at_top_stays() {
        let buf = buffer(&["abc"]);
        let mut cursor = Cursor::new(0, 1);
        cursor.move_up(&buf);
        assert_eq!(cursor, Cursor::new(0, 1));
    }

    #[test]
    fn test_move_down_stops_at_last_line() {
        let buf = buffer(&["abc", "de"]);
        let mut cursor = Cursor::new(1, 1);
        cursor.move_down(&buf, SCREEN);
        assert_eq!(cursor, Cursor::new(1, 1));
    }

    #[test]
    fn test_move_down_stops_at_last_screen_row() {
        let buf = buffer(&["a", "b", "c", "d"]);
        let small = Geometry::new(3, 80);
        let mut cursor = Cursor::new(1, 0);
        cursor.move_down(&buf, small);
        assert_eq!(cursor.y, 1);
    }

    #[test]
    fn test_move_down_clamps_column() {
        let buf = buffer(&["abcdef", "ab"]);
        let mut cursor = Cursor::new(0, 5);
        cursor.move_down(&buf, SCREEN);
        assert_eq!(cursor, Cursor::new(1, 2));
    }

    #[test]
    fn test_move_left_does_not_wrap() {
        let mut cursor = Cursor::new(1, 0);
        cursor.move_left();
        assert_eq!(cursor, Cursor::new(1, 0));
    }

    #[test]
    fn test_move_right_does_not_wrap() {
        let buf = buffer(&["ab", "cd"]);
        let mut cursor = Cursor::new(0, 2);
        cursor.move_right(&buf, SCREEN);
        assert_eq!(cursor, Cursor::new(0, 2));
    }

    #[test]
    fn test_move_right_respects_screen_width() {
        let buf = buffer(&["abcdef"]);
        let narrow = Geometry::new(24, 3);
        let mut cursor = Cursor::new(0, 1);
        cursor.move_right(&buf, narrow);
        assert_eq!(cursor.x, 2);
        cursor.move_right(&buf, narrow);
        assert_eq!(cursor.x, 2);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let buf = buffer(&["a", "b", "c", "dddd"]);
        let mut cursor = Cursor::new(3, 4);
        cursor.clamp(&buf, Geometry::new(3, 80));
        assert_eq!(cursor, Cursor::new(1, 1));
    }
}
