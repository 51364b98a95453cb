//! The drawing half of the terminal contract.
//!
//! The renderer only needs absolute positioning, line clearing and the
//! screen size. Coordinates are `(row, col)` from the top-left corner of the
//! drawable area. Writes outside the area are clipped, never an error.

use ratatui::Frame;
use ratatui::style::{Modifier, Style};

pub trait Surface {
    fn screen_rows(&self) -> usize;
    fn screen_cols(&self) -> usize;
    /// Write `text` starting at `(row, col)`, in reverse video if `highlighted`.
    fn write_at(&mut self, row: usize, col: usize, text: &str, highlighted: bool);
    /// Blank `row` from `col` to the right edge.
    fn clear_to_end_of_line(&mut self, row: usize, col: usize);
    /// Place the visible cursor. Positions past the edge are pulled back on screen.
    fn move_cursor(&mut self, row: usize, col: usize);
}

impl Surface for Frame<'_> {
    fn screen_rows(&self) -> usize {
        self.area().height as usize
    }

    fn screen_cols(&self) -> usize {
        self.area().width as usize
    }

    fn write_at(&mut self, row: usize, col: usize, text: &str, highlighted: bool) {
        let area = self.area();
        let (rows, cols) = (area.height as usize, area.width as usize);
        if row >= rows || col >= cols {
            return;
        }
        let style = if highlighted {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.buffer_mut().set_stringn(
            area.x + col as u16,
            area.y + row as u16,
            text,
            cols - col,
            style,
        );
    }

    fn clear_to_end_of_line(&mut self, row: usize, col: usize) {
        let area = self.area();
        if row >= area.height as usize {
            return;
        }
        let y = area.y + row as u16;
        let buffer = self.buffer_mut();
        for x in col.min(area.width as usize)..area.width as usize {
            if let Some(cell) = buffer.cell_mut((area.x + x as u16, y)) {
                cell.reset();
            }
        }
    }

    fn move_cursor(&mut self, row: usize, col: usize) {
        let area = self.area();
        if area.is_empty() {
            return;
        }
        let row = row.min(area.height as usize - 1) as u16;
        let col = col.min(area.width as usize - 1) as u16;
        self.set_cursor_position((area.x + col, area.y + row));
    }
}
