//! # Editor State
//!
//! Everything the editing session owns, in one place.
//!
//! ```text
//! Editor
//! ├── buffer: LineBuffer   // the lines being edited
//! ├── cursor: Cursor       // (y, x) into buffer
//! ├── mode: Mode           // Editing | Terminated
//! └── tab_width: usize     // spaces inserted by Tab
//! ```
//!
//! State changes only happen through `update(editor, key, geometry)` in
//! action.rs, so the cursor and buffer are always consistent when the
//! renderer looks at them.

use super::buffer::LineBuffer;
use super::cursor::{Cursor, Geometry};

pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Whether the session is still accepting keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Terminated,
}

#[derive(Debug, Clone)]
pub struct Editor {
    pub buffer: LineBuffer,
    pub cursor: Cursor,
    pub mode: Mode,
    pub tab_width: usize,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Empty buffer, cursor at (0, 0).
    pub fn new() -> Self {
        Self {
            buffer: LineBuffer::new(),
            cursor: Cursor::default(),
            mode: Mode::Editing,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Existing content, cursor after the last character of the last line.
    pub fn with_lines(lines: Vec<String>) -> Self {
        let buffer = LineBuffer::from_lines(lines);
        let y = buffer.line_count() - 1;
        let cursor = Cursor::new(y, buffer.line_len(y));
        Self {
            buffer,
            cursor,
            mode: Mode::Editing,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    pub fn tab_width(mut self, width: usize) -> Self {
        self.tab_width = width;
        self
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Editing
    }

    /// Re-clamp the cursor for the current screen size.
    ///
    /// Called before every draw so a shrinking terminal can never leave the
    /// cursor below the last content row.
    pub fn fit_to(&mut self, geometry: Geometry) {
        self.cursor.clamp(&self.buffer, geometry);
    }

    pub fn into_lines(self) -> Vec<String> {
        self.buffer.into_lines()
    }
}
