//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::{Cursor, Editor};

/// Creates an editor holding `lines` with the cursor at `(y, x)`.
pub fn editor_at(lines: &[&str], y: usize, x: usize) -> Editor {
    let mut editor = Editor::with_lines(lines.iter().map(|l| l.to_string()).collect());
    editor.cursor = Cursor::new(y, x);
    editor
}
