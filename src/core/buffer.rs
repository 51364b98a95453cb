//! # Line Buffer
//!
//! The ordered sequence of text lines being edited. Insertion order is
//! visual line order, and there is always at least one line.
//!
//! Every operation takes `(y, x)` coordinates where `x` is a character
//! offset (not a byte offset). Operations are total: out-of-range
//! coordinates clamp or turn the call into a no-op. The only caller is the
//! dispatcher in `action.rs`, which keeps coordinates valid anyway.

/// Editable text content, one `String` per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// A buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Build a buffer from existing lines. An empty vector becomes `[""]`.
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            return Self::new();
        }
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, y: usize) -> Option<&str> {
        self.lines.get(y).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Length of line `y` in characters (0 for a missing line).
    pub fn line_len(&self, y: usize) -> usize {
        self.lines.get(y).map_or(0, |l| l.chars().count())
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Move the tail of line `y` (from `x` on) to a new line right after it.
    ///
    /// At `x == line_len(y)` this inserts an empty line, the ordinary
    /// "Enter at end of line" case.
    pub fn split_line_at(&mut self, y: usize, x: usize) {
        let Some(line) = self.lines.get_mut(y) else {
            return;
        };
        let at = byte_offset(line, x);
        let tail = line.split_off(at);
        self.insert_line_after(y, tail);
    }

    /// Append line `y` to line `y - 1` and drop line `y`. No-op for `y == 0`.
    pub fn join_line_into_previous(&mut self, y: usize) {
        if y == 0 || y >= self.lines.len() {
            return;
        }
        let current = self.lines.remove(y);
        self.lines[y - 1].push_str(&current);
    }

    pub fn insert_char(&mut self, y: usize, x: usize, c: char) {
        if let Some(line) = self.lines.get_mut(y) {
            let at = byte_offset(line, x);
            line.insert(at, c);
        }
    }

    /// Insert `text` at `x` on line `y`. Used for Tab expansion.
    pub fn insert_str(&mut self, y: usize, x: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(y) {
            let at = byte_offset(line, x);
            line.insert_str(at, text);
        }
    }

    /// Remove the character just before `x`. No-op for `x == 0`.
    pub fn delete_char_before(&mut self, y: usize, x: usize) {
        if x == 0 {
            return;
        }
        if let Some(line) = self.lines.get_mut(y) {
            if x <= line.chars().count() {
                let at = byte_offset(line, x - 1);
                line.remove(at);
            }
        }
    }

    /// Remove the character at `x`.
    ///
    /// At the end of a line that is not the last one, the following line is
    /// pulled up into this one instead. At the end of the last line nothing
    /// happens.
    pub fn delete_char_at(&mut self, y: usize, x: usize) {
        let len = self.line_len(y);
        if y >= self.lines.len() {
            return;
        }
        if x < len {
            let line = &mut self.lines[y];
            let at = byte_offset(line, x);
            line.remove(at);
        } else if y + 1 < self.lines.len() {
            self.join_line_into_previous(y + 1);
        }
    }

    /// Insert `content` as a new line after `y` (appends when `y` is past the end).
    pub fn insert_line_after(&mut self, y: usize, content: String) {
        let at = (y + 1).min(self.lines.len());
        self.lines.insert(at, content);
    }

    /// Remove line `y`. Removing the only line leaves a single empty line.
    pub fn remove_line(&mut self, y: usize) {
        if y >= self.lines.len() {
            return;
        }
        if self.lines.len() == 1 {
            self.lines[0].clear();
        } else {
            self.lines.remove(y);
        }
    }
}

/// Byte index of the `x`-th character of `line`, clamped to the line end.
fn byte_offset(line: &str, x: usize) -> usize {
    line.char_indices()
        .nth(x)
        .map_or(line.len(), |(index, _)| index)
}
