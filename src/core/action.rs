//! # Input Dispatch
//!
//! Every keystroke goes through `update()`, which applies it to the editor
//! and reports whether the session should keep going.
//!
//! ```text
//! Editor + Key + Geometry  →  update()  →  Effect
//! ```
//!
//! No I/O happens here. The terminal adapter reads the key and redraws; this
//! module only mutates `LineBuffer` and `Cursor`, always leaving them
//! consistent with each other before returning.

use log::debug;

use super::cursor::Geometry;
use super::key::{Key, is_representable};
use super::state::{Editor, Mode};

/// What the session loop should do after a key has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed; the screen can stay as it is.
    None,
    /// Buffer, cursor or screen size changed.
    Redraw,
    /// Editing is over; the caller should collect the lines.
    Quit,
}

/// Apply one key to the editor.
///
/// Keys arriving after the editor has terminated are ignored.
pub fn update(editor: &mut Editor, key: Key, geometry: Geometry) -> Effect {
    if editor.mode == Mode::Terminated {
        return Effect::Quit;
    }

    let before = editor.cursor;
    match key {
        Key::Left => editor.cursor.move_left(),
        Key::Right => editor.cursor.move_right(&editor.buffer, geometry),
        Key::Up => editor.cursor.move_up(&editor.buffer),
        Key::Down => editor.cursor.move_down(&editor.buffer, geometry),
        Key::Escape => {
            debug!("Escape pressed, ending edit session");
            editor.mode = Mode::Terminated;
            return Effect::Quit;
        }
        Key::Backspace => return backspace(editor),
        Key::Delete => return delete(editor),
        Key::Enter => {
            newline(editor, geometry);
            return Effect::Redraw;
        }
        Key::Tab => {
            let width = editor.tab_width;
            let Editor { buffer, cursor, .. } = editor;
            buffer.insert_str(cursor.y, cursor.x, &" ".repeat(width));
            cursor.x += width;
            return Effect::Redraw;
        }
        Key::Char(c) => return insert(editor, c, geometry),
        Key::Resize => return Effect::Redraw,
        Key::Unknown => return Effect::None,
    }

    if editor.cursor == before {
        Effect::None
    } else {
        Effect::Redraw
    }
}

/// Split at the cursor, then move to the start of the new line.
///
/// On the last screen row the cursor cannot move down, so it lands at
/// column 0 of the current row.
fn newline(editor: &mut Editor, geometry: Geometry) {
    let Editor { buffer, cursor, .. } = editor;
    buffer.split_line_at(cursor.y, cursor.x);
    cursor.x = 0;
    cursor.move_down(buffer, geometry);
}

fn backspace(editor: &mut Editor) -> Effect {
    let Editor { buffer, cursor, .. } = editor;
    match (cursor.y, cursor.x) {
        (0, 0) => Effect::None,
        (y, 0) => {
            cursor.x = buffer.line_len(y - 1);
            buffer.join_line_into_previous(y);
            cursor.move_up(buffer);
            Effect::Redraw
        }
        (y, x) => {
            buffer.delete_char_before(y, x);
            cursor.move_left();
            Effect::Redraw
        }
    }
}

fn delete(editor: &mut Editor) -> Effect {
    let Editor { buffer, cursor, .. } = editor;
    let at_end = cursor.x >= buffer.line_len(cursor.y);
    if at_end && cursor.y + 1 >= buffer.line_count() {
        return Effect::None;
    }
    buffer.delete_char_at(cursor.y, cursor.x);
    Effect::Redraw
}

/// Insert a printable character, splitting first when the line already
/// fills the screen width.
fn insert(editor: &mut Editor, c: char, geometry: Geometry) -> Effect {
    let wrapped = editor.cursor.x == geometry.cols;
    if wrapped {
        newline(editor, geometry);
    }
    if !is_representable(c) {
        debug!("Dropping unrepresentable character {:?}", c);
        return if wrapped { Effect::Redraw } else { Effect::None };
    }
    let Editor { buffer, cursor, .. } = editor;
    buffer.insert_char(cursor.y, cursor.x, c);
    cursor.x += 1;
    Effect::Redraw
}
