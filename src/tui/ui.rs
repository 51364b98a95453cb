use crate::core::Editor;
use crate::tui::surface::Surface;

/// Status line text for the current cursor position.
pub fn status_text(editor: &Editor) -> String {
    format!(
        "Press ESC to save   COL: {}   ROW: {}",
        editor.cursor.x, editor.cursor.y
    )
}

/// Redraw the whole screen from editor state.
///
/// Rows `0..rows-1` show buffer lines (or stay blank past the end of the
/// buffer), the last row is the status line cut to the screen width, and the
/// visible cursor ends up on `(y, x)`.
pub fn draw_ui(surface: &mut impl Surface, editor: &Editor) {
    let rows = surface.screen_rows();
    if rows == 0 {
        return;
    }
    let status_row = rows - 1;

    for row in 0..status_row {
        match editor.buffer.line(row) {
            Some(line) => {
                surface.write_at(row, 0, line, false);
                surface.clear_to_end_of_line(row, line.chars().count());
            }
            None => surface.clear_to_end_of_line(row, 0),
        }
    }

    let status: String = status_text(editor)
        .chars()
        .take(surface.screen_cols())
        .collect();
    surface.write_at(status_row, 0, &status, true);
    surface.clear_to_end_of_line(status_row, status.len());

    surface.move_cursor(editor.cursor.y, editor.cursor.x);
}
