//! # TUI Adapter
//!
//! The ratatui/crossterm layer. Owns the terminal for the length of one
//! editing session, draws the editor, and feeds decoded keys to
//! `core::update` until Escape.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Session Lifecycle
//!
//! ```text
//! try_init (raw mode, alternate screen, panic hook)
//!   └── TerminalModeGuard (keyboard enhancement, steady cursor)
//!         └── loop { draw → read key → update } until Quit
//!   (guard dropped)
//! restore
//! ```
//!
//! `ratatui::restore()` runs on every way out of the loop, including key
//! read or draw errors. The panic hook installed by `ratatui::try_init`
//! covers panics.

mod event;
mod surface;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::{Editor, Effect, Geometry, update};

pub use event::{CrosstermKeys, KeySource, ScriptedKeys, translate};
pub use surface::Surface;
pub use ui::{draw_ui, status_text};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Disambiguated escape codes let a lone Esc arrive without delay.
        // Terminals without the Kitty protocol ignore the request.
        execute!(
            stdout(),
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Edit `initial_lines` in the terminal; returns the lines when the user
/// presses Escape. The cursor starts after the last character.
pub fn open_editor(initial_lines: Vec<String>) -> io::Result<Vec<String>> {
    run(Editor::with_lines(initial_lines))
}

/// Edit an empty buffer in the terminal.
pub fn open_editor_empty() -> io::Result<Vec<String>> {
    run(Editor::new())
}

/// Run a full-screen session on `editor` and return its final lines.
pub fn run(editor: Editor) -> io::Result<Vec<String>> {
    let mut terminal = match ratatui::try_init() {
        Ok(terminal) => terminal,
        Err(e) => {
            ratatui::restore();
            return Err(e);
        }
    };
    info!("Editor session started ({} lines)", editor.buffer.line_count());

    let result = edit_in(&mut terminal, editor);

    ratatui::restore();
    match &result {
        Ok(lines) => info!("Editor session ended ({} lines)", lines.len()),
        Err(e) => log::warn!("Editor session failed: {}", e),
    }
    result
}

fn edit_in(terminal: &mut DefaultTerminal, editor: Editor) -> io::Result<Vec<String>> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    drive(editor, &mut CrosstermKeys, |editor| {
        let mut geometry = Geometry::new(0, 0);
        terminal.draw(|frame| {
            geometry = geometry_of(frame.area());
            editor.fit_to(geometry);
            draw_ui(frame, editor);
        })?;
        Ok(geometry)
    })
}

/// The render → read key → dispatch loop, independent of any real terminal.
///
/// `draw` renders the editor and reports the geometry it drew into; that
/// geometry bounds the next key's cursor movement. Keys that yield
/// `Effect::None` skip the redraw. Returns the buffer's lines once a key
/// yields `Effect::Quit`.
pub fn drive<K, D>(mut editor: Editor, keys: &mut K, mut draw: D) -> io::Result<Vec<String>>
where
    K: KeySource,
    D: FnMut(&mut Editor) -> io::Result<Geometry>,
{
    if !editor.is_running() {
        return Ok(editor.into_lines());
    }

    let mut geometry = draw(&mut editor)?;
    loop {
        let key = keys.read_key()?;
        let effect = update(&mut editor, key, geometry);
        debug!(
            "{:?} -> {:?} at ({}, {})",
            key, effect, editor.cursor.y, editor.cursor.x
        );
        match effect {
            Effect::Quit => break,
            Effect::Redraw => geometry = draw(&mut editor)?,
            Effect::None => {}
        }
    }
    Ok(editor.into_lines())
}

fn geometry_of(area: Rect) -> Geometry {
    Geometry::new(area.height as usize, area.width as usize)
}
