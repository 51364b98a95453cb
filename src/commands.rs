//! # Commands
//!
//! The note operations behind the CLI subcommands. Each one works on an open
//! [`NoteStore`], asks a [`NoteEditor`] for text when it needs some, and
//! writes its user-facing messages to `out`.

use std::fmt;
use std::io::{self, Write};

use chrono::Utc;
use clap::Subcommand;
use log::info;

use crate::core::Editor;
use crate::core::store::{Note, NoteStore, StoreError};
use crate::tui;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write a new note in the editor
    New { title: String },
    /// Edit an existing note in the editor
    Edit { title: String },
    /// Print a note's text
    Show { title: String },
    /// List all notes
    List,
    /// Delete a note
    Delete { title: String },
}

/// Where note text gets edited.
pub trait NoteEditor {
    /// Edit `lines` (or an empty buffer for `None`) and return the result.
    fn edit(&mut self, lines: Option<Vec<String>>) -> io::Result<Vec<String>>;
}

/// Full-screen editing in the user's terminal.
pub struct TerminalEditor {
    pub tab_width: usize,
}

impl NoteEditor for TerminalEditor {
    fn edit(&mut self, lines: Option<Vec<String>>) -> io::Result<Vec<String>> {
        let editor = match lines {
            Some(lines) => Editor::with_lines(lines),
            None => Editor::new(),
        };
        tui::run(editor.tab_width(self.tab_width))
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CommandError {
    Store(StoreError),
    Io(io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Store(e) => write!(f, "{e}"),
            CommandError::Io(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<StoreError> for CommandError {
    fn from(e: StoreError) -> Self {
        CommandError::Store(e)
    }
}

impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self {
        CommandError::Io(e)
    }
}

// ============================================================================
// Execution
// ============================================================================

pub fn execute(
    command: &Command,
    store: &mut NoteStore,
    editor: &mut dyn NoteEditor,
    out: &mut dyn Write,
) -> Result<(), CommandError> {
    match command {
        Command::New { title } => {
            // Refuse before the user types anything.
            if store.contains(title) {
                return Err(StoreError::Duplicate(title.clone()).into());
            }
            let text = editor.edit(None)?;
            store.create(Note::new(title.as_str(), text, Utc::now()))?;
            info!("Created note {:?}", title);
            writeln!(out, "Note saved as \"{title}\"")?;
        }
        Command::Edit { title } => {
            let note = store
                .get(title)
                .cloned()
                .ok_or_else(|| StoreError::NotFound(title.clone()))?;
            let text = editor.edit(Some(note.text.clone()))?;
            store.update(Note { text, ..note })?;
            info!("Updated note {:?}", title);
            writeln!(out, "Note \"{title}\" updated")?;
        }
        Command::Show { title } => {
            let note = store
                .get(title)
                .ok_or_else(|| StoreError::NotFound(title.clone()))?;
            for line in &note.text {
                writeln!(out, "{line}")?;
            }
        }
        Command::List => {
            if store.notes().is_empty() {
                writeln!(out, "No notes yet")?;
            }
            for note in store.notes() {
                writeln!(out, "{}  ({})", note.title, note.date)?;
            }
        }
        Command::Delete { title } => {
            store.delete(title)?;
            info!("Deleted note {:?}", title);
            writeln!(out, "Deleted \"{title}\"")?;
        }
    }
    Ok(())
}
