//! # Note Persistence
//!
//! Saves notes to a single JSON file (by default `~/noteData.json`).
//!
//! The file holds a JSON array of notes; each note is a title, the edited
//! lines, and a creation date string. Titles are unique.
//!
//! Every mutation is applied to a copy first and only committed to memory
//! once the atomic write (write `.tmp`, then `rename()`) has succeeded, so a
//! failed save never leaves the store out of step with the file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// A single stored note.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub text: Vec<String>,
    pub date: String,
}

impl Note {
    pub fn new(title: impl Into<String>, text: Vec<String>, date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            text,
            date: format_date(date),
        }
    }
}

/// Render a timestamp as `2024-03-01 09:15:00 +0000`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M:%S %z").to_string()
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Json(serde_json::Error),
    Duplicate(String),
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "note file I/O error: {e}"),
            StoreError::Json(e) => write!(f, "note file is not valid JSON: {e}"),
            StoreError::Duplicate(title) => write!(f, "a note titled \"{title}\" already exists"),
            StoreError::NotFound(title) => write!(f, "Could not find \"{title}\""),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

// ============================================================================
// Store
// ============================================================================

/// All notes, backed by one JSON file.
#[derive(Debug)]
pub struct NoteStore {
    path: PathBuf,
    notes: Vec<Note>,
}

impl NoteStore {
    /// Open the store at `path`.
    ///
    /// A missing file is created holding an empty list. A file that exists
    /// but does not parse is reported as `StoreError::Json` and left alone.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            info!("No note file at {}, creating an empty one", path.display());
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            atomic_write_json(&path, &Vec::<Note>::new())?;
            return Ok(Self {
                path,
                notes: Vec::new(),
            });
        }

        let json = fs::read_to_string(&path)?;
        let notes: Vec<Note> = serde_json::from_str(&json)?;
        debug!("Loaded {} notes from {}", notes.len(), path.display());
        Ok(Self { path, notes })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Whether a note with this title exists.
    pub fn contains(&self, title: &str) -> bool {
        self.notes.iter().any(|n| n.title == title)
    }

    pub fn get(&self, title: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.title == title)
    }

    /// Add a new note. Titles must be unique.
    pub fn create(&mut self, note: Note) -> Result<(), StoreError> {
        if self.contains(&note.title) {
            return Err(StoreError::Duplicate(note.title));
        }
        let mut next = self.notes.clone();
        next.push(note);
        self.commit(next)
    }

    /// Replace the note that has the same title.
    pub fn update(&mut self, note: Note) -> Result<(), StoreError> {
        let Some(index) = self.position(&note.title) else {
            return Err(StoreError::NotFound(note.title));
        };
        let mut next = self.notes.clone();
        next[index] = note;
        self.commit(next)
    }

    /// Remove the note with this title, returning it.
    pub fn delete(&mut self, title: &str) -> Result<Note, StoreError> {
        let Some(index) = self.position(title) else {
            return Err(StoreError::NotFound(title.to_string()));
        };
        let mut next = self.notes.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(removed)
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.title == title)
    }

    /// Persist `notes`, then adopt them as the in-memory state.
    fn commit(&mut self, notes: Vec<Note>) -> Result<(), StoreError> {
        atomic_write_json(&self.path, &notes)?;
        debug!("Saved {} notes to {}", notes.len(), self.path.display());
        self.notes = notes;
        Ok(())
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
