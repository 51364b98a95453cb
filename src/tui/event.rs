use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Key;

/// Something that yields one key at a time, blocking until it has one.
pub trait KeySource {
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Keys read from the real terminal via crossterm.
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    log::debug!(
                        "Key event: {:?} with modifiers {:?}",
                        key_event.code,
                        key_event.modifiers
                    );
                    return Ok(translate(key_event));
                }
                Event::Resize(cols, rows) => {
                    log::debug!("Terminal resized to {}x{}", cols, rows);
                    return Ok(Key::Resize);
                }
                _ => {}
            }
        }
    }
}

/// Map a crossterm key event onto the editor's key set.
///
/// Control and Alt chords have no binding and come back as `Key::Unknown`.
pub fn translate(key_event: KeyEvent) -> Key {
    let chord = key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key_event.code {
        KeyCode::Char(_) if chord => Key::Unknown,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        _ => Key::Unknown,
    }
}

/// A fixed sequence of keys, for driving a session without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Build a script from numeric key codes (see [`Key::from_code`]).
    pub fn from_codes(codes: &[i32]) -> Self {
        Self::new(codes.iter().map(|&code| Key::from_code(code)))
    }

    /// Script that types `text` character by character.
    pub fn typing(text: &str) -> Self {
        Self::new(text.chars().map(|c| match c {
            '\n' => Key::Enter,
            '\t' => Key::Tab,
            c => Key::Char(c),
        }))
    }

    pub fn then(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        self.keys.pop_front().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "key script ran out before Escape",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_translate_plain_keys() {
        assert_eq!(translate(key(KeyCode::Char('a'), KeyModifiers::NONE)), Key::Char('a'));
        assert_eq!(translate(key(KeyCode::Char('A'), KeyModifiers::SHIFT)), Key::Char('A'));
        assert_eq!(translate(key(KeyCode::Esc, KeyModifiers::NONE)), Key::Escape);
        assert_eq!(translate(key(KeyCode::Enter, KeyModifiers::NONE)), Key::Enter);
        assert_eq!(translate(key(KeyCode::Delete, KeyModifiers::NONE)), Key::Delete);
        assert_eq!(translate(key(KeyCode::Tab, KeyModifiers::NONE)), Key::Tab);
    }

    #[test]
    fn test_translate_chords_are_unknown() {
        assert_eq!(translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Key::Unknown);
        assert_eq!(translate(key(KeyCode::Char('x'), KeyModifiers::ALT)), Key::Unknown);
    }

    #[test]
    fn test_translate_unbound_keys() {
        assert_eq!(translate(key(KeyCode::PageUp, KeyModifiers::NONE)), Key::Unknown);
        assert_eq!(translate(key(KeyCode::F(1), KeyModifiers::NONE)), Key::Unknown);
    }

    #[test]
    fn test_scripted_keys_run_out() {
        let mut keys = ScriptedKeys::typing("a\n");
        assert_eq!(keys.read_key().unwrap(), Key::Char('a'));
        assert_eq!(keys.read_key().unwrap(), Key::Enter);
        let err = keys.read_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_scripted_keys_from_codes() {
        let mut keys = ScriptedKeys::from_codes(&[104, 330, 127, 27]);
        assert_eq!(keys.remaining(), 4);
        assert_eq!(keys.read_key().unwrap(), Key::Char('h'));
        assert_eq!(keys.read_key().unwrap(), Key::Delete);
        assert_eq!(keys.read_key().unwrap(), Key::Backspace);
        assert_eq!(keys.read_key().unwrap(), Key::Escape);
    }
}
