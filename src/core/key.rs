//! Keys the editor understands, with a stable numeric encoding.
//!
//! The numeric codes follow the curses convention (arrow keys in the
//! 258..=261 range, `KEY_DC` for Delete, and so on), so recorded key
//! streams stay meaningful independent of the terminal backend.

/// A single decoded keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    Char(char),
    /// The terminal changed size. Carries no edit, only forces a redraw.
    Resize,
    /// Anything the editor has no binding for.
    Unknown,
}

pub const KEY_DOWN: i32 = 258;
pub const KEY_UP: i32 = 259;
pub const KEY_LEFT: i32 = 260;
pub const KEY_RIGHT: i32 = 261;
pub const KEY_BACKSPACE: i32 = 263;
pub const KEY_DELETE: i32 = 330;
pub const KEY_ENTER: i32 = 10;
pub const KEY_ESCAPE: i32 = 27;
pub const KEY_TAB: i32 = 9;
pub const KEY_RESIZE: i32 = 410;

impl Key {
    /// Numeric code of this key. `Unknown` encodes as `-1`.
    pub fn code(self) -> i32 {
        match self {
            Key::Up => KEY_UP,
            Key::Down => KEY_DOWN,
            Key::Left => KEY_LEFT,
            Key::Right => KEY_RIGHT,
            Key::Backspace => KEY_BACKSPACE,
            Key::Delete => KEY_DELETE,
            Key::Enter => KEY_ENTER,
            Key::Escape => KEY_ESCAPE,
            Key::Tab => KEY_TAB,
            Key::Char(c) => c as i32,
            Key::Resize => KEY_RESIZE,
            Key::Unknown => -1,
        }
    }

    /// Decode a numeric key code.
    ///
    /// Terminals disagree on Backspace (127, 8 or `KEY_BACKSPACE`) and Enter
    /// (LF, CR or keypad Enter 343); all variants decode to the same key.
    pub fn from_code(code: i32) -> Key {
        match code {
            KEY_UP => Key::Up,
            KEY_DOWN => Key::Down,
            KEY_LEFT => Key::Left,
            KEY_RIGHT => Key::Right,
            KEY_BACKSPACE | 127 | 8 => Key::Backspace,
            KEY_DELETE => Key::Delete,
            KEY_ENTER | 13 | 343 => Key::Enter,
            KEY_ESCAPE => Key::Escape,
            KEY_TAB => Key::Tab,
            KEY_RESIZE => Key::Resize,
            32..=126 => char::from_u32(code as u32).map_or(Key::Unknown, Key::Char),
            _ => Key::Unknown,
        }
    }
}

/// Whether `c` can be stored in a line: printable ASCII or space.
pub fn is_representable(c: char) -> bool {
    c == ' ' || c.is_ascii_graphic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys_round_trip() {
        for key in [
            Key::Up,
            Key::Down,
            Key::Left,
            Key::Right,
            Key::Backspace,
            Key::Delete,
            Key::Enter,
            Key::Escape,
            Key::Tab,
            Key::Resize,
            Key::Char('a'),
            Key::Char(' '),
            Key::Char('~'),
        ] {
            assert_eq!(Key::from_code(key.code()), key);
        }
    }

    #[test]
    fn test_backspace_aliases() {
        assert_eq!(Key::from_code(127), Key::Backspace);
        assert_eq!(Key::from_code(8), Key::Backspace);
    }

    #[test]
    fn test_enter_aliases() {
        assert_eq!(Key::from_code(13), Key::Enter);
        assert_eq!(Key::from_code(343), Key::Enter);
    }

    #[test]
    fn test_unmapped_codes_are_unknown() {
        assert_eq!(Key::from_code(0), Key::Unknown);
        assert_eq!(Key::from_code(31), Key::Unknown);
        assert_eq!(Key::from_code(200), Key::Unknown);
        assert_eq!(Key::from_code(-5), Key::Unknown);
    }

    #[test]
    fn test_representable_range() {
        assert!(is_representable('a'));
        assert!(is_representable(' '));
        assert!(is_representable('~'));
        assert!(!is_representable('\t'));
        assert!(!is_representable('\u{7f}'));
        assert!(!is_representable('é'));
    }
}
