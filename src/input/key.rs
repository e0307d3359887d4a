//! Decoded keys.

/// One decoded keypress.
///
/// Printable characters and control combinations arrive as `Char` carrying the raw byte
/// (Ctrl+letter is the letter masked with `0x1f`); editing and navigation keys have their
/// own variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(u8),
    Enter,
    Escape,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Byte produced by holding Ctrl with `letter`.
pub const fn ctrl(letter: u8) -> u8 {
    letter & 0x1f
}

impl Key {
    /// Control byte for Ctrl+`letter`.
    pub const fn ctrl(letter: u8) -> Self {
        Key::Char(ctrl(letter))
    }

    /// Printable ASCII that a prompt may append to its input.
    pub fn printable(self) -> Option<char> {
        match self {
            Key::Char(byte) if byte.is_ascii() && !byte.is_ascii_control() => {
                Some(char::from(byte))
            }
            _ => None,
        }
    }
}
