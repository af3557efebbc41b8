/// Raw escape byte.
pub const ESC: u8 = 27;
/// Raw delete byte most terminals send for the backspace key.
pub const DEL: u8 = 127;

/// Key codes representing individual keys on the keyboard.
///
/// Hosts that read raw bytes never build these by hand; [`InputEvent::key`]
/// classifies each byte. Hosts with their own key decoding send the named
/// keys through [`InputEvent::Key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A single ASCII character key. Control bytes carry [`Modifiers::CTRL`]
    /// and the lower-case letter of their chord (byte 3 is Ctrl+c).
    Char(char),
    /// The Escape key, used to leave insert and visual modes.
    Esc,
    /// The Enter/Return key.
    Enter,
    /// The Backspace key for deleting characters in insert mode.
    Backspace,
    /// A cursor, editing or function key sent as an escape sequence. No
    /// mode binds it; in insert mode it only abandons pending bytes.
    Function,
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// A raw terminal byte can only carry Ctrl; Shift is folded into the
    /// character and Alt arrives as an escape prefix.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const CTRL = 0b0001;
    }
}

/// A key press event with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

impl KeyEvent {
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: Modifiers::empty(),
        }
    }

    /// A plain character with no modifiers held. Control characters are
    /// never text, however they were delivered.
    pub fn char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if self.mods.is_empty() && !c.is_control() => Some(c),
            _ => None,
        }
    }
}

/// Input events that can be processed by the editor engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// One raw byte as read from the terminal.
    Unit(u8),
    /// A named key already decoded by the host.
    Key(KeyEvent),
}

impl InputEvent {
    /// Classifies the event as a key, if it is one.
    ///
    /// Bytes of 128 and above are never keys on their own; they only become
    /// text through the [`CodepointDecoder`](crate::CodepointDecoder).
    pub fn key(&self) -> Option<KeyEvent> {
        let unit = match *self {
            InputEvent::Key(ke) => return Some(ke),
            InputEvent::Unit(unit) => unit,
        };
        let code = match unit {
            ESC => KeyCode::Esc,
            b'\n' | b'\r' => KeyCode::Enter,
            DEL | 8 => KeyCode::Backspace,
            0..=31 => {
                return Some(KeyEvent {
                    code: KeyCode::Char(char::from(unit | 0x40).to_ascii_lowercase()),
                    mods: Modifiers::CTRL,
                });
            }
            32..=126 => KeyCode::Char(char::from(unit)),
            128..=255 => return None,
        };
        Some(KeyEvent::plain(code))
    }
}

/// Whether a raw byte is a control value rather than part of text.
pub fn is_control(unit: u8) -> bool {
    unit < 32 || unit == DEL
}
