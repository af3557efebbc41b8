//! Folding terminal escape sequences out of the raw byte stream.
//!
//! Cursor and function keys arrive as `ESC [ ... final` (CSI) or
//! `ESC O final` (SS3). Passed through byte by byte, the leading escape would
//! leave insert mode and the tail would be read as commands, so the filter
//! turns each whole sequence into one [`KeyCode::Function`] key.
//!
//! A lone escape is indistinguishable from the start of a sequence until the
//! next byte shows up or the host gives up waiting and calls
//! [`EscapeFilter::flush`].

use tracing::trace;

use crate::key::{ESC, InputEvent, KeyCode, KeyEvent};

const FUNCTION: InputEvent = InputEvent::Key(KeyEvent::plain(KeyCode::Function));

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum State {
    #[default]
    Ground,
    /// Saw ESC, waiting for the next byte.
    Escape,
    /// Inside `ESC [`, skipping parameter and intermediate bytes.
    Csi,
    /// Saw `ESC O`, waiting for the final byte.
    Ss3,
}

/// Events released by one [`EscapeFilter`] step, oldest first.
pub type Released = std::iter::Flatten<std::array::IntoIter<Option<InputEvent>, 2>>;

#[derive(Debug, Default, Clone)]
pub struct EscapeFilter {
    state: State,
}

impl EscapeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an escape is being held back. The host should wait only
    /// briefly for the next byte, then [`flush`](Self::flush).
    pub fn is_pending(&self) -> bool {
        self.state != State::Ground
    }

    /// Feeds one raw byte and releases whatever it completes.
    pub fn feed(&mut self, unit: u8) -> Released {
        let (first, second) = match self.state {
            State::Ground if unit == ESC => {
                self.state = State::Escape;
                (None, None)
            }
            State::Ground => (Some(InputEvent::Unit(unit)), None),
            State::Escape => match unit {
                b'[' => self.enter(State::Csi),
                b'O' => self.enter(State::Ss3),
                // Escape pressed twice: the first one stands alone
                ESC => (Some(InputEvent::Unit(ESC)), None),
                _ => {
                    self.state = State::Ground;
                    (Some(InputEvent::Unit(ESC)), Some(InputEvent::Unit(unit)))
                }
            },
            State::Csi => match unit {
                0x20..=0x3F => (None, None),
                0x40..=0x7E => self.finish(),
                _ => self.abort(unit),
            },
            State::Ss3 => match unit {
                0x40..=0x7E => self.finish(),
                _ => self.abort(unit),
            },
        };
        [first, second].into_iter().flatten()
    }

    /// Gives up waiting: a held escape is released as a plain Escape key and
    /// a truncated sequence as a function key.
    pub fn flush(&mut self) -> Option<InputEvent> {
        let state = std::mem::take(&mut self.state);
        match state {
            State::Ground => None,
            State::Escape => Some(InputEvent::Unit(ESC)),
            State::Csi | State::Ss3 => {
                trace!(target: "escape", ?state, "truncated sequence");
                Some(FUNCTION)
            }
        }
    }

    fn enter(&mut self, state: State) -> (Option<InputEvent>, Option<InputEvent>) {
        self.state = state;
        (None, None)
    }

    fn finish(&mut self) -> (Option<InputEvent>, Option<InputEvent>) {
        self.state = State::Ground;
        (Some(FUNCTION), None)
    }

    // A byte that cannot continue the sequence ends it; the byte itself is
    // passed through, or starts a new sequence if it is an escape.
    fn abort(&mut self, unit: u8) -> (Option<InputEvent>, Option<InputEvent>) {
        trace!(target: "escape", unit, "sequence interrupted");
        if unit == ESC {
            self.state = State::Escape;
            return (Some(FUNCTION), None);
        }
        self.state = State::Ground;
        (Some(FUNCTION), Some(InputEvent::Unit(unit)))
    }
}
