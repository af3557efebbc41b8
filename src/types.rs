use std::fmt;

/// A position within a text buffer.
///
/// Positions are zero-indexed and column values are counted in codepoints,
/// not bytes and not terminal cells. A column may equal the line length,
/// which is the insert point past the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Zero-based line number.
    pub line: usize,
    /// Zero-based column position in codepoints.
    pub col: usize,
}

impl Position {
    /// The origin position (0, 0).
    pub const ZERO: Position = Position { line: 0, col: 0 };

    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// A range of text defined by start and end positions.
///
/// Ranges are half-open intervals [start, end), meaning the start position
/// is included but the end position is excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// The start position (inclusive).
    pub start: Position,
    /// The end position (exclusive).
    pub end: Position,
}

impl Range {
    /// Builds a range from two endpoints given in any order.
    pub fn ordered(a: Position, b: Position) -> Self {
        if b < a {
            Range { start: b, end: a }
        } else {
            Range { start: a, end: b }
        }
    }
}

/// The current mode of the editor.
///
/// The same keys perform different actions depending on the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Command mode - for navigation and mode switches.
    #[default]
    Command,
    /// Insert mode - for typing text.
    Insert,
    /// Visual mode - for selecting text.
    Visual,
}

impl Mode {
    /// Upper-case name used on the status line.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Command => "COMMAND",
            Mode::Insert => "INSERT",
            Mode::Visual => "VISUAL",
        }
    }
}

/// What the engine did with one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The event matched a transition; state may have changed.
    Handled,
    /// A byte was buffered as part of an incomplete multi-byte character.
    Pending,
    /// No transition matched in the current mode.
    Ignored,
    /// ':' was pressed in command mode; the host should read an ex-command line.
    ExPrompt,
}
