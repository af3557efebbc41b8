use tracing::{debug, error, trace};

use crate::buffer::LineBuffer;
use crate::cursor::Cursor;
use crate::decoder::CodepointDecoder;
use crate::error::EditorError;
use crate::key::{InputEvent, KeyCode, KeyEvent};
use crate::selection::Selection;
use crate::types::{Mode, Outcome, Position, Range};

/// The modal editing core: one buffer, one cursor, one mode.
///
/// Feed it one input event at a time with [`Engine::handle_event`]; all
/// edits happen synchronously before the call returns.
#[derive(Debug, Clone)]
pub struct Engine {
    mode: Mode,
    buffer: LineBuffer,
    cursor: Cursor,
    // Some exactly while in visual mode.
    selection: Option<Selection>,
    decoder: CodepointDecoder,
}

/// Read-only view of the engine state a painter needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub mode: Mode,
    pub cursor: Position,
    /// Screen column of the cursor, counting wide characters as two cells.
    pub display_col: usize,
    pub selection: Option<Range>,
}

#[derive(Default)]
pub struct EngineBuilder {
    buffer: LineBuffer,
    cursor: Position,
}

impl EngineBuilder {
    pub fn buffer(mut self, buffer: LineBuffer) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.buffer(LineBuffer::from_lines(lines))
    }

    /// Starting cursor; clamped into the buffer on build.
    pub fn cursor(mut self, cursor: Position) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            mode: Mode::Command,
            cursor: Cursor::at(&self.buffer, self.cursor),
            buffer: self.buffer,
            selection: None,
            decoder: CodepointDecoder::new(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Position {
        self.cursor.position()
    }

    /// The active visual selection, ordered start to end.
    pub fn selection_range(&self) -> Option<Range> {
        self.selection.map(|sel| sel.range(self.cursor()))
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            mode: self.mode,
            cursor: self.cursor(),
            display_col: self.cursor.display_column(&self.buffer),
            selection: self.selection_range(),
        }
    }

    pub fn handle_event(&mut self, input: InputEvent) -> Outcome {
        trace!(target: "engine", mode = ?self.mode, ?input, "event");
        match self.mode {
            Mode::Command => match input.key() {
                Some(ke) => self.handle_command(ke),
                None => Outcome::Ignored,
            },
            Mode::Insert => self.handle_insert(input),
            Mode::Visual => match input.key() {
                Some(ke) => self.handle_visual(ke),
                None => Outcome::Ignored,
            },
        }
    }

    fn handle_command(&mut self, ke: KeyEvent) -> Outcome {
        let Some(c) = ke.char() else {
            return Outcome::Ignored;
        };
        match c {
            'i' => self.set_mode(Mode::Insert),
            'a' => {
                self.cursor.move_right(&self.buffer);
                self.set_mode(Mode::Insert);
            }
            'v' => {
                self.selection = Some(Selection::new(self.cursor()));
                self.set_mode(Mode::Visual);
            }
            'h' | 'j' | 'k' | 'l' => self.motion(c),
            ':' => return Outcome::ExPrompt,
            _ => return Outcome::Ignored,
        }
        Outcome::Handled
    }

    fn handle_insert(&mut self, input: InputEvent) -> Outcome {
        let decoded = match input {
            InputEvent::Unit(unit) => self.decoder.feed(unit),
            InputEvent::Key(ke) => {
                self.decoder.reset();
                ke.char()
            }
        };

        match input.key().map(|ke| ke.code) {
            Some(KeyCode::Esc) => {
                self.cursor.move_left();
                self.set_mode(Mode::Command);
                return Outcome::Handled;
            }
            Some(KeyCode::Enter) => {
                let pos = self.cursor();
                if let Err(err) = self.buffer.split_line(pos) {
                    broken_invariant(err);
                    return Outcome::Ignored;
                }
                self.cursor = Cursor::at(&self.buffer, Position::new(pos.line + 1, 0));
                return Outcome::Handled;
            }
            Some(KeyCode::Backspace) => {
                match self.buffer.delete_char_before(self.cursor()) {
                    Ok(true) => {
                        self.cursor.move_left();
                    }
                    Ok(false) => {}
                    Err(err) => broken_invariant(err),
                }
                return Outcome::Handled;
            }
            _ => {}
        }

        let Some(ch) = decoded else {
            return if self.decoder.has_pending() {
                Outcome::Pending
            } else {
                Outcome::Ignored
            };
        };
        let pos = self.cursor();
        if let Err(err) = self.buffer.insert_char(pos, ch) {
            broken_invariant(err);
            return Outcome::Ignored;
        }
        self.cursor = Cursor::at(&self.buffer, Position::new(pos.line, pos.col + 1));
        Outcome::Handled
    }

    fn handle_visual(&mut self, ke: KeyEvent) -> Outcome {
        if ke.code == KeyCode::Esc {
            self.leave_visual();
            return Outcome::Handled;
        }
        let Some(c) = ke.char() else {
            return Outcome::Ignored;
        };
        match c {
            'd' => {
                let cursor = self.cursor();
                if let Some(sel) = self.selection {
                    match sel.delete(&mut self.buffer, cursor) {
                        Ok(start) => self.cursor = Cursor::at(&self.buffer, start),
                        Err(err) => broken_invariant(err),
                    }
                }
                self.leave_visual();
            }
            // Yank only leaves the mode; there is no register to copy into.
            'y' => self.leave_visual(),
            'h' | 'j' | 'k' | 'l' => self.motion(c),
            _ => return Outcome::Ignored,
        }
        Outcome::Handled
    }

    fn motion(&mut self, c: char) {
        match c {
            'h' => self.cursor.move_left(),
            'l' => self.cursor.move_right(&self.buffer),
            'j' => self.cursor.move_down(&self.buffer),
            'k' => self.cursor.move_up(&self.buffer),
            _ => false,
        };
    }

    fn leave_visual(&mut self) {
        self.selection = None;
        self.set_mode(Mode::Command);
    }

    fn set_mode(&mut self, mode: Mode) {
        debug!(target: "engine", from = ?self.mode, to = ?mode, cursor = %self.cursor(), "mode change");
        self.mode = mode;
    }
}

fn broken_invariant(err: EditorError) {
    error!(target: "engine", %err, "buffer edit rejected");
    if cfg!(debug_assertions) {
        panic!("buffer edit rejected: {err}");
    }
}
