use crate::buffer::LineBuffer;
use crate::types::Position;
use crate::width;

/// The editing cursor, in codepoint columns.
///
/// Every motion clamps against the buffer it is given, so the cursor always
/// names an existing line and a column in `[0, line_len]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Position,
}

impl Cursor {
    /// A cursor at `pos`, pulled back inside `buffer` if needed.
    pub fn at(buffer: &LineBuffer, pos: Position) -> Self {
        let line = pos.line.min(buffer.line_count() - 1);
        let col = pos.col.min(buffer.line_len(line));
        Self {
            pos: Position { line, col },
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Moves one column left. Returns whether the cursor moved.
    pub fn move_left(&mut self) -> bool {
        if self.pos.col == 0 {
            return false;
        }
        self.pos.col -= 1;
        true
    }

    /// Moves one column right, up to the past-end insert point.
    pub fn move_right(&mut self, buffer: &LineBuffer) -> bool {
        if self.pos.col >= buffer.line_len(self.pos.line) {
            return false;
        }
        self.pos.col += 1;
        true
    }

    pub fn move_up(&mut self, buffer: &LineBuffer) -> bool {
        if self.pos.line == 0 {
            return false;
        }
        self.jump_to_line(buffer, self.pos.line - 1);
        true
    }

    pub fn move_down(&mut self, buffer: &LineBuffer) -> bool {
        if self.pos.line + 1 >= buffer.line_count() {
            return false;
        }
        self.jump_to_line(buffer, self.pos.line + 1);
        true
    }

    /// Column on screen for painting, counting wide characters as two cells.
    pub fn display_column(&self, buffer: &LineBuffer) -> usize {
        buffer
            .line(self.pos.line)
            .map_or(0, |line| width::to_display_column(line, self.pos.col))
    }

    // Sticky-to-shorter-line: the column is clamped, never remembered.
    fn jump_to_line(&mut self, buffer: &LineBuffer, line: usize) {
        self.pos = Position {
            line,
            col: self.pos.col.min(buffer.line_len(line)),
        };
    }
}
