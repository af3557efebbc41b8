use crate::buffer::LineBuffer;
use crate::error::Result;
use crate::types::{Position, Range};

/// A character-wise visual selection.
///
/// Only the anchor is stored; the moving end is always the live cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    anchor: Position,
}

impl Selection {
    pub fn new(anchor: Position) -> Self {
        Self { anchor }
    }

    /// The selected span, ordered regardless of which end moved.
    pub fn range(&self, cursor: Position) -> Range {
        Range::ordered(self.anchor, cursor)
    }

    /// Deletes the selected span and returns where the cursor lands.
    pub fn delete(self, buffer: &mut LineBuffer, cursor: Position) -> Result<Position> {
        let range = self.range(cursor);
        buffer.delete_range(range)?;
        Ok(range.start)
    }
}
