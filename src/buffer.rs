use crate::error::{EditorError, Result};
use crate::types::{Position, Range};

/// Ordered lines of text. Never empty: a fresh or fully cleared buffer holds
/// one empty line.
///
/// All columns are codepoint indices; byte offsets stay private to this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a buffer from already-split lines; an empty list becomes one empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    /// Length of a line in codepoints; 0 for lines past the end.
    pub fn line_len(&self, line: usize) -> usize {
        self.line(line).map_or(0, |l| l.chars().count())
    }

    /// Whether `pos` names an existing line and a column within `[0, len]`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.line < self.lines.len() && pos.col <= self.line_len(pos.line)
    }

    /// Inserts `ch` before column `pos.col`.
    pub fn insert_char(&mut self, pos: Position, ch: char) -> Result<()> {
        let line = self.line_mut(pos)?;
        let at = byte_offset(line, pos.col);
        line.insert(at, ch);
        Ok(())
    }

    /// Truncates the line at `pos.col` and moves the rest onto a new line below.
    pub fn split_line(&mut self, pos: Position) -> Result<()> {
        let line = self.line_mut(pos)?;
        let at = byte_offset(line, pos.col);
        let tail = line.split_off(at);
        self.lines.insert(pos.line + 1, tail);
        Ok(())
    }

    /// Removes the character left of `pos`. Returns false at column 0, where
    /// nothing is removed and lines are not joined.
    pub fn delete_char_before(&mut self, pos: Position) -> Result<bool> {
        let line = self.line_mut(pos)?;
        if pos.col == 0 {
            return Ok(false);
        }
        let at = byte_offset(line, pos.col - 1);
        line.remove(at);
        Ok(true)
    }

    /// Deletes the half-open `range`, joining its first and last lines.
    pub fn delete_range(&mut self, range: Range) -> Result<()> {
        let Range { start, end } = Range::ordered(range.start, range.end);
        if !self.contains(end) {
            return Err(EditorError::OutOfRange(end));
        }
        let start_line = self.line_mut(start)?;
        let head_end = byte_offset(start_line, start.col);

        if start.line == end.line {
            let tail_start = byte_offset(start_line, end.col);
            start_line.replace_range(head_end..tail_start, "");
            return Ok(());
        }

        let tail = {
            let last = &self.lines[end.line];
            last[byte_offset(last, end.col)..].to_owned()
        };
        let first = &mut self.lines[start.line];
        first.truncate(head_end);
        first.push_str(&tail);
        self.lines.drain(start.line + 1..=end.line);
        Ok(())
    }

    fn line_mut(&mut self, pos: Position) -> Result<&mut String> {
        if !self.contains(pos) {
            return Err(EditorError::OutOfRange(pos));
        }
        Ok(&mut self.lines[pos.line])
    }
}

/// Byte offset of codepoint column `col`, or the line length past the end.
fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}
