//! Terminal cell widths.
//!
//! Every codepoint above 127 counts as two cells. This is an approximation of
//! East Asian width: accented Latin letters are over-counted and zero-width
//! marks are not special-cased.

/// Cells taken by `ch`: 1 for ASCII, 2 for everything else.
pub fn char_width(ch: char) -> usize {
    if u32::from(ch) > 127 { 2 } else { 1 }
}

/// Screen column of codepoint column `col` in `line`.
pub fn to_display_column(line: &str, col: usize) -> usize {
    line.chars().take(col).map(char_width).sum()
}

/// Codepoint column shown at screen column `target` in `line`.
///
/// A target inside a wide character rounds up to the next character. Past
/// the end of the line the result extrapolates one column per cell, counted
/// from the last character index plus one.
pub fn from_display_column(line: &str, target: usize) -> usize {
    let mut cells = 0;
    let mut last = 0;
    for (i, ch) in line.chars().enumerate() {
        if cells >= target {
            return i;
        }
        cells += char_width(ch);
        last = i;
    }
    // cells <= target + 1 here, so this cannot underflow
    last + 1 + target - cells
}

/// Total cells taken by `line`.
pub fn line_width(line: &str) -> usize {
    line.chars().map(char_width).sum()
}
