//! The line buffer: an ordered, never-empty sequence of [`Line`]s.
//!
//! All structural mutation of the document (splicing characters, splitting
//! lines on Enter, merging lines on Backspace) goes through [`Buffer`].
//! Rows and columns are validated here; the cursor layer clamps positions
//! before calling in, so addressing errors indicate a programming mistake
//! rather than user input.

mod line;

pub use line::Line;

use thiserror::Error;

/// Addressing violation: a row index outside the buffer.
///
/// The session clamps the cursor before every edit, so this error is never
/// surfaced to the user; it exists so out-of-range access fails loudly in
/// tests instead of panicking or silently corrupting the document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("line index {0} out of range")]
    RowOutOfRange(usize),
}

/// The ordered collection of lines forming the whole document.
///
/// Invariant: a buffer always holds at least one line. An empty document is
/// a single zero-length line, never zero lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Line>,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Create a buffer holding one empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
        }
    }

    /// Build a buffer from newline-delimited text, one line per record with
    /// the trailing newline stripped. Empty input still yields one line.
    ///
    /// Only `\n` delimits lines; a `\r` before it stays in the line text, so
    /// a CRLF document survives a load/save cycle byte for byte.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<Line> = text.split('\n').map(Line::from_text).collect();
        if text.ends_with('\n') {
            lines.pop();
        }
        if lines.is_empty() {
            return Self::new();
        }
        Self { lines }
    }

    /// Serialize the buffer, each line followed by exactly one newline.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line.text());
            out.push('\n');
        }
        out
    }

    /// Number of lines; always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The line at `row`, if in range.
    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// Character length of the line at `row`; 0 when out of range.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, Line::len)
    }

    /// Insert a character at `(row, col)`.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> Result<(), BufferError> {
        self.line_mut(row)?.insert_at(col, ch);
        Ok(())
    }

    /// Delete the character at `(row, col)`.
    ///
    /// Returns `Ok(false)` when `col` is at end-of-line (nothing to delete).
    pub fn delete_char(&mut self, row: usize, col: usize) -> Result<bool, BufferError> {
        Ok(self.line_mut(row)?.delete_at(col))
    }

    /// Split the line at `row` into two lines at `col`; the suffix becomes a
    /// new line at `row + 1`. This is the Enter operation.
    pub fn split_line(&mut self, row: usize, col: usize) -> Result<(), BufferError> {
        let suffix = self.line_mut(row)?.split_at(col);
        self.lines.insert(row + 1, suffix);
        Ok(())
    }

    /// Append line `row` onto line `row - 1` and remove it. This is the
    /// Backspace-at-column-0 operation.
    ///
    /// Returns the previous line's old length — the column where the joined
    /// text begins, i.e. where the cursor lands — or `Ok(None)` when
    /// `row == 0` and there is nothing to merge into.
    pub fn merge_with_previous(&mut self, row: usize) -> Result<Option<usize>, BufferError> {
        if row >= self.lines.len() {
            return Err(BufferError::RowOutOfRange(row));
        }
        if row == 0 {
            return Ok(None);
        }
        let removed = self.lines.remove(row);
        let prev = &mut self.lines[row - 1];
        let join_col = prev.len();
        prev.append(&removed);
        Ok(Some(join_col))
    }

    fn line_mut(&mut self, row: usize) -> Result<&mut Line, BufferError> {
        self.lines
            .get_mut(row)
            .ok_or(BufferError::RowOutOfRange(row))
    }
}
