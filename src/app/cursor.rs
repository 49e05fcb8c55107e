use crate::buffer::Buffer;

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The current edit position, addressed by row and column.
///
/// The cursor holds a non-owning index into the buffer, never a reference
/// to a line, so structural mutation cannot leave it dangling — only out of
/// range, which [`Cursor::clamp`] repairs.
///
/// Movement deliberately does not wrap: Left at column 0 stays put rather
/// than jumping to the previous line, Right at end-of-line likewise, and
/// vertical movement clamps the column to the destination line with no
/// remembered "preferred column".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index; always `< buffer.line_count()`.
    pub row: usize,
    /// Zero-based character column; may equal the line length (the
    /// insertion point after the last character) but never exceed it.
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at the origin.
    pub const fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Create a cursor at a specific position.
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one unit in `direction`, honoring the non-wrapping rules, then
    /// re-clamp against the buffer.
    pub fn step(&mut self, direction: Direction, buffer: &Buffer) {
        match direction {
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => {
                if self.row + 1 < buffer.line_count() {
                    self.row += 1;
                }
            }
            Direction::Left => self.col = self.col.saturating_sub(1),
            Direction::Right => {
                if self.col < buffer.line_len(self.row) {
                    self.col += 1;
                }
            }
        }
        self.clamp(buffer);
    }

    /// Clamp the position to valid bounds for `buffer`.
    ///
    /// Required after any buffer mutation that shortens, removes, or splits
    /// the addressed line.
    pub fn clamp(&mut self, buffer: &Buffer) {
        self.row = self.row.min(buffer.line_count().saturating_sub(1));
        self.col = self.col.min(buffer.line_len(self.row));
    }
}
