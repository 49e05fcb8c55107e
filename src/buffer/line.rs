/// One editable text record in the document.
///
/// A `Line` never contains a newline; line boundaries belong to the
/// [`Buffer`](super::Buffer). Columns are character indices, so [`Line::len`]
/// is the character count rather than the byte count and the two only differ
/// for multibyte input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    text: String,
}

impl Line {
    /// Create an empty line.
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a line from existing text. The text must not contain newlines.
    pub fn from_text(text: &str) -> Self {
        debug_assert!(!text.contains('\n'), "Line text must be newline-free");
        Self {
            text: text.to_string(),
        }
    }

    /// The line's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the line is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert a character at a column.
    ///
    /// Callers must clamp `col` to `[0, len]` first (the cursor layer does
    /// this); a larger value is treated as end-of-line.
    pub fn insert_at(&mut self, col: usize, ch: char) {
        debug_assert!(col <= self.len(), "insert column past end of line");
        let idx = self.byte_offset(col);
        self.text.insert(idx, ch);
    }

    /// Delete the character at a column.
    ///
    /// Returns `false` (and leaves the line untouched) when `col` is at or
    /// past the end of the line.
    pub fn delete_at(&mut self, col: usize) -> bool {
        if col >= self.len() {
            return false;
        }
        let idx = self.byte_offset(col);
        self.text.remove(idx);
        true
    }

    /// Split the line at a column, truncating it to the prefix and returning
    /// the suffix as a new line.
    pub fn split_at(&mut self, col: usize) -> Self {
        let idx = self.byte_offset(col);
        Self {
            text: self.text.split_off(idx),
        }
    }

    /// Append another line's text (used when merging two lines into one).
    pub fn append(&mut self, other: &Self) {
        self.text.push_str(&other.text);
    }

    /// Byte offset of a character column, saturating at the end of the line.
    fn byte_offset(&self, col: usize) -> usize {
        self.text
            .char_indices()
            .nth(col)
            .map_or(self.text.len(), |(idx, _)| idx)
    }
}
