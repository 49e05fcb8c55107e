//! Viewport management for scrolling.
//!
//! The [`Viewport`] tracks which buffer rows are on screen and follows the
//! cursor with the minimal scroll needed to keep it visible.

use std::ops::Range;

/// The subset of rows currently visible, described by a scroll offset.
///
/// # Example
///
/// ```
/// use scrawl::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(23);
/// vp.scroll_to_cursor(40);
/// assert!(vp.visible_range(100).contains(&40));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset_y: usize,
    visible_rows: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Viewport {
    /// Create a viewport showing `visible_rows` rows from the top.
    pub const fn new(visible_rows: usize) -> Self {
        Self {
            offset_y: 0,
            visible_rows,
        }
    }

    /// Index of the first line shown on screen.
    pub const fn offset_y(&self) -> usize {
        self.offset_y
    }

    /// Number of document rows the viewport can show.
    pub const fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// The range of buffer rows to draw, clamped to the document length.
    pub fn visible_range(&self, line_count: usize) -> Range<usize> {
        let start = self.offset_y.min(line_count);
        let end = (self.offset_y + self.visible_rows).min(line_count);
        start..end
    }

    /// Adjust the offset by the minimal amount that keeps `row` within the
    /// visible window.
    pub const fn scroll_to_cursor(&mut self, row: usize) {
        if row < self.offset_y {
            self.offset_y = row;
        } else if self.visible_rows > 0 && row >= self.offset_y + self.visible_rows {
            self.offset_y = row + 1 - self.visible_rows;
        }
    }

    /// Re-derive the height from the terminal and keep `cursor_row` visible.
    pub const fn resize(&mut self, visible_rows: usize, cursor_row: usize) {
        self.visible_rows = visible_rows;
        self.scroll_to_cursor(cursor_row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_viewport_starts_at_top() {
        let vp = Viewport::new(24);
        assert_eq!(vp.offset_y(), 0);
    }

    #[test]
    fn test_visible_range_clamps_to_document() {
        let vp = Viewport::new(24);
        assert_eq!(vp.visible_range(10), 0..10);
        assert_eq!(vp.visible_range(100), 0..24);
    }

    #[test]
    fn test_cursor_below_window_scrolls_down_minimally() {
        let mut vp = Viewport::new(10);
        vp.scroll_to_cursor(15);
        // Row 15 becomes the last visible row.
        assert_eq!(vp.offset_y(), 6);
        assert!(vp.visible_range(100).contains(&15));
    }

    #[test]
    fn test_cursor_above_window_scrolls_up_to_row() {
        let mut vp = Viewport::new(10);
        vp.scroll_to_cursor(50);
        vp.scroll_to_cursor(3);
        assert_eq!(vp.offset_y(), 3);
    }

    #[test]
    fn test_cursor_inside_window_does_not_scroll() {
        let mut vp = Viewport::new(10);
        vp.scroll_to_cursor(15);
        let offset = vp.offset_y();
        vp.scroll_to_cursor(10);
        assert_eq!(vp.offset_y(), offset);
    }

    #[test]
    fn test_resize_keeps_cursor_visible() {
        let mut vp = Viewport::new(20);
        vp.scroll_to_cursor(30);
        vp.resize(5, 30);
        let range = vp.visible_range(100);
        assert!(range.contains(&30));
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn test_zero_height_viewport_does_not_panic() {
        let mut vp = Viewport::new(0);
        vp.scroll_to_cursor(10);
        assert!(vp.visible_range(100).is_empty());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn cursor_row_always_visible_after_follow(
                visible_rows in 1..100usize,
                rows in proptest::collection::vec(0..10_000usize, 1..32),
            ) {
                let mut vp = Viewport::new(visible_rows);
                for row in rows {
                    vp.scroll_to_cursor(row);
                    prop_assert!(vp.offset_y() <= row);
                    prop_assert!(row < vp.offset_y() + vp.visible_rows());
                }
            }

            #[test]
            fn visible_range_within_bounds(
                visible_rows in 0..100usize,
                line_count in 0..10_000usize,
                row in 0..10_000usize,
            ) {
                let mut vp = Viewport::new(visible_rows);
                vp.scroll_to_cursor(row);
                let range = vp.visible_range(line_count);
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end <= line_count);
            }
        }
    }
}
