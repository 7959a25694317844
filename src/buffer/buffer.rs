//! Buffer: The cell grid a frame is composited into.
//!
//! The buffer uses contiguous memory allocation for cache efficiency.
//! Cells are stored in row-major order. Every write is clipped, so painting
//! code can address cells outside the grid without checking first.

use super::cell::Cell;
use crate::color::Rgb;
use crate::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A grid of cells representing one frame.
///
/// Access is in row-major order: `index = y * width + x`. Zero-sized
/// buffers are valid; they simply ignore every write.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// All cells are initialized to [`Cell::EMPTY`].
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::EMPTY; size],
            width,
            height,
        }
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The rectangle covered by this buffer.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get a reference to a cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to a cell at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index_of(x, y).map(|i| &mut self.cells[i])
    }

    /// Set a cell at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Fill a rectangular region with a cell, clipped to the buffer.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let right = rect.right().min(self.width);
        let bottom = rect.bottom().min(self.height);
        for row in rect.y..bottom {
            for col in rect.x..right {
                if let Some(idx) = self.index_of(col, row) {
                    self.cells[idx] = cell;
                }
            }
        }
    }

    /// Write `text` starting at (x, y), never crossing column `limit`.
    ///
    /// Text is segmented into grapheme clusters; zero-width clusters are
    /// dropped, a cluster keeps its first codepoint, and a wide cluster that
    /// would straddle `limit` is not written. Returns the number of columns
    /// used.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, limit: u16, fg: Rgb, bg: Option<Rgb>) -> u16 {
        let limit = limit.min(self.width);
        if y >= self.height {
            return 0;
        }
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let width = u16::try_from(UnicodeWidthStr::width(grapheme)).unwrap_or(u16::MAX);
            if width == 0 {
                continue;
            }
            if col.saturating_add(width) > limit {
                break;
            }
            let Some(symbol) = grapheme.chars().next() else {
                continue;
            };
            self.set(col, y, Cell::new(symbol).with_fg(fg).with_bg(bg));
            for extra in 1..width {
                self.set(col + extra, y, Cell::wide_continuation().with_bg(bg));
            }
            col += width;
        }
        col - x
    }

    /// Clear the entire buffer (fill with empty cells).
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Resize the buffer and clear it.
    ///
    /// The allocation is reused when the cell count does not grow.
    pub fn resize(&mut self, new_width: u16, new_height: u16) {
        let new_size = (new_width as usize) * (new_height as usize);
        self.cells.clear();
        self.cells.resize(new_size, Cell::EMPTY);
        self.width = new_width;
        self.height = new_height;
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Glyphs of row `y` as a string, continuation cells skipped.
    ///
    /// Mostly useful for assertions and debugging.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = (y as usize) * (self.width as usize);
        self.cells[start..start + self.width as usize]
            .iter()
            .filter(|c| !c.is_wide_continuation())
            .map(Cell::symbol)
            .collect()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_new() {
        let buffer = Buffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.len(), 80 * 24);
    }

    #[test]
    fn test_buffer_zero_size_ignores_writes() {
        let mut buffer = Buffer::new(0, 24);
        assert!(buffer.is_empty());
        assert!(!buffer.set(0, 0, Cell::new('X')));
        assert_eq!(buffer.put_str(0, 0, "hello", 10, Rgb::WHITE, None), 0);
        buffer.fill(Rect::new(0, 0, 5, 5), Cell::new('X'));
        assert_eq!(buffer.rows().count(), 0);
    }

    #[test]
    fn test_buffer_get_set() {
        let mut buffer = Buffer::new(80, 24);
        assert!(buffer.set(5, 10, Cell::new('X')));
        assert_eq!(buffer.get(5, 10).unwrap().symbol(), 'X');
    }

    #[test]
    fn test_buffer_bounds() {
        let buffer = Buffer::new(80, 24);
        assert!(buffer.get(79, 23).is_some());
        assert!(buffer.get(80, 23).is_none());
        assert!(buffer.get(79, 24).is_none());
    }

    #[test]
    fn test_put_str_clips_at_limit() {
        let mut buffer = Buffer::new(10, 1);
        let used = buffer.put_str(2, 0, "hello world", 6, Rgb::WHITE, None);
        assert_eq!(used, 4);
        assert_eq!(buffer.row_text(0), "  hell    ");
    }

    #[test]
    fn test_put_str_wide_chars() {
        let mut buffer = Buffer::new(6, 1);
        let used = buffer.put_str(0, 0, "日本語", 5, Rgb::WHITE, None);
        // The third glyph would straddle the limit.
        assert_eq!(used, 4);
        assert!(buffer.get(1, 0).unwrap().is_wide_continuation());
        assert_eq!(buffer.row_text(0), "日本  ");
    }

    #[test]
    fn test_buffer_fill_clipped() {
        let mut buffer = Buffer::new(4, 2);
        buffer.fill(Rect::new(2, 1, 10, 10), Cell::new('X'));
        assert_eq!(buffer.row_text(0), "    ");
        assert_eq!(buffer.row_text(1), "  XX");
    }

    #[test]
    fn test_buffer_resize_clears() {
        let mut buffer = Buffer::new(80, 24);
        buffer.set(5, 5, Cell::new('X'));

        buffer.resize(100, 30);
        assert_eq!(buffer.width(), 100);
        assert_eq!(buffer.height(), 30);
        assert_eq!(buffer.get(5, 5), Some(&Cell::EMPTY));
    }
}
