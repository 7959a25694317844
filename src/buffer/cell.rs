//! Cell: The atomic unit of the composited frame.
//!
//! A cell holds one glyph plus its colors. Dashboards draw almost exclusively
//! single-codepoint glyphs (block elements, Braille patterns, box drawing,
//! plain text), so the glyph is stored as a `char` and the cell stays `Copy`.

use crate::color::Rgb;
use bitflags::bitflags;

bitflags! {
    /// Cell-level flags for special states.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        /// This cell is covered by the wide character to its left
        const WIDE_CONTINUATION = 0b0000_0001;
    }
}

impl std::fmt::Debug for CellFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single styled character cell.
///
/// `bg` of `None` leaves the terminal's own background showing through.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Glyph to display.
    symbol: char,
    /// Foreground color.
    fg: Rgb,
    /// Background color, `None` for the terminal default.
    bg: Option<Rgb>,
    /// Cell flags.
    flags: CellFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell: a space on the terminal's default background.
    pub const EMPTY: Self = Self {
        symbol: ' ',
        fg: Rgb::GRAY,
        bg: None,
        flags: CellFlags::empty(),
    };

    /// Create a new cell holding `symbol` with default colors.
    #[inline]
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            fg: Rgb::GRAY,
            bg: None,
            flags: CellFlags::empty(),
        }
    }

    /// Create a wide-character continuation cell.
    ///
    /// This is placed after a character that takes 2 columns.
    #[inline]
    pub const fn wide_continuation() -> Self {
        Self {
            symbol: ' ',
            fg: Rgb::GRAY,
            bg: None,
            flags: CellFlags::WIDE_CONTINUATION,
        }
    }

    /// Get the glyph.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Check if this is a wide-character continuation.
    #[inline]
    pub const fn is_wide_continuation(&self) -> bool {
        self.flags.contains(CellFlags::WIDE_CONTINUATION)
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Option<Rgb> {
        self.bg
    }

    /// Set the glyph.
    #[inline]
    pub fn set_symbol(&mut self, symbol: char) -> &mut Self {
        self.symbol = symbol;
        self.flags.remove(CellFlags::WIDE_CONTINUATION);
        self
    }

    /// Set the foreground color.
    #[inline]
    pub const fn set_fg(&mut self, fg: Rgb) -> &mut Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[inline]
    pub const fn set_bg(&mut self, bg: Option<Rgb>) -> &mut Self {
        self.bg = bg;
        self
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Option<Rgb>) -> Self {
        self.bg = bg;
        self
    }

    /// Whether two cells can be emitted in one styled run.
    #[inline]
    pub fn same_style(&self, other: &Self) -> bool {
        self.fg == other.fg && self.bg == other.bg
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("symbol", &self.symbol)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("flags", &self.flags)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_new() {
        let cell = Cell::new('▌');
        assert_eq!(cell.symbol(), '▌');
        assert_eq!(cell.bg(), None);
    }

    #[test]
    fn test_cell_equality() {
        let a = Cell::new('A').with_fg(Rgb::new(255, 0, 0));
        let b = Cell::new('A').with_fg(Rgb::new(255, 0, 0));
        let c = Cell::new('A').with_fg(Rgb::new(0, 255, 0));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(!a.same_style(&c));
    }

    #[test]
    fn test_wide_continuation() {
        let mut cont = Cell::wide_continuation();
        assert!(cont.is_wide_continuation());
        cont.set_symbol('x');
        assert!(!cont.is_wide_continuation());
    }
}
