//! Braille quantizer: eight dots per cell for double-density charts.
//!
//! A Braille cell is a 2-column by 4-row grid of dots. The Unicode Braille
//! Patterns block starts at U+2800 and encodes each dot as one bit:
//!
//! ```text
//! ┌─────┬─────┐
//! │ 0x01│ 0x08│  row 0
//! │ 0x02│ 0x10│  row 1
//! │ 0x04│ 0x20│  row 2
//! │ 0x40│ 0x80│  row 3
//! └─────┴─────┘
//!  col 0 col 1
//! ```

use bitflags::bitflags;

/// First code point of the Braille Patterns block.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Dot rows per cell.
pub const DOT_ROWS: usize = 4;

/// Dot columns per cell.
pub const DOT_COLUMNS: usize = 2;

bitflags! {
    /// Raised dots of one Braille cell, using the standard bit assignment.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BrailleDots: u8 {
        /// Column 0, row 0
        const DOT_1 = 0x01;
        /// Column 0, row 1
        const DOT_2 = 0x02;
        /// Column 0, row 2
        const DOT_3 = 0x04;
        /// Column 1, row 0
        const DOT_4 = 0x08;
        /// Column 1, row 1
        const DOT_5 = 0x10;
        /// Column 1, row 2
        const DOT_6 = 0x20;
        /// Column 0, row 3
        const DOT_7 = 0x40;
        /// Column 1, row 3
        const DOT_8 = 0x80;
    }
}

impl std::fmt::Debug for BrailleDots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BrailleDots({:#04x})", self.bits())
    }
}

const LEFT: [BrailleDots; DOT_ROWS] = [
    BrailleDots::DOT_1,
    BrailleDots::DOT_2,
    BrailleDots::DOT_3,
    BrailleDots::DOT_7,
];

const RIGHT: [BrailleDots; DOT_ROWS] = [
    BrailleDots::DOT_4,
    BrailleDots::DOT_5,
    BrailleDots::DOT_6,
    BrailleDots::DOT_8,
];

impl BrailleDots {
    /// The dot at `column` (0 or 1) and `row` (0 = top, 3 = bottom).
    ///
    /// Out-of-range positions yield no dot.
    pub const fn at(column: usize, row: usize) -> Self {
        if row >= DOT_ROWS {
            return Self::empty();
        }
        match column {
            0 => LEFT[row],
            1 => RIGHT[row],
            _ => Self::empty(),
        }
    }

    /// The bottom `count` dots of `column`, clamped to a full column.
    pub fn column_fill(column: usize, count: usize) -> Self {
        (DOT_ROWS.saturating_sub(count)..DOT_ROWS).fold(Self::empty(), |dots, row| dots | Self::at(column, row))
    }

    /// Rows, top to bottom, with a raised dot in `column`.
    pub fn column_rows(self, column: usize) -> impl Iterator<Item = usize> {
        (0..DOT_ROWS).filter(move |&row| {
            let dot = Self::at(column, row);
            !dot.is_empty() && self.contains(dot)
        })
    }

    /// The Braille character for these dots.
    pub fn to_char(self) -> char {
        char::from_u32(BRAILLE_BASE + u32::from(self.bits())).unwrap_or(' ')
    }

    /// Decode a Braille character back into its dots.
    pub fn from_char(c: char) -> Option<Self> {
        let offset = u32::from(c).checked_sub(BRAILLE_BASE)?;
        u8::try_from(offset).ok().map(Self::from_bits_retain)
    }
}

/// Pack one dot per sub-column into a cell.
///
/// `None` leaves that sub-column blank, which is how a partial cell (odd
/// sample count) is expressed.
pub fn pack(left: Option<usize>, right: Option<usize>) -> BrailleDots {
    let mut dots = BrailleDots::empty();
    if let Some(row) = left {
        dots |= BrailleDots::at(0, row);
    }
    if let Some(row) = right {
        dots |= BrailleDots::at(1, row);
    }
    dots
}
