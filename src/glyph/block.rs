//! Block quantizer: fractional values as runs of eighth-block glyphs.
//!
//! A bar of `n` cells has `8 * n` eighths of resolution. A fraction `f` fills
//! `round(f * n * 8)` of them starting at the bar's origin; every cell is
//! either full, empty, or (at the boundary only) partially filled.

/// Sub-cell steps per cell.
pub const EIGHTHS_PER_CELL: usize = 8;

/// Left-anchored partial blocks, indexed by filled eighths.
pub const HORIZONTAL_EIGHTHS: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// Bottom-anchored partial blocks, indexed by filled eighths.
pub const VERTICAL_EIGHTHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Direction a bar grows in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Grows rightward from the left edge.
    LeftToRight,
    /// Grows upward from the bottom edge.
    BottomToTop,
}

impl Fill {
    /// Glyph table for this fill direction.
    pub const fn glyphs(self) -> &'static [char; 9] {
        match self {
            Self::LeftToRight => &HORIZONTAL_EIGHTHS,
            Self::BottomToTop => &VERTICAL_EIGHTHS,
        }
    }

    /// Glyph for a cell holding `level` eighths (clamped to 0..=8).
    pub const fn glyph(self, level: usize) -> char {
        let level = if level > EIGHTHS_PER_CELL { EIGHTHS_PER_CELL } else { level };
        self.glyphs()[level]
    }
}

/// Clamp a fraction into `0.0..=1.0`, mapping NaN to zero.
#[inline]
pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Number of eighths a bar of `cells` cells fills at `fraction`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn filled_eighths(fraction: f64, cells: usize) -> usize {
    let total = cells * EIGHTHS_PER_CELL;
    let filled = (clamp_fraction(fraction) * total as f64).round() as usize;
    filled.min(total)
}

/// Eighths held by cell `index` (counted from the origin) of a bar with
/// `filled` eighths in total.
#[inline]
pub const fn level_at(filled: usize, index: usize) -> usize {
    let before = index * EIGHTHS_PER_CELL;
    if filled <= before {
        0
    } else if filled - before >= EIGHTHS_PER_CELL {
        EIGHTHS_PER_CELL
    } else {
        filled - before
    }
}

/// Glyphs of a bar, origin first.
pub fn bar(fraction: f64, cells: usize, fill: Fill) -> impl ExactSizeIterator<Item = char> {
    let filled = filled_eighths(fraction, cells);
    (0..cells).map(move |i| fill.glyph(level_at(filled, i)))
}

/// Eighths represented by a glyph of either table.
pub fn eighths_of(glyph: char) -> Option<usize> {
    HORIZONTAL_EIGHTHS
        .iter()
        .position(|&g| g == glyph)
        .or_else(|| VERTICAL_EIGHTHS.iter().position(|&g| g == glyph))
}
