//! Diffing: turn a frame (optionally against the previous one) into styled runs.
//!
//! A run is a horizontal stretch of cells on one row that share foreground and
//! background colors. Runs are what the compositor hands to the terminal: one
//! cursor move and one styled write each.
//!
//! With no previous frame, or one of a different size, every cell is part of
//! some run. Otherwise only cells that differ from the previous frame are.

use super::Buffer;
use crate::color::Rgb;

/// A horizontal stretch of equally-styled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Column of the first cell.
    pub x: u16,
    /// Row.
    pub y: u16,
    /// Glyphs, continuation cells omitted.
    pub text: String,
    /// Foreground color.
    pub fg: Rgb,
    /// Background color, `None` for the terminal default.
    pub bg: Option<Rgb>,
}

/// Result of a diff operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Number of cells that were emitted.
    pub cells_changed: usize,
    /// Number of runs produced.
    pub runs: usize,
}

/// Collect the runs needed to bring the screen from `previous` to `next`.
///
/// `runs` is cleared first so callers can reuse its allocation.
pub fn collect_runs(previous: Option<&Buffer>, next: &Buffer, runs: &mut Vec<Run>) -> DiffResult {
    runs.clear();
    let previous = previous.filter(|p| p.width() == next.width() && p.height() == next.height());
    let mut result = DiffResult::default();
    let width = next.width();

    for (y, row) in (0..next.height()).zip(next.rows()) {
        let changed = |x: u16| match previous {
            None => true,
            Some(prev) => prev.get(x, y) != Some(&row[x as usize]),
        };

        let mut x = 0;
        while x < width {
            let cell = &row[x as usize];
            if cell.is_wide_continuation() || !changed(x) {
                x += 1;
                continue;
            }

            let mut run = Run {
                x,
                y,
                text: String::new(),
                fg: cell.fg(),
                bg: cell.bg(),
            };
            while x < width {
                let current = &row[x as usize];
                if current.is_wide_continuation() {
                    x += 1;
                    continue;
                }
                if !changed(x) || !current.same_style(cell) {
                    break;
                }
                run.text.push(current.symbol());
                result.cells_changed += 1;
                x += 1;
            }
            runs.push(run);
            result.runs += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Cell;

    #[test]
    fn test_diff_identical_buffers() {
        let a = Buffer::new(10, 5);
        let b = Buffer::new(10, 5);
        let mut runs = Vec::new();

        let result = collect_runs(Some(&a), &b, &mut runs);

        assert_eq!(result.cells_changed, 0);
        assert!(runs.is_empty());
    }

    #[test]
    fn test_full_frame_without_previous() {
        let mut b = Buffer::new(3, 2);
        b.set(1, 0, Cell::new('X').with_fg(Rgb::new(255, 0, 0)));
        let mut runs = Vec::new();

        let result = collect_runs(None, &b, &mut runs);

        assert_eq!(result.cells_changed, 6);
        // Row 0 splits around the red cell, row 1 is a single run.
        assert_eq!(runs.len(), 4);
        assert_eq!(runs[1].text, "X");
        assert_eq!(runs[1].x, 1);
        assert_eq!(runs[3].text, "   ");
    }

    #[test]
    fn test_diff_adjacent_cells_share_run() {
        let a = Buffer::new(10, 5);
        let mut b = Buffer::new(10, 5);

        b.set(0, 0, Cell::new('A'));
        b.set(1, 0, Cell::new('B'));
        b.set(2, 0, Cell::new('C'));

        let mut runs = Vec::new();
        let result = collect_runs(Some(&a), &b, &mut runs);

        assert_eq!(result.cells_changed, 3);
        assert_eq!(runs, vec![Run { x: 0, y: 0, text: "ABC".into(), fg: Rgb::GRAY, bg: None }]);
    }

    #[test]
    fn test_diff_style_change_splits_run() {
        let a = Buffer::new(10, 1);
        let mut b = Buffer::new(10, 1);
        b.set(0, 0, Cell::new('A'));
        b.set(1, 0, Cell::new('B').with_fg(Rgb::WHITE));

        let mut runs = Vec::new();
        collect_runs(Some(&a), &b, &mut runs);

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].fg, Rgb::WHITE);
    }

    #[test]
    fn test_diff_size_change_is_full() {
        let a = Buffer::new(4, 4);
        let b = Buffer::new(5, 4);
        let mut runs = Vec::new();
        let result = collect_runs(Some(&a), &b, &mut runs);
        assert_eq!(result.cells_changed, 20);
    }

    #[test]
    fn test_wide_char_run_skips_continuation() {
        let a = Buffer::new(4, 1);
        let mut b = Buffer::new(4, 1);
        b.put_str(0, 0, "日x", 4, Rgb::GRAY, None);

        let mut runs = Vec::new();
        let result = collect_runs(Some(&a), &b, &mut runs);

        assert_eq!(result.cells_changed, 2);
        assert_eq!(runs[0].text, "日x");
    }
}
