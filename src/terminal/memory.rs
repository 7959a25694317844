//! `MemoryTerminal`: an in-memory screen that records what was emitted.

use super::Terminal;
use crate::buffer::{Buffer, Cell};
use crate::color::Rgb;
use crate::error::Result;
use std::io;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A [`Terminal`] backed by a [`Buffer`].
///
/// Writes land on the screen immediately; counters track how much traffic
/// each frame produced. Writes can be made to fail to exercise error paths.
#[derive(Debug, Clone)]
pub struct MemoryTerminal {
    screen: Buffer,
    cursor: (u16, u16),
    writes: usize,
    cells_written: usize,
    flushes: usize,
    fail_writes: bool,
}

impl MemoryTerminal {
    /// A blank screen of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            screen: Buffer::new(width, height),
            cursor: (0, 0),
            writes: 0,
            cells_written: 0,
            flushes: 0,
            fail_writes: false,
        }
    }

    /// Resize the screen, blanking it like a real terminal reflow would.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen.resize(width, height);
    }

    /// What is currently on screen.
    pub const fn screen(&self) -> &Buffer {
        &self.screen
    }

    /// Glyphs of row `y`.
    pub fn row_text(&self, y: u16) -> String {
        self.screen.row_text(y)
    }

    /// Number of `write_styled` calls.
    pub const fn writes(&self) -> usize {
        self.writes
    }

    /// Number of cells covered by writes.
    pub const fn cells_written(&self) -> usize {
        self.cells_written
    }

    /// Number of flushes.
    pub const fn flushes(&self) -> usize {
        self.flushes
    }

    /// Reset the traffic counters.
    pub fn reset_counters(&mut self) {
        self.writes = 0;
        self.cells_written = 0;
        self.flushes = 0;
    }

    /// Make every subsequent write and flush fail with a broken pipe.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    fn check(&self) -> Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "memory terminal closed").into());
        }
        Ok(())
    }
}

impl Terminal for MemoryTerminal {
    fn dimensions(&self) -> Result<(u16, u16)> {
        Ok((self.screen.width(), self.screen.height()))
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.check()?;
        self.cursor = (x, y);
        Ok(())
    }

    fn write_styled(&mut self, text: &str, fg: Rgb, bg: Option<Rgb>) -> Result<()> {
        self.check()?;
        self.writes += 1;
        let (mut x, y) = self.cursor;
        for grapheme in text.graphemes(true) {
            let width = u16::try_from(UnicodeWidthStr::width(grapheme)).unwrap_or(0);
            let Some(symbol) = grapheme.chars().next() else {
                continue;
            };
            if width == 0 {
                continue;
            }
            self.screen.set(x, y, Cell::new(symbol).with_fg(fg).with_bg(bg));
            for extra in 1..width {
                self.screen.set(x.saturating_add(extra), y, Cell::wide_continuation().with_bg(bg));
            }
            self.cells_written += usize::from(width);
            x = x.saturating_add(width);
        }
        self.cursor = (x, y);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.check()?;
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_land_at_cursor() {
        let mut term = MemoryTerminal::new(6, 2);
        term.move_cursor(2, 1).unwrap();
        term.write_styled("hi", Rgb::WHITE, None).unwrap();
        assert_eq!(term.row_text(1), "  hi  ");
        assert_eq!(term.screen().get(3, 1).unwrap().fg(), Rgb::WHITE);
        assert_eq!(term.writes(), 1);
        assert_eq!(term.cells_written(), 2);
    }

    #[test]
    fn test_failure_mode() {
        let mut term = MemoryTerminal::new(2, 2);
        term.set_fail_writes(true);
        assert!(term.write_styled("x", Rgb::WHITE, None).is_err());
        assert!(term.flush().is_err());
        assert_eq!(term.row_text(0), "  ");
    }
}
