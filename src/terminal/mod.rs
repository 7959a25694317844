//! Terminal module: the surface frames are emitted to.
//!
//! The compositor only talks to the [`Terminal`] trait. [`AnsiTerminal`]
//! turns those calls into escape sequences over any writer,
//! [`MemoryTerminal`] records them for tests, and [`TerminalSession`] owns
//! the raw-mode/fullscreen state of the real terminal.

mod ansi;
mod memory;
mod output;
mod session;

pub use ansi::AnsiTerminal;
pub use memory::MemoryTerminal;
pub use output::OutputBuffer;
pub use session::{SessionConfig, TerminalSession};

use crate::color::Rgb;
use crate::error::Result;

/// Output surface for composited frames.
///
/// Implementations may buffer; nothing is guaranteed visible before
/// [`Terminal::flush`] returns.
pub trait Terminal {
    /// Current size as `(width, height)` in cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be queried.
    fn dimensions(&self) -> Result<(u16, u16)>;

    /// Move the cursor to column `x`, row `y` (0-indexed).
    ///
    /// # Errors
    ///
    /// Returns an error if the move cannot be issued.
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Write `text` at the cursor in the given colors, advancing the cursor.
    ///
    /// A `None` background means the terminal's default.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn write_styled(&mut self, text: &str, fg: Rgb, bg: Option<Rgb>) -> Result<()>;

    /// Return to the terminal's default colors, so output that follows the
    /// frame does not inherit the last run's style.
    ///
    /// # Errors
    ///
    /// Returns an error if the reset cannot be issued.
    fn reset_style(&mut self) -> Result<()> {
        Ok(())
    }

    /// Make everything written so far visible.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    fn flush(&mut self) -> Result<()>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn dimensions(&self) -> Result<(u16, u16)> {
        (**self).dimensions()
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        (**self).move_cursor(x, y)
    }

    fn write_styled(&mut self, text: &str, fg: Rgb, bg: Option<Rgb>) -> Result<()> {
        (**self).write_styled(text, fg, bg)
    }

    fn reset_style(&mut self) -> Result<()> {
        (**self).reset_style()
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
