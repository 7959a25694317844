//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use crate::color::Rgb;
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output for a frame is accumulated here, then flushed in a single
/// `write_all` so the terminal never shows a half-drawn frame.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (16KB).
    pub fn new() -> Self {
        Self::with_capacity(16 * 1024)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H. Writing into a Vec cannot fail.
        let _ = write!(self.data, "\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1);
    }

    /// Set foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Set background color (true color), or the terminal default for `None`.
    #[inline]
    pub fn set_bg(&mut self, color: Option<Rgb>) {
        match color {
            Some(color) => {
                let _ = write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
            }
            None => self.data.extend_from_slice(b"\x1b[49m"),
        }
    }

    /// Reset colors to the terminal defaults.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences() {
        let mut out = OutputBuffer::with_capacity(64);
        out.cursor_move(0, 0);
        out.set_fg(Rgb::new(1, 2, 3));
        out.set_bg(None);
        out.write_str("ok");
        out.reset_attrs();
        assert_eq!(out.as_bytes(), b"\x1b[1;1H\x1b[38;2;1;2;3m\x1b[49mok\x1b[0m");
    }

    #[test]
    fn test_cursor_move_at_u16_max() {
        let mut out = OutputBuffer::new();
        out.cursor_move(u16::MAX, u16::MAX);
        assert_eq!(out.as_bytes(), b"\x1b[65536;65536H");
    }

    #[test]
    fn test_flush_to_writer() {
        let mut out = OutputBuffer::new();
        out.set_bg(Some(Rgb::WHITE));
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"\x1b[48;2;255;255;255m");
    }
}
