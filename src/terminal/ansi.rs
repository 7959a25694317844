//! `AnsiTerminal`: escape-sequence output over any writer.

use super::output::OutputBuffer;
use super::Terminal;
use crate::color::Rgb;
use crate::error::Result;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Last state emitted to the terminal, used to skip redundant sequences.
///
/// `None` fields are unknown, forcing the next write to emit them.
#[derive(Debug, Clone, Copy, Default)]
struct EmitState {
    cursor: Option<(u16, u16)>,
    fg: Option<Rgb>,
    bg: Option<Option<Rgb>>,
    styled: bool,
}

/// A [`Terminal`] that writes 24-bit color ANSI sequences to `W`.
///
/// Everything is accumulated in an [`OutputBuffer`] and handed to the
/// writer in a single `write_all` per [`Terminal::flush`].
#[derive(Debug)]
pub struct AnsiTerminal<W: Write> {
    writer: W,
    output: OutputBuffer,
    state: EmitState,
    size: Option<(u16, u16)>,
}

impl AnsiTerminal<io::Stdout> {
    /// A terminal on standard output, sized by querying the tty.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiTerminal<W> {
    /// Wrap `writer`; dimensions come from the controlling terminal.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            output: OutputBuffer::new(),
            state: EmitState::default(),
            size: None,
        }
    }

    /// Wrap `writer` with fixed dimensions, for pipes and tests.
    pub fn with_size(writer: W, width: u16, height: u16) -> Self {
        Self {
            size: Some((width, height)),
            ..Self::new(writer)
        }
    }

    /// Change the fixed dimensions.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.size = Some((width, height));
    }

    /// Forget what was last emitted, e.g. after something else drew on the
    /// screen. The next write re-sends cursor position and colors.
    pub fn invalidate(&mut self) {
        self.state = EmitState::default();
    }

    /// Bytes buffered since the last flush.
    pub fn pending(&self) -> &[u8] {
        self.output.as_bytes()
    }

    /// The underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the terminal, returning the writer. Pending bytes are dropped.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Terminal for AnsiTerminal<W> {
    fn dimensions(&self) -> Result<(u16, u16)> {
        match self.size {
            Some(size) => Ok(size),
            None => Ok(crossterm::terminal::size()?),
        }
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        if self.state.cursor != Some((x, y)) {
            self.output.cursor_move(x, y);
            self.state.cursor = Some((x, y));
        }
        Ok(())
    }

    fn write_styled(&mut self, text: &str, fg: Rgb, bg: Option<Rgb>) -> Result<()> {
        if self.state.fg != Some(fg) {
            self.output.set_fg(fg);
            self.state.fg = Some(fg);
            self.state.styled = true;
        }
        if self.state.bg != Some(bg) {
            self.output.set_bg(bg);
            self.state.bg = Some(bg);
            self.state.styled = true;
        }
        self.output.write_str(text);
        let advance = u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX);
        self.state.cursor = self.state.cursor.map(|(x, y)| (x.saturating_add(advance), y));
        Ok(())
    }

    fn reset_style(&mut self) -> Result<()> {
        if self.state.styled {
            self.output.reset_attrs();
            self.state.fg = None;
            self.state.bg = None;
            self.state.styled = false;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let result = self.output.flush_to(&mut self.writer);
        self.output.clear();
        if result.is_err() {
            self.invalidate();
        }
        result.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redundant_sequences_skipped() {
        let mut term = AnsiTerminal::with_size(Vec::new(), 10, 2);
        term.move_cursor(0, 0).unwrap();
        term.write_styled("ab", Rgb::WHITE, None).unwrap();
        term.move_cursor(2, 0).unwrap();
        term.write_styled("cd", Rgb::WHITE, None).unwrap();
        term.flush().unwrap();
        let bytes = term.into_inner();
        assert_eq!(bytes, b"\x1b[1;1H\x1b[38;2;255;255;255m\x1b[49mabcd");
    }

    #[test]
    fn test_color_change_emitted() {
        let mut term = AnsiTerminal::with_size(Vec::new(), 10, 2);
        term.move_cursor(0, 1).unwrap();
        term.write_styled("a", Rgb::BLACK, Some(Rgb::WHITE)).unwrap();
        term.write_styled("b", Rgb::BLACK, None).unwrap();
        let pending = String::from_utf8(term.pending().to_vec()).unwrap();
        assert_eq!(pending, "\x1b[2;1H\x1b[38;2;0;0;0m\x1b[48;2;255;255;255ma\x1b[49mb");
    }

    #[test]
    fn test_flush_clears_pending() {
        let mut term = AnsiTerminal::with_size(Vec::new(), 4, 4);
        term.move_cursor(1, 1).unwrap();
        term.flush().unwrap();
        assert!(term.pending().is_empty());
        assert_eq!(term.dimensions().unwrap(), (4, 4));
        assert_eq!(term.get_ref().len(), 6);
    }

    #[test]
    fn test_reset_style_only_after_color() {
        let mut term = AnsiTerminal::with_size(Vec::new(), 4, 1);
        term.move_cursor(0, 0).unwrap();
        term.reset_style().unwrap();
        assert_eq!(term.pending(), b"\x1b[1;1H");

        term.write_styled("a", Rgb::WHITE, None).unwrap();
        term.reset_style().unwrap();
        term.reset_style().unwrap();
        assert!(term.pending().ends_with(b"a\x1b[0m"));

        // Colors are re-sent after a reset.
        term.write_styled("b", Rgb::WHITE, None).unwrap();
        assert!(term.pending().ends_with(b"\x1b[0m\x1b[38;2;255;255;255m\x1b[49mb"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut term = AnsiTerminal::with_size(BrokenPipe, 4, 4);
        term.write_styled("x", Rgb::WHITE, None).unwrap();
        assert!(matches!(term.flush(), Err(crate::error::Error::Io(_))));
    }
}
