//! Log widget: an auto-scrolling pane of the most recent lines.

use super::history::History;
use super::traits::Widget;
use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::tile::Style;

/// Lines retained before the first render sizes the log.
pub const DEFAULT_LOG_CAPACITY: usize = 50;

/// A log pane that always shows its newest lines, oldest at the top.
///
/// Retained lines are bounded by the height the log was last rendered at,
/// so appending never grows memory past what fits on screen.
#[derive(Debug, Clone)]
pub struct Log {
    lines: History<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self::new()
    }
}

impl Log {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Create an empty log retaining `capacity` lines until first rendered.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: History::new(capacity),
        }
    }

    /// Append a message at the bottom.
    ///
    /// Every call adds at least one line, so an empty message scrolls the
    /// log by a blank row. Embedded newlines start additional lines.
    pub fn append(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        if message.is_empty() {
            self.lines.push(String::new());
            return;
        }
        for line in message.lines() {
            self.lines.push(line.to_string());
        }
    }

    /// Retained lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Number of retained lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current retention bound.
    pub const fn capacity(&self) -> usize {
        self.lines.capacity()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Widget for Log {
    fn fit(&mut self, area: Rect) {
        if !area.is_empty() {
            self.lines.set_capacity(usize::from(area.height));
        }
    }

    fn render(&self, area: Rect, buffer: &mut Buffer, style: &Style) {
        if area.is_empty() {
            return;
        }
        let height = usize::from(area.height);
        for (i, line) in self.lines.latest(height).enumerate() {
            // Rows never exceed `height`, which fits in u16.
            let row = area.y + u16::try_from(i).unwrap_or(u16::MAX);
            let fg = style.gradient(height, i);
            buffer.put_str(area.x, row, line, area.right(), fg, style.background);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_log_eviction_after_render() {
        let mut log = Log::new();
        let area = Rect::new(0, 0, 10, 4);
        log.fit(area);
        for i in 0..9 {
            log.append(format!("line {i}"));
        }
        assert_eq!(log.len(), 4);

        let mut buffer = Buffer::new(10, 4);
        log.render(area, &mut buffer, &Style::default());
        assert_eq!(buffer.row_text(0), "line 5    ");
        assert_eq!(buffer.row_text(3), "line 8    ");
    }

    #[test]
    fn test_log_keeps_blank_lines() {
        let mut log = Log::new();
        let area = Rect::new(0, 0, 4, 3);
        log.fit(area);
        log.append("old");
        log.append("a");
        log.append("b");
        log.append("");
        assert_eq!(log.len(), 3);
        assert_eq!(log.lines().collect::<Vec<_>>(), ["a", "b", ""]);

        let mut buffer = Buffer::new(4, 3);
        log.render(area, &mut buffer, &Style::default());
        assert_eq!(buffer.row_text(0), "a   ");
        assert_eq!(buffer.row_text(1), "b   ");
        assert_eq!(buffer.row_text(2), "    ");
    }

    #[test]
    fn test_log_fewer_lines_than_rows() {
        let mut log = Log::new();
        log.append("only\nthree\nlines");
        let mut buffer = Buffer::new(6, 5);
        log.render(buffer.area(), &mut buffer, &Style::default());
        assert_eq!(buffer.row_text(0), "only  ");
        assert_eq!(buffer.row_text(2), "lines ");
        assert_eq!(buffer.row_text(3), "      ");
    }

    #[test]
    fn test_log_lines_clipped() {
        let mut log = Log::new();
        log.append("a very long log line");
        let mut buffer = Buffer::new(6, 1);
        log.render(buffer.area(), &mut buffer, &Style::default());
        assert_eq!(buffer.row_text(0), "a very");
    }

    #[test]
    fn test_log_gradient_rows() {
        let mut log = Log::new();
        log.append("old\nnew");
        let style = Style {
            high: Some(Rgb::new(255, 0, 0)),
            low: Some(Rgb::new(0, 0, 255)),
            ..Style::default()
        };
        let mut buffer = Buffer::new(3, 2);
        log.render(buffer.area(), &mut buffer, &style);
        assert_eq!(buffer.get(0, 0).unwrap().fg(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_log_zero_area_keeps_lines() {
        let mut log = Log::new();
        log.append("a\nb\nc");
        log.fit(Rect::new(0, 0, 10, 0));
        assert_eq!(log.len(), 3);
    }
}
