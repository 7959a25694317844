//! Text widget: static multi-line text, top-left anchored.

use super::traits::Widget;
use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::tile::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Multi-line text, clipped to its area.
///
/// Without wrapping, each source line occupies one row and is cut at the
/// right edge. With wrapping, long lines continue on the following rows.
/// Rows beyond the area's height are never drawn.
#[derive(Debug, Clone, Default)]
pub struct Text {
    text: String,
    wrap: bool,
}

impl Text {
    /// Create a text widget.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            wrap: false,
        }
    }

    /// Enable or disable hard wrapping at the area width.
    #[must_use]
    pub const fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether wrapping is enabled.
    pub const fn wraps(&self) -> bool {
        self.wrap
    }

    fn rows<'a>(&'a self, width: u16) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        if self.wrap {
            Box::new(self.text.lines().flat_map(move |line| wrap_line(line, width)))
        } else {
            Box::new(self.text.lines())
        }
    }
}

/// Split `line` into pieces at most `width` columns wide.
///
/// An empty line yields one empty piece so blank lines keep their row.
pub(crate) fn wrap_line(line: &str, width: u16) -> Vec<&str> {
    let width = usize::from(width.max(1));
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (idx, grapheme) in line.grapheme_indices(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > width && idx > start {
            pieces.push(&line[start..idx]);
            start = idx;
            used = 0;
        }
        used += w;
    }
    pieces.push(&line[start..]);
    pieces
}

impl Widget for Text {
    fn render(&self, area: Rect, buffer: &mut Buffer, style: &Style) {
        if area.is_empty() {
            return;
        }
        for (row, line) in (area.y..area.bottom()).zip(self.rows(area.width)) {
            buffer.put_str(area.x, row, line, area.right(), style.color, style.background);
        }
    }
}
