//! Border and title painting shared by every tile kind.

use crate::buffer::{Buffer, Cell};
use crate::layout::Rect;

use super::Style;

/// Box-drawing glyphs: top-left, top-right, bottom-left, bottom-right,
/// horizontal, vertical.
const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Whether `area` is large enough to carry a border.
#[inline]
pub const fn fits_border(area: Rect) -> bool {
    area.width >= 2 && area.height >= 2
}

/// Interior of a decorated tile.
///
/// Areas too small for a border keep their full extent.
#[inline]
pub const fn interior(area: Rect) -> Rect {
    if fits_border(area) {
        area.inset(1)
    } else {
        area
    }
}

/// Paint the border of `area` with `title` embedded in the top edge.
///
/// Does nothing when the area is smaller than 2x2.
pub fn paint(area: Rect, title: Option<&str>, style: &Style, buffer: &mut Buffer) {
    if !fits_border(area) {
        return;
    }
    let edge = |symbol: char| Cell::new(symbol).with_fg(style.border).with_bg(style.background);
    let right = area.right() - 1;
    let bottom = area.bottom() - 1;

    buffer.fill(Rect::new(area.x + 1, area.y, area.width - 2, 1), edge(HORIZONTAL));
    buffer.fill(Rect::new(area.x + 1, bottom, area.width - 2, 1), edge(HORIZONTAL));
    buffer.fill(Rect::new(area.x, area.y + 1, 1, area.height - 2), edge(VERTICAL));
    buffer.fill(Rect::new(right, area.y + 1, 1, area.height - 2), edge(VERTICAL));
    buffer.set(area.x, area.y, edge(TOP_LEFT));
    buffer.set(right, area.y, edge(TOP_RIGHT));
    buffer.set(area.x, bottom, edge(BOTTOM_LEFT));
    buffer.set(right, bottom, edge(BOTTOM_RIGHT));

    if let Some(title) = title.filter(|t| !t.is_empty()) {
        let label = format!(" {title} ");
        buffer.put_str(area.x + 2, area.y, &label, right, style.color, style.background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_border_and_title() {
        let mut buffer = Buffer::new(12, 3);
        let style = Style {
            border: Rgb::palette(5),
            ..Style::default()
        };
        paint(buffer.area(), Some("cpu"), &style, &mut buffer);
        assert_eq!(buffer.row_text(0), "┌─ cpu ────┐");
        assert_eq!(buffer.row_text(1), "│          │");
        assert_eq!(buffer.row_text(2), "└──────────┘");
        assert_eq!(buffer.get(0, 0).unwrap().fg(), Rgb::palette(5));
        assert_eq!(buffer.get(3, 0).unwrap().fg(), Rgb::GRAY);
    }

    #[test]
    fn test_title_clipped_inside_corner() {
        let mut buffer = Buffer::new(6, 2);
        paint(buffer.area(), Some("a long title"), &Style::default(), &mut buffer);
        assert_eq!(buffer.row_text(0), "┌─ a ┐");
        assert_eq!(buffer.row_text(1), "└────┘");
    }

    #[test]
    fn test_too_small_for_border() {
        let mut buffer = Buffer::new(5, 1);
        let before = buffer.clone();
        paint(buffer.area(), Some("x"), &Style::default(), &mut buffer);
        assert_eq!(buffer, before);
        assert_eq!(interior(buffer.area()), buffer.area());
    }

    #[test]
    fn test_interior_of_minimal_border_is_empty() {
        let inner = interior(Rect::new(3, 4, 2, 2));
        assert!(inner.is_empty());
        assert_eq!(interior(Rect::new(0, 0, 10, 5)), Rect::new(1, 1, 8, 3));
    }
}
