//! Widget trait shared by every leaf tile kind.

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::tile::Style;

/// A leaf tile's content renderer.
///
/// The compositor calls [`Widget::fit`] and then [`Widget::render`] once per
/// frame with the tile's interior area (border and title already removed).
pub trait Widget {
    /// Adapt retained state to the area about to be rendered.
    ///
    /// Bounded histories size themselves here. Called with empty areas too;
    /// implementations ignore those so a momentarily tiny terminal does not
    /// discard data.
    fn fit(&mut self, _area: Rect) {}

    /// Paint into `buffer`, touching only cells inside `area`.
    ///
    /// An empty `area` must produce no writes.
    fn render(&self, area: Rect, buffer: &mut Buffer, style: &Style);
}
