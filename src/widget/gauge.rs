//! Gauges: horizontal and vertical percentage bars with eighth-cell
//! resolution, plus a vertical variant colored by threshold bands.

use super::traits::Widget;
use crate::buffer::Buffer;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::glyph::block::{self, Fill};
use crate::layout::{Orientation, Rect};
use crate::tile::Style;
use unicode_width::UnicodeWidthStr;

/// Clamp a percentage into `0..=100`, mapping NaN to zero.
#[inline]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// A single percentage bar.
///
/// Horizontal gauges fill every row left to right; vertical gauges fill
/// every column bottom to top. Out-of-range values are clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    value: f64,
    label: Option<String>,
    orientation: Orientation,
}

impl Gauge {
    /// A left-to-right gauge.
    pub fn horizontal(value: f64) -> Self {
        Self::new(value, Orientation::Horizontal)
    }

    /// A bottom-to-top gauge.
    pub fn vertical(value: f64) -> Self {
        Self::new(value, Orientation::Vertical)
    }

    fn new(value: f64, orientation: Orientation) -> Self {
        Self {
            value: clamp_percent(value),
            label: None,
            orientation,
        }
    }

    /// Attach a label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Current value in `0..=100`.
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Set the value; clamped into `0..=100`.
    pub fn set_value(&mut self, value: f64) {
        self.value = clamp_percent(value);
    }

    /// Current label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Replace or remove the label.
    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Fill direction.
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn fraction(&self) -> f64 {
        self.value / 100.0
    }

    fn render_with(&self, area: Rect, buffer: &mut Buffer, style: &Style, paint: &dyn Fn(usize, usize) -> Rgb) {
        if area.is_empty() {
            return;
        }
        match self.orientation {
            Orientation::Horizontal => self.render_horizontal(area, buffer, style, paint),
            Orientation::Vertical => self.render_vertical(area, buffer, style, paint),
        }
    }

    fn render_horizontal(&self, area: Rect, buffer: &mut Buffer, style: &Style, paint: &dyn Fn(usize, usize) -> Rgb) {
        let mut bar_area = area;
        if let Some(label) = self.label.as_deref() {
            let label_width = u16::try_from(UnicodeWidthStr::width(label)).unwrap_or(u16::MAX);
            if area.width > label_width.saturating_add(1) {
                let middle = area.y + area.height / 2;
                buffer.put_str(area.x, middle, label, area.x + label_width, style.color, style.background);
                bar_area = Rect::new(area.x + label_width + 1, area.y, area.width - label_width - 1, area.height);
            }
        }

        let cells = usize::from(bar_area.width);
        for (i, glyph) in (bar_area.x..bar_area.right()).zip(block::bar(self.fraction(), cells, Fill::LeftToRight)) {
            let fg = paint(cells, usize::from(i - bar_area.x));
            for y in bar_area.y..bar_area.bottom() {
                if let Some(cell) = buffer.get_mut(i, y) {
                    cell.set_symbol(glyph).set_fg(fg).set_bg(style.background);
                }
            }
        }
    }

    fn render_vertical(&self, area: Rect, buffer: &mut Buffer, style: &Style, paint: &dyn Fn(usize, usize) -> Rgb) {
        let rows = usize::from(area.height);
        let mut top_glyph = ' ';
        for (r, glyph) in block::bar(self.fraction(), rows, Fill::BottomToTop).enumerate() {
            // r counts up from the bottom row and stays below area.height.
            let y = area.bottom() - 1 - u16::try_from(r).unwrap_or(0);
            let fg = paint(rows, r);
            for x in area.x..area.right() {
                if let Some(cell) = buffer.get_mut(x, y) {
                    cell.set_symbol(glyph).set_fg(fg).set_bg(style.background);
                }
            }
            top_glyph = glyph;
        }

        if let Some(label) = self.label.as_deref() {
            let label_width = u16::try_from(UnicodeWidthStr::width(label)).unwrap_or(u16::MAX);
            if top_glyph == ' ' && label_width <= area.width {
                let x = area.x + (area.width - label_width) / 2;
                buffer.put_str(x, area.y, label, area.right(), style.color, style.background);
            }
        }
    }
}

impl Widget for Gauge {
    fn render(&self, area: Rect, buffer: &mut Buffer, style: &Style) {
        self.render_with(area, buffer, style, &|steps, pos| style.gradient(steps, pos));
    }
}

/// Ordered `(threshold, color)` bands.
///
/// A value takes the color of the first band whose threshold is at least
/// the value; values above every threshold take the last color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    bands: Vec<(f64, Rgb)>,
}

impl ColorMap {
    /// Validate and build a color map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyColorMap`] for no bands and
    /// [`Error::UnsortedColorMap`] if a threshold is NaN or smaller than the
    /// one before it.
    pub fn new(bands: Vec<(f64, Rgb)>) -> Result<Self> {
        if bands.is_empty() {
            return Err(Error::EmptyColorMap);
        }
        for (index, pair) in bands.windows(2).enumerate() {
            if pair[1].0.is_nan() || pair[1].0 < pair[0].0 {
                return Err(Error::UnsortedColorMap { index: index + 1 });
            }
        }
        if bands[0].0.is_nan() {
            return Err(Error::UnsortedColorMap { index: 0 });
        }
        Ok(Self { bands })
    }

    /// Color for `value`.
    pub fn color_for(&self, value: f64) -> Rgb {
        self.bands
            .iter()
            .find(|(threshold, _)| *threshold >= value)
            .or_else(|| self.bands.last())
            .map_or(Rgb::GRAY, |&(_, color)| color)
    }

    /// The bands, in threshold order.
    pub fn bands(&self) -> &[(f64, Rgb)] {
        &self.bands
    }
}

/// A vertical gauge whose whole bar takes one color from a [`ColorMap`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRangeGauge {
    gauge: Gauge,
    colormap: ColorMap,
}

impl ColorRangeGauge {
    /// Create a bottom-to-top gauge colored by `colormap`.
    pub fn new(value: f64, colormap: ColorMap) -> Self {
        Self {
            gauge: Gauge::vertical(value),
            colormap,
        }
    }

    /// Current value in `0..=100`.
    pub const fn value(&self) -> f64 {
        self.gauge.value()
    }

    /// Set the value; clamped into `0..=100`.
    pub fn set_value(&mut self, value: f64) {
        self.gauge.set_value(value);
    }

    /// The color map.
    pub const fn colormap(&self) -> &ColorMap {
        &self.colormap
    }

    /// Replace the color map.
    pub fn set_colormap(&mut self, colormap: ColorMap) {
        self.colormap = colormap;
    }

    /// Color the bar is currently drawn in.
    pub fn current_color(&self) -> Rgb {
        self.colormap.color_for(self.gauge.value())
    }
}

impl Widget for ColorRangeGauge {
    fn render(&self, area: Rect, buffer: &mut Buffer, style: &Style) {
        let color = self.current_color();
        self.gauge.render_with(area, buffer, style, &|_, _| color);
    }
}
