//! Tile tree: containers that split space among children, and leaves that
//! hold widget state.
//!
//! A tree is exclusively owned from the root down. Geometry is never stored
//! on a tile; [`layout::compute`](crate::layout::compute) derives it fresh
//! for every frame.
//!
//! # Example
//!
//! ```rust
//! use tilewall::color::Rgb;
//! use tilewall::tile::Tile;
//!
//! let mut root = Tile::vsplit(vec![
//!     Tile::hsplit(vec![Tile::hgauge(40.0), Tile::vgauge(80.0)]),
//!     Tile::log().title("events").border_color(Rgb::palette(5)),
//! ]);
//! root.child_mut(&[1]).and_then(Tile::as_log_mut).unwrap().append("started");
//! assert_eq!(root.items().len(), 2);
//! ```

pub mod decoration;
mod style;

pub use style::{Style, StyleOverrides};

use crate::color::Rgb;
use crate::compositor::{Compositor, FrameStats};
use crate::error::{Error, Result};
use crate::layout::Orientation;
use crate::terminal::Terminal;
use crate::widget::{Chart, ChartKind, ColorMap, ColorRangeGauge, Gauge, Log, Text, Widget};

/// What a tile is: a container or one of the widget leaves.
#[derive(Debug, Clone)]
pub enum TileKind {
    /// Container dividing its interior among `items` along `orientation`.
    Split {
        /// Axis the children are laid out along.
        orientation: Orientation,
        /// Children, in layout order.
        items: Vec<Tile>,
    },
    /// Static text.
    Text(Text),
    /// Scrolling log.
    Log(Log),
    /// Horizontal or vertical gauge.
    Gauge(Gauge),
    /// Vertical gauge colored by threshold bands.
    ColorRangeGauge(ColorRangeGauge),
    /// Scrolling chart.
    Chart(Chart),
}

/// A node of the dashboard tree.
#[derive(Debug, Clone)]
pub struct Tile {
    title: Option<String>,
    style: StyleOverrides,
    width_weight: u32,
    height_weight: u32,
    kind: TileKind,
}

impl Tile {
    /// Wrap a tile kind with default decoration and unit weights.
    pub const fn new(kind: TileKind) -> Self {
        Self {
            title: None,
            style: StyleOverrides {
                color: None,
                border: None,
                high: None,
                low: None,
                background: None,
            },
            width_weight: 1,
            height_weight: 1,
            kind,
        }
    }

    /// Container laying `items` out side by side.
    pub fn hsplit(items: Vec<Self>) -> Self {
        Self::new(TileKind::Split {
            orientation: Orientation::Horizontal,
            items,
        })
    }

    /// Container stacking `items` top to bottom.
    pub fn vsplit(items: Vec<Self>) -> Self {
        Self::new(TileKind::Split {
            orientation: Orientation::Vertical,
            items,
        })
    }

    /// Static text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(TileKind::Text(Text::new(text)))
    }

    /// Empty log leaf.
    pub fn log() -> Self {
        Self::new(TileKind::Log(Log::new()))
    }

    /// Horizontal gauge leaf; `value` is a percentage.
    pub fn hgauge(value: f64) -> Self {
        Self::new(TileKind::Gauge(Gauge::horizontal(value)))
    }

    /// Vertical gauge leaf; `value` is a percentage.
    pub fn vgauge(value: f64) -> Self {
        Self::new(TileKind::Gauge(Gauge::vertical(value)))
    }

    /// Vertical gauge colored by `colormap`.
    pub fn color_range_vgauge(value: f64, colormap: ColorMap) -> Self {
        Self::new(TileKind::ColorRangeGauge(ColorRangeGauge::new(value, colormap)))
    }

    /// Column chart, newest sample on the right.
    pub fn hchart() -> Self {
        Self::new(TileKind::Chart(Chart::new(ChartKind::Columns)))
    }

    /// Row chart, newest sample at the bottom.
    pub fn vchart() -> Self {
        Self::new(TileKind::Chart(Chart::new(ChartKind::Rows)))
    }

    /// Braille line chart at two samples per cell.
    pub fn hbraille_chart() -> Self {
        Self::new(TileKind::Chart(Chart::new(ChartKind::BrailleLine)))
    }

    /// Braille chart with each sample filled from the bottom.
    pub fn hbraille_filled_chart() -> Self {
        Self::new(TileKind::Chart(Chart::new(ChartKind::BrailleFilled)))
    }

    /// Set the title shown in the top border.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Draw a border in `color`.
    #[must_use]
    pub const fn border_color(mut self, color: Rgb) -> Self {
        self.style.border = Some(color);
        self
    }

    /// Set the primary foreground color.
    #[must_use]
    pub const fn color(mut self, color: Rgb) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Set the gradient color for high values.
    #[must_use]
    pub const fn color_high(mut self, color: Rgb) -> Self {
        self.style.high = Some(color);
        self
    }

    /// Set the gradient color for low values.
    #[must_use]
    pub const fn color_low(mut self, color: Rgb) -> Self {
        self.style.low = Some(color);
        self
    }

    /// Fill the tile's area with a background color.
    #[must_use]
    pub const fn background(mut self, color: Rgb) -> Self {
        self.style.background = Some(color);
        self
    }

    /// Share of the parent's width inside a horizontal split.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] for zero.
    pub fn width_weight(mut self, weight: u32) -> Result<Self> {
        self.set_width_weight(weight)?;
        Ok(self)
    }

    /// Share of the parent's height inside a vertical split.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] for zero.
    pub fn height_weight(mut self, weight: u32) -> Result<Self> {
        self.set_height_weight(weight)?;
        Ok(self)
    }

    /// Change the width weight in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] for zero.
    pub fn set_width_weight(&mut self, weight: u32) -> Result<()> {
        if weight == 0 {
            return Err(Error::InvalidWeight);
        }
        self.width_weight = weight;
        Ok(())
    }

    /// Change the height weight in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] for zero.
    pub fn set_height_weight(&mut self, weight: u32) -> Result<()> {
        if weight == 0 {
            return Err(Error::InvalidWeight);
        }
        self.height_weight = weight;
        Ok(())
    }

    /// Weight along `orientation`.
    pub const fn weight(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Horizontal => self.width_weight,
            Orientation::Vertical => self.height_weight,
        }
    }

    /// Replace or remove the title.
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Current title.
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Explicitly set colors.
    pub const fn overrides(&self) -> &StyleOverrides {
        &self.style
    }

    /// Mutable access to the explicitly set colors.
    pub fn overrides_mut(&mut self) -> &mut StyleOverrides {
        &mut self.style
    }

    /// Whether a border (and title) is painted around this tile.
    pub const fn is_decorated(&self) -> bool {
        self.title.is_some() || self.style.border.is_some()
    }

    /// The tile kind.
    pub const fn kind(&self) -> &TileKind {
        &self.kind
    }

    /// Mutable access to the tile kind.
    pub fn kind_mut(&mut self) -> &mut TileKind {
        &mut self.kind
    }

    /// Children of a container; empty for leaves.
    pub fn items(&self) -> &[Self] {
        match &self.kind {
            TileKind::Split { items, .. } => items,
            _ => &[],
        }
    }

    /// Mutable children of a container; `None` for leaves.
    pub fn items_mut(&mut self) -> Option<&mut Vec<Self>> {
        match &mut self.kind {
            TileKind::Split { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Append a child to a container.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAContainer`] on a leaf.
    pub fn push(&mut self, tile: Self) -> Result<&mut Self> {
        let items = self.items_mut().ok_or(Error::NotAContainer)?;
        items.push(tile);
        Ok(self)
    }

    /// Descendant at `path`, one child index per level.
    pub fn child(&self, path: &[usize]) -> Option<&Self> {
        path.iter().try_fold(self, |tile, &index| tile.items().get(index))
    }

    /// Mutable descendant at `path`, one child index per level.
    pub fn child_mut(&mut self, path: &[usize]) -> Option<&mut Self> {
        path.iter()
            .try_fold(self, |tile, &index| tile.items_mut().and_then(|items| items.get_mut(index)))
    }

    /// Leaf widget, if this is not a container.
    pub fn widget(&self) -> Option<&dyn Widget> {
        match &self.kind {
            TileKind::Split { .. } => None,
            TileKind::Text(w) => Some(w),
            TileKind::Log(w) => Some(w),
            TileKind::Gauge(w) => Some(w),
            TileKind::ColorRangeGauge(w) => Some(w),
            TileKind::Chart(w) => Some(w),
        }
    }

    /// Mutable leaf widget, if this is not a container.
    pub fn widget_mut(&mut self) -> Option<&mut dyn Widget> {
        match &mut self.kind {
            TileKind::Split { .. } => None,
            TileKind::Text(w) => Some(w),
            TileKind::Log(w) => Some(w),
            TileKind::Gauge(w) => Some(w),
            TileKind::ColorRangeGauge(w) => Some(w),
            TileKind::Chart(w) => Some(w),
        }
    }

    /// The text widget, if this is a text tile.
    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match &mut self.kind {
            TileKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The log widget, if this is a log tile.
    pub fn as_log_mut(&mut self) -> Option<&mut Log> {
        match &mut self.kind {
            TileKind::Log(log) => Some(log),
            _ => None,
        }
    }

    /// The gauge widget, if this is a plain gauge tile.
    pub fn as_gauge_mut(&mut self) -> Option<&mut Gauge> {
        match &mut self.kind {
            TileKind::Gauge(gauge) => Some(gauge),
            _ => None,
        }
    }

    /// The color-range gauge, if this is one.
    pub fn as_color_range_gauge_mut(&mut self) -> Option<&mut ColorRangeGauge> {
        match &mut self.kind {
            TileKind::ColorRangeGauge(gauge) => Some(gauge),
            _ => None,
        }
    }

    /// The chart widget, if this is a chart tile.
    pub fn as_chart_mut(&mut self) -> Option<&mut Chart> {
        match &mut self.kind {
            TileKind::Chart(chart) => Some(chart),
            _ => None,
        }
    }

    /// Lay out, paint and emit this tree as one full frame.
    ///
    /// Uses a throwaway [`Compositor`]; keep one around instead to get
    /// incremental output across frames.
    ///
    /// # Errors
    ///
    /// Propagates terminal failures.
    pub fn display(&mut self, terminal: &mut impl Terminal) -> Result<FrameStats> {
        Compositor::default().display(self, terminal)
    }
}
