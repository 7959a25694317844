//! Style inheritance: per-tile color overrides resolved top-down.
//!
//! A tile only stores the colors it sets explicitly. While the compositor
//! walks the tree it folds each tile's overrides onto the style inherited
//! from the parent, so children pick up their nearest ancestor's colors
//! without holding a reference to it.

use crate::color::{interpolate, Rgb};

/// Fully resolved colors for painting one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Primary foreground (text, chart glyphs).
    pub color: Rgb,
    /// Border and title color.
    pub border: Rgb,
    /// Gradient end for high values; falls back to `color`.
    pub high: Option<Rgb>,
    /// Gradient end for low values; falls back to `color`.
    pub low: Option<Rgb>,
    /// Background, `None` for the terminal default.
    pub background: Option<Rgb>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Rgb::GRAY,
            border: Rgb::GRAY,
            high: None,
            low: None,
            background: None,
        }
    }
}

impl Style {
    /// Color at `pos` of a `steps`-long gradient from low to high.
    pub fn gradient(&self, steps: usize, pos: usize) -> Rgb {
        match (self.high, self.low) {
            (None, None) => self.color,
            (high, low) => interpolate(high.unwrap_or(self.color), low.unwrap_or(self.color), steps, pos),
        }
    }
}

/// Colors a tile sets explicitly; unset fields inherit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleOverrides {
    /// Primary foreground.
    pub color: Option<Rgb>,
    /// Border color. Setting it also turns the border on.
    pub border: Option<Rgb>,
    /// Gradient high end.
    pub high: Option<Rgb>,
    /// Gradient low end.
    pub low: Option<Rgb>,
    /// Background.
    pub background: Option<Rgb>,
}

impl StyleOverrides {
    /// Fold these overrides onto an inherited style.
    pub fn resolve(&self, inherited: &Style) -> Style {
        Style {
            color: self.color.unwrap_or(inherited.color),
            border: self.border.unwrap_or(inherited.border),
            high: self.high.or(inherited.high),
            low: self.low.or(inherited.low),
            background: self.background.or(inherited.background),
        }
    }
}
