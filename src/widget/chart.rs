//! Charts: auto-scaling histories drawn as block columns, block rows, or
//! Braille dots.
//!
//! Every chart keeps a bounded [`History`] of samples. At render time the
//! visible window (the newest samples that fit the axis) is mapped onto the
//! available resolution, either from its own observed range or a fixed one.
//! The newest sample always sits at the trailing edge: rightmost for column
//! and Braille charts, bottom for row charts.

use super::history::History;
use super::traits::Widget;
use crate::buffer::Buffer;
use crate::glyph::block::{self, Fill};
use crate::glyph::braille::{BrailleDots, DOT_COLUMNS, DOT_ROWS};
use crate::layout::Rect;
use crate::tile::Style;

/// Samples retained before the first render sizes a horizontal chart.
pub const DEFAULT_CHART_CAPACITY: usize = 500;

/// Samples retained before the first render sizes a row chart.
pub const DEFAULT_ROW_CHART_CAPACITY: usize = 50;

/// How samples are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One sample per column, bars growing upward.
    Columns,
    /// One sample per row, bars growing rightward.
    Rows,
    /// Two samples per cell, one Braille dot per sample.
    BrailleLine,
    /// Two samples per cell, Braille dots filled up to the sample.
    BrailleFilled,
}

impl ChartKind {
    /// Samples that fit along the axis of `area`.
    pub fn axis_len(self, area: Rect) -> usize {
        match self {
            Self::Columns => usize::from(area.width),
            Self::Rows => usize::from(area.height),
            Self::BrailleLine | Self::BrailleFilled => usize::from(area.width) * DOT_COLUMNS,
        }
    }
}

/// Value range a chart maps onto its cells.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ChartScale {
    /// Min and max of the visible window.
    #[default]
    Auto,
    /// A fixed range; samples outside it are clamped.
    Fixed {
        /// Value drawn at the bottom (or left) edge.
        min: f64,
        /// Value drawn at the top (or right) edge.
        max: f64,
    },
}

/// Maps samples into `0.0..=1.0`.
#[derive(Debug, Clone, Copy)]
struct Scaler {
    min: f64,
    span: f64,
}

impl Scaler {
    fn new<'a>(scale: ChartScale, window: impl Iterator<Item = &'a f64>) -> Self {
        let (min, max) = match scale {
            ChartScale::Fixed { min, max } => (min, max),
            ChartScale::Auto => window.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        };
        Self { min, span: max - min }
    }

    /// A flat window (or an inverted fixed range) maps to the mid-line.
    fn fraction(self, value: f64) -> f64 {
        if self.span.is_nan() || self.span <= f64::EPSILON {
            return 0.5;
        }
        block::clamp_fraction((value - self.min) / self.span)
    }
}

/// A scrolling chart of numeric samples.
#[derive(Debug, Clone)]
pub struct Chart {
    history: History<f64>,
    kind: ChartKind,
    scale: ChartScale,
}

impl Chart {
    /// Create an empty chart of the given kind.
    pub fn new(kind: ChartKind) -> Self {
        let capacity = match kind {
            ChartKind::Rows => DEFAULT_ROW_CHART_CAPACITY,
            _ => DEFAULT_CHART_CAPACITY,
        };
        Self {
            history: History::new(capacity),
            kind,
            scale: ChartScale::Auto,
        }
    }

    /// Use a fixed value range instead of auto-scaling.
    #[must_use]
    pub const fn with_scale(mut self, scale: ChartScale) -> Self {
        self.scale = scale;
        self
    }

    /// Start from existing samples, oldest first.
    #[must_use]
    pub fn with_samples(mut self, samples: impl IntoIterator<Item = f64>) -> Self {
        self.extend(samples);
        self
    }

    /// Append a sample; the oldest is evicted beyond the retained length.
    ///
    /// Non-finite samples are ignored.
    pub fn append(&mut self, value: f64) {
        if value.is_finite() {
            self.history.push(value);
        }
    }

    /// Append several samples, oldest first.
    pub fn extend(&mut self, samples: impl IntoIterator<Item = f64>) {
        for value in samples {
            self.append(value);
        }
    }

    /// Retained samples, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().copied()
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Check if no samples are retained.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Drop every sample.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Drawing style.
    pub const fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Value range.
    pub const fn scale(&self) -> ChartScale {
        self.scale
    }

    /// Replace the value range.
    pub fn set_scale(&mut self, scale: ChartScale) {
        self.scale = scale;
    }

    fn render_columns(&self, area: Rect, buffer: &mut Buffer, style: &Style) {
        let window = self.history.latest(usize::from(area.width));
        let scaler = Scaler::new(self.scale, window.clone());
        let rows = usize::from(area.height);
        let first = area.right() - u16::try_from(window.len()).unwrap_or(area.width);
        for (x, &value) in (first..area.right()).zip(window) {
            for (r, glyph) in block::bar(scaler.fraction(value), rows, Fill::BottomToTop).enumerate() {
                if glyph == ' ' {
                    break;
                }
                let y = area.bottom() - 1 - u16::try_from(r).unwrap_or(0);
                if let Some(cell) = buffer.get_mut(x, y) {
                    cell.set_symbol(glyph).set_fg(style.gradient(rows, r)).set_bg(style.background);
                }
            }
        }
    }

    fn render_rows(&self, area: Rect, buffer: &mut Buffer, style: &Style) {
        let window = self.history.latest(usize::from(area.height));
        let scaler = Scaler::new(self.scale, window.clone());
        let cells = usize::from(area.width);
        let first = area.bottom() - u16::try_from(window.len()).unwrap_or(area.height);
        for (y, &value) in (first..area.bottom()).zip(window) {
            for (i, glyph) in block::bar(scaler.fraction(value), cells, Fill::LeftToRight).enumerate() {
                if glyph == ' ' {
                    break;
                }
                let x = area.x + u16::try_from(i).unwrap_or(0);
                if let Some(cell) = buffer.get_mut(x, y) {
                    cell.set_symbol(glyph).set_fg(style.gradient(cells, i)).set_bg(style.background);
                }
            }
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn render_braille(&self, area: Rect, buffer: &mut Buffer, style: &Style) {
        let columns = self.kind.axis_len(area);
        let window = self.history.latest(columns);
        let scaler = Scaler::new(self.scale, window.clone());
        let dot_rows = usize::from(area.height) * DOT_ROWS;
        let offset = columns - window.len();

        for (i, &value) in window.enumerate() {
            let sub = offset + i;
            let x = area.x + u16::try_from(sub / DOT_COLUMNS).unwrap_or(0);
            let column = sub % DOT_COLUMNS;
            let fraction = scaler.fraction(value);

            if self.kind == ChartKind::BrailleFilled {
                let filled = (fraction * dot_rows as f64).round() as usize;
                for r in 0..usize::from(area.height) {
                    let count = filled.saturating_sub(r * DOT_ROWS).min(DOT_ROWS);
                    if count == 0 {
                        break;
                    }
                    let y = area.bottom() - 1 - u16::try_from(r).unwrap_or(0);
                    or_dots(buffer, x, y, BrailleDots::column_fill(column, count), style);
                }
            } else {
                let level = (fraction * (dot_rows - 1) as f64).round() as usize;
                let y = area.bottom() - 1 - u16::try_from(level / DOT_ROWS).unwrap_or(0);
                let row = DOT_ROWS - 1 - level % DOT_ROWS;
                or_dots(buffer, x, y, BrailleDots::at(column, row), style);
            }
        }
    }
}

/// Merge `dots` into whatever Braille pattern the cell already holds.
fn or_dots(buffer: &mut Buffer, x: u16, y: u16, dots: BrailleDots, style: &Style) {
    if let Some(cell) = buffer.get_mut(x, y) {
        let existing = BrailleDots::from_char(cell.symbol()).unwrap_or_else(BrailleDots::empty);
        cell.set_symbol((existing | dots).to_char()).set_fg(style.color).set_bg(style.background);
    }
}

impl Widget for Chart {
    fn fit(&mut self, area: Rect) {
        if !area.is_empty() {
            self.history.set_capacity(self.kind.axis_len(area));
        }
    }

    fn render(&self, area: Rect, buffer: &mut Buffer, style: &Style) {
        if area.is_empty() || self.history.is_empty() {
            return;
        }
        match self.kind {
            ChartKind::Columns => self.render_columns(area, buffer, style),
            ChartKind::Rows => self.render_rows(area, buffer, style),
            ChartKind::BrailleLine | ChartKind::BrailleFilled => self.render_braille(area, buffer, style),
        }
    }
}
