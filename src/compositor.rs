//! Compositor: lays out a tile tree, paints it into an off-screen frame and
//! emits the result through a [`Terminal`].
//!
//! A frame is fully painted before the first byte reaches the terminal, so
//! a failing widget or layout can never leave half a frame on screen. With
//! incremental output enabled the previous frame is kept and only cells
//! that changed are sent.

use crate::buffer::diff::{collect_runs, Run};
use crate::buffer::{Buffer, Cell};
use crate::error::Result;
use crate::layout::{self, Placement, Rect};
use crate::terminal::Terminal;
use crate::tile::{decoration, Style, Tile, TileKind};
use std::slice;
use tracing::{debug, debug_span, warn};

/// Compositor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositorConfig {
    /// Only emit cells that differ from the previous frame.
    pub incremental: bool,
    /// Leave the cursor at the bottom-left corner after each frame.
    pub park_cursor: bool,
    /// Colors used where no tile sets its own.
    pub theme: Style,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            incremental: true,
            park_cursor: true,
            theme: Style::default(),
        }
    }
}

/// What one call to [`Compositor::display`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame width in cells.
    pub width: u16,
    /// Frame height in cells.
    pub height: u16,
    /// Tiles laid out, containers included.
    pub tiles: usize,
    /// Cells sent to the terminal.
    pub cells_written: usize,
    /// Styled writes issued.
    pub runs: usize,
}

/// Turns a tile tree into terminal output, frame after frame.
#[derive(Debug, Clone)]
pub struct Compositor {
    config: CompositorConfig,
    frame: Buffer,
    previous: Option<Buffer>,
    runs: Vec<Run>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(CompositorConfig::default())
    }
}

impl Compositor {
    /// Create a compositor with the given configuration.
    pub fn new(config: CompositorConfig) -> Self {
        Self {
            config,
            frame: Buffer::new(0, 0),
            previous: None,
            runs: Vec::new(),
        }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// Replace the colors used where no tile sets its own.
    ///
    /// Takes effect on the next display.
    pub fn set_theme(&mut self, theme: Style) {
        self.config.theme = theme;
    }

    /// The most recently painted frame.
    pub const fn frame(&self) -> &Buffer {
        &self.frame
    }

    /// Forget the previous frame so the next display emits every cell.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Lay out, paint and emit `root` to `terminal`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be queried or written to.
    /// Nothing is written for a frame unless it was painted completely.
    pub fn display<T: Terminal + ?Sized>(&mut self, root: &mut Tile, terminal: &mut T) -> Result<FrameStats> {
        let (width, height) = terminal.dimensions()?;
        let span = debug_span!("display", width, height);
        let _enter = span.enter();

        let placements = layout::compute(root, Rect::from_size(width, height));
        if self.frame.width() == width && self.frame.height() == height {
            self.frame.clear();
        } else {
            self.frame.resize(width, height);
        }
        let mut cursor = placements.iter();
        paint(root, &self.config.theme, &mut cursor, &mut self.frame);

        let previous = if self.config.incremental {
            self.previous.as_ref()
        } else {
            None
        };
        let diff = collect_runs(previous, &self.frame, &mut self.runs);

        if let Err(err) = self.emit(terminal, height) {
            // Screen state unknown; next frame is a full redraw.
            warn!(error = %err, "frame emission failed");
            self.previous = None;
            return Err(err);
        }

        match &mut self.previous {
            Some(previous) => previous.clone_from(&self.frame),
            None => self.previous = Some(self.frame.clone()),
        }

        let stats = FrameStats {
            width,
            height,
            tiles: placements.len(),
            cells_written: diff.cells_changed,
            runs: diff.runs,
        };
        debug!(tiles = stats.tiles, cells = stats.cells_written, runs = stats.runs, "frame emitted");
        Ok(stats)
    }

    fn emit<T: Terminal + ?Sized>(&self, terminal: &mut T, height: u16) -> Result<()> {
        for run in &self.runs {
            terminal.move_cursor(run.x, run.y)?;
            terminal.write_styled(&run.text, run.fg, run.bg)?;
        }
        if self.config.park_cursor && height > 0 {
            terminal.move_cursor(0, height - 1)?;
        }
        terminal.reset_style()?;
        terminal.flush()
    }
}

/// Paint `tile` and its descendants, consuming their placements in preorder.
fn paint(tile: &mut Tile, inherited: &Style, placements: &mut slice::Iter<'_, Placement>, frame: &mut Buffer) {
    let Some(&Placement { area, inner }) = placements.next() else {
        return;
    };
    let style = tile.overrides().resolve(inherited);

    if tile.overrides().background.is_some() {
        frame.fill(area, Cell::EMPTY.with_bg(style.background));
    }
    if tile.is_decorated() {
        decoration::paint(area, tile.title_text(), &style, frame);
    }

    if let Some(widget) = tile.widget_mut() {
        widget.fit(inner);
        widget.render(inner, frame, &style);
        return;
    }
    if let TileKind::Split { items, .. } = tile.kind_mut() {
        for child in items {
            paint(child, &style, placements, frame);
        }
    }
}
