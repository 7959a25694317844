//! # Tilewall
//!
//! Composable terminal dashboards: a tree of tiles laid out proportionally
//! over the terminal and redrawn on demand.
//!
//! Containers split their area among children by weight; leaves hold widget
//! state such as gauges, scrolling logs and auto-scaling charts. Each call to
//! [`Compositor::display`] lays the tree out for the current terminal size,
//! paints it into an off-screen [`Buffer`] and emits the result in one write.
//!
//! ## Core Concepts
//!
//! - **Proportional layout**: exact integer splits, remainders to the leading children
//! - **Sub-cell glyphs**: eighth-block bars and 2x4 Braille dot charts
//! - **Style inheritance**: colors flow from ancestors unless a tile overrides them
//! - **Frame atomicity**: nothing reaches the terminal until a frame is fully painted
//!
//! ## Example
//!
//! ```rust
//! use tilewall::color::Rgb;
//! use tilewall::terminal::MemoryTerminal;
//! use tilewall::tile::Tile;
//!
//! let mut root = Tile::vsplit(vec![
//!     Tile::hgauge(50.0).title("cpu").border_color(Rgb::palette(2)),
//!     Tile::log().title("events"),
//! ]);
//! root.child_mut(&[1]).and_then(Tile::as_log_mut).unwrap().append("ready");
//!
//! let mut terminal = MemoryTerminal::new(20, 8);
//! root.display(&mut terminal).unwrap();
//! assert_eq!(terminal.row_text(0), "┌─ cpu ────────────┐");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod color;
pub mod compositor;
pub mod error;
pub mod glyph;
pub mod layout;
pub mod terminal;
pub mod tile;
pub mod widget;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, CellFlags};
pub use color::Rgb;
pub use compositor::{Compositor, CompositorConfig, FrameStats};
pub use error::{Error, Result};
pub use layout::{Orientation, Placement, Rect};
pub use terminal::{AnsiTerminal, MemoryTerminal, SessionConfig, Terminal, TerminalSession};
pub use tile::{Style, Tile, TileKind};
pub use widget::{Chart, ChartKind, ChartScale, ColorMap, ColorRangeGauge, Gauge, Log, Text, Widget};
