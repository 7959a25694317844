//! Buffer module: the cell grid frames are composited into.
//!
//! This module contains:
//! - [`Cell`]: one glyph with foreground/background colors
//! - [`Buffer`]: a clipped grid of cells sized to the terminal
//! - [`diff`]: run extraction between the previous and next frame

mod cell;
#[allow(clippy::module_inception)]
mod buffer;
pub mod diff;

pub use cell::{Cell, CellFlags};
pub use buffer::Buffer;
