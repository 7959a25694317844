//! Glyph quantizers: numbers in, glyphs out.
//!
//! - [`block`]: eighth-cell block elements for bars and filled charts
//! - [`braille`]: 2x4 dot packing into the Braille Patterns block

pub mod block;
pub mod braille;

pub use block::{Fill, EIGHTHS_PER_CELL};
pub use braille::BrailleDots;
