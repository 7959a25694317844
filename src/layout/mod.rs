//! Layout module: proportional geometry for a tile tree.
//!
//! Geometry is recomputed for every frame from the terminal size and
//! returned as a flat, preorder list of [`Placement`]s. Nothing is cached
//! on the tiles, so a resize can never leave stale rectangles behind.
//!
//! Clipping is outermost-first: a decorated tile always keeps its own
//! border when its area is at least 2x2, and its children share whatever
//! interior remains, down to zero cells.

mod rect;
mod split;

pub use rect::Rect;
pub use split::{partition, split_extents, Orientation};

use crate::tile::{decoration, Tile, TileKind};
use tracing::{debug, trace};

/// Where one tile lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Full area including border and title.
    pub area: Rect,
    /// Area left for content or children.
    pub inner: Rect,
}

/// Compute placements for `root` and all descendants within `area`.
///
/// The result is in preorder: a tile comes before its children, and
/// siblings appear in their layout order.
pub fn compute(root: &Tile, area: Rect) -> Vec<Placement> {
    let mut placements = Vec::new();
    place(root, area, 0, &mut placements);
    placements
}

fn place(tile: &Tile, area: Rect, depth: usize, placements: &mut Vec<Placement>) {
    let inner = if tile.is_decorated() {
        decoration::interior(area)
    } else {
        area
    };
    trace!(depth, ?area, ?inner, "placed tile");
    if inner.is_empty() {
        debug!(depth, ?area, "tile degraded to zero area");
    }
    placements.push(Placement { area, inner });

    if let TileKind::Split { orientation, items } = tile.kind() {
        let weights: Vec<u32> = items.iter().map(|child| child.weight(*orientation)).collect();
        for (child, rect) in items.iter().zip(partition(inner, *orientation, &weights)) {
            place(child, rect, depth + 1, placements);
        }
    }
}
