//! Weighted splitting of an extent among ordered children.
//!
//! Each child receives `floor(available * weight / total)` cells; the cells
//! lost to flooring are handed out one at a time to the leading children.
//! The result always sums to `available` exactly, so siblings tile their
//! parent without gaps or overlap.

use super::Rect;

/// Axis along which a container lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children sit side by side; the width is divided.
    Horizontal,
    /// Children are stacked; the height is divided.
    Vertical,
}

/// Split `available` cells proportionally to `weights`.
///
/// A zero total weight gives every child zero cells.
pub fn split_extents(available: u16, weights: &[u32]) -> Vec<u16> {
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return vec![0; weights.len()];
    }

    let mut extents: Vec<u16> = weights
        .iter()
        .map(|&w| {
            let share = u64::from(available) * u64::from(w) / total;
            // share <= available, so this never saturates.
            u16::try_from(share).unwrap_or(available)
        })
        .collect();

    let used: u16 = extents.iter().copied().sum();
    let remainder = usize::from(available - used);
    for extent in extents.iter_mut().take(remainder) {
        *extent += 1;
    }
    extents
}

/// Partition `area` among children with the given weights.
///
/// The cross-axis extent of every child equals that of `area`.
pub fn partition(area: Rect, orientation: Orientation, weights: &[u32]) -> Vec<Rect> {
    let available = match orientation {
        Orientation::Horizontal => area.width,
        Orientation::Vertical => area.height,
    };
    let mut offset = 0;
    split_extents(available, weights)
        .into_iter()
        .map(|extent| {
            let rect = match orientation {
                Orientation::Horizontal => Rect::new(area.x + offset, area.y, extent, area.height),
                Orientation::Vertical => Rect::new(area.x, area.y + offset, area.width, extent),
            };
            offset += extent;
            rect
        })
        .collect()
}
