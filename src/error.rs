//! Error types for tilewall operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or displaying a tile tree.
///
/// Configuration problems are reported when a tile is built or mutated.
/// Painting itself never fails; only talking to the terminal can.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while writing to or querying the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A color-range gauge needs at least one `(threshold, color)` entry.
    #[error("color map must contain at least one entry")]
    EmptyColorMap,

    /// Color-map thresholds must be non-decreasing.
    #[error("color map threshold at index {index} is lower than its predecessor")]
    UnsortedColorMap {
        /// Index of the first out-of-order entry.
        index: usize,
    },

    /// Layout weights must be at least 1.
    #[error("layout weight must be non-zero")]
    InvalidWeight,

    /// Children can only be added to split tiles.
    #[error("tile is not a container")]
    NotAContainer,

    /// Color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The terminal collaborator failed for a reason other than I/O.
    #[error("terminal error: {0}")]
    Terminal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsortedColorMap { index: 2 };
        assert!(err.to_string().contains("index 2"));
        assert!(Error::InvalidColor("#zz".into()).to_string().contains("#zz"));
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
