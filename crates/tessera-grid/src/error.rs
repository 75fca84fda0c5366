//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
///
/// Cell *access* is never an error: reads outside the grid yield `None`
/// and writes outside the grid are silent no-ops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the maximum addressable size.
    DimensionTooLarge {
        /// Which dimension overflowed (`"width"` or `"height"`).
        name: &'static str,
        /// The configured size that was too large.
        value: u32,
        /// The maximum supported size.
        max: u32,
    },
    /// Row data supplied to [`Grid::from_rows`](crate::Grid::from_rows)
    /// has inconsistent row lengths.
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Length of row 0, which every row must match.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::RaggedRows {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "row {row} has {found} cells, expected {expected} to match row 0"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
