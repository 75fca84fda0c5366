//! Error types for topology selection.

use std::fmt;

/// Errors arising from topology tag parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// A grid-type tag does not name a supported topology.
    ///
    /// Construction fails fast rather than silently defaulting to
    /// [`Topology::Square`](crate::Topology::Square).
    UnsupportedTag {
        /// The unrecognized tag.
        tag: String,
    },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedTag { tag } => {
                write!(
                    f,
                    "unsupported grid type {tag:?} (expected \"square\", \"hex\", or \"triangle\")"
                )
            }
        }
    }
}

impl std::error::Error for TopologyError {}
