//! Error types for the grid codec.

use std::fmt;

/// Errors that can occur while decoding a serialized grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// The text could not be parsed into a rectangular grid.
    MalformedState {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The decoded grid's dimensions do not match the expected ones.
    ///
    /// Surfaced instead of silently discarding the input; the caller's
    /// live grid is left untouched.
    DimensionMismatch {
        /// Width the caller expected.
        expected_width: u32,
        /// Height the caller expected.
        expected_height: u32,
        /// Width found in the serialized text.
        width: u32,
        /// Height found in the serialized text.
        height: u32,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedState { detail } => write!(f, "malformed grid state: {detail}"),
            Self::DimensionMismatch {
                expected_width,
                expected_height,
                width,
                height,
            } => {
                write!(
                    f,
                    "grid dimension mismatch: expected {expected_width}x{expected_height}, \
                     found {width}x{height}"
                )
            }
        }
    }
}

impl std::error::Error for CodecError {}
