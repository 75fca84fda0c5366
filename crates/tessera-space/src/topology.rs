//! The [`Topology`] enum and its neighbor-offset tables.

use std::fmt;
use std::str::FromStr;

use crate::error::TopologyError;

/// All 8 Moore offsets: NW, N, NE, W, E, SW, S, SE.
const SQUARE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Six axial-style offsets: E, S, SW, W, N, NE.
const HEX_OFFSETS: [(i32, i32); 6] = [(1, 0), (0, 1), (-1, 1), (-1, 0), (0, -1), (1, -1)];

/// Four cardinal offsets: E, W, S, N.
const TRIANGLE_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The adjacency scheme applied to a rectangular cell array.
///
/// Each variant maps to a fixed, ordered table of `(dx, dy)` offsets.
/// All three schemes index into the same square array: [`Hex`] and
/// [`Triangle`] are adjacency approximations layered onto it, not native
/// hex or triangular lattices.
///
/// A topology is selected once per engine and fixed for its lifetime;
/// changing topology means constructing a new engine.
///
/// [`Hex`]: Topology::Hex
/// [`Triangle`]: Topology::Triangle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// The 8-connected Moore neighborhood (cardinals plus diagonals).
    Square,
    /// Six neighbors in an axial-style arrangement.
    Hex,
    /// Four cardinal neighbors (von Neumann).
    Triangle,
}

impl Topology {
    /// Every supported topology, in declaration order.
    pub const ALL: [Topology; 3] = [Topology::Square, Topology::Hex, Topology::Triangle];

    /// The ordered neighbor offsets for this topology.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Square => &SQUARE_OFFSETS,
            Self::Hex => &HEX_OFFSETS,
            Self::Triangle => &TRIANGLE_OFFSETS,
        }
    }

    /// Maximum number of neighbors an interior cell can have.
    ///
    /// Edge and corner cells have fewer: off-grid neighbors are omitted,
    /// not zero-filled.
    pub fn max_neighbours(self) -> usize {
        self.offsets().len()
    }

    /// The canonical configuration tag for this topology.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Hex => "hex",
            Self::Triangle => "triangle",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Topology {
    type Err = TopologyError;

    /// Parse a configuration tag.
    ///
    /// Only the exact tags `"square"`, `"hex"`, and `"triangle"` are
    /// accepted; anything else is [`TopologyError::UnsupportedTag`].
    fn from_str(s: &str) -> Result<Self, TopologyError> {
        match s {
            "square" => Ok(Self::Square),
            "hex" => Ok(Self::Hex),
            "triangle" => Ok(Self::Triangle),
            other => Err(TopologyError::UnsupportedTag {
                tag: other.to_string(),
            }),
        }
    }
}
