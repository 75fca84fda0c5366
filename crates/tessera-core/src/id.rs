//! The [`CellState`] alias and the [`GenerationId`] counter.

use std::fmt;

/// The state of a single grid cell.
///
/// State `0` is dead/empty; values `>= 1` are alive variants. The engine
/// configuration declares a cardinality `states`, making the expected
/// range `[0, states - 1]`, but writes are deliberately not clamped:
/// out-of-range values pass through unchanged.
pub type CellState = u16;

/// Monotonically increasing generation counter.
///
/// Zero at engine construction, incremented each time the simulation
/// advances one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenerationId(pub u64);

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GenerationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
