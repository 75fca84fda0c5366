//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the input for constructing an [`Engine`](crate::Engine).
//! [`validate()`](EngineConfig::validate) checks structural invariants at
//! construction time; everything it accepts yields a working engine.

use std::error::Error;
use std::fmt;

use tessera_core::RuleSet;
use tessera_grid::{Grid, GridError};
use tessera_space::Topology;

// ── ConfigError ─────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid dimensions are invalid.
    Grid(GridError),
    /// Fewer than two cell states were configured; the automaton needs
    /// at least dead (0) and alive (1).
    StateCountTooSmall {
        /// The configured state count.
        configured: u16,
    },
    /// The cell count does not fit in addressable memory.
    CellCountOverflow {
        /// The `width * height` product that overflowed.
        value: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::StateCountTooSmall { configured } => {
                write!(f, "states must be at least 2, got {configured}")
            }
            Self::CellCountOverflow { value } => {
                write!(f, "cell count {value} exceeds addressable memory")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── EngineConfig ────────────────────────────────────────────────

/// Complete configuration for constructing an engine.
///
/// `width`, `height`, `topology`, and `states` are fixed for the
/// engine's lifetime; only the rules can be replaced afterwards (via
/// `set_rules`). Changing topology means constructing a new engine.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Grid width in cells. Must be nonzero.
    pub width: u32,
    /// Grid height in cells. Must be nonzero.
    pub height: u32,
    /// Adjacency scheme used for neighbor counting.
    pub topology: Topology,
    /// Number of cell states, including dead. Must be at least 2.
    pub states: u16,
    /// Initial transition rules.
    pub rules: RuleSet,
}

impl EngineConfig {
    /// A `width * height` configuration with the conventional defaults:
    /// [`Topology::Square`], two states, classic Life rules.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            topology: Topology::Square,
            states: 2,
            rules: RuleSet::classic_life(),
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions must be nonzero and addressable with i32 coords.
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Grid(GridError::EmptyGrid));
        }
        if self.width > Grid::MAX_DIM {
            return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                name: "width",
                value: self.width,
                max: Grid::MAX_DIM,
            }));
        }
        if self.height > Grid::MAX_DIM {
            return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                name: "height",
                value: self.height,
                max: Grid::MAX_DIM,
            }));
        }
        // 2. At least dead and alive.
        if self.states < 2 {
            return Err(ConfigError::StateCountTooSmall {
                configured: self.states,
            });
        }
        // 3. Cell count must fit in usize.
        let cell_count = u64::from(self.width) * u64::from(self.height);
        if usize::try_from(cell_count).is_err() {
            return Err(ConfigError::CellCountOverflow { value: cell_count });
        }
        // Rules are deliberately not validated: counts beyond the
        // topology's degree are representable and never trigger.
        Ok(())
    }
}
