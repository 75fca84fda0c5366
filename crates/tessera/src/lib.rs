//! Tessera: a configurable cellular-automaton engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all tessera sub-crates. For most users, adding `tessera` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! // A 5x5 Square-topology grid with classic Life rules.
//! let mut engine = Engine::new(EngineConfig::new(5, 5)).unwrap();
//!
//! // Paint a horizontal blinker and advance one generation.
//! for x in 1..=3 {
//!     engine.update_cell(x, 2, 1);
//! }
//! let metrics = engine.step();
//! assert_eq!(metrics.alive, 3);
//! assert_eq!(engine.grid().get(2, 1), Some(1)); // now vertical
//!
//! // Snapshot the grid as text and restore it later.
//! let saved = engine.save_state();
//! engine.clear();
//! engine.load_state(&saved).unwrap();
//! assert_eq!(engine.generation(), GenerationId(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | Cell states, generation IDs, rule sets |
//! | [`space`] | `tessera-space` | Grid topologies and neighbor offsets |
//! | [`grid`] | `tessera-grid` | Cell storage and bounds-checked access |
//! | [`codec`] | `tessera-codec` | Text serialization of grid snapshots |
//! | [`engine`] | `tessera-engine` | The simulation engine and history |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell states, generation IDs, and rule sets (`tessera-core`).
///
/// Contains [`types::RuleSet`] with its `"2,3/3"` rulestring parsing,
/// the [`types::CountSet`] bitset, and the [`types::CellState`] alias.
pub use tessera_core as types;

/// Grid topologies and neighbor offsets (`tessera-space`).
///
/// Provides the closed [`space::Topology`] enum (Square with its Moore 8
/// neighborhood, Hex with 6, Triangle with 4) and its tag parsing.
pub use tessera_space as space;

/// Cell storage and bounds-checked access (`tessera-grid`).
///
/// [`grid::Grid`] owns the flat row-major cell array and enforces the
/// silent-out-of-bounds contract.
pub use tessera_grid as grid;

/// Text serialization of grid snapshots (`tessera-codec`).
///
/// [`codec::encode_grid`] and [`codec::decode_grid`] implement the
/// nested row-major array format.
pub use tessera_codec as codec;

/// The simulation engine and history (`tessera-engine`).
///
/// [`engine::Engine`] drives stepping, cell mutation, rule replacement,
/// randomization, and state persistence.
pub use tessera_engine as engine;

/// Common imports for typical tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
///
/// This imports the engine and its configuration, the topology and rule
/// types, the grid, and the error types a caller can encounter.
pub mod prelude {
    // Core types
    pub use tessera_core::{CellState, CountSet, GenerationId, RuleSet};

    // Space
    pub use tessera_space::Topology;

    // Grid
    pub use tessera_grid::Grid;

    // Codec
    pub use tessera_codec::{decode_grid, encode_grid};

    // Errors
    pub use tessera_codec::CodecError;
    pub use tessera_core::RuleError;
    pub use tessera_engine::ConfigError;
    pub use tessera_grid::GridError;
    pub use tessera_space::TopologyError;

    // Engine
    pub use tessera_engine::{Engine, EngineConfig, History, StepMetrics};
}
