//! The tessera simulation engine.
//!
//! [`Engine`] owns one grid, one rule set, and one topology selection,
//! and advances the automaton one whole-grid step at a time. Each step
//! reads only an immutable snapshot of the prior grid, appends that
//! snapshot to an audit [`History`], and swaps in a freshly allocated
//! successor. There is no in-place mutation and no aliasing between
//! the live grid and history entries.
//!
//! The engine is synchronous and single-writer: all mutating operations
//! take `&mut self`, so the borrow checker enforces the exclusive-access
//! model. Concurrent simulations are independent `Engine` values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod history;
pub mod metrics;

pub use config::{ConfigError, EngineConfig};
pub use engine::Engine;
pub use history::History;
pub use metrics::StepMetrics;
