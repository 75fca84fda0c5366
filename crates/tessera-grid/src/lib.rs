//! Cell storage for tessera simulations.
//!
//! [`Grid`] owns a fixed-size rectangular array of cell states in flat
//! row-major layout and enforces the bounds contract every other crate
//! relies on: out-of-range reads yield `None`, out-of-range writes are
//! silent no-ops, and neighbor sampling omits off-grid cells instead of
//! zero-filling them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
