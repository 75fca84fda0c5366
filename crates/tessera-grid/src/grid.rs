//! The [`Grid`] cell array.

use smallvec::SmallVec;
use tessera_core::CellState;
use tessera_space::Topology;

use crate::error::GridError;

/// A fixed-size rectangular array of cell states.
///
/// Storage is a flat row-major `Vec`: cell `(x, y)` lives at index
/// `y * width + x`. Dimensions are fixed for the grid's lifetime; the
/// engine replaces the whole grid value on each step rather than
/// mutating it in place, so a held snapshot is never aliased by later
/// simulation state.
///
/// # Bounds contract
///
/// [`get`](Grid::get) returns `None` for out-of-range coordinates and
/// [`set`](Grid::set) silently ignores them. This matches how painting
/// collaborators drive the grid: clicks may land outside it. Callers
/// that need to detect out-of-range writes must pre-check against
/// [`width`](Grid::width)/[`height`](Grid::height).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-zero grid with `width * height` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![0; (width as usize) * (height as usize)],
        })
    }

    /// Build a grid from row-major row data.
    ///
    /// Row 0 fixes the width; every subsequent row must match it exactly.
    /// Used by the state codec when reconstructing a decoded grid.
    pub fn from_rows(rows: &[Vec<CellState>]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        for (row, data) in rows.iter().enumerate() {
            if data.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    found: data.len(),
                });
            }
        }
        let clamp_u32 = |v: usize| u32::try_from(v).unwrap_or(u32::MAX);
        let mut grid = Self::new(clamp_u32(width), clamp_u32(height))?;
        for (y, data) in rows.iter().enumerate() {
            let start = y * width;
            grid.cells[start..start + width].copy_from_slice(data);
        }
        Ok(grid)
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Map a coordinate to its flat index, or `None` if out of range.
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Read the state at `(x, y)`, or `None` if out of range.
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write `state` at `(x, y)`; out-of-range coordinates are a no-op.
    ///
    /// The state value is not validated against the configured cardinality;
    /// out-of-range values pass through unchanged.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = state;
        }
    }

    /// Reset every cell to 0.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Row-major read access to every cell, for rendering collaborators.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Sample the neighbor states of `(x, y)` under `topology`.
    ///
    /// Offsets are applied in the topology's table order. Off-grid
    /// neighbors are omitted, not treated as dead: edge and corner cells
    /// yield fewer samples, which directly affects alive-neighbor counts.
    pub fn neighbour_states(
        &self,
        x: i32,
        y: i32,
        topology: Topology,
    ) -> SmallVec<[CellState; 8]> {
        let mut states = SmallVec::new();
        for &(dx, dy) in topology.offsets() {
            // Saturation is safe: a coordinate at i32::MAX/MIN is always
            // out of bounds, since dimensions are capped below i32::MAX.
            let nx = x.saturating_add(dx);
            let ny = y.saturating_add(dy);
            if let Some(state) = self.get(nx, ny) {
                states.push(state);
            }
        }
        states
    }
}
