//! The [`Engine`] and its whole-grid transition step.

use std::time::Instant;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use tessera_codec::{decode_grid, encode_grid, CodecError};
use tessera_core::{CellState, GenerationId, RuleSet};
use tessera_grid::Grid;
use tessera_space::Topology;

use crate::config::{ConfigError, EngineConfig};
use crate::history::History;
use crate::metrics::StepMetrics;

/// A cellular-automaton engine: one grid, one rule set, one topology.
///
/// Constructed from a validated [`EngineConfig`]. All mutating methods
/// take `&mut self`; the borrow checker enforces the single-writer
/// model, and concurrent simulations are simply independent `Engine`
/// values with no shared state.
///
/// # Determinism
///
/// [`step()`](Engine::step) is a pure function of the current grid,
/// rules, and topology: two engines constructed identically and fed the
/// same mutation sequence produce identical grids after the same number
/// of steps.
pub struct Engine {
    topology: Topology,
    states: u16,
    rules: RuleSet,
    grid: Grid,
    history: History,
    generation: GenerationId,
    last_metrics: StepMetrics,
}

impl Engine {
    /// Create an engine from a configuration.
    ///
    /// Validates the configuration and allocates the all-zero starting
    /// grid at generation 0 with an empty history.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        Ok(Self {
            topology: config.topology,
            states: config.states,
            rules: config.rules,
            grid,
            history: History::new(),
            generation: GenerationId(0),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance the automaton one generation.
    ///
    /// Every cell is recomputed in row-major order from an immutable
    /// snapshot of the prior grid, so evaluation order cannot affect the
    /// result:
    ///
    /// - an alive cell whose alive-neighbor count is in the survive set
    ///   keeps its exact state value (multi-state identity is preserved
    ///   through survival);
    /// - a dead cell whose alive-neighbor count is in the born set
    ///   becomes state 1; newborns are always state 1, even in
    ///   multi-state configurations, a known limitation of this rule
    ///   family;
    /// - every other cell becomes 0.
    ///
    /// Alive-neighbor counting only distinguishes dead (0) from alive
    /// (> 0); off-grid neighbors are omitted, so edge cells see fewer
    /// samples. The pre-step grid is appended to the history before the
    /// successor is swapped in.
    pub fn step(&mut self) -> StepMetrics {
        let started = Instant::now();
        let width = self.grid.width();
        let mut next = Grid::new(width, self.grid.height())
            .expect("dimensions were validated at construction");

        let mut births = 0u64;
        let mut deaths = 0u64;
        let mut survivals = 0u64;

        for (i, &current) in self.grid.cells().iter().enumerate() {
            let x = (i % width as usize) as i32;
            let y = (i / width as usize) as i32;
            let alive = self
                .grid
                .neighbour_states(x, y, self.topology)
                .iter()
                .filter(|&&s| s > 0)
                .count() as u32;

            if current > 0 && self.rules.survive().contains(alive) {
                survivals += 1;
                next.set(x, y, current);
            } else if current == 0 && self.rules.born().contains(alive) {
                births += 1;
                next.set(x, y, 1);
            } else if current > 0 {
                deaths += 1;
            }
        }

        let previous = std::mem::replace(&mut self.grid, next);
        self.history.push(previous);
        self.generation = GenerationId(self.generation.0 + 1);

        let metrics = StepMetrics {
            generation: self.generation,
            births,
            deaths,
            survivals,
            alive: births + survivals,
            total_us: started.elapsed().as_micros() as u64,
        };
        self.last_metrics = metrics.clone();
        metrics
    }

    /// Set a single cell.
    ///
    /// Out-of-range coordinates are a silent no-op, and `state` is not
    /// validated against the configured cardinality; both are the
    /// grid's documented bounds contract.
    pub fn update_cell(&mut self, x: i32, y: i32, state: CellState) {
        self.grid.set(x, y, state);
    }

    /// Replace the transition rules wholesale; effective on the next step.
    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
    }

    /// Reset every cell to 0.
    ///
    /// History and generation are untouched; clearing is a mutation of
    /// the live grid, not a simulation step.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Fill the grid with a random soup.
    ///
    /// Each cell independently becomes state 1 with probability
    /// `density` (clamped to `[0, 1]`), else 0, in row-major order from
    /// a ChaCha8 stream seeded with `seed`. The same seed always
    /// produces the same grid.
    pub fn randomize(&mut self, seed: u64, density: f64) {
        let density = density.clamp(0.0, 1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.width() as i32 {
                let state = if rng.random::<f64>() < density { 1 } else { 0 };
                self.grid.set(x, y, state);
            }
        }
    }

    /// Serialize the current grid to its canonical text form.
    pub fn save_state(&self) -> String {
        encode_grid(&self.grid)
    }

    /// Replace the live grid with a previously saved state.
    ///
    /// The load takes effect only if `text` parses to a grid of exactly
    /// this engine's dimensions. On any failure the live grid, history,
    /// and generation are untouched and the error is surfaced:
    /// `Ok(())` means the load was applied.
    pub fn load_state(&mut self, text: &str) -> Result<(), CodecError> {
        let grid = decode_grid(text, self.grid.width(), self.grid.height())?;
        self.grid = grid;
        Ok(())
    }

    /// The live grid, row-major, for rendering collaborators.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The append-only log of pre-step snapshots.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of completed steps.
    pub fn generation(&self) -> GenerationId {
        self.generation
    }

    /// The active transition rules.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The adjacency scheme, fixed for the engine's lifetime.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// The configured cell-state cardinality.
    pub fn states(&self) -> u16 {
        self.states
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("topology", &self.topology)
            .field("states", &self.states)
            .field("generation", &self.generation)
            .field("history_len", &self.history.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(width: u32, height: u32) -> Engine {
        Engine::new(EngineConfig::new(width, height)).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_engine_starts_empty_at_generation_zero() {
        let engine = engine(4, 3);
        assert_eq!(engine.generation(), GenerationId(0));
        assert!(engine.history().is_empty());
        assert_eq!(engine.grid().cell_count(), 12);
        assert!(engine.grid().cells().iter().all(|&s| s == 0));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = EngineConfig {
            states: 1,
            ..EngineConfig::new(4, 4)
        };
        assert!(matches!(
            Engine::new(cfg),
            Err(ConfigError::StateCountTooSmall { configured: 1 })
        ));
    }

    // ── Stepping ────────────────────────────────────────────────

    #[test]
    fn lone_cell_dies() {
        let mut engine = engine(3, 3);
        engine.update_cell(1, 1, 1);
        engine.step();
        assert!(engine.grid().cells().iter().all(|&s| s == 0));
    }

    #[test]
    fn step_increments_generation_and_appends_history() {
        let mut engine = engine(3, 3);
        engine.update_cell(1, 1, 1);
        let before = engine.grid().clone();

        let metrics = engine.step();
        assert_eq!(engine.generation(), GenerationId(1));
        assert_eq!(metrics.generation, GenerationId(1));
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.history().latest(), Some(&before));

        engine.step();
        assert_eq!(engine.generation(), GenerationId(2));
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn history_snapshots_are_not_aliased_by_later_steps() {
        let mut engine = engine(5, 5);
        // Blinker: stable population, changing shape.
        for x in 1..=3 {
            engine.update_cell(x, 2, 1);
        }
        let initial = engine.grid().clone();
        engine.step();
        engine.step();
        engine.update_cell(0, 0, 9);
        assert_eq!(engine.history().get(0), Some(&initial));
    }

    #[test]
    fn metrics_account_for_every_transition() {
        let mut engine = engine(5, 5);
        for x in 1..=3 {
            engine.update_cell(x, 2, 1);
        }
        let metrics = engine.step();
        // Blinker: endpoints die, center survives, two cells are born.
        assert_eq!(metrics.deaths, 2);
        assert_eq!(metrics.survivals, 1);
        assert_eq!(metrics.births, 2);
        assert_eq!(metrics.alive, 3);
        let alive_now = engine.grid().cells().iter().filter(|&&s| s > 0).count();
        assert_eq!(metrics.alive as usize, alive_now);
    }

    #[test]
    fn set_rules_takes_effect_on_next_step() {
        let mut engine = engine(3, 3);
        engine.update_cell(1, 1, 1);
        // Under "0/" a lone cell (zero alive neighbors) survives forever.
        engine.set_rules("0/".parse().unwrap());
        engine.step();
        assert_eq!(engine.grid().get(1, 1), Some(1));
    }

    // ── Cell mutation ───────────────────────────────────────────

    #[test]
    fn update_cell_out_of_range_is_noop() {
        let mut engine = engine(3, 3);
        let before = engine.grid().clone();
        engine.update_cell(-1, 0, 5);
        engine.update_cell(0, 7, 5);
        assert_eq!(engine.grid(), &before);
    }

    #[test]
    fn update_cell_does_not_clamp_to_state_count() {
        // states = 2, but a write of 9 passes through unchanged.
        let mut engine = engine(3, 3);
        engine.update_cell(0, 0, 9);
        assert_eq!(engine.grid().get(0, 0), Some(9));
    }

    #[test]
    fn clear_rezeros_without_touching_history() {
        let mut engine = engine(3, 3);
        engine.update_cell(1, 1, 1);
        engine.step();
        engine.update_cell(0, 0, 2);
        engine.clear();
        assert!(engine.grid().cells().iter().all(|&s| s == 0));
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.generation(), GenerationId(1));
    }

    // ── Randomize ───────────────────────────────────────────────

    #[test]
    fn randomize_is_deterministic_per_seed() {
        let mut a = engine(16, 16);
        let mut b = engine(16, 16);
        a.randomize(42, 0.3);
        b.randomize(42, 0.3);
        assert_eq!(a.grid(), b.grid());

        let mut c = engine(16, 16);
        c.randomize(43, 0.3);
        assert_ne!(a.grid(), c.grid());
    }

    #[test]
    fn randomize_density_extremes() {
        let mut engine = engine(8, 8);
        engine.randomize(1, 0.0);
        assert!(engine.grid().cells().iter().all(|&s| s == 0));
        engine.randomize(1, 1.0);
        assert!(engine.grid().cells().iter().all(|&s| s == 1));
        // Out-of-range densities clamp rather than misbehave.
        engine.randomize(1, -3.0);
        assert!(engine.grid().cells().iter().all(|&s| s == 0));
    }

    // ── Persistence ─────────────────────────────────────────────

    #[test]
    fn save_load_roundtrip_is_identity() {
        let mut engine = engine(6, 4);
        engine.randomize(7, 0.4);
        engine.update_cell(2, 2, 3);
        let before = engine.grid().clone();
        let saved = engine.save_state();
        engine.load_state(&saved).unwrap();
        assert_eq!(engine.grid(), &before);
    }

    #[test]
    fn load_state_dimension_mismatch_leaves_grid_untouched() {
        let mut engine = engine(3, 3);
        engine.update_cell(1, 1, 1);
        let before = engine.grid().clone();
        let err = engine.load_state("[[0,0],[0,0]]").unwrap_err();
        assert!(matches!(err, CodecError::DimensionMismatch { .. }));
        assert_eq!(engine.grid(), &before);
    }

    #[test]
    fn load_state_malformed_leaves_grid_untouched() {
        let mut engine = engine(2, 2);
        engine.update_cell(0, 1, 2);
        let before = engine.grid().clone();
        let err = engine.load_state("[[0,1],[oops]]").unwrap_err();
        assert!(matches!(err, CodecError::MalformedState { .. }));
        assert_eq!(engine.grid(), &before);
    }
}
