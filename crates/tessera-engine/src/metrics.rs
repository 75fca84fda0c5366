//! Per-step counters for the simulation engine.
//!
//! [`StepMetrics`] captures what one `step()` did to the population,
//! enabling telemetry and driving-loop readouts without a logging
//! dependency. The engine populates a fresh value on every step;
//! consumers read it from the step's return value or from
//! `last_metrics()`.

use tessera_core::GenerationId;

/// Counters describing a single completed step.
#[derive(Clone, Debug, Default)]
pub struct StepMetrics {
    /// Generation the grid advanced to.
    pub generation: GenerationId,
    /// Dead cells that became alive (always as state 1).
    pub births: u64,
    /// Alive cells that died.
    pub deaths: u64,
    /// Alive cells that kept their state.
    pub survivals: u64,
    /// Alive cells in the new grid (`births + survivals`).
    pub alive: u64,
    /// Wall-clock time for the step, in microseconds.
    pub total_us: u64,
}
