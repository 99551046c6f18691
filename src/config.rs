//! Driver tunables (SPEC_FULL §E).
//!
//! The source hardcodes an iteration cap of 50 and a reduced-cost threshold
//! of `1e-5` (`original_source/server/cutting_stock_solver.py`,
//! `self.reduced_cost_threshold` and `max_iterations`). This crate exposes
//! both as a small config struct, in the manner `russcip::model::Model`
//! exposes solver tunables through builder methods (`set_time_limit`,
//! `set_presolving`) rather than module-level constants.

/// Tunables for the column-generation [`crate::driver::Driver`].
#[derive(Debug, Clone, Copy)]
pub struct DriverConfig {
    /// Iteration cap `K` from spec §4.4 (default 50).
    pub iteration_cap: u32,
    /// Reduced-cost convergence tolerance `eps` from spec §3 (default 1e-5).
    pub reduced_cost_eps: f64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            iteration_cap: 50,
            reduced_cost_eps: 1e-5,
        }
    }
}
