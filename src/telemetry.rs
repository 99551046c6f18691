//! Non-core performance telemetry (spec §9, SPEC_FULL §C).
//!
//! Mirrors the source's `performance` block (`executionTime`, `memoryUsage`)
//! but is attached by the binary after [`crate::driver::Driver::solve`]
//! returns — it is never read by the core and cannot influence its
//! decisions. Since the pool itself is dropped when `solve` returns (spec §3
//! "Ownership and lifecycle"), the memory estimate is derived from
//! `patterns_evaluated`, the one pool-size proxy the core does return.

use std::mem::size_of;

use serde::Serialize;

use crate::model::Pattern;

#[derive(Debug, Clone, Serialize)]
pub struct Telemetry {
    pub execution_time_ms: f64,
    pub memory_estimate_bytes: usize,
}

impl Telemetry {
    /// `patterns_evaluated` and `num_types` come straight off the
    /// [`crate::model::SolveResult`] this telemetry accompanies.
    pub fn new(execution_time_ms: f64, patterns_evaluated: u32, num_types: usize) -> Self {
        let per_pattern = size_of::<Pattern>() + num_types * size_of::<u32>();
        let memory_estimate_bytes = patterns_evaluated as usize * per_pattern;

        Telemetry {
            execution_time_ms,
            memory_estimate_bytes,
        }
    }
}
