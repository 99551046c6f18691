//! The data model (spec §3): problem instances, patterns, and results.

pub mod pattern;
pub mod problem;
pub mod result;

pub use pattern::{Pattern, PatternPool};
pub use problem::{Demand, ProblemInstance};
pub use result::{Convergence, CutRecord, PatternRecord, SolveResult};
