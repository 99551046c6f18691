use serde::{Deserialize, Serialize};

/// How the column-generation loop terminated (spec §6/§7.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Convergence {
    /// No pattern with reduced cost below `-eps` exists.
    Optimal,
    /// The iteration cap was reached before convergence.
    IterationCap,
    /// The pricing oracle repeatedly returned a pattern already in the pool.
    Stalled,
}

/// One type's worth of cuts within a used pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutRecord {
    pub length: u32,
    pub quantity: u32,
}

/// A pool pattern that was assigned at least one roll in the final integer solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    pub id: usize,
    pub cuts: Vec<CutRecord>,
    pub total_length: u32,
    pub waste: u32,
    pub rolls_used: u32,
}

/// The composed outcome of a `solve` call (spec §3, §6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    pub total_rolls: u32,
    pub efficiency: f64,
    pub waste_percentage: f64,
    pub total_waste: u64,
    pub patterns: Vec<PatternRecord>,
    pub iterations: u32,
    pub patterns_evaluated: u32,
    pub convergence: Convergence,
}
