//! Knapsack Pricing Oracle (spec §4.3).
//!
//! Given the master LP's dual prices, finds the single pattern with the most
//! negative reduced cost, or proves none exists.

use crate::error::Result;
use crate::model::Pattern;
use crate::solver::{LpIpSolver, LpModel, Row, Sense};

pub struct PricingOracle {
    lengths: Vec<u32>,
    master_length: u32,
}

impl PricingOracle {
    pub fn new(lengths: Vec<u32>, master_length: u32) -> Self {
        PricingOracle {
            lengths,
            master_length,
        }
    }

    /// Solves `maximize sum(pi[i] * y[i]) s.t. sum(length[i] * y[i]) <= master_length`
    /// and returns the resulting pattern together with its reduced cost
    /// `r = 1 - pi . y*` (spec §4.3).
    ///
    /// Because `pi[i] >= 0` and `master_length >= length[i]` for every `i`
    /// (checked by [`crate::model::problem::ProblemInstance::validate`]), this
    /// subproblem is always feasible — the all-zero pattern is trivially
    /// feasible with objective `0`.
    pub fn price(&self, duals: &[f64], solver: &dyn LpIpSolver) -> Result<(Pattern, f64)> {
        let row = Row::le(
            self.lengths
                .iter()
                .enumerate()
                .map(|(i, &length)| (i, f64::from(length)))
                .collect(),
            f64::from(self.master_length),
        );

        let model = LpModel {
            sense: Sense::Maximize,
            objective: duals.to_vec(),
            rows: vec![row],
        };

        let outcome = solver.solve_ip(&model)?;
        let counts: Vec<u32> = outcome.primal.iter().map(|&v| v.round() as u32).collect();
        let reduced_cost = 1.0 - outcome.objective;

        Ok((Pattern::new(counts), reduced_cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SolveOutcome, SolveStatus};

    struct FakeSolver {
        primal: Vec<f64>,
        objective: f64,
    }

    impl LpIpSolver for FakeSolver {
        fn solve_lp(&self, _model: &LpModel) -> Result<SolveOutcome> {
            unreachable!("the oracle only solves integer programs")
        }

        fn solve_ip(&self, _model: &LpModel) -> Result<SolveOutcome> {
            Ok(SolveOutcome {
                primal: self.primal.clone(),
                duals: Vec::new(),
                objective: self.objective,
                status: SolveStatus::Optimal,
            })
        }
    }

    #[test]
    fn converges_when_subproblem_objective_is_at_most_one() {
        let oracle = PricingOracle::new(vec![40, 60], 100);
        let solver = FakeSolver {
            primal: vec![0.0, 0.0],
            objective: 0.0,
        };
        let (pattern, reduced_cost) = oracle.price(&[0.5, 0.5], &solver).unwrap();
        assert_eq!(pattern.counts, vec![0, 0]);
        assert_eq!(reduced_cost, 1.0);
    }

    #[test]
    fn reports_negative_reduced_cost_when_pattern_improves_master() {
        let oracle = PricingOracle::new(vec![40, 60], 100);
        let solver = FakeSolver {
            primal: vec![1.0, 1.0],
            objective: 2.0,
        };
        let (pattern, reduced_cost) = oracle.price(&[1.0, 1.0], &solver).unwrap();
        assert_eq!(pattern.counts, vec![1, 1]);
        assert_eq!(reduced_cost, -1.0);
    }
}
