//! Master Problem Manager (spec §4.2).
//!
//! Owns the [`PatternPool`] and formulates the demand-covering master LP (and
//! its integer counterpart) over the pool's current patterns, delegating the
//! actual solve to an [`LpIpSolver`].

use crate::error::Result;
use crate::model::{Pattern, PatternPool};
use crate::solver::{LpIpSolver, LpModel, Row, Sense};

pub struct MasterManager {
    lengths: Vec<u32>,
    quantities: Vec<u32>,
    master_length: u32,
    pool: PatternPool,
}

impl MasterManager {
    /// Builds a manager with the pool seeded per spec §3/§4.4 "Seed".
    pub fn new(lengths: Vec<u32>, quantities: Vec<u32>, master_length: u32) -> Self {
        let pool = PatternPool::seed(&lengths, master_length);
        MasterManager {
            lengths,
            quantities,
            master_length,
            pool,
        }
    }

    /// Appends `pattern` after verifying the feasibility invariant.
    pub fn add_pattern(&mut self, pattern: Pattern) -> Result<usize> {
        self.pool.add(pattern, &self.lengths, self.master_length)
    }

    pub fn contains(&self, pattern: &Pattern) -> bool {
        self.pool.contains(pattern)
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn pool(&self) -> &PatternPool {
        &self.pool
    }

    /// Builds the demand-covering master LP/IP model over the current pool:
    /// minimize `sum(x_j)` subject to `sum_j(pattern_j[i] * x_j) >= quantity[i]`
    /// for every demand type `i` (spec §4.2). Constraint `i` binds to demand
    /// type `i` by construction order, so the returned dual vector is
    /// unambiguous (spec §4.2, §9).
    fn build_model(&self) -> LpModel {
        let objective = vec![1.0; self.pool.len()];
        let rows = self
            .quantities
            .iter()
            .enumerate()
            .map(|(i, &qty)| {
                let coeffs = self
                    .pool
                    .iter()
                    .enumerate()
                    .filter_map(|(j, pattern)| {
                        let count = pattern.counts[i];
                        (count > 0).then_some((j, f64::from(count)))
                    })
                    .collect();
                Row::ge(coeffs, f64::from(qty))
            })
            .collect();

        LpModel {
            sense: Sense::Minimize,
            objective,
            rows,
        }
    }

    /// Solves the LP relaxation: continuous primal `x*`, dual `pi` indexed by
    /// demand type, and the objective `z*` (spec §4.2).
    pub fn solve_relaxation(&self, solver: &dyn LpIpSolver) -> Result<(Vec<f64>, Vec<f64>, f64)> {
        let model = self.build_model();
        let outcome = solver.solve_lp(&model)?;
        Ok((outcome.primal, outcome.duals, outcome.objective))
    }

    /// Solves the same model with `x_j` constrained to non-negative integers.
    pub fn solve_integer(&self, solver: &dyn LpIpSolver) -> Result<(Vec<u32>, f64)> {
        let model = self.build_model();
        let outcome = solver.solve_ip(&model)?;
        let rounded = outcome.primal.iter().map(|&v| v.round() as u32).collect();
        Ok((rounded, outcome.objective))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSolver;

    impl LpIpSolver for FakeSolver {
        fn solve_lp(&self, model: &LpModel) -> Result<crate::solver::SolveOutcome> {
            // Trivial "solver": use only the first pattern enough times to meet
            // its own row, leave duals at 1.0 for every row.
            let primal = model.rows.iter().map(|row| row.rhs).collect::<Vec<_>>();
            Ok(crate::solver::SolveOutcome {
                primal: vec![primal.iter().cloned().fold(0.0, f64::max); model.objective.len()],
                duals: vec![1.0; model.rows.len()],
                objective: model.objective.len() as f64,
                status: crate::solver::SolveStatus::Optimal,
            })
        }

        fn solve_ip(&self, model: &LpModel) -> Result<crate::solver::SolveOutcome> {
            self.solve_lp(model)
        }
    }

    #[test]
    fn build_model_binds_constraint_order_to_demand_type_order() {
        let manager = MasterManager::new(vec![40, 60], vec![3, 2], 100);
        let model = manager.build_model();
        assert_eq!(model.rows.len(), 2);
        assert_eq!(model.rows[0].rhs, 3.0);
        assert_eq!(model.rows[1].rhs, 2.0);
    }

    #[test]
    fn solve_relaxation_delegates_to_solver() {
        let manager = MasterManager::new(vec![40, 60], vec![3, 2], 100);
        let solver = FakeSolver;
        let (primal, duals, _z) = manager.solve_relaxation(&solver).unwrap();
        assert_eq!(primal.len(), manager.pool_len());
        assert_eq!(duals.len(), 2);
    }
}
