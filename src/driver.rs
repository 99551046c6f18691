//! Column-Generation Driver (spec §4.4).
//!
//! Orchestrates [`MasterManager`] and [`PricingOracle`] over an
//! [`LpIpSolver`] backend: seed the pool, alternate LP relaxation and
//! pricing until no improving column exists or the iteration cap triggers,
//! then round to an integer solution and compose the [`SolveResult`].

use tracing::{debug, info, warn};

use crate::config::DriverConfig;
use crate::error::Result;
use crate::master::MasterManager;
use crate::model::{Convergence, CutRecord, PatternRecord, ProblemInstance, SolveResult};
use crate::pricing::PricingOracle;
use crate::solver::LpIpSolver;

pub struct Driver<'a> {
    problem: &'a ProblemInstance,
    solver: &'a dyn LpIpSolver,
    config: DriverConfig,
}

impl<'a> Driver<'a> {
    pub fn new(problem: &'a ProblemInstance, solver: &'a dyn LpIpSolver, config: DriverConfig) -> Self {
        Driver {
            problem,
            solver,
            config,
        }
    }

    /// Runs a single `solve` call end to end (spec §4.4, §5).
    ///
    /// The [`ProblemInstance`], the pattern pool, and the most recent dual
    /// vector are all scoped to this call and dropped on return — no state
    /// persists across calls (spec §3 "Ownership and lifecycle").
    pub fn solve(&self) -> Result<SolveResult> {
        self.problem.validate()?;

        let lengths = self.problem.lengths();
        let quantities = self.problem.quantities();
        let master_length = self.problem.master_length;

        let mut master = MasterManager::new(lengths.clone(), quantities, master_length);
        let oracle = PricingOracle::new(lengths.clone(), master_length);

        let mut patterns_evaluated = master.pool_len() as u32;
        let mut iterations = 0u32;
        let mut convergence = Convergence::Optimal;

        for k in 1..=self.config.iteration_cap {
            iterations = k;

            let (_primal, duals, _z) = master.solve_relaxation(self.solver)?;
            let (pattern, reduced_cost) = oracle.price(&duals, self.solver)?;
            patterns_evaluated += 1;

            debug!(iteration = %k, reduced_cost = %reduced_cost, pool_size = %master.pool_len(), "priced a column");

            if reduced_cost >= -self.config.reduced_cost_eps {
                info!(iteration = %k, "column generation converged");
                convergence = Convergence::Optimal;
                break;
            }

            if master.contains(&pattern) {
                warn!(iteration = %k, counts = ?pattern.counts, "pricing oracle re-offered a pooled pattern, stalling");
                convergence = Convergence::Stalled;
                break;
            }

            master.add_pattern(pattern)?;

            if k == self.config.iteration_cap {
                warn!(cap = %self.config.iteration_cap, "iteration cap reached before convergence");
                convergence = Convergence::IterationCap;
            }
        }

        let (rolls, _obj) = master.solve_integer(self.solver)?;
        Ok(compose_result(self.problem, master.pool(), &rolls, iterations, patterns_evaluated, convergence))
    }
}

fn compose_result(
    problem: &ProblemInstance,
    pool: &crate::model::PatternPool,
    rolls: &[u32],
    iterations: u32,
    patterns_evaluated: u32,
    convergence: Convergence,
) -> SolveResult {
    let lengths = problem.lengths();
    let master_length = problem.master_length;

    let total_rolls: u32 = rolls.iter().sum();
    let length_used: u64 = problem
        .demands
        .iter()
        .map(|d| u64::from(d.length) * u64::from(d.quantity))
        .sum();
    let length_bought = u64::from(total_rolls) * u64::from(master_length);
    let total_waste = length_bought.saturating_sub(length_used);
    let waste_percentage = if length_bought == 0 {
        0.0
    } else {
        100.0 * total_waste as f64 / length_bought as f64
    };
    let efficiency = 100.0 - waste_percentage;

    let patterns = rolls
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(j, &count)| {
            let pattern = pool.get(j).expect("rolls length matches pool length");
            let cuts = pattern
                .counts
                .iter()
                .zip(&lengths)
                .filter(|&(&c, _)| c > 0)
                .map(|(&c, &length)| CutRecord { length, quantity: c })
                .collect();
            let used = pattern.used_length(&lengths) as u32;
            PatternRecord {
                id: j,
                cuts,
                total_length: used,
                waste: master_length - used,
                rolls_used: count,
            }
        })
        .collect();

    SolveResult {
        total_rolls,
        efficiency: round2(efficiency),
        waste_percentage: round2(waste_percentage),
        total_waste,
        patterns,
        iterations,
        patterns_evaluated,
        convergence,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Demand, Pattern, PatternPool};

    #[test]
    fn compose_result_reports_zero_waste_for_exact_fit() {
        let problem = ProblemInstance::new(100, vec![Demand { length: 100, quantity: 7 }]);
        let pool = PatternPool::seed(&problem.lengths(), 100);
        let result = compose_result(&problem, &pool, &[7], 0, 1, Convergence::Optimal);
        assert_eq!(result.total_rolls, 7);
        assert_eq!(result.total_waste, 0);
        assert_eq!(result.efficiency, 100.0);
        assert_eq!(result.patterns.len(), 1);
        assert_eq!(result.patterns[0].rolls_used, 7);
    }

    #[test]
    fn compose_result_skips_unused_patterns() {
        let problem = ProblemInstance::new(10, vec![Demand { length: 3, quantity: 10 }]);
        let mut pool = PatternPool::seed(&problem.lengths(), 10);
        pool.add(Pattern::new(vec![2]), &problem.lengths(), 10).unwrap();
        let result = compose_result(&problem, &pool, &[4, 0], 1, 2, Convergence::Optimal);
        assert_eq!(result.patterns.len(), 1);
        assert_eq!(result.patterns[0].id, 0);
        assert_eq!(result.total_waste, 40 - 30);
    }
}
