//! Human-readable instruction formatter (spec §6, SPEC_FULL §D).
//!
//! Transforms a [`SolveResult`] into the kind of cutting-floor instructions
//! the source emitted as `cuttingInstructions`
//! (`original_source/server/cutting_stock_solver.py`, lines 117-165). This is
//! explicitly a downstream collaborator (spec §1): it never feeds back into
//! [`crate::driver::Driver`].

use crate::model::{ProblemInstance, SolveResult};

/// Renders one instruction line per used pattern, followed by a final
/// verification line listing every demand that was met.
pub fn render_instructions(result: &SolveResult, problem: &ProblemInstance) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.patterns.len() + 1);

    for pattern in &result.patterns {
        let cut_description = pattern
            .cuts
            .iter()
            .map(|cut| format!("{} pieces of {}mm", cut.quantity, cut.length))
            .collect::<Vec<_>>()
            .join(", ");
        let plural = if pattern.rolls_used > 1 { "s" } else { "" };
        lines.push(format!(
            "Take {} master roll{plural} of {}mm length; cut each roll: {cut_description}",
            pattern.rolls_used, problem.master_length
        ));
    }

    let verification = problem
        .demands
        .iter()
        .map(|d| format!("{} pieces of {}mm", d.quantity, d.length))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("Final inventory check: {verification} - all requirements met"));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Convergence, CutRecord, Demand, PatternRecord};

    #[test]
    fn renders_one_line_per_pattern_plus_verification() {
        let problem = ProblemInstance::new(100, vec![Demand { length: 40, quantity: 3 }]);
        let result = SolveResult {
            total_rolls: 2,
            efficiency: 60.0,
            waste_percentage: 40.0,
            total_waste: 80,
            patterns: vec![PatternRecord {
                id: 0,
                cuts: vec![CutRecord { length: 40, quantity: 2 }],
                total_length: 80,
                waste: 20,
                rolls_used: 2,
            }],
            iterations: 1,
            patterns_evaluated: 1,
            convergence: Convergence::Optimal,
        };

        let lines = render_instructions(&result, &problem);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Take 2 master rolls"));
        assert!(lines[1].starts_with("Final inventory check"));
    }
}
