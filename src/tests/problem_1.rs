//! A small problem with each constraint type.
//!
//! ```text
//! min  x + 4y + 9z
//! s.t. x +  y      <=  5
//!      x      +  z >= 10
//!         -  y +  z  =  7
//!      x           <=  4
//!             y    <=  1
//!      x, y, z >= 0
//! ```
use approx::assert_abs_diff_eq;

use crate::algorithm::{solve, State};
use crate::algorithm::options::{Formulation, Options, PivotRuleKind, Representation};
use crate::data::linear_program::{Builder, LinearProgram};

pub const OBJECTIVE_VALUE: f64 = 66_f64;

pub fn linear_program() -> LinearProgram<f64> {
    Builder::minimize(vec![1_f64, 4_f64, 9_f64])
        .less_or_equal(vec![1_f64, 1_f64, 0_f64], 5_f64)
        .greater_or_equal(vec![1_f64, 0_f64, 1_f64], 10_f64)
        .equal(vec![0_f64, -1_f64, 1_f64], 7_f64)
        .less_or_equal(vec![1_f64, 0_f64, 0_f64], 4_f64)
        .less_or_equal(vec![0_f64, 1_f64, 0_f64], 1_f64)
        .build()
        .unwrap()
}

pub fn primal_solution() -> Vec<f64> {
    vec![3_f64, 0_f64, 7_f64]
}

/// Equality first, then the inequalities in the order they were added.
///
/// The `>=` row is stored negated, so its multiplier has the opposite sign of the one for
/// `x + z >= 10`.
pub fn dual_multipliers() -> Vec<f64> {
    vec![8_f64, 0_f64, -1_f64, 0_f64, 0_f64]
}

#[test]
fn all_configurations() {
    let program = linear_program();

    for formulation in [Formulation::Primal, Formulation::Dual] {
        for representation in [Representation::Dense, Representation::Sparse] {
            for rule in [PivotRuleKind::SteepestDescentAlongVariable, PivotRuleKind::FirstProfitable] {
                let options = Options::default()
                    .with_formulation(formulation)
                    .with_representation(representation)
                    .with_pivot_rule(rule);
                let solution = solve(&program, &options).unwrap();

                assert_eq!(solution.state, State::Optimal);
                assert_abs_diff_eq!(solution.objective_value, OBJECTIVE_VALUE, epsilon = 1e-9);
                for (computed, expected) in solution.primal_solution.iter().zip(primal_solution()) {
                    assert_abs_diff_eq!(*computed, expected, epsilon = 1e-9);
                }
                for (computed, expected) in solution.dual_multipliers.iter().zip(dual_multipliers()) {
                    assert_abs_diff_eq!(*computed, expected, epsilon = 1e-9);
                }
            }
        }
    }
}
