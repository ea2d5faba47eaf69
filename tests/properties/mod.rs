//! # Properties of random problems
//!
//! Problems are generated around a known non negative point, such that they are feasible by
//! construction. Integer data keeps the rounding errors small.
use std::collections::HashSet;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use relp_tableau::algorithm::{solve_dual, solve_primal, Solution, State};
use relp_tableau::algorithm::options::{Options, PivotRuleKind};
use relp_tableau::algorithm::two_phase::tableau::{DenseTableau, SparseTableau};
use relp_tableau::data::linear_program::{Builder, LinearProgram};

const TOLERANCE: f64 = 1e-6;

/// A problem of which `point` is a feasible solution.
#[derive(Debug, Clone)]
struct FeasibleProblem {
    program: LinearProgram<f64>,
    point: Vec<f64>,
}

fn activity(coefficients: &[i32], point: &[i32]) -> i32 {
    coefficients.iter().zip(point).map(|(a, x)| a * x).sum()
}

fn to_floats(values: &[i32]) -> Vec<f64> {
    values.iter().map(|&value| f64::from(value)).collect()
}

/// Random problems with up to four variables, two equalities and four inequalities.
///
/// # Arguments
///
/// * `cost`: Range of the cost coefficients.
fn arb_feasible_problem(cost: std::ops::RangeInclusive<i32>) -> impl Strategy<Value = FeasibleProblem> {
    (1..=4_usize, 0..=2_usize, 1..=4_usize).prop_flat_map(move |(n, nr_equalities, nr_inequalities)| (
        prop::collection::vec(0..=3_i32, n),
        prop::collection::vec(prop::collection::vec(-3..=3_i32, n), nr_equalities),
        prop::collection::vec((prop::collection::vec(-3..=3_i32, n), 0..=3_i32), nr_inequalities),
        prop::collection::vec(cost.clone(), n),
    )).prop_map(|(point, equalities, inequalities, cost)| {
        let mut builder = Builder::minimize(to_floats(&cost));
        for row in &equalities {
            builder = builder.equal(to_floats(row), f64::from(activity(row, &point)));
        }
        for (row, slack) in &inequalities {
            builder = builder.less_or_equal(to_floats(row), f64::from(activity(row, &point) + slack));
        }

        FeasibleProblem {
            program: builder.build().unwrap(),
            point: to_floats(&point),
        }
    })
}

fn bland() -> Options<f64> {
    Options::default().with_pivot_rule(PivotRuleKind::FirstProfitable)
}

/// The objective function value equals the inner product of the right hand side and the
/// multipliers, and the multipliers of the inequalities are not positive.
fn assert_strong_duality(program: &LinearProgram<f64>, solution: &Solution<f64>) {
    let rhs = program.constraints().map(|row| row.rhs);
    let value = rhs.zip(&solution.dual_multipliers).map(|(b, y)| b * y).sum::<f64>();
    assert_abs_diff_eq!(value, solution.objective_value, epsilon = TOLERANCE);

    let inequality_multipliers = &solution.dual_multipliers[program.nr_equalities()..];
    assert!(inequality_multipliers.iter().all(|&y| y <= TOLERANCE));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn feasibility_round_trip(problem in arb_feasible_problem(-3..=3)) {
        let FeasibleProblem { program, point } = problem;

        for solution in [solve_primal(&program, &bland()), solve_dual(&program, &bland())] {
            let solution = solution.unwrap();

            prop_assert_ne!(solution.state, State::Infeasible);
            prop_assert_ne!(solution.state, State::IterationLimitExceeded);
            if solution.state == State::Optimal {
                prop_assert!(program.is_feasible(&solution.primal_solution, TOLERANCE));
                prop_assert!(solution.objective_value <= program.objective_value(&point) + TOLERANCE);
            }
        }
    }

    #[test]
    fn duality_consistency(problem in arb_feasible_problem(0..=3)) {
        // Non negative cost on non negative variables: bounded
        let program = problem.program;

        let primal = solve_primal(&program, &bland()).unwrap();
        let dual = solve_dual(&program, &bland()).unwrap();

        prop_assert_eq!(primal.state, State::Optimal);
        prop_assert_eq!(dual.state, State::Optimal);
        prop_assert!((primal.objective_value - dual.objective_value).abs() <= TOLERANCE);
        assert_strong_duality(&program, &primal);
        assert_strong_duality(&program, &dual);
    }

    #[test]
    fn pivot_invariant(
        problem in arb_feasible_problem(-3..=3),
        pivots in prop::collection::vec((any::<prop::sample::Index>(), any::<prop::sample::Index>()), 1..8),
    ) {
        let program = problem.program;
        let mut dense = DenseTableau::new(&program, &Options::default());
        let mut sparse = SparseTableau::new(&program, &Options::default());

        for (row, column) in pivots {
            let row = row.index(dense.nr_rows());
            let column = column.index(dense.nr_columns());
            let pivot_value = dense.value_at(row, column).unwrap();
            if pivot_value.abs() < 0.5 {
                // Rejected as degenerate, or too inaccurate to compare
                continue;
            }

            dense.pivot(row, column).unwrap();
            sparse.pivot(row, column).unwrap();

            for k in 0..dense.nr_rows() {
                let expected = if k == row { 1_f64 } else { 0_f64 };
                prop_assert_eq!(dense.value_at(k, column).unwrap(), expected);
                prop_assert_eq!(sparse.value_at(k, column).unwrap(), expected);
            }
            prop_assert_eq!(dense.relative_cost(column), 0_f64);
            prop_assert_eq!(dense.basis_indices(), sparse.basis_indices());

            // Injective basis
            let unique = dense.basis_indices().iter().collect::<HashSet<_>>();
            prop_assert_eq!(unique.len(), dense.nr_rows());
            prop_assert!(unique.iter().all(|&&column| dense.is_in_basis(column)));
        }
    }
}
