//! # Small problems with a known outcome
//!
//! Each problem is solved in every configuration: primal and dual, dense and sparse, with both
//! pivot rules.
use approx::{assert_abs_diff_eq, assert_relative_eq};

use relp_tableau::algorithm::{solve, Solution, State};
use relp_tableau::algorithm::options::{Formulation, Options, PivotRuleKind, Representation};
use relp_tableau::data::linear_program::{Builder, LinearProgram};

fn all_options() -> Vec<Options<f64>> {
    let mut options = Vec::new();
    for formulation in [Formulation::Primal, Formulation::Dual, Formulation::Automatic] {
        for representation in [Representation::Dense, Representation::Sparse] {
            for rule in [PivotRuleKind::SteepestDescentAlongVariable, PivotRuleKind::FirstProfitable] {
                options.push(Options::default()
                    .with_formulation(formulation)
                    .with_representation(representation)
                    .with_pivot_rule(rule));
            }
        }
    }

    options
}

fn solve_all(program: &LinearProgram<f64>) -> Vec<Solution<f64>> {
    all_options().iter()
        .map(|options| solve(program, options).unwrap())
        .collect()
}

#[test]
fn covering() {
    // min x1 + x2, x1 + x2 >= 1
    let program = Builder::minimize(vec![1_f64, 1_f64])
        .greater_or_equal(vec![1_f64, 1_f64], 1_f64)
        .build()
        .unwrap();

    for solution in solve_all(&program) {
        assert_eq!(solution.state, State::Optimal);
        assert_abs_diff_eq!(solution.objective_value, 1_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.primal_solution.iter().sum::<f64>(), 1_f64, epsilon = 1e-9);
        assert!(program.is_feasible(&solution.primal_solution, 1e-9));
        // Stored as -x1 - x2 <= -1
        assert_abs_diff_eq!(solution.dual_multipliers[0], -1_f64, epsilon = 1e-9);
    }
}

#[test]
fn single_bound() {
    // min -x1, x1 <= 1
    let program = Builder::minimize(vec![-1_f64])
        .less_or_equal(vec![1_f64], 1_f64)
        .build()
        .unwrap();

    for solution in solve_all(&program) {
        assert_eq!(solution.state, State::Optimal);
        assert_abs_diff_eq!(solution.objective_value, -1_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.primal_solution[0], 1_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.dual_multipliers[0], -1_f64, epsilon = 1e-9);
    }
}

#[test]
fn unbounded() {
    // min -x1
    let program = Builder::minimize(vec![-1_f64]).build().unwrap();

    for solution in solve_all(&program) {
        assert_eq!(solution.state, State::Unbounded);
        assert_eq!(solution.objective_value, f64::NEG_INFINITY);
    }
}

#[test]
fn contradicting_equalities() {
    // x1 + x2 = 1, x1 + x2 = 2
    let program = Builder::minimize(vec![1_f64, 1_f64])
        .equal(vec![1_f64, 1_f64], 1_f64)
        .equal(vec![1_f64, 1_f64], 2_f64)
        .build()
        .unwrap();

    for solution in solve_all(&program) {
        assert_eq!(solution.state, State::Infeasible);
    }
}

#[test]
fn maximization() {
    // max 3x1 + 2x2, x1 + x2 <= 4, x1 + 3x2 <= 6
    let program = Builder::maximize(vec![3_f64, 2_f64])
        .less_or_equal(vec![1_f64, 1_f64], 4_f64)
        .less_or_equal(vec![1_f64, 3_f64], 6_f64)
        .build()
        .unwrap();

    for solution in solve_all(&program) {
        assert_eq!(solution.state, State::Optimal);
        assert_abs_diff_eq!(solution.objective_value, 12_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.primal_solution[0], 4_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.primal_solution[1], 0_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.dual_multipliers[0], 3_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.dual_multipliers[1], 0_f64, epsilon = 1e-9);
    }
}

#[test]
fn iteration_limit() {
    let program = Builder::maximize(vec![3_f64, 2_f64])
        .less_or_equal(vec![1_f64, 1_f64], 4_f64)
        .less_or_equal(vec![1_f64, 3_f64], 6_f64)
        .build()
        .unwrap();

    for options in all_options() {
        let solution = solve(&program, &options.with_iteration_limit(0)).unwrap();
        assert_eq!(solution.state, State::IterationLimitExceeded);
        assert_eq!(solution.iterations, 0);
    }
}

#[test]
fn single_precision() {
    let program = Builder::maximize(vec![3_f32, 2_f32])
        .less_or_equal(vec![1_f32, 1_f32], 4_f32)
        .less_or_equal(vec![1_f32, 3_f32], 6_f32)
        .build()
        .unwrap();

    let solution = solve(&program, &Options::default()).unwrap();
    assert_eq!(solution.state, State::Optimal);
    assert_abs_diff_eq!(solution.objective_value, 12_f32, epsilon = 1e-4);
}

#[test]
fn parallel_elimination() {
    // Enough rows to split the elimination over several tasks
    let nr_variables = 40;
    let mut builder = Builder::maximize(vec![1_f64; nr_variables]);
    for j in 0..nr_variables {
        let mut coefficients = vec![0_f64; nr_variables];
        coefficients[j] = 1_f64;
        if j + 1 < nr_variables {
            coefficients[j + 1] = 1_f64;
        }
        builder = builder.less_or_equal(coefficients, 2_f64);
    }
    let program = builder.build().unwrap();

    let sequential = solve(&program, &Options::default()).unwrap();
    let options = Options { parallel_grain: 4, ..Options::default() }.with_parallel_threshold(4);
    let parallel = solve(&program, &options).unwrap();

    assert_eq!(sequential.state, State::Optimal);
    assert_eq!(parallel.state, State::Optimal);
    assert_abs_diff_eq!(sequential.objective_value, parallel.objective_value, epsilon = 1e-9);
    assert!(program.is_feasible(&parallel.primal_solution, 1e-9));
}

#[test]
fn tiny_entering_coefficient() {
    // min -x1, 1e-8 x1 + 1e5 x2 <= 1, optimal at x1 = 1e8
    let program = Builder::minimize(vec![-1_f64, 0_f64])
        .less_or_equal(vec![1e-8, 1e5], 1_f64)
        .build()
        .unwrap();

    for representation in [Representation::Dense, Representation::Sparse] {
        let options = Options::default()
            .with_formulation(Formulation::Primal)
            .with_representation(representation);
        let solution = solve(&program, &options).unwrap();

        assert_eq!(solution.state, State::Optimal);
        assert_relative_eq!(solution.objective_value, -1e8, max_relative = 1e-9);
        assert_relative_eq!(solution.primal_solution[0], 1e8, max_relative = 1e-9);
        assert_relative_eq!(solution.dual_multipliers[0], -1e8, max_relative = 1e-9);
    }
}
