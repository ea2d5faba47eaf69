//! # Algorithms
//!
//! Solving linear programs with the two phase Simplex method, either directly or through their
//! dual.
use crate::algorithm::dual::{DualProgram, to_convex_state};
use crate::algorithm::options::{Formulation, Options, PivotRuleKind, Representation};
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::TableauSolution;
use crate::data::linear_algebra::vector::{DenseVector, SparseVector, Vector};
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::Scalar;
use crate::error::Error;

pub mod dual;
pub mod options;
pub mod parallel;
pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm, unless it was stopped early.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    /// An optimal solution was found.
    Optimal,
    /// No solution satisfies all constraints.
    Infeasible,
    /// The objective function can be improved without bound.
    Unbounded,
    /// The iteration limit was reached before any of the other states could be determined.
    IterationLimitExceeded,
}

/// Result of a solve, in terms of the linear program that was given.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// How the solve ended.
    pub state: State,
    /// Objective function value in the direction of the linear program.
    ///
    /// Infinite when the problem is unbounded, the value of the last basic solution for the other
    /// states that aren't optimal.
    pub objective_value: F,
    /// A value for each variable.
    pub primal_solution: Vec<F>,
    /// A value for each constraint, equalities first. The value is the rate of change of the
    /// objective function value when the right hand side of the constraint increases.
    pub dual_multipliers: Vec<F>,
    /// Number of pivots made.
    pub iterations: usize,
}

impl<F: Scalar> Solution<F> {
    /// Express the values of a tableau in terms of the linear program it was built from.
    ///
    /// # Arguments
    ///
    /// * `solution`: Values read from a tableau for a minimization problem.
    /// * `direction`: Direction of the linear program that was given.
    pub(crate) fn from_minimization(solution: TableauSolution<F>, direction: Objective) -> Self {
        let dual_multipliers = solution.row_duals.iter()
            .zip(&solution.negated)
            .map(|(&y, &negated)| if negated { -y } else { y })
            .collect();

        Self {
            state: solution.state,
            objective_value: solution.objective_value,
            primal_solution: solution.structural,
            dual_multipliers,
            iterations: solution.iterations,
        }.in_direction(direction)
    }

    /// Finalize a solution of the minimization problem.
    ///
    /// Sets the objective value of an unbounded problem and negates the objective value and the
    /// multipliers when the problem was a maximization problem.
    pub(crate) fn in_direction(mut self, direction: Objective) -> Self {
        if self.state == State::Unbounded {
            self.objective_value = F::neg_infinity();
        }

        if direction.is_negated() {
            self.objective_value = -self.objective_value;
            for multiplier in &mut self.dual_multipliers {
                *multiplier = -*multiplier;
            }
        }

        self
    }
}

/// Solve a linear program.
///
/// Whether the primal or the dual problem is given to the two phase method is decided by
/// `Options::formulation`. With `Formulation::Automatic`, the dual is solved if the problem has
/// fewer variables than constraints, because the dual tableau has a row for each variable.
///
/// # Return value
///
/// The solution if the algorithm terminated normally, regardless of whether an optimum was found.
/// An error indicates a numerical breakdown.
pub fn solve<F: Scalar>(program: &LinearProgram<F>, options: &Options<F>) -> Result<Solution<F>, Error> {
    let dualize = match options.formulation {
        Formulation::Primal => false,
        Formulation::Dual => true,
        Formulation::Automatic => program.nr_variables() < program.nr_constraints(),
    };

    solve_dualized(program, options, dualize)
}

/// Solve a linear program, either directly or through its dual.
pub fn solve_dualized<F: Scalar>(
    program: &LinearProgram<F>,
    options: &Options<F>,
    dualize: bool,
) -> Result<Solution<F>, Error> {
    if dualize {
        solve_dual(program, options)
    } else {
        solve_primal(program, options)
    }
}

/// Solve a linear program with the two phase method.
pub fn solve_primal<F: Scalar>(program: &LinearProgram<F>, options: &Options<F>) -> Result<Solution<F>, Error> {
    let solution = solve_minimization(program, options)?;

    Ok(Solution::from_minimization(solution, program.direction()))
}

/// Solve a linear program by solving its dual with the two phase method.
pub fn solve_dual<F: Scalar>(program: &LinearProgram<F>, options: &Options<F>) -> Result<Solution<F>, Error> {
    let dual = DualProgram::new(program)?;
    let solution = solve_minimization(&dual.program, options)?;

    Ok(to_convex_state(&solution, &dual.layout, &dual.negated_dual, program.direction()))
}

/// Build the tableau of a linear program and run the two phase method on it.
///
/// The row representation is chosen once, from the size of the tableau and the number of non zero
/// values in its initial constraint rows.
fn solve_minimization<F: Scalar>(
    program: &LinearProgram<F>,
    options: &Options<F>,
) -> Result<TableauSolution<F>, Error> {
    let nr_rows = program.nr_constraints();
    // Slacks and artificials together are about one column per row
    let nr_columns = program.nr_variables() + nr_rows;
    let nr_non_zeros = program.nr_non_zeros() + nr_rows;

    match options.resolve_representation(nr_rows, nr_columns, nr_non_zeros) {
        Representation::Sparse => solve_with::<F, SparseVector<F>>(program, options),
        Representation::Dense | Representation::Automatic => solve_with::<F, DenseVector<F>>(program, options),
    }
}

fn solve_with<F: Scalar, V: Vector<F>>(
    program: &LinearProgram<F>,
    options: &Options<F>,
) -> Result<TableauSolution<F>, Error> {
    let mut tableau = Tableau::<F, V>::new(program, options);

    match options.pivot_rule {
        PivotRuleKind::SteepestDescentAlongVariable => two_phase::solve::<_, _, SteepestDescentAlongVariable>(
            &mut tableau,
            options.iteration_limit,
        ),
        PivotRuleKind::FirstProfitable => two_phase::solve::<_, _, FirstProfitable>(
            &mut tableau,
            options.iteration_limit,
        ),
    }
}
