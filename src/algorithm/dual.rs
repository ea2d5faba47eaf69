//! # Solving through the dual
//!
//! The dual of `min c x, A_E x = b_E, A_I x <= b_I, x >= 0` is
//! `max b_E u + b_I v, A_E^T u + A_I^T v <= c, v <= 0` with `u` free. To give it to the same two
//! phase method, it is written as a minimization problem over non negative variables:
//!
//! ```text
//! min  b_E p - b_E q + b_I w
//! s.t. -A_E^T p + A_E^T q - A_I^T w <= c
//!      p, q, w >= 0
//! ```
//!
//! where `u = q - p` and `v = -w`. There is one row for each primal variable.
use crate::algorithm::{Solution, State};
use crate::algorithm::two_phase::TableauSolution;
use crate::data::linear_program::elements::{Constraint, Objective};
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::Scalar;
use crate::error::Error;

/// Positions of the dual variables.
///
/// Equality `i` of the primal problem has variables `2 i` and `2 i + 1`. Inequality `k` has
/// variable `2 nr_equalities + k`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DualLayout {
    /// Number of equality constraints of the primal problem.
    pub nr_equalities: usize,
    /// Number of inequality constraints of the primal problem.
    pub nr_inequalities: usize,
    /// Number of variables of the primal problem, the number of rows of the dual problem.
    pub nr_primal_variables: usize,
}

impl DualLayout {
    /// Index of the variable `p` of an equality.
    pub fn p(&self, equality: usize) -> usize {
        2 * equality
    }

    /// Index of the variable `q` of an equality.
    pub fn q(&self, equality: usize) -> usize {
        2 * equality + 1
    }

    /// Index of the variable `w` of an inequality.
    pub fn w(&self, inequality: usize) -> usize {
        2 * self.nr_equalities + inequality
    }

    /// Number of variables of the dual problem.
    pub fn nr_dual_variables(&self) -> usize {
        2 * self.nr_equalities + self.nr_inequalities
    }
}

/// The dual of a linear program, with what is needed to map its solution back.
#[derive(Debug, Clone, PartialEq)]
pub struct DualProgram<F> {
    /// Minimization problem with an inequality row for each primal variable.
    pub program: LinearProgram<F>,
    /// Where the dual variables are.
    pub layout: DualLayout,
    /// For each dual row, whether the tableau negates it to make its right hand side non negative.
    ///
    /// This happens exactly when the cost of the primal variable is negative.
    pub negated_dual: Vec<bool>,
}

impl<F: Scalar> DualProgram<F> {
    /// Build the dual program of a linear program.
    ///
    /// A maximization problem is first written as a minimization problem by negating its cost.
    pub fn new(primal: &LinearProgram<F>) -> Result<Self, Error> {
        let layout = DualLayout {
            nr_equalities: primal.nr_equalities(),
            nr_inequalities: primal.nr_inequalities(),
            nr_primal_variables: primal.nr_variables(),
        };

        let mut cost = vec![F::zero(); layout.nr_dual_variables()];
        for (i, equality) in primal.equalities().iter().enumerate() {
            cost[layout.p(i)] = equality.rhs;
            cost[layout.q(i)] = -equality.rhs;
        }
        for (k, inequality) in primal.inequalities().iter().enumerate() {
            cost[layout.w(k)] = inequality.rhs;
        }

        let minimization_cost = primal.minimization_cost();
        let rows = minimization_cost.iter().enumerate()
            .map(|(j, &c_j)| {
                let mut coefficients = vec![F::zero(); layout.nr_dual_variables()];
                for (i, equality) in primal.equalities().iter().enumerate() {
                    coefficients[layout.p(i)] = -equality.coefficients[j];
                    coefficients[layout.q(i)] = equality.coefficients[j];
                }
                for (k, inequality) in primal.inequalities().iter().enumerate() {
                    coefficients[layout.w(k)] = -inequality.coefficients[j];
                }

                Constraint::new(coefficients, c_j)
            })
            .collect();
        let negated_dual = minimization_cost.iter().map(|&c_j| c_j < F::zero()).collect();

        let program = LinearProgram::new(cost, Objective::Minimize, Vec::new(), rows)?;

        Ok(Self { program, layout, negated_dual })
    }
}

/// Express the solution of a dual program in terms of the primal program.
///
/// # Arguments
///
/// * `dual_solution`: Values read from the tableau of the dual program.
/// * `layout`: Positions of the dual variables.
/// * `negated_dual`: Which dual rows were negated when the tableau was built.
/// * `direction`: Direction of the primal program.
///
/// # Return value
///
/// A solution of the primal program. If the dual is unbounded, the primal is infeasible and vice
/// versa.
pub fn to_convex_state<F: Scalar>(
    dual_solution: &TableauSolution<F>,
    layout: &DualLayout,
    negated_dual: &[bool],
    direction: Objective,
) -> Solution<F> {
    debug_assert_eq!(negated_dual, dual_solution.negated.as_slice());
    debug_assert_eq!(negated_dual.len(), layout.nr_primal_variables);

    let state = match dual_solution.state {
        State::Unbounded => State::Infeasible,
        State::Infeasible => State::Unbounded,
        state @ (State::Optimal | State::IterationLimitExceeded) => state,
    };

    // The primal variable is minus the dual value of its dual row, in the original orientation
    let primal_solution = dual_solution.row_duals.iter()
        .zip(negated_dual)
        .map(|(&y, &negated)| if negated { y } else { -y })
        .collect();

    let w = &dual_solution.structural;
    let equality_multipliers = (0..layout.nr_equalities)
        .map(|i| -(w[layout.p(i)] - w[layout.q(i)]));
    let inequality_multipliers = (0..layout.nr_inequalities)
        .map(|k| -w[layout.w(k)]);
    let dual_multipliers = equality_multipliers.chain(inequality_multipliers).collect();

    Solution {
        state,
        objective_value: -dual_solution.objective_value,
        primal_solution,
        dual_multipliers,
        iterations: dual_solution.iterations,
    }.in_direction(direction)
}
