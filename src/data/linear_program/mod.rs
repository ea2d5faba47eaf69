//! # Representing linear programs
//!
//! The problem description consumed by the tableau builders: a linear objective over non negative
//! variables, equality constraints and upper bounded (`<=`) inequality constraints. Lower bounded
//! (`>=`) constraints are stored as negated upper bounded constraints.
use std::ops::Neg;

use crate::data::linear_program::elements::{ConstraintType, Objective, Constraint};
use crate::data::number_types::Scalar;
use crate::error::Error;

pub mod elements;

/// A linear program `min (or max) <c, x>` subject to `A_E x = b_E`, `A_I x <= b_I` and `x >= 0`.
///
/// The dimensions are validated at construction; the algorithms reading this structure rely on
/// them being consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram<F> {
    /// Cost coefficient for each variable, in the original direction.
    cost: Vec<F>,
    direction: Objective,
    equalities: Vec<Constraint<F>>,
    inequalities: Vec<Constraint<F>>,
}

impl<F: Scalar> LinearProgram<F> {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `cost`: Objective function coefficients, one for each variable.
    /// * `direction`: Whether the objective should be minimized or maximized.
    /// * `equalities`: Rows of `A_E x = b_E`.
    /// * `inequalities`: Rows of `A_I x <= b_I`.
    ///
    /// # Return value
    ///
    /// `Error::Dimension` if any row doesn't have a coefficient for each variable.
    pub fn new(
        cost: Vec<F>,
        direction: Objective,
        equalities: Vec<Constraint<F>>,
        inequalities: Vec<Constraint<F>>,
    ) -> Result<Self, Error> {
        let nr_variables = cost.len();
        for (kind, rows) in [("equality", &equalities), ("inequality", &inequalities)] {
            if let Some((i, row)) = rows.iter()
                .enumerate()
                .find(|(_, row)| row.coefficients.len() != nr_variables) {
                return Err(Error::Dimension(format!(
                    "{} constraint {} has {} coefficients, but there are {} variables",
                    kind, i, row.coefficients.len(), nr_variables,
                )));
            }
        }

        Ok(Self { cost, direction, equalities, inequalities })
    }

    /// Number of structural variables.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of equality constraints.
    pub fn nr_equalities(&self) -> usize {
        self.equalities.len()
    }

    /// Number of inequality constraints.
    pub fn nr_inequalities(&self) -> usize {
        self.inequalities.len()
    }

    /// Total number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.nr_equalities() + self.nr_inequalities()
    }

    /// Number of constraint coefficients that are not exactly zero.
    pub fn nr_non_zeros(&self) -> usize {
        self.constraints()
            .flat_map(|row| row.coefficients.iter())
            .filter(|value| !value.is_zero())
            .count()
    }

    /// Objective coefficients in the original direction.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Objective coefficients of the equivalent minimization problem.
    pub fn minimization_cost(&self) -> Vec<F> {
        if self.direction.is_negated() {
            self.cost.iter().map(|&c| c.neg()).collect()
        } else {
            self.cost.clone()
        }
    }

    /// Direction of optimization.
    pub fn direction(&self) -> Objective {
        self.direction
    }

    /// Rows of `A_E x = b_E`.
    pub fn equalities(&self) -> &[Constraint<F>] {
        &self.equalities
    }

    /// Rows of `A_I x <= b_I`.
    pub fn inequalities(&self) -> &[Constraint<F>] {
        &self.inequalities
    }

    /// All constraint rows, equalities first.
    pub fn constraints(&self) -> impl Iterator<Item = &Constraint<F>> {
        self.equalities.iter().chain(self.inequalities.iter())
    }

    /// Whether `x` satisfies all constraints, within an absolute tolerance.
    ///
    /// Used to verify solutions.
    pub fn is_feasible(&self, x: &[F], tolerance: F) -> bool {
        debug_assert_eq!(x.len(), self.nr_variables());

        let activity = |row: &Constraint<F>| row.coefficients.iter()
            .zip(x)
            .fold(F::zero(), |total, (&a, &xj)| total + a * xj);

        x.iter().all(|&value| value >= -tolerance)
            && self.equalities.iter().all(|row| (activity(row) - row.rhs).abs() <= tolerance)
            && self.inequalities.iter().all(|row| activity(row) - row.rhs <= tolerance)
    }

    /// Objective function value of `x` in the original direction.
    pub fn objective_value(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.nr_variables());

        self.cost.iter().zip(x).fold(F::zero(), |total, (&c, &xj)| total + c * xj)
    }
}

/// Incrementally collect the rows of a linear program.
///
/// # Example
///
/// ```
/// use relp_tableau::data::linear_program::Builder;
///
/// // maximize 3 x1 + 2 x2 subject to x1 + x2 <= 4, x1 + 3 x2 <= 6
/// let program = Builder::maximize(vec![3f64, 2f64])
///     .less_or_equal(vec![1f64, 1f64], 4f64)
///     .less_or_equal(vec![1f64, 3f64], 6f64)
///     .build()
///     .unwrap();
/// assert_eq!(program.nr_constraints(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Builder<F> {
    cost: Vec<F>,
    direction: Objective,
    equalities: Vec<Constraint<F>>,
    inequalities: Vec<Constraint<F>>,
}

impl<F: Scalar> Builder<F> {
    /// Start a minimization problem.
    pub fn minimize(cost: Vec<F>) -> Self {
        Self::new(cost, Objective::Minimize)
    }

    /// Start a maximization problem.
    pub fn maximize(cost: Vec<F>) -> Self {
        Self::new(cost, Objective::Maximize)
    }

    fn new(cost: Vec<F>, direction: Objective) -> Self {
        Self { cost, direction, equalities: Vec::new(), inequalities: Vec::new() }
    }

    /// Add a constraint.
    ///
    /// A `>=` constraint is stored as the `<=` constraint that results from multiplying it by
    /// `-1`.
    #[must_use]
    pub fn constraint(mut self, coefficients: Vec<F>, constraint_type: ConstraintType, rhs: F) -> Self {
        match constraint_type {
            ConstraintType::Equal => self.equalities.push(Constraint::new(coefficients, rhs)),
            ConstraintType::Less => self.inequalities.push(Constraint::new(coefficients, rhs)),
            ConstraintType::Greater => self.inequalities.push(Constraint::new(
                coefficients.into_iter().map(Neg::neg).collect(),
                -rhs,
            )),
        }

        self
    }

    /// Add an equality constraint.
    #[must_use]
    pub fn equal(self, coefficients: Vec<F>, rhs: F) -> Self {
        self.constraint(coefficients, ConstraintType::Equal, rhs)
    }

    /// Add a `<=` constraint.
    #[must_use]
    pub fn less_or_equal(self, coefficients: Vec<F>, rhs: F) -> Self {
        self.constraint(coefficients, ConstraintType::Less, rhs)
    }

    /// Add a `>=` constraint.
    #[must_use]
    pub fn greater_or_equal(self, coefficients: Vec<F>, rhs: F) -> Self {
        self.constraint(coefficients, ConstraintType::Greater, rhs)
    }

    /// Validate the dimensions and create the linear program.
    pub fn build(self) -> Result<LinearProgram<F>, Error> {
        LinearProgram::new(self.cost, self.direction, self.equalities, self.inequalities)
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::{Builder, LinearProgram};
    use crate::data::linear_program::elements::{Objective, Constraint};
    use crate::error::Error;

    #[test]
    fn dimension_mismatch() {
        let result = LinearProgram::new(
            vec![1f64, 1f64],
            Objective::Minimize,
            vec![],
            vec![Constraint::new(vec![1f64, 1f64, 1f64], 1f64)],
        );
        assert!(matches!(result, Err(Error::Dimension(_))));
    }

    #[test]
    fn greater_is_negated() {
        let program = Builder::minimize(vec![1f64, 1f64])
            .greater_or_equal(vec![1f64, 1f64], 1f64)
            .build()
            .unwrap();

        assert_eq!(program.inequalities(), &[Constraint::new(vec![-1f64, -1f64], -1f64)]);
        assert!(program.is_feasible(&[1f64, 0f64], 1e-9));
        assert!(!program.is_feasible(&[0.5, 0f64], 1e-9));
    }

    #[test]
    fn minimization_cost() {
        let program = Builder::maximize(vec![3f64, -2f64]).build().unwrap();
        assert_eq!(program.minimization_cost(), vec![-3f64, 2f64]);
        assert_eq!(program.objective_value(&[1f64, 1f64]), 1f64);
        assert_eq!(program.nr_non_zeros(), 0);
    }
}
