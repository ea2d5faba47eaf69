//! # Building a tableau
//!
//! Creating the initial tableau of a linear program, with a basis of slack and artificial columns.
use std::collections::HashSet;

use itertools::Itertools;
use tracing::debug;

use crate::algorithm::options::Options;
use crate::algorithm::two_phase::tableau::layout::{ColumnLayout, ColumnType};
use crate::algorithm::two_phase::tableau::row::Row;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::vector::Vector;
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::Scalar;

impl<F: Scalar, V: Vector<F>> Tableau<F, V> {
    /// Create the initial tableau of a linear program.
    ///
    /// Each inequality gets a slack column. Rows with a negative right hand side are multiplied by
    /// `-1`. Every equality and every negated inequality gets an artificial column, such that each
    /// row has a basis column with coefficient `1` and the initial basis is feasible.
    ///
    /// When there are artificial columns, the artificial cost row is added and the tableau is in
    /// its first phase.
    ///
    /// # Arguments
    ///
    /// * `program`: Linear program with consistent dimensions.
    /// * `options`: Provides the numerical context and parallelism settings.
    pub fn new(program: &LinearProgram<F>, options: &Options<F>) -> Self {
        let nr_structural = program.nr_variables();
        let nr_equalities = program.nr_equalities();
        let nr_slack = program.nr_inequalities();
        let nr_rows = program.nr_constraints();

        // Equalities don't have a slack, so they need an artificial regardless of their sign
        let negated = program.constraints()
            .map(|row| row.rhs < F::zero())
            .collect::<Vec<_>>();
        let needs_artificial = negated.iter()
            .enumerate()
            .map(|(i, &is_negated)| i < nr_equalities || is_negated)
            .collect::<Vec<_>>();
        let nr_artificial = needs_artificial.iter().filter(|&&needs| needs).count();
        let layout = ColumnLayout::new(nr_structural, nr_slack, nr_artificial);

        let artificial_columns = needs_artificial.iter()
            .positions(|&needs| needs)
            .zip(layout.range(ColumnType::Artificial))
            .collect::<Vec<_>>();
        let mut artificial_column_of_row = vec![None; nr_rows];
        for &(row, column) in &artificial_columns {
            artificial_column_of_row[row] = Some(column);
        }

        let mut rows = Vec::with_capacity(nr_rows);
        let mut basis_indices = Vec::with_capacity(nr_rows);
        let mut reference_columns = Vec::with_capacity(nr_rows);
        for (i, constraint) in program.constraints().enumerate() {
            let sign = if negated[i] { -F::one() } else { F::one() };

            let mut values = vec![F::zero(); layout.nr_columns()];
            for (j, &coefficient) in constraint.coefficients.iter().enumerate() {
                values[j] = sign * coefficient;
            }
            let slack = (i >= nr_equalities).then(|| nr_structural + (i - nr_equalities));
            if let Some(column) = slack {
                values[column] = sign;
            }
            if let Some(column) = artificial_column_of_row[i] {
                values[column] = F::one();
            }

            rows.push(Row::new(V::from_values(values), sign * constraint.rhs));
            let (basis_column, reference) = match (artificial_column_of_row[i], slack) {
                (Some(artificial), Some(slack)) => (artificial, (slack, sign)),
                (Some(artificial), None) => (artificial, (artificial, F::one())),
                (None, Some(slack)) => (slack, (slack, sign)),
                (None, None) => unreachable!("every row has a slack or an artificial column"),
            };
            basis_indices.push(basis_column);
            reference_columns.push(reference);
        }

        let mut cost = V::zeros(layout.nr_columns());
        for (j, c) in program.minimization_cost().into_iter().enumerate() {
            cost.set(j, c);
        }
        let objective = Row::new(cost, F::zero());

        let phase_one = (nr_artificial > 0).then(|| {
            Self::artificial_cost_row(&rows, &artificial_columns, &layout)
        });

        debug!(
            nr_rows,
            nr_structural,
            nr_slack,
            nr_artificial,
            "built tableau",
        );

        Self {
            rows,
            objective,
            phase_one,
            basis_columns: basis_indices.iter().copied().collect::<HashSet<_>>(),
            basis_indices,
            layout,
            reference_columns,
            negated,
            context: options.numerical,
            parallel_threshold: options.parallel_threshold,
            parallel_grain: options.parallel_grain,
        }
    }

    /// Relative cost of minimizing the sum of the artificial variables.
    ///
    /// The artificial columns are basic, so their relative cost is zero. The relative cost of any
    /// other column is minus the sum of its coefficients in the rows with an artificial variable.
    /// The value is minus the sum of the right hand sides of those rows.
    fn artificial_cost_row(
        rows: &[Row<F, V>],
        artificial_columns: &[(usize, usize)],
        layout: &ColumnLayout,
    ) -> Row<F, V> {
        let mut values = V::zeros(layout.nr_columns());
        let mut value = F::zero();
        for &(row, _) in artificial_columns {
            for (j, coefficient) in rows[row].coefficients().iter_non_zeros() {
                if !layout.is_artificial(j) {
                    values.set(j, values.get(j) - coefficient);
                }
            }
            value = value - rows[row].value();
        }

        Row::new(values, value)
    }
}
