//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau is extended with supplementary data structures for efficiency.
use std::cmp::max;
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use tracing::trace;

use crate::algorithm::parallel::{DivideAndConquer, RowRangeExecutor, Sequential};
use crate::algorithm::two_phase::tableau::layout::ColumnLayout;
use crate::algorithm::two_phase::tableau::row::Row;
use crate::data::linear_algebra::vector::{DenseVector, SparseVector, Vector};
use crate::data::number_types::Scalar;
use crate::data::number_types::tolerance::NumericalContext;
use crate::error::Error;

pub mod build;
pub mod layout;
pub mod row;


/// Tableau of which every row is a `Vec` with a value for each column.
pub type DenseTableau<F> = Tableau<F, DenseVector<F>>;
/// Tableau of which every row only stores its non zero values.
pub type SparseTableau<F> = Tableau<F, SparseVector<F>>;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns the complete augmented matrix `[A | b]` with respect to the current basis, the cost row
/// and, during the first phase, the artificial cost row. Both cost rows are eliminated together
/// with the constraint rows, such that the relative cost of each column can be read directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau<F, V> {
    /// Constraint rows with their right hand side.
    rows: Vec<Row<F, V>>,
    /// Relative cost of each column, and minus the objective function value.
    objective: Row<F, V>,
    /// Relative artificial cost of each column, and minus the sum of the artificial variables.
    ///
    /// Only present during the first phase.
    phase_one: Option<Row<F, V>>,

    /// Column index of the basis variable for each row.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,

    layout: ColumnLayout,
    /// For each row, a column that only has a non zero in that row initially, together with that
    /// initial coefficient. The relative cost of this column determines the dual value of the row.
    reference_columns: Vec<(usize, F)>,
    /// Whether a row was multiplied by `-1` while building, to make its right hand side non
    /// negative.
    negated: Vec<bool>,

    context: NumericalContext<F>,
    /// Number of rows from which on the elimination is done in parallel.
    parallel_threshold: usize,
    parallel_grain: usize,
}

impl<F: Scalar, V: Vector<F>> Tableau<F, V> {
    /// Coefficient of the tableau with respect to the current basis.
    ///
    /// # Return value
    ///
    /// `Error::Index` if the row or column is out of range.
    pub fn value_at(&self, row: usize, column: usize) -> Result<F, Error> {
        self.check_index(row, column)?;

        Ok(self.rows[row].get(column))
    }

    /// Right hand side of a row with respect to the current basis.
    ///
    /// # Return value
    ///
    /// `Error::Index` if the row is out of range.
    pub fn rhs_at(&self, row: usize) -> Result<F, Error> {
        self.check_index(row, 0)?;

        Ok(self.rows[row].value())
    }

    fn check_index(&self, row: usize, column: usize) -> Result<(), Error> {
        if row < self.nr_rows() && column < self.nr_columns() {
            Ok(())
        } else {
            Err(Error::Index {
                row,
                column,
                nr_rows: self.nr_rows(),
                nr_columns: self.nr_columns(),
            })
        }
    }

    /// Brings a column into the basis using Gauss-Jordan elimination.
    ///
    /// The pivot row is normalized, after which a multiple of it is added to every other row
    /// (including the cost rows) such that the pivot column becomes a unit vector. The column
    /// then replaces the basis column of the pivot row.
    ///
    /// # Arguments
    ///
    /// * `row`: Row index of the pivot, in range `0` until `self.nr_rows()`.
    /// * `column`: Column index of the pivot, in range `0` until `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// `Error::Index` if the position is out of range, `Error::DegeneratePivot` if the pivot
    /// element is numerically zero. The tableau is not modified in those cases.
    pub fn pivot(&mut self, row: usize, column: usize) -> Result<(), Error> {
        self.check_index(row, column)?;

        let pivot_value = self.rows[row].get(column);
        if !self.is_pivot_element(pivot_value) {
            return Err(Error::DegeneratePivot { row, column });
        }

        // Normalize the pivot row
        if !self.context.is_equal(pivot_value, F::one()) {
            self.rows[row].scale(F::one() / pivot_value);
        }
        self.rows[row].set(column, F::one());

        // Eliminate the column from all other rows
        let context = self.context;
        let (before, rest) = self.rows.split_at_mut(row);
        let (pivot_row, after) = rest.split_at_mut(1);
        let pivot_row = &pivot_row[0];
        let operation = |_: usize, other: &mut Row<F, V>| other.eliminate(column, pivot_row, &context);
        if before.len() + 1 + after.len() >= self.parallel_threshold {
            let executor = DivideAndConquer::new(self.parallel_grain);
            executor.for_each_row(0, before, &operation);
            executor.for_each_row(row + 1, after, &operation);
        } else {
            Sequential.for_each_row(0, before, &operation);
            Sequential.for_each_row(row + 1, after, &operation);
        }
        self.objective.eliminate(column, pivot_row, &context);
        if let Some(phase_one) = &mut self.phase_one {
            phase_one.eliminate(column, pivot_row, &context);
        }

        self.update_basis_indices(row, column);

        Ok(())
    }

    /// Whether `pivot` accepts `value` as its pivot element.
    ///
    /// The ratio test and the removal of artificial variables only select elements that pass this
    /// test, so that a pivot they request never fails.
    pub(crate) fn is_pivot_element(&self, value: F) -> bool {
        !self.context.is_zero(value)
    }

    /// Update the basis index.
    ///
    /// Removes the index of the variable leaving the basis from the `basis_columns` attribute,
    /// while inserting the entering variable index.
    fn update_basis_indices(&mut self, pivot_row: usize, pivot_column: usize) {
        let leaving_column = self.basis_indices[pivot_row];
        trace!(pivot_row, pivot_column, leaving_column, "basis change");

        self.basis_indices[pivot_row] = pivot_column;
        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        self.basis_columns.insert(pivot_column);
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the positive but
    /// minimal ratio between the current constraint vector and the column.
    ///
    /// When there are multiple choices for the pivot row, the row with the lowest basis column
    /// index is chosen (as in Bland's anti cycling algorithm).
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the column entering the basis.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded in the direction of
    /// the column.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen index, minimum ratio, corresponding leaving_column (for Bland's algorithm))
        let mut min_values: Option<(usize, F, usize)> = None;
        for (row, data) in self.rows.iter().enumerate() {
            let xij = data.get(column);
            if xij < F::zero() || !self.is_pivot_element(xij) {
                continue;
            }

            let rhs = data.value().max(F::zero());
            let ratio = rhs / xij;
            let leaving_column = self.basis_indices[row];
            if let Some((min_index, min_ratio, min_leaving_column)) = &mut min_values {
                if self.context.is_equal(ratio, *min_ratio) {
                    if leaving_column < *min_leaving_column {
                        *min_index = row;
                        *min_leaving_column = leaving_column;
                    }
                } else if ratio < *min_ratio {
                    *min_index = row;
                    *min_ratio = ratio;
                    *min_leaving_column = leaving_column;
                }
            } else {
                min_values = Some((row, ratio, leaving_column));
            }
        }

        min_values.map(|(min_index, _, _)| min_index)
    }

    /// Relative cost of a column in the current phase.
    ///
    /// During the first phase, this is the relative artificial cost. Afterwards, it is the
    /// relative cost of the objective function.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.cost_row().get(j)
    }

    /// The cost row of the current phase.
    pub fn cost_row(&self) -> &Row<F, V> {
        self.phase_one.as_ref().unwrap_or(&self.objective)
    }

    /// Drop the artificial cost row, which ends the first phase.
    pub fn end_phase_one(&mut self) {
        self.phase_one = None;
    }

    /// Whether the tableau is in its first phase.
    pub fn is_phase_one(&self) -> bool {
        self.phase_one.is_some()
    }

    /// Sum of the values of the artificial variables.
    ///
    /// Zero once the first phase has ended.
    pub fn infeasibility(&self) -> F {
        self.phase_one.as_ref().map_or(F::zero(), |row| -row.value())
    }

    /// Get the cost of the current solution.
    ///
    /// # Return value
    ///
    /// The current value of the objective function, in the direction of minimization.
    pub fn objective_function_value(&self) -> F {
        -self.objective.value()
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Column index of the basis variable of a row.
    pub fn basis_column(&self, row: usize) -> usize {
        self.basis_indices[row]
    }

    /// Column index of the basis variable for each row.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Whether a column may enter the basis.
    ///
    /// Artificial columns never reenter the basis.
    pub fn is_candidate(&self, column: usize) -> bool {
        !self.layout.is_artificial(column) && !self.is_in_basis(column)
    }

    /// Rows with an artificial variable in the basis.
    pub fn artificial_basis_rows(&self) -> Vec<usize> {
        (0..self.nr_rows())
            .filter(|&i| self.layout.is_artificial(self.basis_indices[i]))
            .collect()
    }

    /// Get the current basic feasible solution.
    ///
    /// Does not modify the tableau, calling this method twice gives the same result.
    ///
    /// # Return value
    ///
    /// A value for each column: the right hand side of the row for basis columns, zero otherwise.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut solution = vec![F::zero(); self.nr_columns()];
        for (row, &column) in self.rows.iter().zip(&self.basis_indices) {
            let value = row.value();
            if !self.context.is_zero(value) {
                solution[column] = value;
            }
        }

        solution
    }

    /// Dual value of each row, in the orientation of the (possibly negated) tableau rows.
    ///
    /// The dual value of a row is minus the relative cost of its reference column, divided by the
    /// initial coefficient of that column.
    pub fn dual_values(&self) -> Vec<F> {
        self.reference_columns.iter()
            .map(|&(column, coefficient)| -self.objective.get(column) / coefficient)
            .collect()
    }

    /// Whether each row was multiplied by `-1` while building.
    pub fn negated_rows(&self) -> &[bool] {
        &self.negated
    }

    /// Column groups.
    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Numerical context used by the tableau.
    pub fn context(&self) -> &NumericalContext<F> {
        &self.context
    }

    /// Number of rows in the tableau, excluding the cost rows.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the tableau, including slack and artificial columns.
    pub fn nr_columns(&self) -> usize {
        self.layout.nr_columns()
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn is_in_basic_feasible_solution_state<F: Scalar, V: Vector<F>>(tableau: &Tableau<F, V>) -> bool {
    // Checking basis_columns
    // Correct number of basis columns (uniqueness is implied because it's a set)
    let basis_is_injective = tableau.basis_columns.len() == tableau.nr_rows()
        && tableau.basis_indices.iter().all(|j| tableau.basis_columns.contains(j));

    // Basis columns are unit vectors, also in the cost rows
    let basis_columns_are_unit = tableau.basis_indices.iter().enumerate()
        .all(|(i, &j)| {
            tableau.rows.iter().enumerate().all(|(k, row)| {
                let expected = if k == i { F::one() } else { F::zero() };
                row.get(j) == expected
            })
                && tableau.objective.get(j).is_zero()
                && tableau.phase_one.as_ref().is_none_or(|row| row.get(j).is_zero())
        });

    // `b` >= 0
    let is_feasible = tableau.rows.iter()
        .all(|row| !tableau.context.is_negative(row.value()));

    basis_is_injective && basis_columns_are_unit && is_feasible
}

impl<F: Scalar, V: Vector<F>> Display for Tableau<F, V> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;
        let cost = self.cost_row();
        let objective = (-cost.value()).to_string();
        let costs = (0..self.nr_columns())
            .map(|j| cost.get(j).to_string())
            .collect::<Vec<_>>();
        let b = self.rows.iter()
            .map(|row| row.value().to_string())
            .collect::<Vec<_>>();
        let columns = (0..self.nr_columns()).map(|j| {
            self.rows.iter()
                .map(|row| {
                    let value = row.get(j);
                    if value.is_zero() { String::new() } else { value.to_string() }
                })
                .collect::<Vec<_>>()
        }).collect::<Vec<_>>();

        let row_counter_width = max("cost".len(), self.nr_rows().to_string().len());
        let column_width = columns.iter().enumerate().map(|(j, column)| {
            column.iter()
                .map(String::len)
                .chain([j.to_string().len(), costs[j].len()])
                .max()
                .unwrap_or(0)
        }).collect::<Vec<_>>();
        let b_inner_width = b.iter().map(String::len).chain([objective.len(), 1]).max().unwrap_or(1);

        // Column counters
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        write!(f, " {0:^width$} |", "b", width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", j, width = width)?;
        }
        writeln!(f)?;

        let total_width = (row_counter_width + 1) + 1 + (1 + b_inner_width + 1) + 1 +
            column_width.iter().map(|l| 1 + l).sum::<usize>();
        // Separator
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Cost row
        write!(f, "{0:>width$} |", "cost", width = row_counter_width)?;
        write!(f, " {0:^width$} |", objective, width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", costs[j], width = width)?;
        }
        writeln!(f)?;

        // Separator
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Row counter and row data
        for i in 0..self.nr_rows() {
            write!(f, "{0:>width$} |", i, width = row_counter_width)?;
            write!(f, " {0:^width$} |", b[i], width = b_inner_width)?;
            for (j, width) in column_width.iter().enumerate() {
                write!(f, " {0:^width$}", columns[j][i], width = width)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        let basis = self.basis_indices.iter().copied().enumerate().collect::<Vec<_>>();
        writeln!(f, "{:?}", basis)
    }
}
