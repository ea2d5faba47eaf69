//! # Tableau rows
//!
//! Constraint rows and the cost rows are the same structure: a coefficient for each column and a
//! single scalar. For a constraint row, the scalar is the right hand side. For a cost row, it is
//! the running total `-z` of the cost function, which the elimination keeps up to date with the
//! same formula that it applies to the right hand side.
use crate::data::linear_algebra::vector::{combine, Vector};
use crate::data::number_types::Scalar;
use crate::data::number_types::tolerance::NumericalContext;

/// Coefficients and a scalar, see the module documentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<F, V> {
    coefficients: V,
    value: F,
}

impl<F: Scalar, V: Vector<F>> Row<F, V> {
    /// Create a new row.
    pub fn new(coefficients: V, value: F) -> Self {
        Self { coefficients, value }
    }

    /// Coefficient in a column.
    pub fn get(&self, column: usize) -> F {
        self.coefficients.get(column)
    }

    /// All coefficients.
    pub fn coefficients(&self) -> &V {
        &self.coefficients
    }

    /// Right hand side for a constraint row, negative running total for a cost row.
    pub fn value(&self) -> F {
        self.value
    }

    /// Multiply the coefficients and the value by a non zero factor.
    pub(super) fn scale(&mut self, factor: F) {
        self.coefficients.scale(factor);
        self.value = self.value * factor;
    }

    /// Set a coefficient to an exact value, used to remove rounding residue after a pivot.
    pub(super) fn set(&mut self, column: usize, value: F) {
        self.coefficients.set(column, value);
    }

    /// Eliminate a column from this row, using a normalized pivot row.
    ///
    /// Adds `-self[column]` times `pivot_row` to this row, after which the coefficient in the pivot
    /// column is exactly zero. Rows with a coefficient that is already (numerically) zero are not
    /// changed otherwise, which avoids touching most rows of a sparse tableau.
    ///
    /// # Arguments
    ///
    /// * `column`: Pivot column.
    /// * `pivot_row`: Row with a `1` in the pivot column.
    /// * `context`: Decides which values are numerically zero.
    pub(super) fn eliminate(&mut self, column: usize, pivot_row: &Self, context: &NumericalContext<F>) {
        let factor = -self.coefficients.get(column);
        if factor.is_zero() {
            return;
        }

        if !context.is_zero(factor) {
            self.coefficients.add_multiple_of(factor, &pivot_row.coefficients, context);
            self.value = combine(self.value, factor, pivot_row.value, context);
        }
        self.coefficients.set(column, F::zero());
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::tableau::row::Row;
    use crate::data::linear_algebra::vector::{DenseVector, SparseVector, Vector};
    use crate::data::number_types::tolerance::NumericalContext;

    fn eliminate<V: Vector<f64>>() {
        let context = NumericalContext::default();
        let pivot_row = Row::new(V::from_values(vec![1f64, 2f64, 0f64]), 3f64);

        let mut row = Row::new(V::from_values(vec![4f64, 1f64, 1f64]), 5f64);
        row.eliminate(0, &pivot_row, &context);
        assert_eq!(row, Row::new(V::from_values(vec![0f64, -7f64, 1f64]), -7f64));

        // Numerically zero factor, only the residue is removed
        let mut row = Row::new(V::from_values(vec![1e-14, 1f64, 1f64]), 5f64);
        row.eliminate(0, &pivot_row, &context);
        assert_eq!(row, Row::new(V::from_values(vec![0f64, 1f64, 1f64]), 5f64));
    }

    #[test]
    fn eliminate_dense() {
        eliminate::<DenseVector<f64>>();
    }

    #[test]
    fn eliminate_sparse() {
        eliminate::<SparseVector<f64>>();
    }
}
