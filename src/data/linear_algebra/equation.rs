//! # Single equations
//!
//! A row of a linear system together with its right hand side and a designated pivot variable.
//! Relaxation sweeps over a collection of these can be used to refine an approximate solution of
//! the system; the simplex pivot does not use this type.
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::Scalar;
use crate::data::number_types::tolerance::NumericalContext;
use crate::error::Error;

/// Equation `<coefficients, x> = rhs` solved for the variable at `pivot`.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation<F, V> {
    coefficients: V,
    rhs: F,
    pivot: usize,
    /// Cached value of `coefficients[pivot]`.
    pivot_coefficient: F,
}

impl<F: Scalar, V: Vector<F>> Equation<F, V> {
    /// Create a new equation.
    ///
    /// # Arguments
    ///
    /// * `coefficients`: Coefficient of each variable.
    /// * `rhs`: Right hand side.
    /// * `pivot`: Index of the variable that is updated by a relaxation step. Its coefficient
    /// should not be small.
    /// * `context`: Decides whether the pivot coefficient is too small.
    ///
    /// # Return value
    ///
    /// An `Error::Index` if the pivot is out of range, an `Error::DegeneratePivot` if its
    /// coefficient is numerically zero.
    pub fn new(
        coefficients: V,
        rhs: F,
        pivot: usize,
        context: &NumericalContext<F>,
    ) -> Result<Self, Error> {
        if pivot >= coefficients.len() {
            return Err(Error::Index {
                row: 0,
                column: pivot,
                nr_rows: 1,
                nr_columns: coefficients.len(),
            });
        }

        let pivot_coefficient = coefficients.get(pivot);
        if context.is_small(coefficients.max_abs(), pivot_coefficient) {
            return Err(Error::DegeneratePivot { row: 0, column: pivot });
        }

        Ok(Self { coefficients, rhs, pivot, pivot_coefficient })
    }

    /// Amount by which `x` violates this equation, `rhs - <coefficients, x>`.
    pub fn residual(&self, x: &[F]) -> F {
        self.rhs - self.coefficients.inner_product(x)
    }

    /// Relaxed update of the pivot variable.
    ///
    /// Computes `x[pivot] += (rhs - <coefficients, x>) * relaxation / coefficients[pivot]`. With a
    /// relaxation factor of `1`, the equation is satisfied exactly (up to rounding) afterwards.
    ///
    /// # Arguments
    ///
    /// * `x`: Current approximation, of the same length as the coefficient vector.
    /// * `relaxation`: Over (> 1) or under (< 1) relaxation factor.
    pub fn relax(&self, x: &mut [F], relaxation: F) {
        debug_assert_eq!(x.len(), self.coefficients.len());

        let step = self.residual(x) * relaxation / self.pivot_coefficient;
        x[self.pivot] = x[self.pivot] + step;
    }

    /// Index of the variable updated by `relax`.
    pub fn pivot(&self) -> usize {
        self.pivot
    }

    /// Right hand side of the equation.
    pub fn rhs(&self) -> F {
        self.rhs
    }

    /// Coefficients of the equation.
    pub fn coefficients(&self) -> &V {
        &self.coefficients
    }
}
