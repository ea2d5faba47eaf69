//! # Vector types for tableau rows
//!
//! Sparse and dense vectors. These were written by hand, because a certain specific set of
//! operations needs to be done quickly with these types: the elimination step of a pivot only
//! reads and writes whole rows.
use std::fmt::Debug;

pub use dense::Dense as DenseVector;
pub use sparse::Sparse as SparseVector;

use crate::data::linear_algebra::SparseTuple;
use crate::data::number_types::Scalar;
use crate::data::number_types::tolerance::NumericalContext;

mod dense;
mod sparse;

/// Defines basic ways to create or change a vector, regardless of back-end.
///
/// Both implementations represent the same mathematical object and should produce the same
/// values (up to rounding) when the same sequence of operations is applied to them.
pub trait Vector<F: Scalar>: Clone + PartialEq + Debug + Send + Sync {
    /// Create a new instance from all values, including the zero ones.
    ///
    /// # Arguments
    ///
    /// * `values`: Value for every index of the vector. Exact zeros are not stored by sparse
    /// representations.
    fn from_values(values: Vec<F>) -> Self;
    /// Create a vector of length `len` with all values equal to zero.
    fn zeros(len: usize) -> Self;
    /// Retrieve the value at an index.
    fn get(&self, index: usize) -> F;
    /// Set the value at an index.
    ///
    /// Depending on internal representation, this can be an expensive operation (for
    /// `SparseVector`'s, the cost depends on the (lack of) sparsity).
    fn set(&mut self, index: usize, value: F);
    /// Number of items represented by the vector.
    fn len(&self) -> usize;
    /// Whether the vector is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Number of values that are not exactly zero.
    fn nr_non_zeros(&self) -> usize;
    /// Iterate over the values that are not exactly zero, in increasing index order.
    fn iter_non_zeros(&self) -> impl Iterator<Item = SparseTuple<F>> + '_;
    /// Multiply each element of the vector by a value.
    fn scale(&mut self, factor: F);
    /// Add the multiple of another vector to this vector.
    ///
    /// Values that become small relative to the values they were computed from are set to
    /// exactly zero.
    ///
    /// # Arguments
    ///
    /// * `multiple`: Constant that all elements of the `other` vector are multiplied with.
    /// * `other`: Vector of the same length.
    /// * `context`: Decides which results are read as zero.
    fn add_multiple_of(&mut self, multiple: F, other: &Self, context: &NumericalContext<F>);
    /// Inner product with a dense slice of the same length.
    fn inner_product(&self, other: &[F]) -> F;
    /// Largest absolute value, zero for an empty vector.
    fn max_abs(&self) -> F {
        self.iter_non_zeros().fold(F::zero(), |max, (_, value)| max.max(value.abs()))
    }
}

/// Result of `value + multiple * other` that is rounded to zero when it is small relative to the
/// operands.
#[inline]
pub(crate) fn combine<F: Scalar>(value: F, multiple: F, other: F, context: &NumericalContext<F>) -> F {
    let product = multiple * other;
    let new_value = value + product;
    if context.is_small(value.abs().max(product.abs()), new_value) {
        F::zero()
    } else {
        new_value
    }
}
