//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size.
use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_algebra::vector::{combine, Vector};
use crate::data::number_types::Scalar;
use crate::data::number_types::tolerance::NumericalContext;

/// Uses a `Vec` as underlying data a structure. Length is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense<F> {
    data: Vec<F>,
}

impl<F: Scalar> Vector<F> for Dense<F> {
    fn from_values(values: Vec<F>) -> Self {
        Self { data: values }
    }

    fn zeros(len: usize) -> Self {
        Self { data: vec![F::zero(); len] }
    }

    fn get(&self, index: usize) -> F {
        debug_assert!(index < self.len());

        self.data[index]
    }

    fn set(&mut self, index: usize, value: F) {
        debug_assert!(index < self.len());

        self.data[index] = value;
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn nr_non_zeros(&self) -> usize {
        self.data.iter().filter(|value| !value.is_zero()).count()
    }

    fn iter_non_zeros(&self) -> impl Iterator<Item = SparseTuple<F>> + '_ {
        self.data.iter()
            .copied()
            .enumerate()
            .filter(|(_, value)| !value.is_zero())
    }

    fn scale(&mut self, factor: F) {
        for value in &mut self.data {
            *value = *value * factor;
        }
    }

    fn add_multiple_of(&mut self, multiple: F, other: &Self, context: &NumericalContext<F>) {
        debug_assert_eq!(other.len(), self.len());

        for (value, &other_value) in self.data.iter_mut().zip(&other.data) {
            if !other_value.is_zero() {
                *value = combine(*value, multiple, other_value, context);
            }
        }
    }

    fn inner_product(&self, other: &[F]) -> F {
        debug_assert_eq!(other.len(), self.len());

        self.data.iter()
            .zip(other)
            .fold(F::zero(), |total, (&left, &right)| total + left * right)
    }
}
