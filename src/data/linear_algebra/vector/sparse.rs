//! # Sparse vector
//!
//! Wrapping a `Vec<(usize, _)>`, fixed size.
use std::mem;

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_algebra::vector::{combine, Vector};
use crate::data::number_types::Scalar;
use crate::data::number_types::tolerance::NumericalContext;

/// A sparse vector using a `Vec` with (index, value) combinations as back-end. Indices start at
/// `0`.
///
/// The tuples are sorted by index and no value is exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparse<F> {
    data: Vec<SparseTuple<F>>,
    len: usize,
}

impl<F: Scalar> Sparse<F> {
    /// Create a vector of length `len` from `data`.
    ///
    /// Requires that the tuples are sorted by index and that zero values are already filtered.
    pub fn new(data: Vec<SparseTuple<F>>, len: usize) -> Self {
        debug_assert!(data.iter().all(|&(i, _)| i < len));
        debug_assert!(data.is_sorted_by_key(|&(i, _)| i));
        debug_assert!(data.iter().all(|(_, v)| !v.is_zero()));

        Self { data, len }
    }

    fn get_data_index(&self, i: usize) -> Result<usize, usize> {
        self.data.binary_search_by_key(&i, |&(index, _)| index)
    }
}

impl<F: Scalar> Vector<F> for Sparse<F> {
    fn from_values(values: Vec<F>) -> Self {
        let len = values.len();
        let data = values.into_iter()
            .enumerate()
            .filter(|(_, value)| !value.is_zero())
            .collect();

        Self::new(data, len)
    }

    fn zeros(len: usize) -> Self {
        Self { data: Vec::new(), len }
    }

    fn get(&self, index: usize) -> F {
        debug_assert!(index < self.len);

        match self.get_data_index(index) {
            Ok(data_index) => self.data[data_index].1,
            Err(_) => F::zero(),
        }
    }

    fn set(&mut self, index: usize, value: F) {
        debug_assert!(index < self.len);

        match (self.get_data_index(index), value.is_zero()) {
            (Ok(data_index), true) => {
                self.data.remove(data_index);
            },
            (Ok(data_index), false) => self.data[data_index].1 = value,
            (Err(data_index), false) => self.data.insert(data_index, (index, value)),
            (Err(_), true) => {},
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn nr_non_zeros(&self) -> usize {
        self.data.len()
    }

    fn iter_non_zeros(&self) -> impl Iterator<Item = SparseTuple<F>> + '_ {
        self.data.iter().copied()
    }

    fn scale(&mut self, factor: F) {
        debug_assert!(!factor.is_zero());

        for (_, value) in &mut self.data {
            *value = *value * factor;
        }
    }

    /// Add the multiple of another row to this row.
    ///
    /// Both index lists are merged in a single pass. If this method is too slow, it might be wise
    /// to consider the switching of the storage backend from a `Vec` to a `HashMap`.
    fn add_multiple_of(&mut self, multiple: F, other: &Self, context: &NumericalContext<F>) {
        debug_assert_eq!(other.len(), self.len());

        let old_data = mem::take(&mut self.data);
        let mut new_tuples = Vec::with_capacity(old_data.len() + other.data.len());

        let mut j = 0;  // other data index
        for (i, value) in old_data {
            while j < other.data.len() && other.data[j].0 < i {
                let (index, other_value) = other.data[j];
                new_tuples.push((index, combine(F::zero(), multiple, other_value, context)));
                j += 1;
            }

            if j < other.data.len() && other.data[j].0 == i {
                let new_value = combine(value, multiple, other.data[j].1, context);
                if !new_value.is_zero() {
                    new_tuples.push((i, new_value));
                }
                j += 1;
            } else {
                new_tuples.push((i, value));
            }
        }
        for &(index, other_value) in &other.data[j..] {
            new_tuples.push((index, combine(F::zero(), multiple, other_value, context)));
        }
        new_tuples.retain(|(_, value)| !value.is_zero());

        self.data = new_tuples;
    }

    fn inner_product(&self, other: &[F]) -> F {
        debug_assert_eq!(other.len(), self.len());

        self.data.iter()
            .fold(F::zero(), |total, &(i, value)| total + value * other[i])
    }
}
