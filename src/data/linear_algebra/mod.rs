//! # Linear algebra primitives
//!
//! Linear algebra primitives used to represent data in either a dense or a sparse format.
pub mod equation;
pub mod vector;

/// Value at a specific index in a sparse data structure.
pub type SparseTuple<F> = (usize, F);
