//! # A tableau based linear program solver
//!
//! Linear programs are solved using the two phase Simplex Method as described in the book
//! Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz. The complete
//! tableau is kept in memory, with either dense or sparse rows, and problems with fewer variables
//! than constraints can be solved through their dual.
//!
//! ```
//! use relp_tableau::algorithm::{solve, State};
//! use relp_tableau::algorithm::options::Options;
//! use relp_tableau::data::linear_program::Builder;
//!
//! let program = Builder::maximize(vec![3f64, 2f64])
//!     .less_or_equal(vec![1f64, 1f64], 4f64)
//!     .less_or_equal(vec![1f64, 3f64], 6f64)
//!     .build()
//!     .unwrap();
//! let solution = solve(&program, &Options::default()).unwrap();
//! assert_eq!(solution.state, State::Optimal);
//! assert_eq!(solution.objective_value, 12f64);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;
