//! # Contract violations
//!
//! Infeasible, unbounded and non converging problems are regular outcomes of a solve and are
//! reported through `algorithm::State`. The errors in this module indicate a bug in the caller:
//! a malformed problem, or an operation requested on an invalid position of a tableau.
use thiserror::Error;

/// A violated contract between the caller and the tableau machinery.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A row or column index is outside of the tableau.
    #[error("index ({row}, {column}) out of range for a tableau of {nr_rows} rows and {nr_columns} columns")]
    Index {
        row: usize,
        column: usize,
        nr_rows: usize,
        nr_columns: usize,
    },
    /// A pivot was requested on an element that is numerically zero.
    #[error("pivot element at ({row}, {column}) is numerically zero")]
    DegeneratePivot {
        row: usize,
        column: usize,
    },
    /// The dimensions of a problem or equation are inconsistent.
    ///
    /// The contained `String` is a message for the end user.
    #[error("inconsistent dimensions: {0}")]
    Dimension(String),
}
