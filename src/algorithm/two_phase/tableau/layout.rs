//! # Column layout
//!
//! The columns of a tableau are grouped by the role of the variable they represent:
//!
//! /                   || Structural | Slack | Artificial | ----- |
//! ====================||============|=======|============|=======|
//! Equality       (==) ||     A      |   0   |     I      |   b   |
//! Inequality, b >= 0  ||     A      |   I   |     0      |   b   |
//! Inequality, b <  0  ||    -A      |  -I   |     I      |  -b   |
//!
//! Rows with a negative right hand side are multiplied by `-1` when the tableau is built, such that
//! the initial basis of slacks and artificial variables is feasible.
use std::ops::Range;

use cumsum::cumsum_array_owned;
use enum_map::{Enum, enum_map, EnumMap};

/// Role of a column.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnType {
    /// Variables for which we want a solution.
    Structural,
    /// Slack `s` for an equation like `<a, x> + s = b`.
    Slack,
    /// Variables that only serve to find an initial basic feasible solution. They should be zero
    /// after the first phase.
    Artificial,
}

/// Indices that separate the different groups of columns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnLayout {
    column_group_end: EnumMap<ColumnType, usize>,
}

impl ColumnLayout {
    /// Create a new layout from the group sizes.
    #[must_use]
    pub fn new(nr_structural: usize, nr_slack: usize, nr_artificial: usize) -> Self {
        let cumulative = cumsum_array_owned([nr_structural, nr_slack, nr_artificial]);
        let column_group_end = enum_map!{
            ColumnType::Structural => cumulative[0],
            ColumnType::Slack      => cumulative[1],
            ColumnType::Artificial => cumulative[2],
        };

        Self { column_group_end }
    }

    /// Classify a column by type using the column index.
    pub fn column_type(&self, j: usize) -> ColumnType {
        debug_assert!(j < self.nr_columns());

        if j < self.column_group_end[ColumnType::Structural] {
            ColumnType::Structural
        } else if j < self.column_group_end[ColumnType::Slack] {
            ColumnType::Slack
        } else {
            ColumnType::Artificial
        }
    }

    /// Column indices of a group.
    pub fn range(&self, column_type: ColumnType) -> Range<usize> {
        let start = match column_type {
            ColumnType::Structural => 0,
            ColumnType::Slack => self.column_group_end[ColumnType::Structural],
            ColumnType::Artificial => self.column_group_end[ColumnType::Slack],
        };

        start..self.column_group_end[column_type]
    }

    /// Whether a column is an artificial one.
    pub fn is_artificial(&self, j: usize) -> bool {
        j >= self.column_group_end[ColumnType::Slack]
    }

    /// Number of columns in a group.
    pub fn nr(&self, column_type: ColumnType) -> usize {
        self.range(column_type).len()
    }

    /// Total number of columns.
    pub fn nr_columns(&self) -> usize {
        self.column_group_end[ColumnType::Artificial]
    }
}
