//! # Solver options
//!
//! Everything that can be tuned about a solve. There is no file or environment loading; callers
//! construct an `Options` value, typically starting from `Options::default()`.
use crate::data::number_types::Scalar;
use crate::data::number_types::tolerance::NumericalContext;

/// Storage of the tableau rows.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Representation {
    /// Decide based on the size of the tableau and the estimated fraction of non zero values.
    #[default]
    Automatic,
    /// Every row is a `Vec` with a value for each column.
    Dense,
    /// Every row only stores the non zero values.
    Sparse,
}

/// Which problem is given to the two phase algorithm.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Formulation {
    /// Solve the problem as given.
    #[default]
    Primal,
    /// Solve the dual problem, and map the result back.
    Dual,
    /// Solve the dual problem when its tableau has fewer rows than that of the primal problem.
    Automatic,
}

/// Rule used to select the column entering the basis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum PivotRuleKind {
    /// Most negative relative cost, lowest index on ties.
    #[default]
    SteepestDescentAlongVariable,
    /// Lowest index with a negative relative cost. Together with the lowest basis index tie
    /// breaking of the ratio test, this is Bland's rule, which can't cycle.
    FirstProfitable,
}

/// Options of a solve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Options<F> {
    /// Decides which computed values are read as zero.
    pub numerical: NumericalContext<F>,
    /// Maximum number of pivots, summed over both phases.
    pub iteration_limit: usize,
    /// Tableaus with at least this many rows eliminate in parallel.
    pub parallel_threshold: usize,
    /// Number of rows below which a parallel elimination range isn't split further.
    pub parallel_grain: usize,
    /// Storage of the tableau rows.
    pub representation: Representation,
    /// With `Representation::Automatic`, a sparse tableau is used if at most this fraction of the
    /// initial tableau is non zero...
    pub sparse_fill_ratio: f64,
    /// ... and the tableau has at least this many cells.
    pub sparse_min_size: usize,
    /// Column selection rule.
    pub pivot_rule: PivotRuleKind,
    /// Whether the primal or the dual problem is solved.
    pub formulation: Formulation,
}

impl<F: Scalar> Default for Options<F> {
    fn default() -> Self {
        Self {
            numerical: NumericalContext::default(),
            iteration_limit: 100_000,
            parallel_threshold: 256,
            parallel_grain: 64,
            representation: Representation::default(),
            sparse_fill_ratio: 0.1,
            sparse_min_size: 10_000,
            pivot_rule: PivotRuleKind::default(),
            formulation: Formulation::default(),
        }
    }
}

impl<F: Scalar> Options<F> {
    /// Replace the numerical context.
    #[must_use]
    pub fn with_numerical(mut self, numerical: NumericalContext<F>) -> Self {
        self.numerical = numerical;
        self
    }

    /// Replace the iteration limit.
    #[must_use]
    pub fn with_iteration_limit(mut self, iteration_limit: usize) -> Self {
        self.iteration_limit = iteration_limit;
        self
    }

    /// Replace the number of rows from which on the elimination is done in parallel.
    #[must_use]
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Replace the row storage.
    #[must_use]
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Replace the column selection rule.
    #[must_use]
    pub fn with_pivot_rule(mut self, pivot_rule: PivotRuleKind) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }

    /// Replace the formulation.
    #[must_use]
    pub fn with_formulation(mut self, formulation: Formulation) -> Self {
        self.formulation = formulation;
        self
    }

    /// Decide on the row storage for a tableau.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of constraint rows of the tableau.
    /// * `nr_columns`: Number of columns of the tableau.
    /// * `nr_non_zeros`: Number of non zero constraint coefficients of the initial tableau.
    ///
    /// # Return value
    ///
    /// Either `Representation::Dense` or `Representation::Sparse`.
    pub fn resolve_representation(
        &self,
        nr_rows: usize,
        nr_columns: usize,
        nr_non_zeros: usize,
    ) -> Representation {
        match self.representation {
            Representation::Automatic => {
                let size = nr_rows * nr_columns;
                if size >= self.sparse_min_size
                    && (nr_non_zeros as f64) <= self.sparse_fill_ratio * size as f64 {
                    Representation::Sparse
                } else {
                    Representation::Dense
                }
            },
            explicit => explicit,
        }
    }
}
