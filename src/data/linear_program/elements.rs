//! # Building blocks to describe linear programs.
use std::ops::Not;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Objective {
    /// Whether the objective coefficients need to be negated to get a minimization problem.
    pub fn is_negated(self) -> bool {
        self == Objective::Maximize
    }
}

impl Not for Objective {
    type Output = Objective;

    fn not(self) -> Objective {
        match self {
            Objective::Maximize => Objective::Minimize,
            Objective::Minimize => Objective::Maximize,
        }
    }
}

/// A single linear constraint row `<coefficients, x> (==|<=) rhs`.
///
/// The relation is implied by the collection the row is stored in, see `LinearProgram`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint<F> {
    /// Coefficient for each structural variable.
    pub coefficients: Vec<F>,
    /// Right hand side.
    pub rhs: F,
}

impl<F> Constraint<F> {
    /// Create a new constraint row.
    pub fn new(coefficients: Vec<F>, rhs: F) -> Self {
        Self { coefficients, rhs }
    }
}
