//! # Phase two
//!
//! Optimizing the objective function, starting from a basic feasible solution.
use tracing::trace;

use crate::algorithm::State;
use crate::algorithm::two_phase::IterationCounter;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::Scalar;
use crate::error::Error;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be non negative (primal feasibility)
/// - The first phase has ended
///
/// # Return value
///
/// A `State` indicating whether or not the problem has a finite optimum. It cannot be infeasible,
/// as a feasible solution is needed to start using this method.
pub(crate) fn primal<F, V, PR>(
    tableau: &mut Tableau<F, V>,
    counter: &mut IterationCounter,
) -> Result<State, Error>
where
    F: Scalar,
    V: Vector<F>,
    PR: PivotRule<F>,
{
    debug_assert!(!tableau.is_phase_one());

    let mut rule = PR::new(tableau);
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau));

        match rule.select_primal_pivot_column(tableau) {
            Some((column, cost)) => match tableau.select_primal_pivot_row(column) {
                Some(row) => {
                    if !counter.try_next() {
                        break Ok(State::IterationLimitExceeded);
                    }

                    trace!(row, column, cost = %cost, "phase two pivot");
                    tableau.pivot(row, column)?;
                },
                None => break Ok(State::Unbounded),
            },
            None => break Ok(State::Optimal),
        }
    }
}
