//! # Phase one
//!
//! Computing a basic feasible solution by minimizing the sum of the artificial variables.
use tracing::{debug, trace};

use crate::algorithm::two_phase::IterationCounter;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::Scalar;
use crate::error::Error;

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
#[derive(Debug, Eq, PartialEq)]
pub enum FeasibilityResult {
    /// The tableau is in its second phase with a basic feasible solution.
    Feasible {
        /// Rows that are linear combinations of other rows. Their artificial variable stays in the
        /// basis at value zero. Sorted.
        redundant_rows: Vec<usize>,
    },
    /// The artificial variables can't all be zero.
    Infeasible,
    /// A pivot was needed when the iteration limit was already reached.
    IterationLimitExceeded,
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the linear program is found.
///
/// # Arguments
///
/// * `tableau`: Tableau in its first phase with a valid basis. This basis will typically consist
/// of slack and artificial variables.
/// * `counter`: Pivots made during this phase are registered here.
///
/// # Return value
///
/// Whether the problem is feasible. If it is, the tableau is in its second phase.
pub(crate) fn primal<F, V, PR>(
    tableau: &mut Tableau<F, V>,
    counter: &mut IterationCounter,
) -> Result<FeasibilityResult, Error>
where
    F: Scalar,
    V: Vector<F>,
    PR: PivotRule<F>,
{
    debug_assert!(tableau.is_phase_one());

    let initial_infeasibility = tableau.infeasibility();
    let is_feasible = |tableau: &Tableau<F, V>| {
        tableau.context().is_small(initial_infeasibility, tableau.infeasibility())
    };

    let mut rule = PR::new(tableau);
    while !is_feasible(tableau) {
        debug_assert!(is_in_basic_feasible_solution_state(tableau));

        let Some((column, cost)) = rule.select_primal_pivot_column(tableau) else {
            break;
        };
        // The artificial cost is bounded from below by zero, so this only happens when the
        // relative cost is inaccurate
        let Some(row) = tableau.select_primal_pivot_row(column) else {
            break;
        };
        if !counter.try_next() {
            return Ok(FeasibilityResult::IterationLimitExceeded);
        }

        trace!(row, column, cost = %cost, "phase one pivot");
        tableau.pivot(row, column)?;
    }

    if !is_feasible(tableau) {
        debug!(infeasibility = %tableau.infeasibility(), "no feasible solution");
        return Ok(FeasibilityResult::Infeasible);
    }

    let redundant_rows = remove_artificial_basis_variables(tableau)?;
    tableau.end_phase_one();
    debug_assert!(is_in_basic_feasible_solution_state(tableau));

    Ok(FeasibilityResult::Feasible { redundant_rows })
}

/// Removes artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// In each row with an artificial basis variable, the non artificial column with the largest
/// coefficient (in absolute value) enters the basis. Because the artificial variable is zero, the
/// right hand side doesn't change.
///
/// # Arguments
///
/// * `tableau`: Tableau to change the basis for.
///
/// # Return value
///
/// Indices of rows that are redundant: none of their non artificial coefficients can be pivoted
/// on. They keep their artificial variable in the basis.
fn remove_artificial_basis_variables<F: Scalar, V: Vector<F>>(
    tableau: &mut Tableau<F, V>,
) -> Result<Vec<usize>, Error> {
    let mut redundant_rows = Vec::new();

    for row in tableau.artificial_basis_rows() {
        let mut largest: Option<(usize, F)> = None;
        for column in (0..tableau.nr_columns()).filter(|&j| tableau.is_candidate(j)) {
            let value = tableau.value_at(row, column)?;
            if !tableau.is_pivot_element(value) {
                continue;
            }
            if largest.is_none_or(|(_, largest_value)| value.abs() > largest_value) {
                largest = Some((column, value.abs()));
            }
        }

        match largest {
            Some((column, _)) => {
                tableau.pivot(row, column)?;
                trace!(row, column, "removed artificial variable from basis");
            },
            None => redundant_rows.push(row),
        }
    }

    Ok(redundant_rows)
}
