//! # The two phase Simplex method
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! The first phase minimizes the sum of the artificial variables to find a basic feasible
//! solution, the second phase optimizes the objective function starting from that solution.
use tracing::{debug, trace};

use crate::algorithm::State;
use crate::algorithm::two_phase::phase_one::FeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::layout::ColumnType;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::Scalar;
use crate::error::Error;

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;


/// Progress of a solve.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// The tableau has been built, no pivots have been made.
    Building,
    /// Minimizing the sum of the artificial variables.
    PhaseOneRunning,
    /// Optimizing the objective function from a basic feasible solution.
    PhaseTwoRunning,
    /// No more pivots will be made.
    Terminated(State),
}

/// Counts pivots over both phases.
#[derive(Debug)]
pub struct IterationCounter {
    count: usize,
    limit: usize,
}

impl IterationCounter {
    /// Create a counter that allows `limit` pivots.
    pub fn new(limit: usize) -> Self {
        Self { count: 0, limit }
    }

    /// Register a pivot that is about to be made.
    ///
    /// # Return value
    ///
    /// `false` if the limit was already reached, in which case the pivot shouldn't be made.
    pub fn try_next(&mut self) -> bool {
        if self.count < self.limit {
            self.count += 1;
            true
        } else {
            false
        }
    }

    /// Number of pivots registered.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Values read from a tableau after its last pivot, in the orientation of the tableau.
#[derive(Debug, Clone, PartialEq)]
pub struct TableauSolution<F> {
    /// How the solve ended.
    pub state: State,
    /// Objective function value of the minimization problem that the tableau represents.
    pub objective_value: F,
    /// Value of each structural variable.
    pub structural: Vec<F>,
    /// Dual value of each row, in the orientation of the tableau rows.
    pub row_duals: Vec<F>,
    /// Whether each row was multiplied by `-1` while building the tableau.
    pub negated: Vec<bool>,
    /// Number of pivots made.
    pub iterations: usize,
}

impl<F: Scalar> TableauSolution<F> {
    /// Read the current basic solution of a tableau.
    ///
    /// Doesn't modify the tableau.
    pub fn extract<V: Vector<F>>(tableau: &Tableau<F, V>, state: State, iterations: usize) -> Self {
        let mut structural = tableau.current_bfs();
        structural.truncate(tableau.layout().nr(ColumnType::Structural));

        Self {
            state,
            objective_value: tableau.objective_function_value(),
            structural,
            row_duals: tableau.dual_values(),
            negated: tableau.negated_rows().to_vec(),
            iterations,
        }
    }
}

/// Run both phases on a tableau.
///
/// # Arguments
///
/// * `tableau`: Freshly built tableau, in its first phase if it has artificial columns.
/// * `iteration_limit`: Maximum number of pivots over both phases.
///
/// # Return value
///
/// The terminal state and the number of pivots that were made. An error is only returned when a
/// pivot violates the tableau's contract, which indicates a numerical breakdown.
pub fn solve<F, V, PR>(
    tableau: &mut Tableau<F, V>,
    iteration_limit: usize,
) -> Result<TableauSolution<F>, Error>
where
    F: Scalar,
    V: Vector<F>,
    PR: PivotRule<F>,
{
    let mut counter = IterationCounter::new(iteration_limit);
    let mut phase = Phase::Building;

    let state = loop {
        phase = match phase {
            Phase::Building => if tableau.is_phase_one() {
                debug!(infeasibility = %tableau.infeasibility(), "starting phase one");
                Phase::PhaseOneRunning
            } else {
                debug!("starting phase two, slack basis is feasible");
                Phase::PhaseTwoRunning
            },
            Phase::PhaseOneRunning => match phase_one::primal::<_, _, PR>(tableau, &mut counter)? {
                FeasibilityResult::Feasible { redundant_rows } => {
                    debug!(
                        iterations = counter.count(),
                        nr_redundant_rows = redundant_rows.len(),
                        "starting phase two",
                    );
                    Phase::PhaseTwoRunning
                },
                FeasibilityResult::Infeasible => Phase::Terminated(State::Infeasible),
                FeasibilityResult::IterationLimitExceeded => Phase::Terminated(State::IterationLimitExceeded),
            },
            Phase::PhaseTwoRunning => Phase::Terminated(phase_two::primal::<_, _, PR>(tableau, &mut counter)?),
            Phase::Terminated(state) => break state,
        };
    };

    debug!(
        ?state,
        iterations = counter.count(),
        objective = %tableau.objective_function_value(),
        "terminated",
    );
    trace!("final tableau\n{}", tableau);

    Ok(TableauSolution::extract(tableau, state, counter.count()))
}
