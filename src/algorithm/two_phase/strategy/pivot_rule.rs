//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::Scalar;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule<F: Scalar> {
    /// Create a new instance.
    fn new<V: Vector<F>>(tableau: &Tableau<F, V>) -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// Only columns that are not artificial and not in the basis are considered. The relative cost
    /// of the current phase is used.
    ///
    /// # Return value
    ///
    /// Column index and its relative cost, or `None` if no column has a relative cost that is
    /// negative beyond the tolerance. In that case, the current basis is optimal.
    fn select_primal_pivot_column<V: Vector<F>>(
        &mut self,
        tableau: &Tableau<F, V>,
    ) -> Option<SparseTuple<F>>;
}

/// Iterate over the columns that may enter the basis, with their relative cost if it is negative.
fn profitable_columns<F: Scalar, V: Vector<F>>(
    tableau: &Tableau<F, V>,
) -> impl Iterator<Item = SparseTuple<F>> + '_ {
    (0..tableau.nr_columns())
        .filter(|&column| tableau.is_candidate(column))
        .map(|column| (column, tableau.relative_cost(column)))
        .filter(|&(_, cost)| tableau.context().is_negative(cost))
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Together with the ratio test's lowest basis index tie breaking, this is Bland's rule.
pub struct FirstProfitable;
impl<F: Scalar> PivotRule<F> for FirstProfitable {
    fn new<V: Vector<F>>(_tableau: &Tableau<F, V>) -> Self {
        Self
    }

    fn select_primal_pivot_column<V: Vector<F>>(
        &mut self,
        tableau: &Tableau<F, V>,
    ) -> Option<SparseTuple<F>> {
        profitable_columns(tableau).next()
    }
}

/// Pivot on the column with the most negative relative cost.
///
/// On ties, the column with the lowest index is chosen.
pub struct SteepestDescentAlongVariable;
impl<F: Scalar> PivotRule<F> for SteepestDescentAlongVariable {
    fn new<V: Vector<F>>(_tableau: &Tableau<F, V>) -> Self {
        Self
    }

    fn select_primal_pivot_column<V: Vector<F>>(
        &mut self,
        tableau: &Tableau<F, V>,
    ) -> Option<SparseTuple<F>> {
        profitable_columns(tableau)
            .fold(None, |best: Option<SparseTuple<F>>, (column, cost)| match best {
                Some((_, best_cost)) if cost >= best_cost => best,
                _ => Some((column, cost)),
            })
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::options::Options;
    use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule, SteepestDescentAlongVariable};
    use crate::algorithm::two_phase::tableau::DenseTableau;
    use crate::data::linear_program::Builder;

    fn create_tableau(cost: Vec<f64>) -> DenseTableau<f64> {
        let nr_variables = cost.len();
        let program = Builder::minimize(cost)
            .less_or_equal(vec![1_f64; nr_variables], 1_f64)
            .build()
            .unwrap();
        DenseTableau::new(&program, &Options::default())
    }

    #[test]
    fn first_profitable() {
        let tableau = create_tableau(vec![1_f64, -1_f64, -3_f64]);
        let mut rule = <FirstProfitable as PivotRule<f64>>::new(&tableau);
        assert_eq!(rule.select_primal_pivot_column(&tableau), Some((1, -1_f64)));
    }

    #[test]
    fn steepest_descent() {
        let tableau = create_tableau(vec![1_f64, -1_f64, -3_f64, -3_f64]);
        let mut rule = <SteepestDescentAlongVariable as PivotRule<f64>>::new(&tableau);
        assert_eq!(rule.select_primal_pivot_column(&tableau), Some((2, -3_f64)));
    }

    #[test]
    fn optimal() {
        let tableau = create_tableau(vec![1_f64, 0_f64, 1e-12]);
        let mut first = <FirstProfitable as PivotRule<f64>>::new(&tableau);
        let mut steepest = <SteepestDescentAlongVariable as PivotRule<f64>>::new(&tableau);
        assert_eq!(first.select_primal_pivot_column(&tableau), None);
        assert_eq!(steepest.select_primal_pivot_column(&tableau), None);

        // Slightly negative, but within tolerance
        let tableau = create_tableau(vec![-1e-12]);
        assert_eq!(first.select_primal_pivot_column(&tableau), None);
    }
}
