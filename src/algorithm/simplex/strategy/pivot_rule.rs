//! # Pivot rules
//!
//! Strategies for selecting the column that enters the basis.
use crate::algorithm::simplex::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, the row is found with a ratio test that is independent of
/// the strategy.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Current tableau.
    /// * `epsilon`: Relative costs need to be below `-epsilon` to be considered.
    ///
    /// # Return value
    ///
    /// Index of the entering column, or `None` if the current basis is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau, epsilon: f64) -> Option<usize>;
}

/// Simply pivot on the first column, which has a negative relative cost.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau, epsilon: f64) -> Option<usize> {
        (0..tableau.nr_columns())
            .find(|&column| tableau.relative_cost(column) < -epsilon)
    }
}

/// Pivot on the column, which has the most negative relative cost.
///
/// Ties are broken in favor of the lowest column index.
pub struct SteepestDescentAlongVariable;
impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau, epsilon: f64) -> Option<usize> {
        let mut smallest: Option<(usize, f64)> = None;
        for (j, cost) in (0..tableau.nr_columns())
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|&(_, cost)| cost < -epsilon) {
            match smallest {
                Some((_, existing_cost)) if cost >= existing_cost => {},
                _ => smallest = Some((j, cost)),
            }
        }

        smallest.map(|(j, _)| j)
    }
}
