//! # Russell's approximation method
//!
//! Approximates the dual values of each line by its largest cost, and ships through the cell of
//! which the cost is furthest below the sum of its dual values.
use itertools::Itertools;

use crate::algorithm::transportation::{compare, InitialSolutionRule, State};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::transportation::Amount;

/// Ship through the cell with the smallest reduced cost `c_ij - (u_i + v_j)`, where `u_i` is the
/// largest active cost of source `i` and `v_j` the largest active cost of destination `j`.
///
/// Ties go to the first cell in row-major order.
pub struct DualCostRule;

impl<T: Amount> InitialSolutionRule<T> for DualCostRule {
    fn new() -> Self {
        Self
    }

    fn select_cell(&mut self, state: &State<T>, cost: &DenseMatrix<T>) -> Option<(usize, usize)> {
        let reduced_costs = reduced_costs(state, cost);

        let mut smallest: Option<(usize, usize, T)> = None;
        for (i, j) in (0..reduced_costs.nr_rows()).cartesian_product(0..reduced_costs.nr_columns()) {
            if let Some(reduced_cost) = reduced_costs.get_value(i, j) {
                match smallest {
                    Some((_, _, existing)) if reduced_cost >= existing => {},
                    _ => smallest = Some((i, j, reduced_cost)),
                }
            }
        }

        smallest.map(|(i, j, _)| (i, j))
    }
}

/// Reduced cost of each active cell, `None` for cells of which a line is not active.
fn reduced_costs<T: Amount>(state: &State<T>, cost: &DenseMatrix<T>) -> DenseMatrix<Option<T>> {
    let sources = state.active_sources().collect::<Vec<_>>();
    let destinations = state.active_destinations().collect::<Vec<_>>();

    let u = (0..cost.nr_rows())
        .map(|i| largest(destinations.iter().map(|&j| cost.get_value(i, j))))
        .collect::<Vec<_>>();
    let v = (0..cost.nr_columns())
        .map(|j| largest(sources.iter().map(|&i| cost.get_value(i, j))))
        .collect::<Vec<_>>();

    let mut reduced_costs = DenseMatrix::from_data(vec![vec![None; cost.nr_columns()]; cost.nr_rows()]);
    for (&i, &j) in sources.iter().cartesian_product(&destinations) {
        if let (Some(u_i), Some(v_j)) = (u[i], v[j]) {
            reduced_costs.set_value(i, j, Some(cost.get_value(i, j) - (u_i + v_j)));
        }
    }

    reduced_costs
}

fn largest<T: Amount>(values: impl Iterator<Item = T>) -> Option<T> {
    values.max_by(compare)
}
