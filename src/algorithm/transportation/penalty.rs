//! # Vogel's approximation method
//!
//! The penalty of a line is what it costs to miss its cheapest cell and use the second cheapest
//! instead. The line with the largest penalty ships through its cheapest cell first.
use itertools::Itertools;

use crate::algorithm::transportation::{compare, InitialSolutionRule, State};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::transportation::Amount;

/// Ship through the cheapest cell of the line with the largest penalty.
///
/// Penalties are computed over the active cells only. When a source and a destination have the
/// same largest penalty, the source is selected. Remaining ties go to the lowest index.
pub struct PenaltyRule;

impl<T: Amount> InitialSolutionRule<T> for PenaltyRule {
    fn new() -> Self {
        Self
    }

    fn select_cell(&mut self, state: &State<T>, cost: &DenseMatrix<T>) -> Option<(usize, usize)> {
        let sources = state.active_sources().collect::<Vec<_>>();
        let destinations = state.active_destinations().collect::<Vec<_>>();

        let row = largest_penalty(sources.iter().map(|&i| {
            (i, penalty(destinations.iter().map(|&j| cost.get_value(i, j))))
        }));
        let column = largest_penalty(destinations.iter().map(|&j| {
            (j, penalty(sources.iter().map(|&i| cost.get_value(i, j))))
        }));

        let select_in_row = |i| cheapest(&destinations, |j| cost.get_value(i, j)).map(|j| (i, j));
        let select_in_column = |j| cheapest(&sources, |i| cost.get_value(i, j)).map(|i| (i, j));
        match (row, column) {
            (Some((i, row_penalty)), Some((_, column_penalty))) if row_penalty >= column_penalty => {
                select_in_row(i)
            },
            (Some((i, _)), None) => select_in_row(i),
            (_, Some((j, _))) => select_in_column(j),
            (None, None) => None,
        }
    }
}

/// Difference between the two smallest costs, or the smallest cost if there is only one.
fn penalty<T: Amount>(costs: impl Iterator<Item = T>) -> Option<T> {
    let mut sorted = costs.sorted_by(compare);
    match (sorted.next(), sorted.next()) {
        (Some(smallest), Some(second)) => Some(second - smallest),
        (Some(smallest), None) => Some(smallest),
        _ => None,
    }
}

/// The first index with the largest penalty.
fn largest_penalty<T: Amount>(
    penalties: impl Iterator<Item = (usize, Option<T>)>,
) -> Option<(usize, T)> {
    penalties
        .filter_map(|(index, penalty)| penalty.map(|penalty| (index, penalty)))
        .fold(None, |largest, (index, penalty)| match largest {
            Some((_, largest_penalty)) if penalty <= largest_penalty => largest,
            _ => Some((index, penalty)),
        })
}

/// The first candidate with the smallest cost.
fn cheapest<T: Amount>(candidates: &[usize], cost: impl Fn(usize) -> T) -> Option<usize> {
    candidates.iter()
        .copied()
        .min_by(|&left, &right| compare(&cost(left), &cost(right)))
}
