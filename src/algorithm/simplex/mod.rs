//! # The Simplex algorithm
//!
//! A single-phase tableau implementation for linear programs that come with an obvious starting
//! basis: the last `m` columns of the constraint matrix form an identity matrix, as they do when
//! slack variables were appended to a system of `<=` constraints with a nonnegative right-hand
//! side. The objective is maximized.
use crate::algorithm::error::SolveError;
use crate::algorithm::simplex::strategy::pivot_rule::{PivotRule, SteepestDescentAlongVariable};
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::canonical_form::LinearProgram;
use crate::data::linear_program::solution::Solution;

pub mod strategy;
pub mod tableau;

/// Maximize the objective of a linear program, pivoting on the most negative relative cost.
///
/// # Arguments
///
/// * `program`: Linear program of which the trailing columns of the constraint matrix are an
/// identity matrix, and the remaining columns correspond to the decision variables.
/// * `epsilon`: Tolerance for the optimality check and the ratio test.
///
/// # Return value
///
/// The values of the decision variables in the optimal basic feasible solution, and the objective
/// value.
///
/// # Errors
///
/// `BasisNotFound` if there is no starting basis, `Unbounded` if no row can leave the basis.
pub fn solve(program: &LinearProgram, epsilon: f64) -> Result<Solution, SolveError> {
    solve_with::<SteepestDescentAlongVariable>(program, epsilon)
}

/// Maximize the objective of a linear program with a specific pivot rule.
///
/// See `solve` for the requirements on the arguments.
pub fn solve_with<PR: PivotRule>(
    program: &LinearProgram,
    epsilon: f64,
) -> Result<Solution, SolveError> {
    let mut tableau = Tableau::new(program)?;
    let nr_decision_variables = nr_decision_variables(program.cost());
    if program.nr_columns() - program.nr_rows() != nr_decision_variables {
        return Err(SolveError::BasisNotFound);
    }

    log::info!("Simplex on {} rows and {} columns", tableau.nr_rows(), tableau.nr_columns());
    let mut rule = PR::new();
    let mut nr_pivots = 0;
    while let Some(column) = rule.select_primal_pivot_column(&tableau, epsilon) {
        let row = tableau.select_primal_pivot_row(column, epsilon)
            .ok_or(SolveError::Unbounded)?;
        tableau.bring_into_basis(row, column);
        nr_pivots += 1;
        log::debug!(
            "Pivot {}: column {} enters in row {}, objective value {}",
            nr_pivots, column, row, tableau.objective_function_value(),
        );
    }
    log::info!("Optimal after {} pivots", nr_pivots);

    Ok(Solution::new(
        tableau.current_bfs(nr_decision_variables),
        tableau.objective_function_value(),
    ))
}

/// One past the index of the last nonzero cost coefficient.
fn nr_decision_variables(cost: &[f64]) -> usize {
    cost.iter().rposition(|&value| value != 0f64).map_or(0, |index| index + 1)
}
