//! # Data structures for Simplex
//!
//! Contains the simplex tableau and the elementary operations which can be performed upon it.
use std::fmt::{Display, Formatter};
use std::fmt;

use crate::algorithm::error::SolveError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::canonical_form::LinearProgram;

/// The Simplex tableau.
///
/// Owns a copy of the constraints augmented with the right-hand side, the row of relative costs
/// and the basis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau {
    /// Matrix of size m x (n + 1), of which the last column holds the constraint values.
    ///
    /// This attribute changes with a basis change.
    rows: DenseMatrix,
    /// Relative costs of the n columns, followed by the objective value.
    ///
    /// This attribute changes with a basis change.
    objective: Vec<f64>,
    /// Maps the rows to the column containing its pivot.
    ///
    /// This attribute changes with a basis change.
    basis_indices: Vec<usize>,
}

impl Tableau {
    /// Create a tableau with the trailing identity columns of the constraint matrix as the basis.
    ///
    /// The relative costs are the negated costs, such that the tableau maximizes.
    ///
    /// # Errors
    ///
    /// `BasisNotFound` if the last `m` columns are not exactly an identity matrix.
    pub fn new(program: &LinearProgram) -> Result<Self, SolveError> {
        let constraints = program.constraints();
        if !constraints.ends_with_identity() {
            return Err(SolveError::BasisNotFound);
        }

        let data = constraints.rows()
            .zip(program.b())
            .map(|(row, &value)| row.iter().copied().chain(Some(value)).collect())
            .collect();
        let objective = program.cost().iter()
            .map(|&cost| -cost)
            .chain(Some(0f64))
            .collect();
        let first_basis_column = program.nr_columns() - program.nr_rows();

        Ok(Self {
            rows: DenseMatrix::from_data(data),
            objective,
            basis_indices: (first_basis_column..program.nr_columns()).collect(),
        })
    }

    /// Number of constraints.
    pub fn nr_rows(&self) -> usize {
        self.basis_indices.len()
    }

    /// Number of variables, the right-hand side excluded.
    pub fn nr_columns(&self) -> usize {
        self.objective.len() - 1
    }

    /// Relative cost of a column.
    pub fn relative_cost(&self, j: usize) -> f64 {
        debug_assert!(j < self.nr_columns());

        self.objective[j]
    }

    /// Value of the basic variable of a row.
    pub fn constraint_value(&self, i: usize) -> f64 {
        debug_assert!(i < self.nr_rows());

        self.rows.get_value(i, self.nr_columns())
    }

    /// Objective value of the current basic feasible solution.
    pub fn objective_function_value(&self) -> f64 {
        self.objective[self.nr_columns()]
    }

    /// Whether a column is currently basic.
    pub fn is_in_basis(&self, j: usize) -> bool {
        self.basis_indices.contains(&j)
    }

    /// Ratio test for an entering column.
    ///
    /// Among the rows with a strictly positive value in the column, find the one with the smallest
    /// ratio of constraint value and column value that exceeds `epsilon`. Ties are broken in favor
    /// of the lowest row index.
    ///
    /// # Return value
    ///
    /// Index of the leaving row, or `None` if there is no such row.
    pub fn select_primal_pivot_row(&self, column: usize, epsilon: f64) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        let mut smallest: Option<(usize, f64)> = None;
        for (i, ratio) in (0..self.nr_rows())
            .filter(|&row| self.rows.get_value(row, column) > 0f64)
            .map(|row| (row, self.constraint_value(row) / self.rows.get_value(row, column)))
            .filter(|&(_, ratio)| ratio > epsilon) {
            match smallest {
                Some((_, existing_ratio)) if ratio >= existing_ratio => {},
                _ => smallest = Some((i, ratio)),
            }
        }

        smallest.map(|(i, _)| i)
    }

    /// Bring a column into the basis in the place of the basic variable of a row.
    ///
    /// The pivot row is normalized, after which the column is eliminated from all other rows and
    /// from the relative costs.
    pub fn bring_into_basis(&mut self, pivot_row: usize, pivot_column: usize) {
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(pivot_column < self.nr_columns());

        let pivot = self.rows.get_value(pivot_row, pivot_column);
        debug_assert!(pivot > 0f64);

        self.rows.multiply_row(pivot_row, 1f64 / pivot);
        for row in (0..self.nr_rows()).filter(|&row| row != pivot_row) {
            let factor = -self.rows.get_value(row, pivot_column);
            if factor != 0f64 {
                self.rows.mul_add_rows(pivot_row, row, factor);
            }
        }

        let factor = -self.objective[pivot_column];
        for (cost, &value) in self.objective.iter_mut().zip(self.rows.row(pivot_row)) {
            *cost += factor * value;
        }

        self.basis_indices[pivot_row] = pivot_column;
    }

    /// Values of the first `nr_variables` variables in the current basic feasible solution.
    pub fn current_bfs(&self, nr_variables: usize) -> Vec<f64> {
        debug_assert!(nr_variables <= self.nr_columns());

        let mut values = vec![0f64; nr_variables];
        for (i, &column) in self.basis_indices.iter().enumerate() {
            if column < nr_variables {
                values[column] = self.constraint_value(i);
            }
        }

        values
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "Basis: {:?}", self.basis_indices)?;
        write!(f, "{}", self.rows)?;
        let objective = self.objective.iter().map(f64::to_string).collect::<Vec<_>>();
        writeln!(f, "{}", objective.join("\t"))
    }
}
