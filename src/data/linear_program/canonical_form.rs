//! # Linear programs in equality form
//!
//! A linear program `max c·x` subject to `A·x = b`, `x >= 0`. Slack and surplus variables, if any,
//! are expected to be the trailing columns of `A`.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::{difference, inner_product};
use crate::io::error::InconsistencyError;

/// A linear program of which the dimensions are known to be consistent.
///
/// Instances are immutable, algorithms make their own working copies.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram {
    /// Objective function coefficients, one for each column.
    cost: Vec<f64>,
    /// Constraint matrix `A`.
    constraints: DenseMatrix,
    /// Right-hand side `b`, one for each row.
    b: Vec<f64>,
}

impl LinearProgram {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `cost`: Objective coefficients, as many as `constraints` has columns.
    /// * `constraints`: Constraint matrix.
    /// * `b`: Right-hand side, as many as `constraints` has rows.
    ///
    /// # Errors
    ///
    /// An `InconsistencyError` if the dimensions don't match.
    pub fn new(
        cost: Vec<f64>,
        constraints: DenseMatrix,
        b: Vec<f64>,
    ) -> Result<Self, InconsistencyError> {
        if cost.len() != constraints.nr_columns() {
            return Err(InconsistencyError::new(format!(
                "{} objective coefficients for {} columns",
                cost.len(), constraints.nr_columns(),
            )));
        }
        if b.len() != constraints.nr_rows() {
            return Err(InconsistencyError::new(format!(
                "{} right-hand side values for {} rows",
                b.len(), constraints.nr_rows(),
            )));
        }

        Ok(Self { cost, constraints, b })
    }

    /// Objective coefficients `c`.
    pub fn cost(&self) -> &[f64] {
        &self.cost
    }
    /// Constraint matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix {
        &self.constraints
    }
    /// Right-hand side `b`.
    pub fn b(&self) -> &[f64] {
        &self.b
    }
    /// Number of constraints.
    pub fn nr_rows(&self) -> usize {
        self.constraints.nr_rows()
    }
    /// Number of variables, slacks included.
    pub fn nr_columns(&self) -> usize {
        self.constraints.nr_columns()
    }

    /// Value of the objective function `c·x` for a full-length vector `x`.
    pub fn objective_value(&self, x: &[f64]) -> f64 {
        inner_product(&self.cost, x)
    }

    /// Whether `x` satisfies `A·x = b` and `x >= 0`, both up to `epsilon`.
    pub fn is_feasible(&self, x: &[f64], epsilon: f64) -> bool {
        debug_assert_eq!(x.len(), self.nr_columns());

        let residual = difference(&self.constraints.multiply_vector(x), &self.b);

        residual.iter().all(|value| value.abs() <= epsilon)
            && x.iter().all(|&value| value >= -epsilon)
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_program::canonical_form::LinearProgram;

    fn constraints() -> DenseMatrix {
        DenseMatrix::from_data(vec![
            vec![1f64, 1f64, 1f64, 0f64],
            vec![1f64, 3f64, 0f64, 1f64],
        ])
    }

    #[test]
    fn dimensions() {
        assert!(LinearProgram::new(vec![2f64, 3f64, 0f64, 0f64], constraints(), vec![4f64, 6f64]).is_ok());
        assert!(LinearProgram::new(vec![2f64, 3f64], constraints(), vec![4f64, 6f64]).is_err());
        assert!(LinearProgram::new(vec![2f64, 3f64, 0f64, 0f64], constraints(), vec![4f64]).is_err());
    }

    #[test]
    fn evaluate() {
        let program = LinearProgram::new(
            vec![2f64, 3f64, 0f64, 0f64],
            constraints(),
            vec![4f64, 6f64],
        ).unwrap();

        assert_eq!(program.objective_value(&[3f64, 1f64, 0f64, 0f64]), 9f64);
        assert!(program.is_feasible(&[3f64, 1f64, 0f64, 0f64], 1e-9));
        assert!(program.is_feasible(&[1f64, 1f64, 2f64, 2f64], 1e-9));
        assert!(!program.is_feasible(&[4f64, 1f64, 0f64, 0f64], 1e-9));
        assert!(!program.is_feasible(&[5f64, 0f64, -1f64, 1f64], 1e-9));
    }
}
