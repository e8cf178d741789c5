//! # Affine scaling
//!
//! A primal interior-point method for `max c·x` subject to `A·x = b`, `x >= 0`. Each iteration
//! rescales the coordinates by the current point, such that the point becomes the vector of ones,
//! projects the scaled cost onto the null space of the scaled constraint matrix and steps a
//! fraction `alpha` of the way to the boundary of the positive orthant.
//!
//! The only numerical hazard is the inversion of `AA·AAᵗ`, which is reported as a
//! `SolveError::NumericalFailure`.
use crate::algorithm::error::SolveError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::{difference, elementwise_product, euclidean_norm};
use crate::data::linear_program::canonical_form::LinearProgram;
use crate::data::linear_program::solution::Solution;

/// Tunable values of the method.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Parameters {
    /// Fraction of the distance to the boundary that is stepped, in `(0, 1)`.
    ///
    /// Not validated.
    pub alpha: f64,
    /// The iteration stops once a step is shorter than this value.
    pub epsilon: f64,
    /// Number of steps after which the method gives up.
    pub max_iterations: usize,
}

impl Parameters {
    /// Create parameters with the default iteration limit.
    pub fn new(alpha: f64, epsilon: f64) -> Self {
        Self { alpha, epsilon, ..Self::default() }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self { alpha: 0.5, epsilon: 1e-6, max_iterations: 10_000 }
    }
}

/// Maximize the objective of a linear program.
///
/// # Arguments
///
/// * `program`: Linear program of which the constraint matrix has full row rank.
/// * `initial_point`: Strictly positive point satisfying `A·x = b`.
/// * `parameters`: Step size, tolerance and iteration limit.
///
/// # Return value
///
/// The first `nnz(c)` values of the final point (slack variables are expected to come last, and
/// to have a zero cost) and the objective value of the full final point.
///
/// # Errors
///
/// `NumericalFailure` if `AA·AAᵗ` is singular in some iteration, `NonConvergence` if the step
/// direction degenerates or the iteration limit is reached.
pub fn solve(
    program: &LinearProgram,
    initial_point: &[f64],
    parameters: &Parameters,
) -> Result<Solution, SolveError> {
    let mut x = iterate(program, initial_point, parameters)?;
    let objective_value = program.objective_value(&x);

    let nr_decision_variables = program.cost().iter().filter(|&&cost| cost != 0f64).count();
    x.truncate(nr_decision_variables);

    Ok(Solution::new(x, objective_value))
}

/// Step until the step size drops below the tolerance.
///
/// # Return value
///
/// The full final point, slack variables included.
pub fn iterate(
    program: &LinearProgram,
    initial_point: &[f64],
    parameters: &Parameters,
) -> Result<Vec<f64>, SolveError> {
    debug_assert_eq!(initial_point.len(), program.nr_columns());
    debug_assert!(initial_point.iter().all(|&value| value > 0f64));

    log::info!("Affine scaling with alpha = {}, epsilon = {}", parameters.alpha, parameters.epsilon);
    let mut x = initial_point.to_vec();
    for iteration in 1..=parameters.max_iterations {
        let next = step(program, &x, parameters.alpha)?;
        let step_size = euclidean_norm(&difference(&next, &x));
        log::debug!(
            "Iteration {}: objective value {}, step size {}",
            iteration, program.objective_value(&next), step_size,
        );

        x = next;
        if step_size < parameters.epsilon {
            log::info!("Converged after {} iterations", iteration);
            return Ok(x);
        }
    }

    log::info!("No convergence within {} iterations", parameters.max_iterations);
    Err(SolveError::NonConvergence)
}

/// Compute the next point from the current, strictly positive, point `x`.
fn step(program: &LinearProgram, x: &[f64], alpha: f64) -> Result<Vec<f64>, SolveError> {
    let scaled_constraints = program.constraints().scale_columns(x);
    let scaled_cost = elementwise_product(x, program.cost());

    let projection = null_space_projection(&scaled_constraints)?;
    let projected_cost = projection.multiply_vector(&scaled_cost);

    let minimum = projected_cost.iter().copied().fold(f64::INFINITY, f64::min);
    let nu = minimum.abs();
    if !(nu > 0f64 && nu.is_finite()) {
        return Err(SolveError::NonConvergence);
    }

    let y = projected_cost.iter()
        .map(|value| 1f64 + (alpha / nu) * value)
        .collect::<Vec<_>>();
    let next = elementwise_product(x, &y);

    if next.iter().all(|value| value.is_finite()) {
        Ok(next)
    } else {
        Err(SolveError::NonConvergence)
    }
}

/// The projection `P = I − AAᵗ·(AA·AAᵗ)⁻¹·AA` onto the null space of `AA`.
///
/// # Errors
///
/// `NumericalFailure` if `AA·AAᵗ` can't be inverted.
fn null_space_projection(scaled_constraints: &DenseMatrix) -> Result<DenseMatrix, SolveError> {
    let transposed = scaled_constraints.transpose();
    let inverse = scaled_constraints.multiply(&transposed)
        .inverse()
        .ok_or(SolveError::NumericalFailure)?;
    let range_projection = transposed.multiply(&inverse).multiply(scaled_constraints);

    Ok(DenseMatrix::identity(scaled_constraints.nr_columns()).subtract(&range_projection))
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::error::SolveError;
    use crate::algorithm::interior_point::{iterate, null_space_projection, Parameters, solve};
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_program::canonical_form::LinearProgram;

    /// max 2x1 + 3x2 s.t. x1 + x2 <= 4, x1 + 3x2 <= 6, optimum 9 at (3, 1).
    fn program() -> (LinearProgram, Vec<f64>) {
        let program = LinearProgram::new(
            vec![2f64, 3f64, 0f64, 0f64],
            DenseMatrix::from_data(vec![
                vec![1f64, 1f64, 1f64, 0f64],
                vec![1f64, 3f64, 0f64, 1f64],
            ]),
            vec![4f64, 6f64],
        ).unwrap();

        (program, vec![1f64, 1f64, 2f64, 2f64])
    }

    #[test]
    fn projection() {
        let constraints = DenseMatrix::from_data(vec![
            vec![1f64, 1f64, 1f64, 0f64],
            vec![1f64, 3f64, 0f64, 1f64],
        ]);
        let projection = null_space_projection(&constraints).unwrap();

        // Projected vectors are in the null space
        let projected = projection.multiply_vector(&[1f64, -2f64, 0.5f64, 3f64]);
        for value in constraints.multiply_vector(&projected) {
            assert_abs_diff_eq!(value, 0f64, epsilon = 1e-12);
        }

        // Projecting twice changes nothing
        let twice = projection.multiply(&projection);
        for i in 0..4 {
            for j in 0..4 {
                assert_abs_diff_eq!(twice.get_value(i, j), projection.get_value(i, j), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn converges() {
        let (program, initial_point) = program();
        for alpha in [0.5, 0.9] {
            let parameters = Parameters::new(alpha, 1e-6);

            let x = iterate(&program, &initial_point, &parameters).unwrap();
            assert!(program.is_feasible(&x, 1e-6));

            let solution = solve(&program, &initial_point, &parameters).unwrap();
            assert_eq!(solution.x().len(), 2);
            assert_abs_diff_eq!(solution.x()[0], 3f64, epsilon = 1e-4);
            assert_abs_diff_eq!(solution.x()[1], 1f64, epsilon = 1e-4);
            assert_abs_diff_eq!(solution.objective_value(), 9f64, epsilon = 1e-4);
        }
    }

    #[test]
    fn deterministic() {
        let (program, initial_point) = program();
        let parameters = Parameters::default();

        assert_eq!(
            solve(&program, &initial_point, &parameters),
            solve(&program, &initial_point, &parameters),
        );
    }

    #[test]
    fn singular() {
        let program = LinearProgram::new(
            vec![1f64, 1f64, 0f64],
            DenseMatrix::from_data(vec![vec![1f64, 1f64, 1f64], vec![1f64, 1f64, 1f64]]),
            vec![3f64, 3f64],
        ).unwrap();

        let result = solve(&program, &[1f64, 1f64, 1f64], &Parameters::default());
        assert_eq!(result, Err(SolveError::NumericalFailure));
    }

    #[test]
    fn degenerate_direction() {
        let (program, initial_point) = program();
        let program = LinearProgram::new(
            vec![0f64; 4],
            program.constraints().clone(),
            program.b().to_vec(),
        ).unwrap();

        let result = solve(&program, &initial_point, &Parameters::default());
        assert_eq!(result, Err(SolveError::NonConvergence));
    }

    #[test]
    fn iteration_limit() {
        let (program, initial_point) = program();
        let parameters = Parameters { max_iterations: 2, ..Parameters::new(0.5, 1e-9) };

        assert_eq!(iterate(&program, &initial_point, &parameters), Err(SolveError::NonConvergence));
    }
}
