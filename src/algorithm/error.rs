//! # Reasons for an algorithm to give up
//!
//! None of these are bugs: each one signals that a method is not applicable to a specific problem
//! instance. Callers are expected to branch on the kind and continue with other methods.
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;

/// Why a solver could not produce a result.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SolveError {
    /// A matrix that needs to be inverted is singular.
    NumericalFailure,
    /// The iteration doesn't settle: the step direction degenerated, the arithmetic produced a
    /// non-finite value or the iteration limit was reached.
    NonConvergence,
    /// The trailing columns of the constraint matrix are not an identity matrix, or the number of
    /// remaining columns doesn't match the number of decision variables.
    BasisNotFound,
    /// No variable can leave the basis.
    Unbounded,
    /// A supply, demand or cost is negative.
    NegativeInput,
    /// Total supply differs from total demand.
    Unbalanced,
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            SolveError::NumericalFailure => "a required matrix inversion is singular",
            SolveError::NonConvergence => "the iteration does not converge",
            SolveError::BasisNotFound => "no identity basis in the trailing columns",
            SolveError::Unbounded => "the problem is unbounded",
            SolveError::NegativeInput => "the problem contains negative values",
            SolveError::Unbalanced => "the problem is not balanced",
        })
    }
}

impl Error for SolveError {}
