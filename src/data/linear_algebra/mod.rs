//! # Linear algebra primitives
//!
//! Dense primitives used by the solvers. Problems handled by this crate are small, so nothing is
//! stored in a sparse format.

pub mod matrix;
pub mod vector;

/// Relative tolerance below which a pivot is considered zero when inverting a matrix.
pub const SINGULARITY_TOLERANCE: f64 = 1e-12;
