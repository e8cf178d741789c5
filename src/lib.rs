//! # Linear program and transportation problem solvers
//!
//! Linear programs in equality form are solved using either an affine-scaling interior-point
//! method, or the simplex method on a tableau that already contains an identity basis.
//! Transportation problems get an initial basic feasible solution from either Vogel's or Russell's
//! approximation method.
//!
//! All solvers are synchronous and own their working copies of the input, so independent problem
//! instances can be solved on separate threads.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
