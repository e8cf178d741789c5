//! # Strategies for the Simplex algorithm
//!
//! Different strategies for performing certain procedures in the Simplex method, such as the
//! decision on how to pivot.
pub mod pivot_rule;
