//! # Algorithms
//!
//! Every algorithm takes an immutable problem, works on private copies of its data and either
//! returns a result or the reason why it is not applicable to the problem. Algorithms never call
//! each other.

pub mod error;
pub mod interior_point;
pub mod simplex;
pub mod transportation;
