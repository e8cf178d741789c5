//! # Representation of optimization problems
//!
//! Linear programs in equality form, balanced or unbalanced transportation problems and the
//! solutions that algorithms compute for them.

pub mod canonical_form;
pub mod solution;
pub mod transportation;
