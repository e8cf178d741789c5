//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const RECORD_LITERAL_STRING`
//! * `fn linear_program()`
//! * `fn initial_point()`
//! * `fn transportation_problem()`
//! * `fn tableau_form()`
