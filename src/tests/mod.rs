//! # Problems with a known solution, shared by tests throughout the crate.
//!
//! Each module provides:
//!
//! * `fn linear_program()`
//! * `const OBJECTIVE_VALUE`
//! * `fn primal_solution()`
//! * `fn dual_multipliers()`
pub mod problem_1;
