//! # Strategies
//!
//! Decisions made during the two phase method that don't affect its correctness.
pub mod pivot_rule;
