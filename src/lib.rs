//! 0/1 knapsack by dynamic programming.
//!
//! This crate fills the classic `(n + 1) x (capacity + 1)` knapsack table
//! bottom-up and reads the optimum from its last cell. The recurrence is
//! expressed through a small layered-DP interface so the same engine can
//! also walk the table back to the chosen items.
//!
//! ## Core idea
//! 1. Model the recurrence as a *layered* DP: row `i + 1` depends only on
//!    row `i`.
//! 2. Implement the [`TableProblem`] trait for that recurrence.
//! 3. Let [`TableEngine`] allocate the table, fill it, extract the optimum
//!    and reconstruct a solution.
//!
//! ## Quick start
//! ```
//! use knapsack_dp::solve;
//!
//! let best = solve(50, &[10, 20, 30], &[60, 100, 120]).unwrap();
//! assert_eq!(best, 220);
//! ```
//!
//! Input is taken as signed integers and validated up front: mismatched
//! lengths and negative numbers are rejected with a [`KnapsackError`] before
//! any table is allocated.

pub mod engine;
pub mod error;
pub mod problems;
pub mod table;
pub mod traits;

pub use crate::engine::TableEngine;
pub use crate::error::{KnapsackError, KnapsackResult};
pub use crate::problems::knapsack::{Item, KnapsackProblem, KnapsackSolver, Selection};
pub use crate::table::DpTable;
pub use crate::traits::TableProblem;

/// Maximum value of a 0/1 selection of items within `capacity`.
///
/// Shorthand for [`KnapsackSolver::solve`].
pub fn solve(capacity: i64, weights: &[i64], values: &[i64]) -> KnapsackResult<u64> {
    KnapsackSolver::solve(capacity, weights, values)
}
