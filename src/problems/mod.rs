//! Problem implementations for the table engine.
//!
//! These modules implement [`TableProblem`](crate::traits::TableProblem)
//! for concrete dynamic programs:
//! - [`knapsack`] : 0/1 knapsack with chosen-item reconstruction.

pub mod knapsack;
