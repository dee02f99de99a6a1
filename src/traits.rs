//! Core trait for layered dynamic programs solved over a full table.
//!
//! Implement [`TableProblem`] for a struct that captures one DP instance
//! (items, sequences, costs). The model:
//! - Layers 0..=T, where row `i` of the table holds every DP value after `i`
//!   layers have been consumed.
//! - Each row has the same fixed width (e.g. one column per capacity).
//! - Row `i + 1` is computed from row `i` and the instance data only.
//!
//! [`TableEngine`](crate::engine::TableEngine) allocates the table, drives
//! the row transitions and hands the filled table back for cost extraction
//! and reconstruction. Every row is kept, so reconstruction can walk the
//! table backwards without recomputation.

use crate::table::DpTable;

/// A layered DP instance filled row by row into a [`DpTable`].
pub trait TableProblem {
    /// Cell type of the table, also the objective type.
    type Cost: Copy + Ord;

    /// One step of the reconstructed optimal solution
    /// (e.g. the index of a chosen item).
    type State: Clone + PartialEq;

    /// Number of layers `T`. The table has `T + 1` rows.
    fn num_layers(&self) -> usize;

    /// Number of columns in every row.
    fn width(&self) -> usize;

    /// Base-case value used to pre-fill every cell before `init_row`.
    fn zero(&self) -> Self::Cost;

    /// Write row 0. The slice arrives filled with [`zero`](Self::zero).
    fn init_row(&self, row: &mut [Self::Cost]);

    /// Compute row `layer + 1` from row `layer`.
    ///
    /// Must only read `prev` and fixed problem data.
    fn fill_row(&self, layer: usize, prev: &[Self::Cost], next: &mut [Self::Cost]);

    /// Read the objective value out of a fully filled table.
    fn extract_cost(&self, table: &DpTable<Self::Cost>) -> Self::Cost;

    /// Walk a fully filled table back to an optimal solution.
    fn reconstruct(&self, table: &DpTable<Self::Cost>) -> Vec<Self::State>;
}
