//! 0/1 knapsack as a full-table DP.
//!
//! Layers are items: row `i` of the table holds, for every capacity `w` in
//! `0..=capacity`, the best total value reachable with the first `i` items
//! and total weight at most `w`. The recurrence for row `i + 1` is
//!
//! ```text
//! T[i+1][w] = max(value + T[i][w - weight], T[i][w])   if weight <= w
//! T[i+1][w] = T[i][w]                                   otherwise
//! ```
//!
//! Row 0 and column 0 are never written and stay zero, so a zero-weight item
//! adds nothing to a cell whose remaining capacity reaches 0. Reconstruction walks
//! the table from `(n, capacity)` upwards: item `i` was taken exactly when
//! `T[i+1][w] != T[i][w]`.

use crate::engine::TableEngine;
use crate::error::{KnapsackError, KnapsackResult};
use crate::table::DpTable;
use crate::traits::TableProblem;

/// A single indivisible item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub weight: usize,
    pub value: u64,
}

impl Item {
    pub fn new(weight: usize, value: u64) -> Self {
        Self { weight, value }
    }
}

/// Validated knapsack instance.
///
/// Construction guarantees the `(n + 1) x (capacity + 1)` table stays within
/// `isize::MAX` bytes and no cell can exceed `u64::MAX`. Whether the
/// allocator can actually provide it is only known when the table is filled.
#[derive(Clone, Debug)]
pub struct KnapsackProblem {
    capacity: usize,
    items: Vec<Item>,
}

/// State along the reconstructed solution: 0-based index of a chosen item.
pub type KnapsackState = usize;

/// An optimal choice of items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Total value of the chosen items; equal to the DP optimum.
    pub value: u64,
    /// Total weight of the chosen items, never above the capacity.
    pub weight: usize,
    /// Chosen item indices, ascending.
    pub items: Vec<KnapsackState>,
}

impl KnapsackProblem {
    /// Validate raw signed input: equal lengths, nothing negative, a table
    /// that fits in memory.
    pub fn new(capacity: i64, weights: &[i64], values: &[i64]) -> KnapsackResult<Self> {
        if weights.len() != values.len() {
            return Err(reject(KnapsackError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            }));
        }
        if capacity < 0 {
            return Err(reject(KnapsackError::NegativeCapacity(capacity)));
        }
        if let Some((index, &weight)) = weights.iter().enumerate().find(|(_, w)| **w < 0) {
            return Err(reject(KnapsackError::NegativeWeight { index, weight }));
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v < 0) {
            return Err(reject(KnapsackError::NegativeValue { index, value }));
        }

        let capacity = usize::try_from(capacity).map_err(|_| {
            reject(KnapsackError::TableTooLarge {
                rows: weights.len().saturating_add(1),
                cols: usize::MAX,
            })
        })?;
        // A weight beyond usize can never fit, so saturating keeps it excluded.
        let items = weights
            .iter()
            .zip(values)
            .map(|(&w, &v)| Item::new(usize::try_from(w).unwrap_or(usize::MAX), v as u64))
            .collect();
        Self::from_items(capacity, items)
    }

    /// Build from already-typed items. Only the table size and the value
    /// total need checking.
    pub fn from_items(capacity: usize, items: Vec<Item>) -> KnapsackResult<Self> {
        let rows = items.len().saturating_add(1);
        let cols = capacity.saturating_add(1);
        let fits = rows
            .checked_mul(cols)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<u64>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(reject(KnapsackError::TableTooLarge { rows, cols }));
        }

        if items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.value))
            .is_none()
        {
            return Err(reject(KnapsackError::ValueOverflow));
        }

        Ok(Self { capacity, items })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    fn allocation_failed(&self) -> KnapsackError {
        reject(KnapsackError::TableTooLarge {
            rows: self.items.len() + 1,
            cols: self.capacity + 1,
        })
    }

    fn selection(&self, value: u64, chosen: Vec<KnapsackState>) -> Selection {
        let weight = chosen.iter().map(|&i| self.items[i].weight).sum();
        Selection {
            value,
            weight,
            items: chosen,
        }
    }
}

impl TableProblem for KnapsackProblem {
    type Cost = u64;
    type State = KnapsackState;

    fn num_layers(&self) -> usize {
        self.items.len()
    }

    fn width(&self) -> usize {
        self.capacity + 1
    }

    fn zero(&self) -> u64 {
        0
    }

    fn init_row(&self, _row: &mut [u64]) {
        // No items, no value: the zero fill is already the base case.
    }

    fn fill_row(&self, layer: usize, prev: &[u64], next: &mut [u64]) {
        let Item { weight, value } = self.items[layer];
        for w in 1..next.len() {
            next[w] = if weight <= w {
                (value + prev[w - weight]).max(prev[w])
            } else {
                prev[w]
            };
        }
    }

    fn extract_cost(&self, table: &DpTable<u64>) -> u64 {
        table.get(self.items.len(), self.capacity)
    }

    fn reconstruct(&self, table: &DpTable<u64>) -> Vec<KnapsackState> {
        let mut w = self.capacity;
        let mut chosen = Vec::new();
        for i in (1..=self.items.len()).rev() {
            if table.get(i, w) != table.get(i - 1, w) {
                chosen.push(i - 1);
                w -= self.items[i - 1].weight;
            }
        }
        chosen.reverse();
        chosen
    }
}

/// Entry points taking raw signed input.
pub struct KnapsackSolver;

impl KnapsackSolver {
    /// Maximum total value of a subset of items whose weights sum to at most
    /// `capacity`, each item taken whole or not at all.
    pub fn solve(capacity: i64, weights: &[i64], values: &[i64]) -> KnapsackResult<u64> {
        let engine = TableEngine::new(KnapsackProblem::new(capacity, weights, values)?);
        let value = engine
            .try_solve()
            .ok_or_else(|| engine.problem().allocation_failed())?;
        Ok(value)
    }

    /// Like [`solve`](Self::solve), also reporting which items achieve it.
    pub fn solve_with_items(
        capacity: i64,
        weights: &[i64],
        values: &[i64],
    ) -> KnapsackResult<Selection> {
        let engine = TableEngine::new(KnapsackProblem::new(capacity, weights, values)?);
        let (value, chosen) = engine
            .try_run()
            .ok_or_else(|| engine.problem().allocation_failed())?;
        Ok(engine.problem().selection(value, chosen))
    }

    /// The filled `(n + 1) x (capacity + 1)` table.
    pub fn table(capacity: i64, weights: &[i64], values: &[i64]) -> KnapsackResult<DpTable<u64>> {
        let engine = TableEngine::new(KnapsackProblem::new(capacity, weights, values)?);
        let table = engine
            .try_fill()
            .ok_or_else(|| engine.problem().allocation_failed())?;
        Ok(table)
    }
}

fn reject(err: KnapsackError) -> KnapsackError {
    #[cfg(feature = "tracing")]
    tracing::debug!(%err, "rejecting knapsack input");
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook_instance() {
        let sel = KnapsackSolver::solve_with_items(50, &[10, 20, 30], &[60, 100, 120]).unwrap();
        assert_eq!(sel.value, 220);
        assert_eq!(sel.items, vec![1, 2]);
        assert_eq!(sel.weight, 50);
    }

    #[test]
    fn first_row_and_column_stay_zero() {
        let table = KnapsackSolver::table(8, &[1, 3, 4], &[9, 4, 5]).unwrap();
        assert_eq!(table.rows(), 4);
        assert_eq!(table.cols(), 9);
        assert!(table.row(0).iter().all(|&c| c == 0));
        assert!((0..table.rows()).all(|i| table.get(i, 0) == 0));
        assert_eq!(table.get(3, 8), 18);
    }

    #[test]
    fn zero_capacity_ignores_zero_weight_items() {
        assert_eq!(KnapsackSolver::solve(0, &[0, 0], &[5, 7]).unwrap(), 0);
        let sel = KnapsackSolver::solve_with_items(0, &[0], &[5]).unwrap();
        assert!(sel.items.is_empty());
    }

    #[test]
    fn exact_fit_is_allowed() {
        assert_eq!(KnapsackSolver::solve(5, &[5], &[3]).unwrap(), 3);
        assert_eq!(KnapsackSolver::solve(4, &[5], &[3]).unwrap(), 0);
    }

    #[test]
    fn zero_weight_items_are_taken() {
        let sel = KnapsackSolver::solve_with_items(1, &[0, 0, 2], &[4, 6, 100]).unwrap();
        assert_eq!(sel.value, 10);
        assert_eq!(sel.items, vec![0, 1]);
        assert_eq!(sel.weight, 0);
    }

    #[test]
    fn each_item_used_at_most_once() {
        // Unbounded knapsack would take item 0 three times for 30.
        assert_eq!(KnapsackSolver::solve(3, &[1], &[10]).unwrap(), 10);
    }

    #[test]
    fn validation_order() {
        assert_eq!(
            KnapsackSolver::solve(-1, &[1, 2], &[1]).unwrap_err(),
            KnapsackError::LengthMismatch {
                weights: 2,
                values: 1
            }
        );
        assert_eq!(
            KnapsackSolver::solve(-1, &[-1], &[-1]).unwrap_err(),
            KnapsackError::NegativeCapacity(-1)
        );
        assert_eq!(
            KnapsackSolver::solve(3, &[1, -2], &[-1, 1]).unwrap_err(),
            KnapsackError::NegativeWeight {
                index: 1,
                weight: -2
            }
        );
        assert_eq!(
            KnapsackSolver::solve(3, &[1, 2], &[1, -5]).unwrap_err(),
            KnapsackError::NegativeValue { index: 1, value: -5 }
        );
    }

    #[test]
    fn oversized_table_is_rejected_before_allocation() {
        let err = KnapsackSolver::solve(i64::MAX, &[1, 2], &[1, 2]).unwrap_err();
        assert!(matches!(err, KnapsackError::TableTooLarge { .. }));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn unallocatable_table_is_an_error_not_an_abort() {
        let capacity = 1i64 << 44;
        let too_large = KnapsackError::TableTooLarge {
            rows: 2,
            cols: (1usize << 44) + 1,
        };
        assert_eq!(KnapsackSolver::solve(capacity, &[1], &[1]).unwrap_err(), too_large);
        assert_eq!(
            KnapsackSolver::solve_with_items(capacity, &[1], &[1]).unwrap_err(),
            too_large
        );
        assert_eq!(KnapsackSolver::table(capacity, &[1], &[1]).unwrap_err(), too_large);
    }

    #[test]
    fn zero_weight_item_is_lost_when_remaining_capacity_hits_zero() {
        // Column 0 is never filled, so the zero-weight item only counts when
        // it comes after the item that uses up the capacity.
        assert_eq!(KnapsackSolver::solve(1, &[0, 1], &[5, 3]).unwrap(), 5);
        assert_eq!(KnapsackSolver::solve(1, &[1, 0], &[3, 5]).unwrap(), 8);

        let sel = KnapsackSolver::solve_with_items(1, &[0, 1], &[5, 3]).unwrap();
        assert_eq!(sel.items, vec![0]);
        let sel = KnapsackSolver::solve_with_items(1, &[1, 0], &[3, 5]).unwrap();
        assert_eq!(sel.items, vec![0, 1]);
    }

    #[test]
    fn value_overflow_is_rejected() {
        let items = vec![Item::new(1, u64::MAX), Item::new(1, 1)];
        assert_eq!(
            KnapsackProblem::from_items(2, items).unwrap_err(),
            KnapsackError::ValueOverflow
        );
    }

    #[test]
    fn huge_weight_never_fits() {
        assert_eq!(KnapsackSolver::solve(10, &[i64::MAX, 4], &[1000, 7]).unwrap(), 7);
    }
}
