//! Generic full-table DP engine.
//!
//! The engine runs the classic bottom-up scheme:
//! 1. Allocate a `(T + 1) x width` table and write the base row.
//! 2. Fill rows 1..=T, each from the row before it.
//! 3. Extract the objective from the filled table and, on request, walk the
//!    table backwards to recover an optimal solution.
//!
//! It is completely generic over implementations of [`TableProblem`].

use crate::table::DpTable;
use crate::traits::TableProblem;

/// Full-table DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use knapsack_dp::{problems::knapsack::KnapsackProblem, TableEngine};
///
/// let problem = KnapsackProblem::new(50, &[10, 20, 30], &[60, 100, 120]).unwrap();
/// let (value, items) = TableEngine::new(problem).run();
/// assert_eq!(value, 220);
/// assert_eq!(items, vec![1, 2]);
/// ```
pub struct TableEngine<P: TableProblem> {
    problem: P,
}

impl<P: TableProblem> TableEngine<P> {
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Consume the engine and hand the problem back.
    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Build the complete table, rows 0..=T.
    ///
    /// # Panics
    /// Panics if the table cannot be allocated; see [`try_fill`](Self::try_fill).
    pub fn fill(&self) -> DpTable<P::Cost> {
        let Some(table) = self.try_fill() else {
            panic!(
                "a table of {} layers x {} columns does not fit in memory",
                self.problem.num_layers(),
                self.problem.width()
            );
        };
        table
    }

    /// Build the complete table, or `None` if the `(T + 1) x width` shape
    /// overflows `usize` or the allocation fails.
    pub fn try_fill(&self) -> Option<DpTable<P::Cost>> {
        let layers = self.problem.num_layers();
        let width = self.problem.width();
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill_table", layers, width);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table = DpTable::new(layers.checked_add(1)?, width, self.problem.zero())?;

        self.problem.init_row(table.row_mut(0));
        for layer in 0..layers {
            let (prev, next) = table.split_rows(layer);
            self.problem.fill_row(layer, prev, next);
        }
        Some(table)
    }

    /// Optimal cost only; the table is dropped before returning.
    pub fn solve(&self) -> P::Cost {
        let table = self.fill();
        self.problem.extract_cost(&table)
    }

    /// Like [`solve`](Self::solve), `None` when the table cannot be allocated.
    pub fn try_solve(&self) -> Option<P::Cost> {
        let table = self.try_fill()?;
        Some(self.problem.extract_cost(&table))
    }

    /// Execute the full pipeline: fill, extract the optimal cost, reconstruct.
    pub fn run(&self) -> (P::Cost, Vec<P::State>) {
        let table = self.fill();
        self.finish(table)
    }

    /// Like [`run`](Self::run), `None` when the table cannot be allocated.
    pub fn try_run(&self) -> Option<(P::Cost, Vec<P::State>)> {
        let table = self.try_fill()?;
        Some(self.finish(table))
    }

    fn finish(&self, table: DpTable<P::Cost>) -> (P::Cost, Vec<P::State>) {
        let cost = self.problem.extract_cost(&table);

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("reconstruct", rows = table.rows());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        let states = self.problem.reconstruct(&table);
        (cost, states)
    }
}
