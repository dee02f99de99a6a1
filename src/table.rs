//! Full DP table storage.
//!
//! A `DpTable` holds every row of a layered DP: row `i` is the frontier after
//! `i` layers. Rows live back to back in a single allocation and are addressed
//! by `(row, col)`.

/// Dense `rows x cols` table in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpTable<C> {
    rows: usize,
    cols: usize,
    cells: Vec<C>,
}

impl<C: Copy> DpTable<C> {
    /// Allocate a table with every cell set to `fill`.
    ///
    /// Returns `None` if `rows * cols` overflows `usize` or the allocator
    /// cannot provide the cells.
    pub fn new(rows: usize, cols: usize, fill: C) -> Option<Self> {
        let len = rows.checked_mul(cols)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, fill);
        Some(Self { rows, cols, cells })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> C {
        assert!(col < self.cols, "column {col} out of range ({})", self.cols);
        self.cells[row * self.cols + col]
    }

    /// Row `i` as a slice of length `cols`.
    #[inline]
    pub fn row(&self, i: usize) -> &[C] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [C] {
        let start = i * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    /// The final row, or `None` for a table without rows.
    pub fn last(&self) -> Option<&[C]> {
        self.rows.checked_sub(1).map(|i| self.row(i))
    }

    /// Borrow row `i` and row `i + 1` at the same time, the latter mutably.
    ///
    /// # Panics
    /// Panics if `i + 1 >= rows`.
    pub fn split_rows(&mut self, i: usize) -> (&[C], &mut [C]) {
        assert!(i + 1 < self.rows, "row {} out of range ({})", i + 1, self.rows);
        let cols = self.cols;
        let (head, tail) = self.cells.split_at_mut((i + 1) * cols);
        (&head[i * cols..], &mut tail[..cols])
    }
}
