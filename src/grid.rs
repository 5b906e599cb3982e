//! Fixed-column grid geometry shared by the GUI and TUI

/// Columns in the emoji grid
pub const DEFAULT_COLUMNS: usize = 8;

/// Maps a flat result index onto rows of `columns` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

impl GridLayout {
    /// A zero column count is bumped to one.
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Rows needed to show `total` items
    pub fn rows(&self, total: usize) -> usize {
        total.div_ceil(self.columns)
    }

    /// `(row, col)` of a flat index
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Flat index of a cell, if that cell holds an item
    pub fn index(&self, row: usize, col: usize, total: usize) -> Option<usize> {
        if col >= self.columns {
            return None;
        }
        let idx = row * self.columns + col;
        (idx < total).then_some(idx)
    }

    /// Flat index range covered by `row`
    pub fn row_span(&self, row: usize, total: usize) -> std::ops::Range<usize> {
        let start = (row * self.columns).min(total);
        let end = (start + self.columns).min(total);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_columns_by_default() {
        let grid = GridLayout::default();
        assert_eq!(grid.columns(), 8);
        assert_eq!(grid.cell(0), (0, 0));
        assert_eq!(grid.cell(7), (0, 7));
        assert_eq!(grid.cell(8), (1, 0));
        assert_eq!(grid.cell(19), (2, 3));
    }

    #[test]
    fn row_count_rounds_up() {
        let grid = GridLayout::default();
        assert_eq!(grid.rows(0), 0);
        assert_eq!(grid.rows(1), 1);
        assert_eq!(grid.rows(8), 1);
        assert_eq!(grid.rows(9), 2);
    }

    #[test]
    fn index_is_inverse_of_cell() {
        let grid = GridLayout::new(8);
        for i in 0..30 {
            let (r, c) = grid.cell(i);
            assert_eq!(grid.index(r, c, 30), Some(i));
        }
        // Short last row
        assert_eq!(grid.index(3, 5, 30), Some(29));
        assert_eq!(grid.index(3, 6, 30), None);
        assert_eq!(grid.index(0, 8, 30), None);
    }

    #[test]
    fn row_span_clamps_to_total() {
        let grid = GridLayout::new(8);
        assert_eq!(grid.row_span(0, 10), 0..8);
        assert_eq!(grid.row_span(1, 10), 8..10);
        assert_eq!(grid.row_span(2, 10), 10..10);
    }

    #[test]
    fn zero_columns_becomes_one() {
        let grid = GridLayout::new(0);
        assert_eq!(grid.columns(), 1);
        assert_eq!(grid.rows(3), 3);
    }
}
