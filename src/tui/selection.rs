use crate::GridLayout;

/// Cursor over the emoji grid plus the first visible row.
pub struct SelectionState {
    pub selected: Option<usize>,
    pub scroll_row: usize,
    pub visible_rows: usize,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_row: 0,
            visible_rows: 10,
        }
    }
}

impl SelectionState {
    /// Back to the first cell after the results change
    pub fn reset(&mut self, total: usize) {
        self.selected = if total == 0 { None } else { Some(0) };
        self.scroll_row = 0;
    }

    pub fn select_right(&mut self, grid: &GridLayout, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.select(i, grid);
    }

    pub fn select_left(&mut self, grid: &GridLayout) {
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.select(i, grid);
    }

    /// Down one row; on a short last row lands on the final item
    pub fn select_down(&mut self, grid: &GridLayout, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                let (row, col) = grid.cell(i);
                if row + 1 < grid.rows(total) {
                    grid.index(row + 1, col, total).unwrap_or(total - 1)
                } else {
                    i
                }
            }
            None => 0,
        };
        self.select(i, grid);
    }

    pub fn select_up(&mut self, grid: &GridLayout) {
        let i = match self.selected {
            Some(i) => i.checked_sub(grid.columns()).unwrap_or(i),
            None => 0,
        };
        self.select(i, grid);
    }

    pub fn page_down(&mut self, grid: &GridLayout, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + grid.columns() * self.visible_rows.max(1)).min(total - 1),
            None => 0,
        };
        self.select(i, grid);
    }

    pub fn page_up(&mut self, grid: &GridLayout) {
        let i = match self.selected {
            Some(i) => i.saturating_sub(grid.columns() * self.visible_rows.max(1)),
            None => 0,
        };
        self.select(i, grid);
    }

    pub fn select_first(&mut self, grid: &GridLayout) {
        self.select(0, grid);
    }

    pub fn select_last(&mut self, grid: &GridLayout, total: usize) {
        if total > 0 {
            self.select(total - 1, grid);
        }
    }

    fn select(&mut self, i: usize, grid: &GridLayout) {
        self.selected = Some(i);
        self.ensure_visible(grid);
    }

    /// Scroll so the selected row is on screen
    pub fn ensure_visible(&mut self, grid: &GridLayout) {
        let Some(i) = self.selected else {
            return;
        };
        let (row, _) = grid.cell(i);
        let visible = self.visible_rows.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible {
            self.scroll_row = row + 1 - visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(i: usize) -> SelectionState {
        SelectionState {
            selected: Some(i),
            ..Default::default()
        }
    }

    #[test]
    fn horizontal_moves_clamp_to_results() {
        let grid = GridLayout::new(8);
        let mut sel = at(0);
        sel.select_left(&grid);
        assert_eq!(sel.selected, Some(0));

        let mut sel = at(4);
        sel.select_right(&grid, 5);
        assert_eq!(sel.selected, Some(4));
        // Right wraps onto the next row
        let mut sel = at(7);
        sel.select_right(&grid, 20);
        assert_eq!(sel.selected, Some(8));
    }

    #[test]
    fn vertical_moves_keep_column() {
        let grid = GridLayout::new(8);
        let mut sel = at(3);
        sel.select_down(&grid, 30);
        assert_eq!(sel.selected, Some(11));
        sel.select_up(&grid);
        assert_eq!(sel.selected, Some(3));
        sel.select_up(&grid);
        assert_eq!(sel.selected, Some(3));
    }

    #[test]
    fn down_onto_short_row_lands_on_last_item() {
        let grid = GridLayout::new(8);
        let mut sel = at(6);
        sel.select_down(&grid, 10);
        assert_eq!(sel.selected, Some(9));
        // Already on the last row
        sel.select_down(&grid, 10);
        assert_eq!(sel.selected, Some(9));
    }

    #[test]
    fn empty_results_leave_nothing_selected() {
        let grid = GridLayout::new(8);
        let mut sel = SelectionState::default();
        sel.reset(0);
        sel.select_down(&grid, 0);
        sel.select_right(&grid, 0);
        sel.select_last(&grid, 0);
        assert_eq!(sel.selected, None);
    }

    #[test]
    fn scrolling_follows_selection() {
        let grid = GridLayout::new(8);
        let mut sel = SelectionState {
            selected: Some(0),
            scroll_row: 0,
            visible_rows: 3,
        };
        for _ in 0..4 {
            sel.select_down(&grid, 100);
        }
        assert_eq!(sel.selected, Some(32));
        assert_eq!(sel.scroll_row, 2);

        sel.select_first(&grid);
        assert_eq!(sel.scroll_row, 0);

        sel.select_last(&grid, 100);
        assert_eq!(sel.selected, Some(99));
        assert_eq!(sel.scroll_row, 10);
    }

    #[test]
    fn paging_moves_by_visible_rows() {
        let grid = GridLayout::new(8);
        let mut sel = SelectionState {
            selected: Some(2),
            scroll_row: 0,
            visible_rows: 2,
        };
        sel.page_down(&grid, 100);
        assert_eq!(sel.selected, Some(18));
        sel.page_up(&grid);
        assert_eq!(sel.selected, Some(2));
        sel.page_up(&grid);
        assert_eq!(sel.selected, Some(0));
    }
}
