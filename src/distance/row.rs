//! A whole row of cells in the edit distance table.

use super::cell::EditCell;
use super::item::EditItem;
use super::ComparisonInfo;

/// One row of the table: `1 + |text₂|` cells, the extra cell being the
/// initial column. `row[i]` therefore corresponds to `text[i - 1]`.
pub(crate) struct EditRow {
    pub(crate) cells: Vec<EditCell>,
}

impl EditRow {
    /// Create a zeroed row sized for the second item.
    pub(crate) fn new(item2: &EditItem<'_>) -> Self {
        EditRow {
            cells: vec![EditCell::default(); 1 + item2.len()],
        }
    }

    /// Initialize this as the first row of the table: all insertions of the
    /// second item's scalars.
    pub(crate) fn init_first_row(&mut self, item2: &EditItem<'_>, info: &ComparisonInfo) {
        debug_assert_eq!(item2.len() + 1, self.cells.len());
        debug_assert!(!item2.is_empty());

        // cells[0] is already 0,0,0
        for i in 1..=item2.len() {
            // copy from the cell to the left, add insert cost
            let mut next = EditCell::default();
            next.set_costs(&self.cells[i - 1]);
            next.increment_costs(item2.ins_del_cost(i - 1, info));
            self.cells[i].set_costs(&next);

            // if this is a new token, reset token costs
            if item2.is_token_sep(i - 1) {
                self.cells[i].start_new_token();
            }
        }
    }

    /// Initialize the first cell of this row from the row above: one
    /// deletion of the first item's scalar at `idx`.
    ///
    /// Returns the cell's cost as the row's initial minimum.
    pub(crate) fn init_first_cell(
        &mut self,
        row_curr: &EditRow,
        item1: &EditItem<'_>,
        idx: usize,
        info: &ComparisonInfo,
    ) -> f32 {
        let mut next = EditCell::default();
        next.set_costs(&row_curr.cells[0]);
        next.increment_costs(item1.ins_del_cost(idx, info));
        self.cells[0].set_costs(&next);

        // however, if this is a new token in the first item, reset token costs
        if item1.is_token_sep(idx) {
            self.cells[0].start_new_token();
        }

        self.cells[0].cost
    }
}
