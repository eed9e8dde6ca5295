//! Table View State
//!
//! Client-side state of one table over the rows currently loaded: selection,
//! sorting, column visibility, free-text filter and drag order. None of it
//! changes the record set itself.

use std::collections::{BTreeSet, HashSet};

use super::column::Column;
use super::reorder::move_by_id;
use crate::models::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<C> {
    pub column: C,
    pub descending: bool,
}

/// Header checkbox state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAll {
    Unchecked,
    Indeterminate,
    Checked,
}

#[derive(Debug, Clone)]
pub struct TableState<R: Entity, C: Column<R>> {
    rows: Vec<R>,
    selection: BTreeSet<R::Id>,
    sorting: Vec<SortKey<C>>,
    hidden: HashSet<C>,
    filter: String,
}

impl<R: Entity, C: Column<R>> Default for TableState<R, C> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            selection: BTreeSet::new(),
            sorting: Vec::new(),
            hidden: HashSet::new(),
            filter: String::new(),
        }
    }
}

impl<R: Entity, C: Column<R>> TableState<R, C> {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Rows
    // ========================

    /// Replace the loaded rows; drag order is discarded and the selection is
    /// pruned to ids that are still loaded.
    pub fn replace_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        let loaded: HashSet<R::Id> = self.rows.iter().map(Entity::id).collect();
        self.selection.retain(|id| loaded.contains(id));
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, id: R::Id) -> Option<&R> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Rows after filter and sort, in display order
    pub fn visible_rows(&self, columns: &[C]) -> Vec<R> {
        let mut rows: Vec<R> = self
            .rows
            .iter()
            .filter(|row| self.matches_filter(row, columns))
            .cloned()
            .collect();
        self.sort_rows(&mut rows);
        rows
    }

    fn sort_rows(&self, rows: &mut [R]) {
        if self.sorting.is_empty() {
            return;
        }
        rows.sort_by(|a, b| {
            self.sorting
                .iter()
                .map(|key| {
                    let ord = key.column.compare(a, b);
                    if key.descending { ord.reverse() } else { ord }
                })
                .find(|ord| ord.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    fn matches_filter(&self, row: &R, columns: &[C]) -> bool {
        let needle = self.filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        columns
            .iter()
            .any(|col| col.cell(row).to_lowercase().contains(&needle))
    }

    // ========================
    // Filter
    // ========================

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    // ========================
    // Sorting
    // ========================

    /// `Some(descending)` when the column takes part in sorting
    pub fn sort_direction(&self, column: C) -> Option<bool> {
        self.sorting
            .iter()
            .find(|k| k.column == column)
            .map(|k| k.descending)
    }

    /// Header click: a sorted column flips direction, an unsorted one becomes
    /// ascending. Without `multi` it replaces the other sort keys.
    pub fn toggle_sort(&mut self, column: C, multi: bool) {
        if !column.sortable() {
            return;
        }
        let existing = self.sort_direction(column);
        let key = SortKey {
            column,
            descending: existing == Some(false),
        };
        if multi {
            match self.sorting.iter_mut().find(|k| k.column == column) {
                Some(slot) => *slot = key,
                None => self.sorting.push(key),
            }
        } else {
            self.sorting = vec![key];
        }
    }

    /// 1-based position among the sort keys, shown when several are active
    pub fn sort_priority(&self, column: C) -> Option<usize> {
        if self.sorting.len() < 2 {
            return None;
        }
        self.sorting.iter().position(|k| k.column == column).map(|i| i + 1)
    }

    // ========================
    // Column visibility
    // ========================

    pub fn is_column_visible(&self, column: C) -> bool {
        !self.hidden.contains(&column)
    }

    /// Non-hideable columns ignore the request
    pub fn set_column_visible(&mut self, column: C, visible: bool) {
        if visible {
            self.hidden.remove(&column);
        } else if column.hideable() {
            self.hidden.insert(column);
        }
    }

    pub fn visible_columns(&self, columns: &[C]) -> Vec<C> {
        columns
            .iter()
            .copied()
            .filter(|c| self.is_column_visible(*c))
            .collect()
    }

    // ========================
    // Selection
    // ========================

    pub fn is_selected(&self, id: R::Id) -> bool {
        self.selection.contains(&id)
    }

    /// Only loaded rows can be selected
    pub fn set_selected(&mut self, id: R::Id, selected: bool) {
        if !selected {
            self.selection.remove(&id);
        } else if self.row(id).is_some() {
            self.selection.insert(id);
        }
    }

    pub fn toggle_selected(&mut self, id: R::Id) {
        let selected = self.is_selected(id);
        self.set_selected(id, !selected);
    }

    /// Select or clear exactly the rows on the current page view
    pub fn select_all(&mut self, columns: &[C], selected: bool) {
        for row in self.visible_rows(columns) {
            if selected {
                self.selection.insert(row.id());
            } else {
                self.selection.remove(&row.id());
            }
        }
    }

    pub fn select_all_state(&self, columns: &[C]) -> SelectAll {
        let visible = self.visible_rows(columns);
        let selected = visible.iter().filter(|r| self.is_selected(r.id())).count();
        if selected == 0 {
            SelectAll::Unchecked
        } else if selected == visible.len() {
            SelectAll::Checked
        } else {
            SelectAll::Indeterminate
        }
    }

    pub fn selected_ids(&self) -> Vec<R::Id> {
        self.selection.iter().copied().collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Selected rows that pass the filter, in display order. Bulk actions
    /// target these, never rows the filter hides.
    pub fn visible_selected_ids(&self, columns: &[C]) -> Vec<R::Id> {
        self.visible_rows(columns)
            .iter()
            .map(Entity::id)
            .filter(|id| self.is_selected(*id))
            .collect()
    }

    pub fn visible_selected_count(&self, columns: &[C]) -> usize {
        self.rows
            .iter()
            .filter(|row| self.is_selected(row.id()) && self.matches_filter(row, columns))
            .count()
    }

    /// Keep only the given ids selected
    pub fn retain_selection(&mut self, keep: &[R::Id]) {
        self.selection.retain(|id| keep.contains(id));
    }

    // ========================
    // Drag reorder
    // ========================

    /// Move row `active` to the position of row `over`.
    ///
    /// An active sort order is first frozen into the row order and cleared,
    /// so the move applies to the sequence the user is looking at.
    pub fn move_row(&mut self, active: R::Id, over: R::Id) -> bool {
        if active == over || self.row(active).is_none() || self.row(over).is_none() {
            return false;
        }
        if !self.sorting.is_empty() {
            let mut rows = std::mem::take(&mut self.rows);
            self.sort_rows(&mut rows);
            self.rows = rows;
            self.sorting.clear();
        }
        move_by_id(&mut self.rows, active, over)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use futures::executor::block_on;
    use futures::future::ready;

    use crate::models::Fee;
    use crate::table::bulk::{delete_all, SelectionPolicy};
    use crate::table::column::FeeColumn;
    use crate::table::source::FeeTab;

    type FeeTable = TableState<Fee, FeeColumn>;

    fn fee(id: i64, fee_type: &str, amount: i64, month: &str) -> Fee {
        Fee {
            id,
            fee_type: fee_type.to_string(),
            amount,
            month: month.to_string(),
            description: String::new(),
            compulsory: id % 2 == 0,
        }
    }

    fn loaded() -> FeeTable {
        let mut table = FeeTable::new();
        table.replace_rows(vec![
            fee(1, "service", 300, "2026-09"),
            fee(2, "parking", 100, "2026-10"),
            fee(3, "cleaning", 200, "2026-10"),
            fee(4, "water", 100, "2026-08"),
        ]);
        table
    }

    fn ids(rows: &[Fee]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    const COLS: &[FeeColumn] = &FeeColumn::ALL;

    #[test]
    fn test_select_all_and_indeterminate() {
        let mut table = loaded();
        assert_eq!(table.select_all_state(COLS), SelectAll::Unchecked);

        table.select_all(COLS, true);
        assert_eq!(table.selected_count(), 4);
        assert_eq!(table.select_all_state(COLS), SelectAll::Checked);

        table.toggle_selected(3);
        assert_eq!(table.selected_count(), 3);
        assert_eq!(table.select_all_state(COLS), SelectAll::Indeterminate);

        table.select_all(COLS, false);
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn test_selection_limited_to_loaded_rows() {
        let mut table = loaded();
        table.set_selected(42, true);
        assert_eq!(table.selected_count(), 0);

        table.set_selected(1, true);
        table.set_selected(2, true);
        table.replace_rows(vec![fee(2, "parking", 100, "2026-10"), fee(9, "gym", 50, "2026-10")]);
        assert_eq!(table.selected_ids(), vec![2]);
    }

    #[test]
    fn test_sort_toggle_cycles_direction() {
        let mut table = loaded();
        table.toggle_sort(FeeColumn::Amount, false);
        assert_eq!(ids(&table.visible_rows(COLS)), vec![2, 4, 3, 1]);

        table.toggle_sort(FeeColumn::Amount, false);
        assert_eq!(table.sort_direction(FeeColumn::Amount), Some(true));
        assert_eq!(ids(&table.visible_rows(COLS)), vec![1, 3, 2, 4]);

        table.toggle_sort(FeeColumn::Description, false);
        assert_eq!(table.sort_direction(FeeColumn::Description), None);
        assert_eq!(table.sort_direction(FeeColumn::Amount), Some(true));
    }

    #[test]
    fn test_multi_column_sort() {
        let mut table = loaded();
        table.toggle_sort(FeeColumn::Amount, false);
        table.toggle_sort(FeeColumn::Month, true);
        table.toggle_sort(FeeColumn::Month, true);
        // amount asc, then month desc for the two 100s
        assert_eq!(ids(&table.visible_rows(COLS)), vec![2, 4, 3, 1]);
        assert_eq!(table.rows().len(), 4);
        assert_eq!(ids(table.rows()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_is_view_only() {
        let mut table = loaded();
        table.set_filter("2026-10");
        assert_eq!(ids(&table.visible_rows(COLS)), vec![2, 3]);
        table.set_filter("WATER");
        assert_eq!(ids(&table.visible_rows(COLS)), vec![4]);
        assert_eq!(table.len(), 4);

        // a hidden column no longer participates
        let month_hidden: Vec<FeeColumn> = COLS.iter().copied().filter(|c| *c != FeeColumn::Month).collect();
        table.set_filter("2026-10");
        assert!(table.visible_rows(&month_hidden).is_empty());
    }

    #[test]
    fn test_column_visibility() {
        let mut table = loaded();
        table.set_column_visible(FeeColumn::Description, false);
        table.set_column_visible(FeeColumn::Type, false);
        assert_eq!(
            table.visible_columns(COLS),
            vec![FeeColumn::Type, FeeColumn::Amount, FeeColumn::Month, FeeColumn::Compulsory]
        );
        table.set_column_visible(FeeColumn::Description, true);
        assert!(table.is_column_visible(FeeColumn::Description));
    }

    #[test]
    fn test_move_row_by_identity() {
        let mut table = loaded();
        assert!(table.move_row(1, 3));
        assert_eq!(ids(table.rows()), vec![2, 3, 1, 4]);
        assert!(!table.move_row(1, 1));
        assert!(!table.move_row(1, 99));
    }

    #[test]
    fn test_move_row_freezes_sort() {
        let mut table = loaded();
        table.toggle_sort(FeeColumn::Amount, false);
        // displayed: 2, 4, 3, 1
        assert!(table.move_row(2, 3));
        assert_eq!(table.sort_direction(FeeColumn::Amount), None);
        assert_eq!(ids(&table.visible_rows(COLS)), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_bulk_target_skips_filtered_rows() {
        let mut table = loaded();
        table.select_all(COLS, true);
        table.set_filter("water");

        assert_eq!(table.select_all_state(COLS), SelectAll::Checked);
        assert_eq!(table.visible_selected_ids(COLS), vec![4]);
        assert_eq!(table.visible_selected_count(COLS), 1);
        // hidden rows stay selected and come back with the filter cleared
        assert_eq!(table.selected_count(), 4);
        table.set_filter("");
        assert_eq!(table.visible_selected_ids(COLS), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_bulk_target_follows_display_order() {
        let mut table = loaded();
        table.set_selected(1, true);
        table.set_selected(4, true);
        table.toggle_sort(FeeColumn::Amount, false);
        assert_eq!(table.visible_selected_ids(COLS), vec![4, 1]);
    }

    #[test]
    fn test_selection_is_per_table() {
        // each fee tab owns its own table over possibly overlapping rows
        let mut all_fees = loaded();
        let mut this_month = FeeTable::new();
        this_month.replace_rows(vec![fee(2, "parking", 100, "2026-10"), fee(3, "cleaning", 200, "2026-10")]);
        let month_cols = FeeTab::CurrentMonth.columns();

        all_fees.select_all(COLS, true);
        assert_eq!(this_month.select_all_state(month_cols), SelectAll::Unchecked);
        assert!(this_month.visible_selected_ids(month_cols).is_empty());

        this_month.set_selected(3, true);
        let refetched = this_month.rows().to_vec();
        this_month.replace_rows(refetched);
        all_fees.select_all(COLS, false);
        assert_eq!(this_month.selected_ids(), vec![3]);
        assert_eq!(all_fees.selected_count(), 0);
    }

    #[test]
    fn test_failed_delete_survives_refetch() {
        let server = RefCell::new(loaded().rows().to_vec());
        let mut table = loaded();
        table.set_selected(1, true);
        table.set_selected(2, true);
        table.set_selected(3, true);

        let report = block_on(delete_all(table.visible_selected_ids(COLS), |id| {
            let result = if id == 2 {
                Err("Fee is referenced by payments".to_string())
            } else {
                server.borrow_mut().retain(|f| f.id != id);
                Ok(())
            };
            ready(result)
        }));
        table.replace_rows(server.borrow().clone());
        table.retain_selection(&SelectionPolicy::KeepFailed.remaining(&report));

        assert_eq!(report.succeeded, vec![1, 3]);
        assert_eq!(ids(table.rows()), vec![2, 4]);
        assert_eq!(table.selected_ids(), vec![2]);

        table.retain_selection(&SelectionPolicy::ClearAll.remaining(&report));
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn test_sort_priority() {
        let mut table = loaded();
        table.toggle_sort(FeeColumn::Amount, false);
        assert_eq!(table.sort_priority(FeeColumn::Amount), None);
        table.toggle_sort(FeeColumn::Month, true);
        assert_eq!(table.sort_priority(FeeColumn::Amount), Some(1));
        assert_eq!(table.sort_priority(FeeColumn::Month), Some(2));
        assert_eq!(table.sort_priority(FeeColumn::Type), None);
    }

    #[test]
    fn test_replace_discards_drag_order() {
        let mut table = loaded();
        table.move_row(4, 1);
        table.replace_rows(loaded().rows().to_vec());
        assert_eq!(ids(table.rows()), vec![1, 2, 3, 4]);
    }
}
