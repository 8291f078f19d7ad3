//! Row selection state machine
//!
//! Tracks the selected keys of one table, the shift-click anchor and the
//! queries the toolbar and modals need. Identity is always the row key, so
//! re-ordering the row list between renders does not disturb the selection.
//!
//! The per-page selection count is never stored. It is derived from the
//! selected keys and the rows currently rendered, which keeps it consistent
//! after select-all, page changes and resets.

mod range;

use std::collections::{HashMap, HashSet};

use crate::shift::ShiftHandle;
use crate::signal::ResetSignal;
use crate::traits::Row;

pub use range::shift_range;

/// Selection state of the rows rendered on the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    /// No selectable row on the page is selected (or there is none)
    None,
    /// Some selectable rows on the page are selected
    Partial,
    /// Every selectable row on the page is selected
    All,
}

/// Selection controller for one table
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    /// Selected keys in insertion order
    order: Vec<String>,
    /// Membership index over `order`
    members: HashSet<String>,
    /// Index of the most recently toggled row
    anchor: Option<usize>,
    shift: ShiftHandle,
}

impl SelectionController {
    /// Create a controller reading Shift state from `shift`
    pub fn new(shift: ShiftHandle) -> Self {
        Self {
            shift,
            ..Self::default()
        }
    }

    // ========== Mutations ==========

    /// Toggle the row at `index` of the rendered `rows`.
    ///
    /// With Shift held and an anchor present, every row between the anchor
    /// and `index` receives `selecting`. The anchor moves to `index` either
    /// way. Selecting a non-selectable row is a silent no-op, and so is an
    /// index past the rendered rows.
    pub fn toggle_row<T: Row>(&mut self, rows: &[T], index: usize, selecting: bool) {
        if index >= rows.len() {
            return;
        }

        match self.anchor {
            Some(anchor) if self.shift.is_held() => {
                log::debug!("range toggle {anchor}..={index} selecting={selecting}");
                for row in shift_range(anchor, index).filter_map(|i| rows.get(i)) {
                    self.toggle_single(row, selecting);
                }
            }
            _ => self.toggle_single(&rows[index], selecting),
        }

        self.anchor = Some(index);
    }

    /// Select every selectable row of `rows`, or deselect everything.
    ///
    /// Does not consult or move the anchor.
    pub fn select_all<T: Row>(&mut self, rows: &[T], selecting: bool) {
        self.order.clear();
        self.members.clear();
        if selecting {
            for row in rows.iter().filter(|r| r.is_selectable()) {
                self.insert(row.key());
            }
        }
    }

    /// Select or deselect only the given rows, leaving other selected keys alone
    pub fn select_rows<T: Row>(&mut self, rows: &[T], selecting: bool) {
        for row in rows {
            self.toggle_single(row, selecting);
        }
    }

    /// Empty the selection and forget the anchor. Idempotent.
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
        self.anchor = None;
    }

    /// Drop selected keys that no longer have a selectable row in `rows`.
    ///
    /// Returns how many keys were dropped.
    pub fn retain_rows<T: Row>(&mut self, rows: &[T]) -> usize {
        let present: HashSet<&str> = rows
            .iter()
            .filter(|r| r.is_selectable())
            .map(Row::key)
            .collect();
        let before = self.order.len();
        self.order.retain(|k| present.contains(k.as_str()));
        self.members.retain(|k| present.contains(k.as_str()));
        before - self.order.len()
    }

    /// Acknowledge a reset signal: clear if it was raised, then lower it.
    ///
    /// Returns whether a reset happened.
    pub fn acknowledge(&mut self, signal: &mut ResetSignal) -> bool {
        match signal.take() {
            Some(reason) => {
                log::debug!("selection reset: {reason}");
                self.clear();
                true
            }
            None => false,
        }
    }

    fn toggle_single<T: Row>(&mut self, row: &T, selecting: bool) {
        if selecting {
            if row.is_selectable() {
                self.insert(row.key());
            }
        } else {
            self.remove(row.key());
        }
    }

    fn insert(&mut self, key: &str) {
        if self.members.insert(key.to_string()) {
            self.order.push(key.to_string());
        }
    }

    fn remove(&mut self, key: &str) {
        if self.members.remove(key) {
            self.order.retain(|k| k != key);
        }
    }

    // ========== Queries ==========

    pub fn is_selected<T: Row>(&self, row: &T) -> bool {
        self.contains_key(row.key())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.members.contains(key)
    }

    /// Whether the selection covers every selectable row of the full list.
    ///
    /// A list without selectable rows is never "all selected".
    pub fn is_all_selected<T: Row>(&self, rows: &[T]) -> bool {
        let mut selectable = 0;
        for row in rows.iter().filter(|r| r.is_selectable()) {
            if !self.is_selected(row) {
                return false;
            }
            selectable += 1;
        }
        selectable > 0 && selectable == self.len()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Selected keys in selection order
    pub fn keys(&self) -> &[String] {
        &self.order
    }

    /// Owned snapshot of the selected keys, taken at call time
    pub fn snapshot(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Selected rows out of `rows`, in selection order.
    ///
    /// Keys without a matching row (e.g. selected on another page) are skipped.
    pub fn selected_rows<'a, T: Row>(&self, rows: &'a [T]) -> Vec<&'a T> {
        let by_key: HashMap<&str, &T> = rows.iter().map(|r| (r.key(), r)).collect();
        self.order
            .iter()
            .filter_map(|k| by_key.get(k.as_str()).copied())
            .collect()
    }

    /// Number of rendered rows that are selected
    pub fn selected_on_page<T: Row>(&self, visible: &[T]) -> usize {
        visible.iter().filter(|r| self.is_selected(*r)).count()
    }

    /// Selectable rendered rows that are not selected yet
    pub fn remaining_on_page<T: Row>(&self, visible: &[T]) -> usize {
        visible
            .iter()
            .filter(|r| r.is_selectable() && !self.is_selected(*r))
            .count()
    }

    /// Tri-state for a page-level "select all" checkbox
    pub fn page_selection<T: Row>(&self, visible: &[T]) -> PageSelection {
        let selected = self.selected_on_page(visible);
        if selected == 0 {
            PageSelection::None
        } else if self.remaining_on_page(visible) == 0 {
            PageSelection::All
        } else {
            PageSelection::Partial
        }
    }
}
