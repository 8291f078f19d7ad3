//! Pagination state and the visible-slice re-slicer
//!
//! A table either holds the whole (filtered) list and slices it locally, or
//! holds exactly the page the server returned. [`SliceMode`] hides that
//! difference from the selection controller: both modes yield "the rows
//! rendered right now".

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_PAGE_SIZE;

/// Where the page boundaries are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SliceMode {
    /// The table holds the full list and slices it per page
    #[default]
    ClientSide,
    /// The table holds one server page, already sliced
    ServerSide,
}

impl SliceMode {
    pub fn is_server_side(self) -> bool {
        matches!(self, Self::ServerSide)
    }

    /// Rows to render for the given pagination state
    pub fn visible<'a, T>(self, rows: &'a [T], pagination: &Pagination) -> &'a [T] {
        match self {
            Self::ClientSide => {
                compute_visible_slice(rows, pagination.page(), pagination.per_page())
            }
            Self::ServerSide => rows,
        }
    }
}

/// Index window of `page` within a list of `len` items, clamped to bounds.
///
/// An out-of-range page yields an empty range rather than panicking.
pub fn visible_range(len: usize, page: u32, per_page: u32) -> Range<usize> {
    let per_page = per_page.max(1) as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(per_page);
    let end = start.saturating_add(per_page);
    start.min(len)..end.min(len)
}

/// `full[(page-1)*per_page .. page*per_page]`, clamped to the slice bounds
pub fn compute_visible_slice<T>(full: &[T], page: u32, per_page: u32) -> &[T] {
    &full[visible_range(full.len(), page, per_page)]
}

/// Pagination state owned by one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    page: u32,
    per_page: u32,
    total_count: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Start at page 1 with an unknown (zero) total
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            total_count: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    /// Item count handed to pagination widgets.
    ///
    /// Always the remote total, never the length of the loaded slice.
    pub fn item_count(&self) -> u32 {
        self.total_count
    }

    pub fn set_total_count(&mut self, total_count: u32) {
        self.total_count = total_count;
    }

    /// Number of pages, at least 1 so an empty table still shows "1 / 1"
    pub fn page_count(&self) -> u32 {
        self.total_count.div_ceil(self.per_page).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Move to `new_page` (clamped to `>= 1`). Returns whether the page changed.
    ///
    /// Pages past the end are accepted; they render as an empty slice.
    pub fn on_page_change(&mut self, new_page: u32) -> bool {
        let new_page = new_page.max(1);
        if new_page == self.page {
            return false;
        }
        self.page = new_page;
        true
    }

    /// Change the page size and move to `new_page`. Returns whether anything changed.
    pub fn on_per_page_change(&mut self, new_per_page: u32, new_page: u32) -> bool {
        let new_per_page = new_per_page.max(1);
        let size_changed = new_per_page != self.per_page;
        self.per_page = new_per_page;
        let page_changed = self.on_page_change(new_page);
        size_changed || page_changed
    }

    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.on_page_change(self.page + 1)
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.has_prev() {
            self.on_page_change(self.page - 1)
        } else {
            false
        }
    }

    /// Pull the page back inside `1..=page_count()`, e.g. after a delete
    /// shrank the total. Returns whether the page moved.
    pub fn clamp_page(&mut self) -> bool {
        let last = self.page_count();
        if self.page > last {
            self.page = last;
            true
        } else {
            false
        }
    }

    /// Global index window of the current page, clipped to `[0, total_count)`
    pub fn window(&self) -> Range<usize> {
        visible_range(self.total_count as usize, self.page, self.per_page)
    }

    /// 1-based index of the first row on this page, 0 when the page is empty
    pub fn first_index(&self) -> usize {
        let window = self.window();
        if window.is_empty() {
            0
        } else {
            window.start + 1
        }
    }

    /// 1-based index of the last row on this page, 0 when the page is empty
    pub fn last_index(&self) -> usize {
        self.window().end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn last_partial_page_is_clipped() {
        let rows = numbers(23);
        let slice = compute_visible_slice(&rows, 3, 10);
        assert_eq!(slice, &[20, 21, 22]);
        assert_eq!(visible_range(23, 3, 10), 20..23);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let rows = numbers(23);
        assert!(compute_visible_slice(&rows, 4, 10).is_empty());
        assert!(compute_visible_slice(&rows, u32::MAX, 10).is_empty());
    }

    #[test]
    fn zero_page_and_size_are_treated_as_one() {
        let rows = numbers(5);
        assert_eq!(compute_visible_slice(&rows, 0, 0), &[0]);
    }

    #[test]
    fn server_side_rows_are_not_resliced() {
        let rows = numbers(10);
        let mut p = Pagination::new(10);
        p.set_total_count(23);
        p.on_page_change(3);
        assert_eq!(SliceMode::ServerSide.visible(&rows, &p).len(), 10);
        assert!(SliceMode::ClientSide.visible(&rows, &p).is_empty());
    }

    #[test]
    fn item_count_is_remote_total() {
        let mut p = Pagination::new(10);
        p.set_total_count(23);
        assert_eq!(p.item_count(), 23);
        assert_eq!(p.page_count(), 3);
    }

    #[test]
    fn next_and_prev_stay_in_bounds() {
        let mut p = Pagination::new(10);
        p.set_total_count(23);
        assert!(!p.prev_page());
        assert!(p.next_page());
        assert!(p.next_page());
        assert!(!p.next_page());
        assert_eq!(p.page(), 3);
        assert_eq!((p.first_index(), p.last_index()), (21, 23));
    }

    #[test]
    fn clamp_after_total_shrinks() {
        let mut p = Pagination::new(10);
        p.set_total_count(23);
        p.on_page_change(3);
        p.set_total_count(18);
        assert!(p.clamp_page());
        assert_eq!(p.page(), 2);
        assert!(!p.clamp_page());
    }

    #[test]
    fn empty_table_has_one_page() {
        let p = Pagination::new(10);
        assert_eq!(p.page_count(), 1);
        assert_eq!((p.first_index(), p.last_index()), (0, 0));
    }

    #[test]
    fn per_page_change_reports_change() {
        let mut p = Pagination::new(10);
        assert!(!p.on_per_page_change(10, 1));
        assert!(p.on_per_page_change(25, 1));
        assert_eq!(p.per_page(), 25);
    }
}
