//! Table controller: one entity table's rows, pagination and selection
//!
//! The owning page feeds it fetch results and user input; the controller
//! keeps the selection consistent with what is rendered and tells the page
//! when a refetch is needed.

use crate::bulk::BulkActionState;
use crate::error::CoreError;
use crate::pagination::{Pagination, SliceMode};
use crate::selection::{PageSelection, SelectionController};
use crate::shift::ShiftHandle;
use crate::signal::{ResetReason, ResetSignal};
use crate::traits::Row;
use crate::types::{ListQuery, PaginatedResponse};

/// Identifies one fetch request; only the latest ticket is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Rows were replaced
    Applied,
    /// A newer request was issued meanwhile; the response was dropped
    Stale,
    /// Rows were applied but the page fell past the end and was clamped;
    /// a server-paged table must fetch again
    Refetch,
}

/// View state to put back when the fetch for a new page or filter fails
#[derive(Debug, Clone)]
struct Rollback {
    pagination: Pagination,
    selection: SelectionController,
    keyword: Option<String>,
    status_filter: Option<bool>,
}

/// State of one entity table
#[derive(Debug, Clone)]
pub struct TableController<T> {
    rows: Vec<T>,
    pagination: Pagination,
    mode: SliceMode,
    selection: SelectionController,
    /// Raised by the owner after a bulk delete succeeded
    deletion_signal: ResetSignal,
    /// Raised on tab, filter, page and refresh changes
    view_signal: ResetSignal,
    keyword: Option<String>,
    status_filter: Option<bool>,
    generation: u64,
    loading: bool,
    rollback: Option<Rollback>,
}

impl<T: Row> TableController<T> {
    pub fn new(mode: SliceMode, per_page: u32, shift: ShiftHandle) -> Self {
        Self {
            rows: Vec::new(),
            pagination: Pagination::new(per_page),
            mode,
            selection: SelectionController::new(shift),
            deletion_signal: ResetSignal::default(),
            view_signal: ResetSignal::default(),
            keyword: None,
            status_filter: None,
            generation: 0,
            loading: false,
            rollback: None,
        }
    }

    // ========== Accessors ==========

    /// Every row held by the table (the full list client-side, one page server-side)
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn mode(&self) -> SliceMode {
        self.mode
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn status_filter(&self) -> Option<bool> {
        self.status_filter
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Rows rendered on the current page
    pub fn visible_rows(&self) -> &[T] {
        self.mode.visible(&self.rows, &self.pagination)
    }

    // ========== Fetching ==========

    /// Query matching the current page, filter and tab
    pub fn query(&self) -> ListQuery {
        let base = match self.mode {
            SliceMode::ServerSide => {
                ListQuery::page(self.pagination.page(), self.pagination.per_page())
            }
            SliceMode::ClientSide => ListQuery::all(),
        };
        base.with_keyword(self.keyword.clone())
            .with_enabled(self.status_filter)
    }

    /// Start a fetch. Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket(self.generation)
    }

    fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a fetch result if `ticket` is still the latest request
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        response: PaginatedResponse<T>,
    ) -> FetchOutcome {
        if !self.is_current(ticket) {
            log::debug!(
                "discarding stale response (ticket {}, current {})",
                ticket.0,
                self.generation
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;
        self.rollback = None;
        self.rows = response.items;
        self.pagination.set_total_count(match self.mode {
            SliceMode::ServerSide => response.total_count,
            SliceMode::ClientSide => u32::try_from(self.rows.len()).unwrap_or(u32::MAX),
        });
        self.sync_signals();

        let dropped = self.selection.retain_rows(&self.rows);
        if dropped > 0 {
            log::debug!("dropped {dropped} selected keys missing from the refetched rows");
        }

        if self.pagination.clamp_page() {
            log::debug!("page clamped to {}", self.pagination.page());
            self.selection.clear();
            if self.mode.is_server_side() {
                return FetchOutcome::Refetch;
            }
        }
        FetchOutcome::Applied
    }

    /// Record a failed fetch.
    ///
    /// Rows stay as they were. A page, filter or tab change still waiting
    /// for its rows is undone, together with the selection it cleared.
    pub fn fail_fetch(&mut self, ticket: FetchTicket, err: &CoreError) {
        if !self.is_current(ticket) {
            return;
        }
        self.loading = false;
        if let Some(rollback) = self.rollback.take() {
            log::debug!("restoring page {} after failed fetch", rollback.pagination.page());
            self.pagination = rollback.pagination;
            self.selection = rollback.selection;
            self.keyword = rollback.keyword;
            self.status_filter = rollback.status_filter;
        }
        if err.is_expected() {
            log::warn!("fetch failed: {err}");
        } else {
            log::error!("fetch failed: {err}");
        }
    }

    // ========== Selection ==========

    /// Toggle the rendered row at `index` (Shift extends to a range)
    pub fn toggle_visible(&mut self, index: usize, selecting: bool) {
        let visible = self.mode.visible(&self.rows, &self.pagination);
        self.selection.toggle_row(visible, index, selecting);
    }

    /// Toggle the rendered row at `index` to the opposite of its current state
    pub fn toggle_visible_auto(&mut self, index: usize) {
        let selecting = self
            .visible_rows()
            .get(index)
            .is_some_and(|row| !self.selection.is_selected(row));
        self.toggle_visible(index, selecting);
    }

    /// Select every selectable row of the full list, or deselect everything
    pub fn select_all(&mut self, selecting: bool) {
        self.selection.select_all(&self.rows, selecting);
    }

    /// Select or deselect the rendered rows, keeping selections elsewhere
    pub fn select_page(&mut self, selecting: bool) {
        let visible = self.mode.visible(&self.rows, &self.pagination);
        self.selection.select_rows(visible, selecting);
    }

    pub fn is_selected(&self, row: &T) -> bool {
        self.selection.is_selected(row)
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(&self.rows)
    }

    pub fn selected_on_page(&self) -> usize {
        self.selection.selected_on_page(self.visible_rows())
    }

    pub fn remaining_on_page(&self) -> usize {
        self.selection.remaining_on_page(self.visible_rows())
    }

    pub fn page_selection(&self) -> PageSelection {
        self.selection.page_selection(self.visible_rows())
    }

    /// Selected keys at call time
    pub fn selection_snapshot(&self) -> Vec<String> {
        self.selection.snapshot()
    }

    /// Selected row objects at call time
    pub fn selected_rows(&self) -> Vec<&T> {
        self.selection.selected_rows(&self.rows)
    }

    /// Bulk button flags for the current selection
    pub fn bulk_state(&self) -> BulkActionState {
        BulkActionState::derive(self.selection.selected_rows(&self.rows))
    }

    // ========== Pagination ==========

    /// Move to `new_page`. Returns whether the caller must refetch.
    pub fn on_page_change(&mut self, new_page: u32) -> bool {
        self.change_page(|p| p.on_page_change(new_page))
    }

    /// Change page size and page. Returns whether the caller must refetch.
    pub fn on_per_page_change(&mut self, new_per_page: u32, new_page: u32) -> bool {
        self.change_page(|p| p.on_per_page_change(new_per_page, new_page))
    }

    pub fn next_page(&mut self) -> bool {
        self.change_page(Pagination::next_page)
    }

    pub fn prev_page(&mut self) -> bool {
        self.change_page(Pagination::prev_page)
    }

    fn change_page(&mut self, apply: impl FnOnce(&mut Pagination) -> bool) -> bool {
        let before = self.committed_view();
        if !apply(&mut self.pagination) {
            return false;
        }
        // client-side pages are re-sliced locally and cannot fail
        if self.mode.is_server_side() {
            self.keep_rollback(before);
        }
        self.view_signal.raise(ResetReason::PageChanged);
        self.sync_signals();
        self.mode.is_server_side()
    }

    fn committed_view(&self) -> Rollback {
        Rollback {
            pagination: self.pagination.clone(),
            selection: self.selection.clone(),
            keyword: self.keyword.clone(),
            status_filter: self.status_filter,
        }
    }

    /// The oldest uncommitted state wins until a fetch completes
    fn keep_rollback(&mut self, before: Rollback) {
        if self.rollback.is_none() {
            self.rollback = Some(before);
        }
    }

    // ========== Reset triggers ==========

    /// Change the search keyword. Returns whether anything changed (refetch needed).
    pub fn set_filter(&mut self, keyword: Option<String>) -> bool {
        let keyword = keyword.filter(|k| !k.trim().is_empty());
        if keyword == self.keyword {
            return false;
        }
        self.keep_rollback(self.committed_view());
        self.keyword = keyword;
        self.pagination.on_page_change(1);
        self.view_signal.raise(ResetReason::FilterChanged);
        self.sync_signals();
        true
    }

    /// Switch the status tab (`None` = all). Returns whether a refetch is needed.
    pub fn set_tab(&mut self, status_filter: Option<bool>) -> bool {
        if status_filter == self.status_filter {
            return false;
        }
        self.keep_rollback(self.committed_view());
        self.status_filter = status_filter;
        self.pagination.on_page_change(1);
        self.view_signal.raise(ResetReason::TabChanged);
        self.sync_signals();
        true
    }

    /// Explicit refresh: reset the selection before the refetch
    pub fn request_refresh(&mut self) {
        self.view_signal.raise(ResetReason::Refreshed);
        self.sync_signals();
    }

    /// Deletion-completed signal, for owners that raise it themselves
    pub fn deletion_signal_mut(&mut self) -> &mut ResetSignal {
        &mut self.deletion_signal
    }

    /// Raise the deletion-completed signal and acknowledge it
    pub fn mark_deleted(&mut self) {
        self.deletion_signal.raise(ResetReason::DeletionCompleted);
        self.sync_signals();
    }

    /// Acknowledge every pending reset signal. Returns whether a reset happened.
    pub fn sync_signals(&mut self) -> bool {
        let deleted = self.selection.acknowledge(&mut self.deletion_signal);
        let view = self.selection.acknowledge(&mut self.view_signal);
        deleted || view
    }
}
