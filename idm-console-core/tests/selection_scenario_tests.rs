#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end table scenarios: shift-click ranges, bulk actions and resets
//! driven through `EntityService` against the in-memory source.

use std::sync::Arc;

use idm_console_core::types::BulkAction;
use idm_console_core::{
    EntityService, FetchOutcome, InMemoryEntitySource, PageSelection, Row, ShiftTracker,
    SliceMode, TableController,
};

#[derive(Debug, Clone)]
struct Rule {
    cn: String,
    enabled: bool,
}

impl Row for Rule {
    fn key(&self) -> &str {
        &self.cn
    }

    fn status(&self) -> Option<bool> {
        Some(self.enabled)
    }

    fn set_status(&mut self, enabled: bool) -> bool {
        self.enabled = enabled;
        true
    }
}

fn rule(cn: &str, enabled: bool) -> Rule {
    Rule {
        cn: cn.to_string(),
        enabled,
    }
}

fn service_with(rows: Vec<Rule>) -> (Arc<InMemoryEntitySource<Rule>>, EntityService<Rule>) {
    let source = Arc::new(InMemoryEntitySource::new("hbacrule", rows));
    let service: EntityService<Rule> = EntityService::new(source.clone());
    (source, service)
}

#[tokio::test]
async fn shift_click_then_delete_resets_selection() {
    let rows = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|cn| rule(cn, true))
        .collect();
    let (source, service) = service_with(rows);
    let shift = ShiftTracker::new();
    let mut table = TableController::new(SliceMode::ClientSide, 10, shift.handle());
    service.load(&mut table).await.unwrap();

    // click row 1, shift-click row 3
    table.toggle_visible(1, true);
    shift.press();
    table.toggle_visible(3, true);
    shift.release();
    assert_eq!(table.selection_snapshot(), ["b", "c", "d"]);
    assert_eq!(table.selected_on_page(), 3);

    let snapshot = table.selection_snapshot();
    let result = service.delete_many(&snapshot).await.unwrap();
    assert!(result.is_complete_success());
    table.mark_deleted();
    assert!(table.selection().is_empty());
    assert_eq!(table.selected_on_page(), 0);

    service.load(&mut table).await.unwrap();
    let keys: Vec<&str> = table.visible_rows().iter().map(Row::key).collect();
    assert_eq!(keys, ["a", "e"]);
    assert_eq!(source.len().await, 2);
}

#[tokio::test]
async fn bulk_buttons_follow_selected_status() {
    let (_source, service) = service_with(vec![
        rule("allow_all", true),
        rule("allow_ssh", true),
        rule("deny_ftp", false),
    ]);
    let mut table = TableController::new(SliceMode::ClientSide, 10, ShiftTracker::new().handle());
    service.load(&mut table).await.unwrap();
    assert!(!table.bulk_state().is_allowed(BulkAction::Delete));

    table.toggle_visible(0, true);
    table.toggle_visible(1, true);
    let state = table.bulk_state();
    assert!(state.is_allowed(BulkAction::Disable));
    assert!(!state.is_allowed(BulkAction::Enable));

    table.toggle_visible(2, true);
    let state = table.bulk_state();
    assert!(state.is_allowed(BulkAction::Delete));
    assert!(!state.is_allowed(BulkAction::Enable));
    assert!(!state.is_allowed(BulkAction::Disable));
}

#[tokio::test]
async fn disabling_and_switching_tab_clears_selection() {
    let (_source, service) = service_with(vec![rule("r1", true), rule("r2", true)]);
    let mut table = TableController::new(SliceMode::ClientSide, 10, ShiftTracker::new().handle());
    service.load(&mut table).await.unwrap();

    table.select_all(true);
    assert!(table.is_all_selected());
    let result = service
        .set_enabled_many(&table.selection_snapshot(), false)
        .await
        .unwrap();
    assert_eq!(result.success_count, 2);

    assert!(table.set_tab(Some(false)));
    assert!(table.selection().is_empty());
    service.load(&mut table).await.unwrap();
    assert_eq!(table.visible_rows().len(), 2);
    assert_eq!(table.page_selection(), PageSelection::None);
}

#[tokio::test]
async fn server_paging_keeps_totals_and_resets_on_page_change() {
    let rows: Vec<Rule> = (0..23).map(|i| rule(&format!("host{i:02}"), true)).collect();
    let (_source, service) = service_with(rows);
    let mut table = TableController::new(SliceMode::ServerSide, 10, ShiftTracker::new().handle());
    assert_eq!(service.load(&mut table).await.unwrap(), FetchOutcome::Applied);

    table.select_page(true);
    assert_eq!(table.selected_on_page(), 10);
    assert!(table.next_page());
    assert!(table.selection().is_empty());

    table.on_page_change(3);
    service.load(&mut table).await.unwrap();
    assert_eq!(table.visible_rows().len(), 3);
    assert_eq!(table.pagination().item_count(), 23);
    assert_eq!(table.pagination().page_count(), 3);
}
