//! Entity list and bulk-action service

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::table::{FetchOutcome, TableController};
use crate::traits::{EntitySource, Row};
use crate::types::{
    BatchActionFailure, BatchActionResult, BulkAction, ListQuery, PaginatedResponse, MAX_PAGE_SIZE,
};

/// Service for one entity type
pub struct EntityService<T> {
    source: Arc<dyn EntitySource<T>>,
}

impl<T> Clone for EntityService<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<T: Row + Send + Sync + 'static> EntityService<T> {
    /// Create the service over `source`
    #[must_use]
    pub fn new(source: Arc<dyn EntitySource<T>>) -> Self {
        Self { source }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// List entities (query values are clamped first)
    pub async fn list(&self, query: &ListQuery) -> CoreResult<PaginatedResponse<T>> {
        let query = query.validated(MAX_PAGE_SIZE);
        self.source.list(&query).await
    }

    /// Fetch the table's current query and hand the result back to it.
    ///
    /// A server-paged table whose page was clamped is fetched once more.
    pub async fn load(&self, table: &mut TableController<T>) -> CoreResult<FetchOutcome> {
        let mut outcome = self.load_once(table).await?;
        if outcome == FetchOutcome::Refetch {
            outcome = self.load_once(table).await?;
        }
        Ok(outcome)
    }

    async fn load_once(&self, table: &mut TableController<T>) -> CoreResult<FetchOutcome> {
        let ticket = table.begin_fetch();
        match self.list(&table.query()).await {
            Ok(response) => Ok(table.complete_fetch(ticket, response)),
            Err(e) => {
                table.fail_fetch(ticket, &e);
                Err(e)
            }
        }
    }

    /// Delete every key concurrently
    pub async fn delete_many(&self, keys: &[String]) -> CoreResult<BatchActionResult> {
        self.run(BulkAction::Delete, keys).await
    }

    /// Enable or disable every key concurrently
    pub async fn set_enabled_many(
        &self,
        keys: &[String],
        enabled: bool,
    ) -> CoreResult<BatchActionResult> {
        let action = if enabled {
            BulkAction::Enable
        } else {
            BulkAction::Disable
        };
        self.run(action, keys).await
    }

    async fn run(&self, action: BulkAction, keys: &[String]) -> CoreResult<BatchActionResult> {
        if keys.is_empty() {
            return Err(CoreError::NoSelection);
        }

        // 并行执行
        let futures: Vec<_> = keys
            .iter()
            .map(|key| {
                let source = Arc::clone(&self.source);
                let key = key.clone();
                async move {
                    let result = match action {
                        BulkAction::Delete => source.delete(&key).await,
                        BulkAction::Enable => source.set_enabled(&key, true).await,
                        BulkAction::Disable => source.set_enabled(&key, false).await,
                    };
                    match result {
                        Ok(()) => Ok(key),
                        Err(e) => Err((key, e)),
                    }
                }
            })
            .collect();

        let results = futures::future::join_all(futures).await;

        let mut success_count = 0;
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(_) => success_count += 1,
                Err((key, e)) => {
                    if e.is_expected() {
                        log::warn!("{} {key} failed: {e}", action.as_str());
                    } else {
                        log::error!("{} {key} failed: {e}", action.as_str());
                    }
                    failures.push(BatchActionFailure {
                        key,
                        reason: e.to_string(),
                    });
                }
            }
        }

        log::info!(
            "{} on {}: {success_count} succeeded, {} failed",
            action.as_str(),
            self.source.name(),
            failures.len()
        );

        Ok(BatchActionResult {
            action,
            success_count,
            failed_count: failures.len(),
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::SliceMode;
    use crate::shift::ShiftHandle;
    use crate::test_utils::{rule, rules, FlakySource, TestRow};
    use crate::traits::InMemoryEntitySource;

    fn hosts(n: usize) -> Vec<TestRow> {
        let names: Vec<String> = (0..n).map(|i| format!("host{i:02}.example.test")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        rules(&refs)
    }

    #[tokio::test]
    async fn delete_many_reports_partial_failure() {
        let source = Arc::new(FlakySource::new(rules(&["a", "b", "c"]), &["b"]));
        let service: EntityService<TestRow> = EntityService::new(source.clone());

        let keys = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let result = service.delete_many(&keys).await.unwrap();

        assert_eq!(result.success_count, 2);
        assert_eq!(result.failed_count, 1);
        assert_eq!(result.failures[0].key, "b");
        assert!(!result.is_complete_success());
        assert_eq!(source.remaining().await, ["b"]);
    }

    #[tokio::test]
    async fn empty_selection_is_rejected() {
        let service: EntityService<TestRow> =
            EntityService::new(Arc::new(InMemoryEntitySource::new("host", vec![])));
        assert!(matches!(
            service.delete_many(&[]).await,
            Err(CoreError::NoSelection)
        ));
    }

    #[tokio::test]
    async fn set_enabled_many_updates_status() {
        let source = Arc::new(InMemoryEntitySource::new(
            "sudorule",
            vec![rule("r1", true), rule("r2", true)],
        ));
        let service: EntityService<TestRow> = EntityService::new(source.clone());
        let result = service
            .set_enabled_many(&["r1".to_string(), "r2".to_string()], false)
            .await
            .unwrap();
        assert_eq!(result.action, BulkAction::Disable);
        assert_eq!(result.success_count, 2);
        assert_eq!(source.get("r1").await.unwrap().enabled, Some(false));
    }

    #[tokio::test]
    async fn load_fills_server_paged_table() {
        let service: EntityService<TestRow> =
            EntityService::new(Arc::new(InMemoryEntitySource::new("host", hosts(23))));
        let mut table = TableController::new(SliceMode::ServerSide, 10, ShiftHandle::detached());

        table.on_page_change(3);
        let outcome = service.load(&mut table).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(table.visible_rows().len(), 3);
        assert_eq!(table.pagination().item_count(), 23);
    }

    #[tokio::test]
    async fn load_refetches_after_clamp() {
        let source = Arc::new(InMemoryEntitySource::new("host", hosts(21)));
        let service: EntityService<TestRow> = EntityService::new(source.clone());
        let mut table = TableController::new(SliceMode::ServerSide, 10, ShiftHandle::detached());
        table.on_page_change(3);
        service.load(&mut table).await.unwrap();
        assert_eq!(table.visible_rows().len(), 1);

        // last row on page 3 goes away
        table.toggle_visible(0, true);
        let result = service.delete_many(&table.selection_snapshot()).await.unwrap();
        assert_eq!(result.success_count, 1);
        table.mark_deleted();

        let outcome = service.load(&mut table).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(table.pagination().page(), 2);
        assert_eq!(table.visible_rows().len(), 10);
    }

    #[tokio::test]
    async fn failed_load_keeps_rows() {
        let source = Arc::new(FlakySource::new(rules(&["a", "b"]), &[]));
        let service: EntityService<TestRow> = EntityService::new(source.clone());
        let mut table = TableController::new(SliceMode::ClientSide, 10, ShiftHandle::detached());
        service.load(&mut table).await.unwrap();
        table.toggle_visible(1, true);

        source.fail_listing(true);
        assert!(service.load(&mut table).await.is_err());
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.selection_snapshot(), ["b"]);
    }

    #[tokio::test]
    async fn disabling_on_enabled_tab_leaves_no_hidden_selection() {
        let source = Arc::new(InMemoryEntitySource::new(
            "hbacrule",
            vec![rule("a", true), rule("b", true), rule("c", true)],
        ));
        let service: EntityService<TestRow> = EntityService::new(source.clone());
        let mut table = TableController::new(SliceMode::ClientSide, 10, ShiftHandle::detached());
        table.set_tab(Some(true));
        service.load(&mut table).await.unwrap();
        table.toggle_visible(0, true);
        table.toggle_visible(1, true);

        service
            .set_enabled_many(&table.selection_snapshot(), false)
            .await
            .unwrap();
        service.load(&mut table).await.unwrap();

        let visible: Vec<_> = table.visible_rows().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(visible, ["c"]);
        assert!(table.selection().is_empty());

        table.toggle_visible(0, true);
        assert_eq!(table.selection_snapshot(), ["c"]);
    }

    #[tokio::test]
    async fn failed_page_load_keeps_previous_page() {
        let source = Arc::new(FlakySource::new(hosts(23), &[]));
        let service: EntityService<TestRow> = EntityService::new(source.clone());
        let mut table = TableController::new(SliceMode::ServerSide, 10, ShiftHandle::detached());
        service.load(&mut table).await.unwrap();
        table.toggle_visible(1, true);

        source.fail_listing(true);
        assert!(table.next_page());
        assert!(service.load(&mut table).await.is_err());

        assert_eq!(table.pagination().page(), 1);
        assert_eq!(table.visible_rows()[0].key, "host00.example.test");
        assert_eq!(table.selection_snapshot(), ["host01.example.test"]);

        source.fail_listing(false);
        assert!(table.next_page());
        service.load(&mut table).await.unwrap();
        assert_eq!(table.visible_rows()[0].key, "host10.example.test");
        assert!(table.selection().is_empty());
    }

    #[tokio::test]
    async fn source_without_status_rejects_enable() {
        let source = Arc::new(FlakySource::new(rules(&["a"]), &[]));
        let service: EntityService<TestRow> = EntityService::new(source);
        let result = service.set_enabled_many(&["a".to_string()], true).await.unwrap();
        assert_eq!(result.failed_count, 1);
        assert!(result.failures[0].reason.contains("no enabled status"));
    }
}
