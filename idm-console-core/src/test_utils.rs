//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::pagination::compute_visible_slice;
use crate::traits::{EntitySource, Row};
use crate::types::{ListQuery, PaginatedResponse};

// ===== TestRow =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRow {
    pub key: String,
    pub enabled: Option<bool>,
}

impl TestRow {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            enabled: None,
        }
    }
}

impl Row for TestRow {
    fn key(&self) -> &str {
        &self.key
    }

    fn status(&self) -> Option<bool> {
        self.enabled
    }

    fn set_status(&mut self, enabled: bool) -> bool {
        match self.enabled.as_mut() {
            Some(current) => {
                *current = enabled;
                true
            }
            None => false,
        }
    }
}

/// Row with an enabled status
pub fn rule(key: &str, enabled: bool) -> TestRow {
    TestRow {
        key: key.to_string(),
        enabled: Some(enabled),
    }
}

/// Rows without status, one per key
pub fn rules(keys: &[&str]) -> Vec<TestRow> {
    keys.iter().map(|k| TestRow::new(k)).collect()
}

/// Unselectable row with an empty key
pub fn placeholder() -> TestRow {
    TestRow::new("")
}

// ===== FlakySource =====

/// Source whose deletes fail for chosen keys and whose listing can be broken
pub struct FlakySource {
    rows: RwLock<Vec<TestRow>>,
    failing: HashSet<String>,
    listing_broken: AtomicBool,
}

impl FlakySource {
    pub fn new(rows: Vec<TestRow>, failing: &[&str]) -> Self {
        Self {
            rows: RwLock::new(rows),
            failing: failing.iter().map(ToString::to_string).collect(),
            listing_broken: AtomicBool::new(false),
        }
    }

    pub async fn remaining(&self) -> Vec<String> {
        self.rows.read().await.iter().map(|r| r.key.clone()).collect()
    }

    pub fn fail_listing(&self, broken: bool) {
        self.listing_broken.store(broken, Ordering::SeqCst);
    }
}

#[async_trait]
impl EntitySource<TestRow> for FlakySource {
    fn name(&self) -> &str {
        "flaky"
    }

    async fn list(&self, query: &ListQuery) -> CoreResult<PaginatedResponse<TestRow>> {
        if self.listing_broken.load(Ordering::SeqCst) {
            return Err(CoreError::SourceError {
                source_name: "flaky".to_string(),
                message: "connection reset".to_string(),
            });
        }
        let rows = self.rows.read().await;
        let total = u32::try_from(rows.len()).unwrap_or(u32::MAX);
        if query.fetch_all {
            return Ok(PaginatedResponse::new(rows.clone(), 1, total, total));
        }
        let items = compute_visible_slice(&rows, query.page, query.page_size).to_vec();
        Ok(PaginatedResponse::new(
            items,
            query.page,
            query.page_size,
            total,
        ))
    }

    async fn delete(&self, key: &str) -> CoreResult<()> {
        if self.failing.contains(key) {
            return Err(CoreError::SourceError {
                source_name: "flaky".to_string(),
                message: format!("{key} is protected"),
            });
        }
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.key != key);
        if rows.len() == before {
            return Err(CoreError::EntityNotFound(key.to_string()));
        }
        Ok(())
    }
}
