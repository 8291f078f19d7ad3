//! Entity source abstract Trait

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::pagination::compute_visible_slice;
use crate::traits::Row;
use crate::types::{ListQuery, PaginatedResponse};

/// Entity Source Trait
///
/// Backend for one entity type (hosts, HBAC rules, ...). The RPC transport
/// behind it is not this crate's concern; a default in-memory implementation
/// is provided as `InMemoryEntitySource`.
#[async_trait]
pub trait EntitySource<T>: Send + Sync {
    /// Source name used in errors and logs
    fn name(&self) -> &str;

    /// List entities
    ///
    /// With `query.fetch_all` the whole filtered list is returned as a single
    /// page; otherwise only the requested page.
    async fn list(&self, query: &ListQuery) -> CoreResult<PaginatedResponse<T>>;

    /// Delete one entity by key
    async fn delete(&self, key: &str) -> CoreResult<()>;

    /// Enable or disable one entity
    async fn set_enabled(&self, _key: &str, _enabled: bool) -> CoreResult<()> {
        Err(CoreError::Unsupported(format!(
            "{} has no enabled status",
            self.name()
        )))
    }
}

/// In-memory entity source
///
/// Holds the full list and serves pages out of it, so it behaves like a
/// server-paged backend for tables that fetch page by page.
#[derive(Clone)]
pub struct InMemoryEntitySource<T> {
    name: String,
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> InMemoryEntitySource<T> {
    /// Create a source seeded with `rows`
    #[must_use]
    pub fn new(name: impl Into<String>, rows: Vec<T>) -> Self {
        Self {
            name: name.into(),
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    /// Number of stored entities
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl<T: Row + Clone> InMemoryEntitySource<T> {
    /// Append an entity, rejecting duplicate non-empty keys
    pub async fn insert(&self, row: T) -> CoreResult<()> {
        let mut rows = self.rows.write().await;
        if !row.key().is_empty() && rows.iter().any(|r| r.key() == row.key()) {
            return Err(CoreError::ValidationError(format!(
                "duplicate key in {}: {}",
                self.name,
                row.key()
            )));
        }
        rows.push(row);
        Ok(())
    }

    /// Copy of one entity
    pub async fn get(&self, key: &str) -> Option<T> {
        self.rows
            .read()
            .await
            .iter()
            .find(|r| r.key() == key)
            .cloned()
    }
}

#[async_trait]
impl<T> EntitySource<T> for InMemoryEntitySource<T>
where
    T: Row + Clone + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn list(&self, query: &ListQuery) -> CoreResult<PaginatedResponse<T>> {
        let rows = self.rows.read().await;
        let keyword = query.keyword.as_deref();
        let filtered: Vec<T> = rows
            .iter()
            .filter(|r| keyword.is_none_or(|k| r.matches(k)))
            .filter(|r| query.enabled.is_none_or(|e| r.status() == Some(e)))
            .cloned()
            .collect();

        let total_count = u32::try_from(filtered.len()).unwrap_or(u32::MAX);

        if query.fetch_all {
            return Ok(PaginatedResponse::new(filtered, 1, total_count.max(1), total_count));
        }

        let items = compute_visible_slice(&filtered, query.page, query.page_size).to_vec();
        Ok(PaginatedResponse::new(
            items,
            query.page,
            query.page_size,
            total_count,
        ))
    }

    async fn delete(&self, key: &str) -> CoreResult<()> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| key.is_empty() || r.key() != key);
        if rows.len() == before {
            return Err(CoreError::EntityNotFound(key.to_string()));
        }
        Ok(())
    }

    async fn set_enabled(&self, key: &str, enabled: bool) -> CoreResult<()> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|r| !key.is_empty() && r.key() == key)
            .ok_or_else(|| CoreError::EntityNotFound(key.to_string()))?;
        if row.set_status(enabled) {
            Ok(())
        } else {
            Err(CoreError::Unsupported(format!(
                "{} has no enabled status",
                self.name
            )))
        }
    }
}
