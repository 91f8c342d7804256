//! In-process document store.
//!
//! Keeps every collection in a `Vec` in insertion order. Used by the test
//! suites so they run without PostgreSQL, and can be switched into a
//! failing state to exercise store-error paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use hotbeans_core::error::AppError;
use hotbeans_core::result::AppResult;
use hotbeans_core::traits::document::{DocumentStore, FindQuery, SortOrder, StoredDocument};

/// Document store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
    unavailable: AtomicBool,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail (or succeed again).
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::database("Memory document store is unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn backend(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<()> {
        self.ensure_available()
    }

    async fn insert(&self, collection: &str, doc: StoredDocument) -> AppResult<()> {
        self.ensure_available()?;

        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.iter().any(|existing| existing.id == doc.id) {
            return Err(AppError::database(format!(
                "Duplicate id {} in {collection}",
                doc.id
            )));
        }
        docs.push(doc);
        Ok(())
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: &str,
    ) -> AppResult<Option<serde_json::Value>> {
        self.ensure_available()?;

        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .map(|doc| doc.body.clone()))
    }

    async fn find(&self, collection: &str, query: FindQuery) -> AppResult<Vec<serde_json::Value>> {
        self.ensure_available()?;

        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let bodies = match query.order {
            SortOrder::Insertion => docs
                .iter()
                .take(query.limit)
                .map(|doc| doc.body.clone())
                .collect(),
            SortOrder::NewestFirst => {
                // Stable sort over the reversed log keeps later inserts first on ties.
                let mut ordered: Vec<&StoredDocument> = docs.iter().rev().collect();
                ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                ordered
                    .into_iter()
                    .take(query.limit)
                    .map(|doc| doc.body.clone())
                    .collect()
            }
        };

        Ok(bodies)
    }

    async fn count(&self, collection: &str) -> AppResult<u64> {
        self.ensure_available()?;

        let collections = self.collections.read().await;
        Ok(collections.get(collection).map_or(0, |docs| docs.len() as u64))
    }
}
