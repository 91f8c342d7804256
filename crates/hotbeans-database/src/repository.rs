//! Typed repository over a [`DocumentStore`].

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use hotbeans_core::result::AppResult;
use hotbeans_core::traits::document::{Document, DocumentStore, FindQuery, StoredDocument};

/// Create/list/get access to the collection of `T`.
pub struct DocumentRepository<T> {
    store: Arc<dyn DocumentStore>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Document> DocumentRepository<T> {
    /// Create a repository over the given store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Persist a new record.
    pub async fn create(&self, record: &T) -> AppResult<()> {
        let doc = StoredDocument::from_document(record)?;
        self.store.insert(T::COLLECTION, doc).await
    }

    /// Find a record by id.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        match self.store.find_by_id(T::COLLECTION, id).await? {
            Some(body) => Ok(Some(serde_json::from_value(body)?)),
            None => Ok(None),
        }
    }

    /// List records in the requested order.
    pub async fn list(&self, query: FindQuery) -> AppResult<Vec<T>> {
        self.store
            .find(T::COLLECTION, query)
            .await?
            .into_iter()
            .map(|body| serde_json::from_value(body).map_err(Into::into))
            .collect()
    }

    /// Count the records in the collection.
    pub async fn count(&self) -> AppResult<u64> {
        self.store.count(T::COLLECTION).await
    }
}

impl<T> Clone for DocumentRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for DocumentRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentRepository")
            .field("collection", &std::any::type_name::<T>())
            .field("backend", &self.store.backend())
            .finish()
    }
}
