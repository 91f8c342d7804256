//! Document persistence abstractions.
//!
//! Records are stored as schemaless JSON documents grouped into named
//! collections. The [`DocumentStore`] trait works on raw JSON so it stays
//! object-safe; typed access goes through the [`Document`] trait and the
//! repository in `hotbeans-database`.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::result::AppResult;

/// A domain record that can be persisted in a collection.
pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the collection holding this record type.
    const COLLECTION: &'static str;

    /// The record's unique identifier in string form.
    fn document_id(&self) -> String;

    /// Server-assigned creation time used for newest-first ordering.
    fn created_at(&self) -> DateTime<Utc>;
}

/// A serialized document ready to be written.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    /// Identifier, unique within the collection.
    pub id: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Full JSON body of the record.
    pub body: serde_json::Value,
}

impl StoredDocument {
    /// Serialize a typed record.
    pub fn from_document<T: Document>(doc: &T) -> AppResult<Self> {
        Ok(Self {
            id: doc.document_id(),
            created_at: doc.created_at(),
            body: serde_json::to_value(doc)?,
        })
    }
}

/// Result ordering for [`DocumentStore::find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// The order in which documents were inserted.
    #[default]
    Insertion,
    /// Most recently created first; ties broken by reverse insertion order.
    NewestFirst,
}

/// Parameters for listing a collection.
#[derive(Debug, Clone, Copy)]
pub struct FindQuery {
    /// Result ordering.
    pub order: SortOrder,
    /// Maximum number of documents returned.
    pub limit: usize,
}

impl FindQuery {
    /// The first `limit` documents in insertion order.
    pub fn insertion(limit: usize) -> Self {
        Self {
            order: SortOrder::Insertion,
            limit,
        }
    }

    /// The `limit` most recently created documents.
    pub fn newest_first(limit: usize) -> Self {
        Self {
            order: SortOrder::NewestFirst,
            limit,
        }
    }
}

/// Backend holding document collections.
#[async_trait]
pub trait DocumentStore: Send + Sync + fmt::Debug + 'static {
    /// Return the backend name (e.g., "postgres", "memory").
    fn backend(&self) -> &str;

    /// Check whether the backend is reachable.
    async fn health_check(&self) -> AppResult<()>;

    /// Insert a new document. Fails if the id already exists in the collection.
    async fn insert(&self, collection: &str, doc: StoredDocument) -> AppResult<()>;

    /// Fetch a single document body by id.
    async fn find_by_id(&self, collection: &str, id: &str)
    -> AppResult<Option<serde_json::Value>>;

    /// List document bodies from a collection.
    async fn find(&self, collection: &str, query: FindQuery) -> AppResult<Vec<serde_json::Value>>;

    /// Count the documents in a collection.
    async fn count(&self, collection: &str) -> AppResult<u64>;
}
