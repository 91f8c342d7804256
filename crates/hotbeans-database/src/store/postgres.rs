//! PostgreSQL JSONB document store.

use async_trait::async_trait;
use tracing::debug;

use hotbeans_core::error::{AppError, ErrorKind};
use hotbeans_core::result::AppResult;
use hotbeans_core::traits::document::{DocumentStore, FindQuery, SortOrder, StoredDocument};

use crate::connection::DatabasePool;

/// Stores every collection in the single `documents` table.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    db: DatabasePool,
}

impl PgDocumentStore {
    /// Create a store over an existing pool.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &str {
        "postgres"
    }

    async fn health_check(&self) -> AppResult<()> {
        match self.db.health_check().await? {
            true => Ok(()),
            false => Err(AppError::service_unavailable(
                "Database returned an unexpected health check result",
            )),
        }
    }

    async fn insert(&self, collection: &str, doc: StoredDocument) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO documents (collection, id, body, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(collection)
        .bind(&doc.id)
        .bind(&doc.body)
        .bind(doc.created_at)
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to insert into {collection}"),
                e,
            )
        })?;

        debug!(collection, id = %doc.id, "Document inserted");
        Ok(())
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: &str,
    ) -> AppResult<Option<serde_json::Value>> {
        sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to find document in {collection}"),
                e,
            )
        })
    }

    async fn find(&self, collection: &str, query: FindQuery) -> AppResult<Vec<serde_json::Value>> {
        let sql = match query.order {
            SortOrder::Insertion => {
                "SELECT body FROM documents WHERE collection = $1 ORDER BY seq ASC LIMIT $2"
            }
            SortOrder::NewestFirst => {
                "SELECT body FROM documents WHERE collection = $1 \
                 ORDER BY created_at DESC, seq DESC LIMIT $2"
            }
        };

        sqlx::query_scalar::<_, serde_json::Value>(sql)
            .bind(collection)
            .bind(i64::try_from(query.limit).unwrap_or(i64::MAX))
            .fetch_all(self.db.pool())
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to list {collection}"),
                    e,
                )
            })
    }

    async fn count(&self, collection: &str) -> AppResult<u64> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM documents WHERE collection = $1",
        )
        .bind(collection)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to count {collection}"),
                e,
            )
        })?;

        Ok(total.max(0) as u64)
    }
}
