//! # hotbeans-database
//!
//! Document store backends for Hot Beans Web: the PostgreSQL JSONB store
//! used in production, an in-memory store for tests, and the typed
//! [`DocumentRepository`] that both sit behind.

pub mod connection;
pub mod migration;
pub mod repository;
pub mod store;

pub use connection::DatabasePool;
pub use repository::DocumentRepository;
pub use store::{MemoryDocumentStore, PgDocumentStore};
