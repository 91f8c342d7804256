//! Status check service.

use tracing::info;

use hotbeans_core::result::AppResult;
use hotbeans_core::traits::document::FindQuery;
use hotbeans_database::DocumentRepository;
use hotbeans_entity::status::{CreateStatusCheck, StatusCheck};

/// Records and lists status pings.
#[derive(Debug, Clone)]
pub struct StatusService {
    repo: DocumentRepository<StatusCheck>,
    list_limit: usize,
}

impl StatusService {
    /// Creates a new status service returning at most `list_limit` records.
    pub fn new(repo: DocumentRepository<StatusCheck>, list_limit: usize) -> Self {
        Self { repo, list_limit }
    }

    /// Persist a new status check.
    pub async fn create(&self, input: CreateStatusCheck) -> AppResult<StatusCheck> {
        let check = StatusCheck::new(input);
        self.repo.create(&check).await?;

        info!(id = %check.id, client_name = %check.client_name, "Status check recorded");
        Ok(check)
    }

    /// List status checks in insertion order.
    pub async fn list(&self) -> AppResult<Vec<StatusCheck>> {
        self.repo.list(FindQuery::insertion(self.list_limit)).await
    }
}
