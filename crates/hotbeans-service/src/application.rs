//! Job application service.

use tracing::info;
use validator::Validate;

use hotbeans_core::error::AppError;
use hotbeans_core::result::AppResult;
use hotbeans_core::traits::document::FindQuery;
use hotbeans_core::types::JobApplicationId;
use hotbeans_database::DocumentRepository;
use hotbeans_entity::application::{JobApplication, NewJobApplication};

/// Message returned when an application id is unknown.
pub const APPLICATION_NOT_FOUND: &str = "Application not found";

/// Accepts and retrieves job applications.
#[derive(Debug, Clone)]
pub struct ApplicationService {
    repo: DocumentRepository<JobApplication>,
    list_limit: usize,
}

impl ApplicationService {
    /// Creates a new application service.
    pub fn new(repo: DocumentRepository<JobApplication>, list_limit: usize) -> Self {
        Self { repo, list_limit }
    }

    /// Validate and store a new application with status `pending`.
    pub async fn submit(&self, input: NewJobApplication) -> AppResult<JobApplication> {
        input.validate()?;

        let application = JobApplication::new(input);
        self.repo.create(&application).await?;

        info!(
            id = %application.id,
            position = %application.position,
            skills = application.skills.len(),
            "Job application submitted"
        );
        Ok(application)
    }

    /// List applications, newest first.
    pub async fn list(&self) -> AppResult<Vec<JobApplication>> {
        self.repo.list(FindQuery::newest_first(self.list_limit)).await
    }

    /// Fetch one application. Ids that are not UUIDs are reported as not found.
    pub async fn get(&self, id: &str) -> AppResult<JobApplication> {
        let id: JobApplicationId = id
            .parse()
            .map_err(|_| AppError::not_found(APPLICATION_NOT_FOUND))?;

        self.repo
            .find_by_id(&id.to_string())
            .await?
            .ok_or_else(|| AppError::not_found(APPLICATION_NOT_FOUND))
    }
}
