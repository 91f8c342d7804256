//! Job application records.
//!
//! Field names are camelCase on the wire (`firstName`, `lastName`) because
//! that is how the careers form submits them; metadata fields keep their
//! snake_case names.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use hotbeans_core::traits::Document;
use hotbeans_core::types::JobApplicationId;

use crate::validation::not_blank;

/// Review state of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Submitted, not yet looked at.
    #[default]
    Pending,
    /// Under review.
    Reviewing,
    /// Accepted.
    Approved,
    /// Declined.
    Rejected,
}

impl ApplicationStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewing => "reviewing",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A submitted job application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    /// Unique identifier.
    pub id: JobApplicationId,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub position: String,
    pub experience: String,
    pub availability: String,
    pub salary: String,
    /// Skills in the order the applicant listed them.
    pub skills: Vec<String>,
    pub portfolio: String,
    pub github: String,
    pub linkedin: String,
    pub motivation: String,
    pub projects: String,
    pub references: String,
    /// When the application was received.
    pub submitted_at: DateTime<Utc>,
    /// Review state; always `pending` on creation.
    pub status: ApplicationStatus,
}

impl JobApplication {
    /// Build a new pending application from a validated payload.
    pub fn new(input: NewJobApplication) -> Self {
        Self {
            id: JobApplicationId::new(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            position: input.position,
            experience: input.experience,
            availability: input.availability,
            salary: input.salary,
            skills: input.skills,
            portfolio: input.portfolio,
            github: input.github,
            linkedin: input.linkedin,
            motivation: input.motivation,
            projects: input.projects,
            references: input.references,
            submitted_at: Utc::now(),
            status: ApplicationStatus::Pending,
        }
    }
}

impl Document for JobApplication {
    const COLLECTION: &'static str = "job_applications";

    fn document_id(&self) -> String {
        self.id.to_string()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

/// Fields a client may submit. Anything else in the body (including `id`,
/// `submitted_at` and `status`) is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NewJobApplication {
    #[serde(rename = "firstName")]
    #[validate(custom(function = "not_blank", message = "firstName is required"))]
    pub first_name: String,
    #[serde(rename = "lastName")]
    #[validate(custom(function = "not_blank", message = "lastName is required"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub phone: String,
    pub address: String,
    pub position: String,
    pub experience: String,
    pub availability: String,
    pub salary: String,
    pub skills: Vec<String>,
    pub portfolio: String,
    pub github: String,
    pub linkedin: String,
    pub motivation: String,
    pub projects: String,
    pub references: String,
}
