//! Server-side caps on list endpoints.

use serde::{Deserialize, Serialize};

/// Maximum number of records returned by each list endpoint.
///
/// There is no pagination cursor; callers cannot see past these caps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListLimits {
    /// Cap for `GET /api/status`.
    #[serde(default = "default_status_checks")]
    pub status_checks: usize,
    /// Cap for `GET /api/uploads`.
    #[serde(default = "default_uploads")]
    pub uploads: usize,
    /// Cap for `GET /api/job-applications`.
    #[serde(default = "default_job_applications")]
    pub job_applications: usize,
}

impl Default for ListLimits {
    fn default() -> Self {
        Self {
            status_checks: default_status_checks(),
            uploads: default_uploads(),
            job_applications: default_job_applications(),
        }
    }
}

fn default_status_checks() -> usize {
    1000
}

fn default_uploads() -> usize {
    100
}

fn default_job_applications() -> usize {
    100
}
