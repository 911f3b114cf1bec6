// Job Record Domain Model

use serde::{Deserialize, Serialize};

/// Tracked status of a scheduled job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    InProgress,
    Done,
    Failed,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "PENDING"),
            JobStatus::InProgress => write!(f, "IN_PROGRESS"),
            JobStatus::Done => write!(f, "DONE"),
            JobStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Job tracking record, owned by the external job-management service.
/// Read-only from the gate's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_name: String,
    pub status: JobStatus,
    /// Name of the job this record was derived from (rescheduled jobs
    /// keep a pointer to their origin)
    pub original_job_name: String,
    /// Server the job is assigned to
    pub server: String,
}

impl JobRecord {
    pub fn new(
        job_name: impl Into<String>,
        status: JobStatus,
        original_job_name: impl Into<String>,
        server: impl Into<String>,
    ) -> Self {
        Self {
            job_name: job_name.into(),
            status,
            original_job_name: original_job_name.into(),
            server: server.into(),
        }
    }
}
