// Job Gate Ports (Interfaces)

use crate::domain::{JobRecord, JobStatus};
use async_trait::async_trait;
use relaykit_core::Result;

/// Lookup interface against the external job-management service
#[async_trait]
pub trait JobRecordStore: Send + Sync {
    /// Find the record for `job_name` filtered to `status`
    async fn find_by_name_and_status(
        &self,
        job_name: &str,
        status: JobStatus,
    ) -> Result<Option<JobRecord>>;
}

/// Business callback invoked with the deserialized job payload
#[async_trait]
pub trait JobHandler<T>: Send + Sync {
    async fn process(&self, data: T) -> Result<()>;
}
