// Status-Gated Job Executor
//
// Wraps the business callback of a scheduled job behind a record lookup:
// the job only runs while the job-management service still tracks it as
// IN_PROGRESS. Failures are never masked from the invoking scheduler, so
// its own retry/alerting policy stays in charge.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::error;

use relaykit_core::Result;

use crate::domain::JobStatus;
use crate::port::{JobHandler, JobRecordStore};

/// Scheduled-job wrapper that checks the tracked record before running
/// the business callback
pub struct StatusGatedJob<T> {
    store: Arc<dyn JobRecordStore>,
    handler: Arc<dyn JobHandler<T>>,
}

impl<T> StatusGatedJob<T>
where
    T: DeserializeOwned + Send + 'static,
{
    pub fn new(store: Arc<dyn JobRecordStore>, handler: Arc<dyn JobHandler<T>>) -> Self {
        Self { store, handler }
    }

    /// Execute one firing of the job.
    ///
    /// `job_parameter` is the opaque JSON payload declared by the caller.
    /// If no IN_PROGRESS record exists for `job_name`, the firing is a
    /// logged no-op: the job was cancelled or reassigned between
    /// scheduling and firing, which is a race outcome, not an error.
    pub async fn execute(&self, job_name: &str, job_parameter: &str) -> Result<()> {
        let record = match self
            .store
            .find_by_name_and_status(job_name, JobStatus::InProgress)
            .await
        {
            Ok(record) => record,
            Err(e) => {
                error!(job_name = %job_name, error = %e, "scheduled job execution failed");
                return Err(e);
            }
        };

        if record.is_none() {
            error!(
                job_name = %job_name,
                "job status changed since scheduling, skipping this firing"
            );
            return Ok(());
        }

        let data: T = match serde_json::from_str(job_parameter) {
            Ok(data) => data,
            Err(e) => {
                error!(job_name = %job_name, error = %e, "scheduled job execution failed");
                return Err(e.into());
            }
        };

        if let Err(e) = self.handler.process(data).await {
            error!(job_name = %job_name, error = %e, "scheduled job execution failed");
            return Err(e);
        }

        Ok(())
    }
}
