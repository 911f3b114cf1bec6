// In-Memory Job Record Store
// Stand-in for the platform's job-management service in tests and local
// development. Keyed by job name; writes overwrite.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use relaykit_core::{AppError, Result};

use crate::domain::{JobRecord, JobStatus};
use crate::port::JobRecordStore;

#[derive(Default)]
pub struct MemoryJobRecordStore {
    records: RwLock<HashMap<String, JobRecord>>,
}

impl MemoryJobRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, record: JobRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| AppError::Store(format!("record lock poisoned: {e}")))?;
        records.insert(record.job_name.clone(), record);
        Ok(())
    }

    pub fn remove(&self, job_name: &str) -> Result<Option<JobRecord>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| AppError::Store(format!("record lock poisoned: {e}")))?;
        Ok(records.remove(job_name))
    }
}

#[async_trait]
impl JobRecordStore for MemoryJobRecordStore {
    async fn find_by_name_and_status(
        &self,
        job_name: &str,
        status: JobStatus,
    ) -> Result<Option<JobRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| AppError::Store(format!("record lock poisoned: {e}")))?;
        Ok(records
            .get(job_name)
            .filter(|record| record.status == status)
            .cloned())
    }
}
