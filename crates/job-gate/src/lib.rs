// Relaykit Job Gate - Status-Gated Scheduled Job Execution
//
// The external distributed scheduler fires jobs; between scheduling and
// firing, a job can be cancelled or reassigned by the job-management
// service. The gate checks the tracked record before running any business
// logic, so a stale firing is a logged no-op instead of a duplicate run.

pub mod domain;
pub mod gate;
pub mod memory_store;
pub mod port;

pub use domain::{JobRecord, JobStatus};
pub use gate::StatusGatedJob;
pub use memory_store::MemoryJobRecordStore;
pub use port::{JobHandler, JobRecordStore};
