// Platform Configuration Keys
// Values are environment-supplied; this enum only fixes the key strings so
// that every service on the platform queries the same names.

/// Well-known configuration keys and job-record field names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// Server designated to run scheduled executions
    ScheduledAssignServer,
    /// Coordination-service address list (host:port, comma separated)
    RegistryCenterServerList,
    /// Coordination-service namespace
    RegistryCenterNamespace,
    /// Coordination-service max retry count
    RegistryCenterMaxRetries,
    /// Coordination-service session timeout (ms)
    RegistryCenterSessionTimeoutMs,
    /// Coordination-service max sleep time between retries (ms)
    RegistryCenterMaxSleepTimeMs,
    /// Server IP that re-runs jobs lost across scheduler restarts
    FailRetryServerIp,
    /// Job-record field: tracked status
    JobFieldStatus,
    /// Job-record field: name of the originating job
    JobFieldOriginalName,
    /// Job-record field: owning server
    JobFieldServer,
}

impl ConfigKey {
    /// The key string as it appears in configuration / queries
    pub fn key(&self) -> &'static str {
        match self {
            ConfigKey::ScheduledAssignServer => "scheduler.assign-server",
            ConfigKey::RegistryCenterServerList => "registry-center.server-list",
            ConfigKey::RegistryCenterNamespace => "registry-center.namespace",
            ConfigKey::RegistryCenterMaxRetries => "registry-center.max-retries",
            ConfigKey::RegistryCenterSessionTimeoutMs => "registry-center.session-timeout-ms",
            ConfigKey::RegistryCenterMaxSleepTimeMs => "registry-center.max-sleep-time-ms",
            ConfigKey::FailRetryServerIp => "scheduler.fail-retry-server-ip",
            ConfigKey::JobFieldStatus => "status",
            ConfigKey::JobFieldOriginalName => "original_job_name",
            ConfigKey::JobFieldServer => "server",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ConfigKey::ScheduledAssignServer => "server designated for scheduled execution",
            ConfigKey::RegistryCenterServerList => "coordination-service address list",
            ConfigKey::RegistryCenterNamespace => "coordination-service namespace",
            ConfigKey::RegistryCenterMaxRetries => "coordination-service max retries",
            ConfigKey::RegistryCenterSessionTimeoutMs => "coordination-service session timeout (ms)",
            ConfigKey::RegistryCenterMaxSleepTimeMs => "coordination-service max sleep time (ms)",
            ConfigKey::FailRetryServerIp => "fail-retry server IP for lost jobs",
            ConfigKey::JobFieldStatus => "job-record status field",
            ConfigKey::JobFieldOriginalName => "job-record original name field",
            ConfigKey::JobFieldServer => "job-record server field",
        }
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
