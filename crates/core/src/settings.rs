// Environment-backed Settings
// Layered: optional file source first, then RELAYKIT__* environment
// variables override (e.g. RELAYKIT__SCHEDULER__ASSIGN_SERVER).

use serde::Deserialize;

use crate::error::Result;

/// Scheduled-execution settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Server designated to run scheduled executions
    pub assign_server: String,
    /// Server IP that re-runs jobs lost across scheduler restarts
    pub fail_retry_server_ip: String,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            assign_server: String::new(),
            fail_retry_server_ip: String::new(),
        }
    }
}

/// Coordination-service (registry center) settings for the external
/// distributed scheduler
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryCenterSettings {
    /// host:port list, comma separated
    pub server_list: String,
    pub namespace: String,
    pub max_retries: u32,
    pub session_timeout_ms: u64,
    pub max_sleep_time_ms: u64,
}

impl Default for RegistryCenterSettings {
    fn default() -> Self {
        Self {
            server_list: String::new(),
            namespace: String::new(),
            max_retries: 3,
            session_timeout_ms: 60_000,
            max_sleep_time_ms: 3_000,
        }
    }
}

/// Root settings object
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scheduler: SchedulerSettings,
    pub registry_center: RegistryCenterSettings,
}

impl Settings {
    /// Load from environment variables only
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load from an optional file, then layer environment variables on top
    pub fn load_from(path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }
        let cfg = builder
            .add_source(
                config::Environment::with_prefix("RELAYKIT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let settings: Settings = cfg.try_deserialize()?;
        tracing::debug!(file = ?path, "settings loaded");
        Ok(settings)
    }
}
