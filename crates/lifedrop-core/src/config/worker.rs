//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Background job worker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the worker is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Notification retention window in days.
    #[serde(default = "default_retention_days")]
    pub notification_retention_days: i64,
    /// Cron schedule for the notification retention purge.
    #[serde(default = "default_retention_schedule")]
    pub retention_schedule: String,
    /// Whether the proactive request-expiry sweep runs in the background.
    ///
    /// Expiry is sweep-on-read by default; this adds a periodic sweep on top
    /// without replacing the read-triggered one.
    #[serde(default)]
    pub expiry_sweep_enabled: bool,
    /// Cron schedule for the background expiry sweep.
    #[serde(default = "default_sweep_schedule")]
    pub expiry_sweep_schedule: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            notification_retention_days: default_retention_days(),
            retention_schedule: default_retention_schedule(),
            expiry_sweep_enabled: false,
            expiry_sweep_schedule: default_sweep_schedule(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_retention_days() -> i64 {
    30
}

fn default_retention_schedule() -> String {
    // Every day at 2 AM
    "0 0 2 * * *".to_string()
}

fn default_sweep_schedule() -> String {
    // Every hour
    "0 0 * * * *".to_string()
}
