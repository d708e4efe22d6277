//! Cron scheduler for periodic maintenance tasks.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing::{error, info};

use lifedrop_core::config::worker::WorkerConfig;
use lifedrop_core::error::AppError;
use lifedrop_database::repositories::notification::NotificationRepository;
use lifedrop_database::repositories::request::RequestRepository;

use crate::jobs;

/// Cron-based scheduler for periodic background tasks.
pub struct WorkerScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
}

impl std::fmt::Debug for WorkerScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerScheduler").finish()
    }
}

impl WorkerScheduler {
    /// Creates a scheduler and registers the configured tasks.
    pub async fn new(
        config: WorkerConfig,
        notification_repo: Arc<NotificationRepository>,
        request_repo: Arc<RequestRepository>,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        register_retention_purge(&scheduler, &config, notification_repo).await?;

        if config.expiry_sweep_enabled {
            register_expiry_sweep(&scheduler, &config, request_repo).await?;
        }

        Ok(Self { scheduler })
    }

    /// Starts the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        info!("Worker scheduler started");
        Ok(())
    }

    /// Shuts the scheduler down.
    pub async fn shutdown(mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        info!("Worker scheduler shut down");
        Ok(())
    }
}

/// Notification retention purge on the configured schedule.
async fn register_retention_purge(
    scheduler: &JobScheduler,
    config: &WorkerConfig,
    repo: Arc<NotificationRepository>,
) -> Result<(), AppError> {
    let retention_days = config.notification_retention_days;

    let job = CronJob::new_async(config.retention_schedule.as_str(), move |_uuid, _lock| {
        let repo = Arc::clone(&repo);
        Box::pin(async move {
            if let Err(e) = jobs::retention::purge_notifications(&repo, retention_days).await {
                error!(error = %e, "Notification retention purge failed");
            }
        })
    })
    .map_err(|e| AppError::internal(format!("Failed to create retention schedule: {e}")))?;

    scheduler
        .add(job)
        .await
        .map_err(|e| AppError::internal(format!("Failed to add retention schedule: {e}")))?;

    info!(
        schedule = %config.retention_schedule,
        retention_days,
        "Registered: notification retention purge"
    );
    Ok(())
}

/// Optional proactive expiry sweep on the configured schedule.
async fn register_expiry_sweep(
    scheduler: &JobScheduler,
    config: &WorkerConfig,
    repo: Arc<RequestRepository>,
) -> Result<(), AppError> {
    let job = CronJob::new_async(config.expiry_sweep_schedule.as_str(), move |_uuid, _lock| {
        let repo = Arc::clone(&repo);
        Box::pin(async move {
            if let Err(e) = jobs::expiry::sweep_requests(&repo).await {
                error!(error = %e, "Background expiry sweep failed");
            }
        })
    })
    .map_err(|e| AppError::internal(format!("Failed to create sweep schedule: {e}")))?;

    scheduler
        .add(job)
        .await
        .map_err(|e| AppError::internal(format!("Failed to add sweep schedule: {e}")))?;

    info!(schedule = %config.expiry_sweep_schedule, "Registered: request expiry sweep");
    Ok(())
}
