//! Notification persistence, read tracking, and best-effort fan-out.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use lifedrop_auth::guard::require_self;
use lifedrop_core::error::AppError;
use lifedrop_database::repositories::notification::NotificationRepository;
use lifedrop_entity::notification::Notification;

/// Persists notifications for matched recipients and serves read paths.
///
/// Delivery is at-least-once with no retry or dead-letter: a failed insert
/// is logged and the notification is simply lost. The error boundary lives
/// inside [`fan_out`](Self::fan_out) and [`notify_one`](Self::notify_one),
/// so no failure can reach the operation that triggered the fan-out.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Persists one notification per recipient in a single bulk insert.
    ///
    /// Best-effort: errors are swallowed after logging. Returns the number
    /// of notifications written (0 on failure or an empty recipient set).
    pub async fn fan_out(&self, recipients: &[String], message: &str, link: Option<&str>) -> u64 {
        if recipients.is_empty() {
            return 0;
        }

        let notifications: Vec<Notification> = recipients
            .iter()
            .map(|email| Notification::unread(email, message, link.map(String::from)))
            .collect();

        match self.notif_repo.insert_many(&notifications).await {
            Ok(written) => {
                debug!(recipients = recipients.len(), written, "Fan-out complete");
                written
            }
            Err(e) => {
                warn!(recipients = recipients.len(), error = %e, "Fan-out failed; notifications dropped");
                0
            }
        }
    }

    /// Single-recipient path with the same best-effort guarantees.
    pub async fn notify_one(&self, email: &str, message: &str, link: Option<&str>) {
        let notification = Notification::unread(email, message, link.map(String::from));
        if let Err(e) = self.notif_repo.insert_one(&notification).await {
            warn!(recipient = %email, error = %e, "Targeted notification failed; dropped");
        }
    }

    /// Direct creation on behalf of a client. Unlike the fan-out paths this
    /// one propagates failure — the client asked for exactly this write.
    pub async fn create(&self, notification: Notification) -> Result<Notification, AppError> {
        self.notif_repo.insert_one(&notification).await?;
        Ok(notification)
    }

    /// Lists a user's notifications, newest first. Owner-only.
    pub async fn list_for_user(
        &self,
        caller_email: &str,
        target_email: &str,
    ) -> Result<Vec<Notification>, AppError> {
        require_self(caller_email, target_email)?;
        self.notif_repo.find_by_recipient(target_email).await
    }

    /// Marks one notification read. Idempotent — re-marking is a no-op.
    pub async fn mark_read(&self, id: Uuid) -> Result<u64, AppError> {
        self.notif_repo.mark_read(id).await
    }

    /// Marks all of a user's unread notifications read. Owner-only.
    ///
    /// Returns the number of rows transitioned; already-read rows and other
    /// users' rows are untouched.
    pub async fn mark_all_read(
        &self,
        caller_email: &str,
        target_email: &str,
    ) -> Result<u64, AppError> {
        require_self(caller_email, target_email)?;
        self.notif_repo.mark_all_read(target_email).await
    }
}
