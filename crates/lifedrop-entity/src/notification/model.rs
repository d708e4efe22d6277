//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A notification delivered to a user.
///
/// `is_read` starts false and is monotonic: once read, a notification never
/// becomes unread again. Rows are purged by the retention job 30 days after
/// creation regardless of read state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// Email of the recipient.
    pub recipient_email: String,
    /// Notification body text.
    pub message: String,
    /// Optional deep-link into the client application.
    pub link: Option<String>,
    /// Whether the recipient has read this notification.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Build a fresh unread notification for a recipient.
    pub fn unread(recipient_email: impl Into<String>, message: impl Into<String>, link: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipient_email: recipient_email.into(),
            message: message.into(),
            link,
            is_read: false,
            created_at: Utc::now(),
        }
    }
}
