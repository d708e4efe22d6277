//! Notification repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use lifedrop_core::error::{AppError, ErrorKind};
use lifedrop_core::result::AppResult;
use lifedrop_entity::notification::Notification;

/// Repository for notification inserts, reads, and the retention purge.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a single notification.
    pub async fn insert_one(&self, notification: &Notification) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO notifications (id, recipient_email, message, link, is_read, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(notification.id)
        .bind(&notification.recipient_email)
        .bind(&notification.message)
        .bind(&notification.link)
        .bind(notification.is_read)
        .bind(notification.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert notification", e)
        })?;
        Ok(())
    }

    /// Bulk insert for fan-out. One round trip via UNNEST.
    pub async fn insert_many(&self, notifications: &[Notification]) -> AppResult<u64> {
        if notifications.is_empty() {
            return Ok(0);
        }

        let ids: Vec<Uuid> = notifications.iter().map(|n| n.id).collect();
        let recipients: Vec<String> = notifications
            .iter()
            .map(|n| n.recipient_email.clone())
            .collect();
        let messages: Vec<String> = notifications.iter().map(|n| n.message.clone()).collect();
        let links: Vec<Option<String>> = notifications.iter().map(|n| n.link.clone()).collect();
        let created: Vec<DateTime<Utc>> = notifications.iter().map(|n| n.created_at).collect();

        let result = sqlx::query(
            "INSERT INTO notifications (id, recipient_email, message, link, is_read, created_at) \
             SELECT id, recipient_email, message, link, FALSE, created_at \
             FROM UNNEST($1::uuid[], $2::text[], $3::text[], $4::text[], $5::timestamptz[]) \
               AS t(id, recipient_email, message, link, created_at)",
        )
        .bind(&ids)
        .bind(&recipients)
        .bind(&messages)
        .bind(&links)
        .bind(&created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to bulk insert notifications", e)
        })?;
        Ok(result.rows_affected())
    }

    /// List a recipient's notifications, newest first.
    pub async fn find_by_recipient(&self, email: &str) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications \
             WHERE LOWER(recipient_email) = LOWER($1) ORDER BY created_at DESC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })
    }

    /// Mark one notification read. Idempotent.
    pub async fn mark_read(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(result.rows_affected())
    }

    /// Mark all of a recipient's unread notifications read.
    ///
    /// Returns the number of rows actually transitioned.
    pub async fn mark_all_read(&self, email: &str) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE \
             WHERE LOWER(recipient_email) = LOWER($1) AND is_read = FALSE",
        )
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all read", e))?;
        Ok(result.rows_affected())
    }

    /// Purge notifications created before the cutoff, read or not.
    pub async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM notifications WHERE created_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to purge notifications", e)
            })?;
        Ok(result.rows_affected())
    }
}
