//! Notification retention purge.

use chrono::{Duration, Utc};
use tracing::info;

use lifedrop_core::result::AppResult;
use lifedrop_database::repositories::notification::NotificationRepository;

/// Removes notifications older than the retention window, independent of
/// read state. Returns the number of purged rows.
pub async fn purge_notifications(
    repo: &NotificationRepository,
    retention_days: i64,
) -> AppResult<u64> {
    let cutoff = Utc::now() - Duration::days(retention_days);
    let purged = repo.purge_older_than(cutoff).await?;

    if purged > 0 {
        info!(purged, retention_days, "Purged notifications past retention");
    }
    Ok(purged)
}
