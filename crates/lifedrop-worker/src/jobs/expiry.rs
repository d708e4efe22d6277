//! Background request-expiry sweep.

use chrono::Utc;
use tracing::info;

use lifedrop_core::result::AppResult;
use lifedrop_database::repositories::request::RequestRepository;

/// Transitions every pending request dated before today to expired — the
/// same idempotent sweep the read paths perform, run proactively.
pub async fn sweep_requests(repo: &RequestRepository) -> AppResult<u64> {
    let swept = repo.sweep_expired(Utc::now().date_naive()).await?;

    if swept > 0 {
        info!(swept, "Background sweep expired pending requests");
    }
    Ok(swept)
}
