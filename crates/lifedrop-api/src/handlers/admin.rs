//! Admin dashboard handlers.

use axum::Json;
use axum::extract::State;

use lifedrop_service::stats::AdminStats;

use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// GET /admin-stats
///
/// Aggregate counts plus summed funding, volunteer or admin only.
pub async fn admin_stats(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<AdminStats>, ApiError> {
    let stats = state.stats_service.admin_stats(&session.email).await?;
    Ok(Json(stats))
}
