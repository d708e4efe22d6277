//! Aggregate platform statistics for the admin dashboard.

use std::sync::Arc;

use serde::Serialize;

use lifedrop_auth::guard::RoleGuard;
use lifedrop_core::error::AppError;
use lifedrop_database::repositories::funding::FundingRepository;
use lifedrop_database::repositories::request::RequestRepository;
use lifedrop_database::repositories::user::UserRepository;
use lifedrop_entity::request::RequestStatus;

/// Aggregate counts served to volunteers and admins.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    /// Total registered users.
    pub total_users: i64,
    /// Total donation requests, all states.
    pub total_requests: i64,
    /// Donation requests still pending.
    pub pending_requests: i64,
    /// Sum of all funding contributions, in the smallest currency unit.
    pub total_funding_cents: i64,
}

/// Computes aggregate statistics.
#[derive(Debug, Clone)]
pub struct StatsService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Request repository.
    request_repo: Arc<RequestRepository>,
    /// Funding repository.
    funding_repo: Arc<FundingRepository>,
    /// Role guard.
    guard: Arc<RoleGuard>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        request_repo: Arc<RequestRepository>,
        funding_repo: Arc<FundingRepository>,
        guard: Arc<RoleGuard>,
    ) -> Self {
        Self {
            user_repo,
            request_repo,
            funding_repo,
            guard,
        }
    }

    /// Aggregate counts plus summed funding, volunteer or admin only.
    pub async fn admin_stats(&self, caller_email: &str) -> Result<AdminStats, AppError> {
        self.guard.require_volunteer_or_admin(caller_email).await?;

        let total_users = self.user_repo.count().await?;
        let total_requests = self.request_repo.count().await?;
        let pending_requests = self
            .request_repo
            .count_by_status(RequestStatus::Pending)
            .await?;
        let total_funding_cents = self.funding_repo.sum_amount().await?;

        Ok(AdminStats {
            total_users,
            total_requests,
            pending_requests,
            total_funding_cents,
        })
    }
}
