//! Funding contribution recording and listing.

use std::sync::Arc;

use tracing::warn;

use lifedrop_auth::guard::RoleGuard;
use lifedrop_core::error::AppError;
use lifedrop_database::repositories::funding::FundingRepository;
use lifedrop_database::repositories::user::UserRepository;
use lifedrop_entity::funding::FundingContribution;

use crate::matcher;
use crate::notification::NotificationService;

/// Records funding contributions and announces them to staff.
#[derive(Debug, Clone)]
pub struct FundingService {
    /// Funding repository.
    funding_repo: Arc<FundingRepository>,
    /// User repository, for donor lookup and staff fan-out.
    user_repo: Arc<UserRepository>,
    /// Fan-out engine.
    notifier: Arc<NotificationService>,
    /// Role guard for the listing path.
    guard: Arc<RoleGuard>,
}

impl FundingService {
    /// Creates a new funding service.
    pub fn new(
        funding_repo: Arc<FundingRepository>,
        user_repo: Arc<UserRepository>,
        notifier: Arc<NotificationService>,
        guard: Arc<RoleGuard>,
    ) -> Self {
        Self {
            funding_repo,
            user_repo,
            notifier,
            guard,
        }
    }

    /// Records a contribution and announces it to active staff.
    ///
    /// The announcement runs detached from the caller with the fan-out
    /// engine's best-effort guarantees.
    pub async fn create(
        &self,
        donor_email: &str,
        amount_cents: i64,
    ) -> Result<FundingContribution, AppError> {
        if amount_cents <= 0 {
            return Err(AppError::validation("Amount must be positive"));
        }

        let donor_name = self
            .user_repo
            .find_by_email(donor_email)
            .await?
            .map(|u| u.name)
            .unwrap_or_else(|| donor_email.to_string());

        let created = self
            .funding_repo
            .insert(donor_email, &donor_name, amount_cents)
            .await?;

        self.spawn_staff_notice(created.clone());

        Ok(created)
    }

    /// Lists all contributions, volunteer or admin only.
    pub async fn list(&self, caller_email: &str) -> Result<Vec<FundingContribution>, AppError> {
        self.guard.require_volunteer_or_admin(caller_email).await?;
        self.funding_repo.find_all().await
    }

    fn spawn_staff_notice(&self, contribution: FundingContribution) {
        let user_repo = Arc::clone(&self.user_repo);
        let notifier = Arc::clone(&self.notifier);

        tokio::spawn(async move {
            let candidates = match user_repo.find_active().await {
                Ok(users) => users,
                Err(e) => {
                    warn!(error = %e, "Staff lookup failed; funding notice dropped");
                    return;
                }
            };

            let recipients = matcher::staff_recipients(&candidates);
            let message = format!(
                "{} contributed {} to the funding pool",
                contribution.donor_name,
                format_amount(contribution.amount_cents),
            );

            notifier.fan_out(&recipients, &message, Some("/funding")).await;
        });
    }
}

/// Render an amount in the smallest currency unit as a decimal string.
fn format_amount(amount_cents: i64) -> String {
    format!("{}.{:02}", amount_cents / 100, amount_cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2500), "25.00");
        assert_eq!(format_amount(1), "0.01");
        assert_eq!(format_amount(100), "1.00");
    }
}
