//! Funding contribution repository implementation.

use sqlx::PgPool;

use lifedrop_core::error::{AppError, ErrorKind};
use lifedrop_core::result::AppResult;
use lifedrop_entity::funding::FundingContribution;

/// Repository for funding contribution inserts and aggregation.
#[derive(Debug, Clone)]
pub struct FundingRepository {
    pool: PgPool,
}

impl FundingRepository {
    /// Create a new funding repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a contribution.
    pub async fn insert(
        &self,
        donor_email: &str,
        donor_name: &str,
        amount_cents: i64,
    ) -> AppResult<FundingContribution> {
        sqlx::query_as::<_, FundingContribution>(
            "INSERT INTO fundings (donor_email, donor_name, amount_cents) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(donor_email)
        .bind(donor_name)
        .bind(amount_cents)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert funding", e))
    }

    /// List all contributions, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<FundingContribution>> {
        sqlx::query_as::<_, FundingContribution>(
            "SELECT * FROM fundings ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list fundings", e))
    }

    /// Sum of all contribution amounts.
    pub async fn sum_amount(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COALESCE(SUM(amount_cents), 0)::bigint FROM fundings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum fundings", e))
    }
}
