//! Funding contribution entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A monetary contribution to the platform's funding pool.
///
/// Amounts are stored in the smallest currency unit, the same unit the
/// payment processor consumes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FundingContribution {
    /// Unique contribution identifier.
    pub id: Uuid,
    /// Email of the contributing user.
    pub donor_email: String,
    /// Name of the contributing user.
    pub donor_name: String,
    /// Amount in the smallest currency unit. Strictly positive.
    pub amount_cents: i64,
    /// When the contribution was recorded.
    pub created_at: DateTime<Utc>,
}
