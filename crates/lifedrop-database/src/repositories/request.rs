//! Donation request repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use lifedrop_core::error::{AppError, ErrorKind};
use lifedrop_core::result::AppResult;
use lifedrop_entity::request::model::{CreateDonationRequest, DonationRequestPatch};
use lifedrop_entity::request::{DonationRequest, RequestStatus};

/// Repository for donation request CRUD, sweeps, and lazy expiry.
#[derive(Debug, Clone)]
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    /// Create a new request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new request. Status is forced to pending here regardless of
    /// anything the client sent upstream.
    pub async fn insert(
        &self,
        requester_email: &str,
        requester_name: &str,
        fields: &CreateDonationRequest,
    ) -> AppResult<DonationRequest> {
        sqlx::query_as::<_, DonationRequest>(
            "INSERT INTO donation_requests \
               (requester_email, requester_name, recipient_name, blood_group, recipient_district, \
                recipient_upazila, hospital_name, address, donation_date, donation_time, message, donation_status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 'pending') RETURNING *",
        )
        .bind(requester_email)
        .bind(requester_name)
        .bind(&fields.recipient_name)
        .bind(&fields.blood_group)
        .bind(&fields.recipient_district)
        .bind(&fields.recipient_upazila)
        .bind(&fields.hospital_name)
        .bind(&fields.address)
        .bind(fields.donation_date)
        .bind(&fields.donation_time)
        .bind(&fields.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert request", e))
    }

    /// Find a request by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<DonationRequest>> {
        sqlx::query_as::<_, DonationRequest>("SELECT * FROM donation_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find request", e))
    }

    /// List all requests, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<DonationRequest>> {
        sqlx::query_as::<_, DonationRequest>(
            "SELECT * FROM donation_requests ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list requests", e))
    }

    /// List one owner's requests, newest first.
    pub async fn find_by_owner(&self, owner_email: &str) -> AppResult<Vec<DonationRequest>> {
        sqlx::query_as::<_, DonationRequest>(
            "SELECT * FROM donation_requests \
             WHERE LOWER(requester_email) = LOWER($1) ORDER BY created_at DESC",
        )
        .bind(owner_email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list owner requests", e)
        })
    }

    /// Bulk sweep: transition every pending request dated before `today` to
    /// expired. Idempotent — already-expired rows are not matched.
    pub async fn sweep_expired(&self, today: NaiveDate) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE donation_requests SET donation_status = 'expired' \
             WHERE donation_status = 'pending' AND donation_date < $1",
        )
        .bind(today)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sweep requests", e))?;
        Ok(result.rows_affected())
    }

    /// Per-owner variant of [`sweep_expired`](Self::sweep_expired).
    pub async fn sweep_expired_for_owner(
        &self,
        owner_email: &str,
        today: NaiveDate,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE donation_requests SET donation_status = 'expired' \
             WHERE donation_status = 'pending' AND donation_date < $1 \
               AND LOWER(requester_email) = LOWER($2)",
        )
        .bind(today)
        .bind(owner_email)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sweep owner requests", e)
        })?;
        Ok(result.rows_affected())
    }

    /// Single-document lazy expiry. Only touches the row while it is still
    /// pending, so re-running it on an expired request is a no-op.
    pub async fn mark_expired(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE donation_requests SET donation_status = 'expired' \
             WHERE id = $1 AND donation_status = 'pending'",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to expire request", e))?;
        Ok(result.rows_affected())
    }

    /// Apply a partial update. Absent fields keep their current value.
    ///
    /// Returns the number of matched rows (0 when the id does not resolve).
    pub async fn apply_patch(&self, id: Uuid, patch: &DonationRequestPatch) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE donation_requests SET \
               donation_status = COALESCE($2, donation_status), \
               donor_name = COALESCE($3, donor_name), \
               donor_email = COALESCE($4, donor_email) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(patch.donation_status)
        .bind(&patch.donor_name)
        .bind(&patch.donor_email)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to patch request", e))?;
        Ok(result.rows_affected())
    }

    /// Hard delete by primary key. Returns the number of deleted rows.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM donation_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete request", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Count all requests.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM donation_requests")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count requests", e))
    }

    /// Count requests in a given status.
    pub async fn count_by_status(&self, status: RequestStatus) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM donation_requests WHERE donation_status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count requests by status", e)
            })
    }
}
