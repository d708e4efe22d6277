//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use lifedrop_core::error::{AppError, ErrorKind};
use lifedrop_core::result::AppResult;
use lifedrop_entity::user::model::{CreateUser, UpdateProfile};
use lifedrop_entity::user::{User, UserRole, UserStatus};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Insert a new user with registration defaults (donor, active).
    pub async fn insert(&self, user: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, name, password_hash, role, status, blood_group, district, upazila, avatar_url) \
             VALUES ($1, $2, $3, 'donor', 'active', $4, $5, $6, $7) RETURNING *",
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(&user.blood_group)
        .bind(&user.district)
        .bind(&user.upazila)
        .bind(&user.avatar_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert user", e))
    }

    /// List all users, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// List every active user. Input to the recipient matcher.
    pub async fn find_active(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE status = 'active'")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list active users", e)
            })
    }

    /// Search active donors with optional blood group / district / upazila filters.
    pub async fn search_donors(
        &self,
        blood_group: Option<&str>,
        district: Option<&str>,
        upazila: Option<&str>,
    ) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users \
             WHERE role = 'donor' AND status = 'active' \
               AND ($1::text IS NULL OR blood_group = $1) \
               AND ($2::text IS NULL OR district = $2) \
               AND ($3::text IS NULL OR upazila = $3) \
             ORDER BY created_at DESC",
        )
        .bind(blood_group)
        .bind(district)
        .bind(upazila)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search donors", e))
    }

    /// Apply a non-privileged self-update to the user owning the email.
    ///
    /// Returns the number of matched rows.
    pub async fn update_profile(&self, email: &str, patch: &UpdateProfile) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE users SET \
               name = COALESCE($2, name), \
               blood_group = COALESCE($3, blood_group), \
               district = COALESCE($4, district), \
               upazila = COALESCE($5, upazila), \
               avatar_url = COALESCE($6, avatar_url), \
               updated_at = NOW() \
             WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .bind(&patch.name)
        .bind(&patch.blood_group)
        .bind(&patch.district)
        .bind(&patch.upazila)
        .bind(&patch.avatar_url)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))?;
        Ok(result.rows_affected())
    }

    /// Privileged update of role and/or status by primary key.
    pub async fn update_role_status(
        &self,
        id: Uuid,
        role: Option<UserRole>,
        status: Option<UserStatus>,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE users SET \
               role = COALESCE($2, role), \
               status = COALESCE($3, status), \
               updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(role)
        .bind(status)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update role/status", e)
        })?;
        Ok(result.rows_affected())
    }

    /// Count all users.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }
}
