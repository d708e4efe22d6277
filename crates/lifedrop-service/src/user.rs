//! User registration, donor search, and profile management.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use lifedrop_auth::guard::{RoleGuard, require_self};
use lifedrop_auth::password::PasswordHasher;
use lifedrop_core::error::AppError;
use lifedrop_database::repositories::user::UserRepository;
use lifedrop_entity::user::model::{CreateUser, UpdateProfile};
use lifedrop_entity::user::{User, UserRole, UserStatus};

/// Registration input. Role and status are not accepted from clients —
/// every registration starts as an active donor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    /// Email address (natural key).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Plaintext registration credential (optional; hashed before storage,
    /// never verified in this system).
    pub password: Option<String>,
    /// Blood group.
    pub blood_group: String,
    /// District.
    pub district: String,
    /// Upazila.
    pub upazila: String,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
}

/// Handles user CRUD and the donor directory.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher for the stored registration credential.
    hasher: Arc<PasswordHasher>,
    /// Role guard for privileged paths.
    guard: Arc<RoleGuard>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        guard: Arc<RoleGuard>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            guard,
        }
    }

    /// Registers a user, idempotently by email.
    ///
    /// A repeated registration returns the existing record with no insert;
    /// the second element is the inserted id, `None` when nothing was
    /// inserted.
    pub async fn register(&self, req: RegisterUser) -> Result<(User, Option<Uuid>), AppError> {
        if let Some(existing) = self.user_repo.find_by_email(&req.email).await? {
            return Ok((existing, None));
        }

        let password_hash = match req.password.as_deref() {
            Some(password) => Some(self.hasher.hash(password)?),
            None => None,
        };

        let created = self
            .user_repo
            .insert(&CreateUser {
                email: req.email,
                name: req.name,
                password_hash,
                blood_group: req.blood_group,
                district: req.district,
                upazila: req.upazila,
                avatar_url: req.avatar_url,
            })
            .await?;

        info!(email = %created.email, "User registered");
        Ok((created.clone(), Some(created.id)))
    }

    /// Searches active donors with optional filters.
    pub async fn search_donors(
        &self,
        blood_group: Option<&str>,
        district: Option<&str>,
        upazila: Option<&str>,
    ) -> Result<Vec<User>, AppError> {
        self.user_repo
            .search_donors(blood_group, district, upazila)
            .await
    }

    /// Returns a user's current role, if the user exists.
    pub async fn role_of(&self, email: &str) -> Result<Option<UserRole>, AppError> {
        Ok(self.user_repo.find_by_email(email).await?.map(|u| u.role))
    }

    /// Fetches a user by email.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_email(email).await
    }

    /// Self-update of non-privileged fields. Role, status, and email are
    /// not representable in the patch, so attempts to change them are
    /// stripped before this point.
    pub async fn update_self(
        &self,
        caller_email: &str,
        target_email: &str,
        patch: UpdateProfile,
    ) -> Result<u64, AppError> {
        require_self(caller_email, target_email)?;
        self.user_repo.update_profile(target_email, &patch).await
    }

    /// Privileged role/status update, admin only.
    pub async fn admin_update(
        &self,
        caller_email: &str,
        id: Uuid,
        role: Option<UserRole>,
        status: Option<UserStatus>,
    ) -> Result<u64, AppError> {
        self.guard.require_admin(caller_email).await?;
        let matched = self.user_repo.update_role_status(id, role, status).await?;
        if matched > 0 {
            info!(user_id = %id, ?role, ?status, "Privileged user update");
        }
        Ok(matched)
    }

    /// Lists all users, volunteer or admin only.
    pub async fn list_all(&self, caller_email: &str) -> Result<Vec<User>, AppError> {
        self.guard.require_volunteer_or_admin(caller_email).await?;
        self.user_repo.find_all().await
    }
}
