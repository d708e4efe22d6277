//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;
use super::status::UserStatus;

/// A registered user of the platform.
///
/// The email is the natural key; lookups and ownership checks compare it
/// case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address (unique natural key).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Argon2 hash of the registration credential. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// User role.
    pub role: UserRole,
    /// Account status.
    pub status: UserStatus,
    /// Blood group, e.g. "O+".
    pub blood_group: String,
    /// District of residence.
    pub district: String,
    /// Upazila (sub-district) of residence.
    pub upazila: String,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user is an active donor.
    pub fn is_active_donor(&self) -> bool {
        self.status.is_active() && self.role == UserRole::Donor
    }

    /// Check if this user is active staff (volunteer or admin).
    pub fn is_active_staff(&self) -> bool {
        self.status.is_active() && self.role.is_staff()
    }
}

/// Data required to create a new user.
///
/// Role and status are absent on purpose: registration always starts a user
/// as an active donor, and only the privileged admin path may change them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Pre-hashed registration credential (optional).
    pub password_hash: Option<String>,
    /// Blood group.
    pub blood_group: String,
    /// District.
    pub district: String,
    /// Upazila.
    pub upazila: String,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
}

/// Non-privileged fields a user may change on their own profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    /// New display name.
    pub name: Option<String>,
    /// New blood group.
    pub blood_group: Option<String>,
    /// New district.
    pub district: Option<String>,
    /// New upazila.
    pub upazila: Option<String>,
    /// New avatar URL.
    pub avatar_url: Option<String>,
}
