//! Request DTOs.
//!
//! Unknown JSON fields are ignored by serde, which is what structurally
//! strips client attempts to set privileged fields (role, status, ids) on
//! paths that don't accept them.

use serde::{Deserialize, Serialize};
use validator::Validate;

use lifedrop_entity::user::{UserRole, UserStatus};

/// Body for `POST /jwt` — identity claims to package into a session token.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IssueTokenRequest {
    /// Email to encode as the session subject.
    #[validate(email)]
    pub email: String,
}

/// Body for `POST /users` registration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    /// Email address (natural key).
    #[validate(email)]
    pub email: String,
    /// Display name.
    #[validate(length(min = 1))]
    pub name: String,
    /// Registration credential; hashed before storage, never verified here.
    pub password: Option<String>,
    /// Blood group, e.g. "O+".
    #[validate(length(min = 1))]
    pub blood_group: String,
    /// District of residence.
    #[validate(length(min = 1))]
    pub district: String,
    /// Upazila of residence.
    #[validate(length(min = 1))]
    pub upazila: String,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
}

/// Query parameters for `GET /donors`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorSearchParams {
    /// Filter by blood group.
    pub blood_group: Option<String>,
    /// Filter by district.
    pub district: Option<String>,
    /// Filter by upazila.
    pub upazila: Option<String>,
}

/// Query parameter carrying a target email for self-scoped listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailQuery {
    /// Target email; must match the authenticated caller.
    pub email: String,
}

/// Body for the privileged `PATCH /users/update/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserUpdateRequest {
    /// New role.
    pub role: Option<UserRole>,
    /// New status.
    pub status: Option<UserStatus>,
}

/// Body for `POST /funding`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFundingRequest {
    /// Contribution amount in the smallest currency unit.
    pub amount_cents: i64,
}

/// Body for `POST /notifications` — direct client-side creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    /// Recipient email.
    #[validate(email)]
    pub recipient_email: String,
    /// Notification message.
    #[validate(length(min = 1))]
    pub message: String,
    /// Optional deep-link.
    pub link: Option<String>,
}

/// Body for `POST /create-payment-intent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    /// Intended amount in the smallest currency unit.
    pub amount_cents: i64,
}
