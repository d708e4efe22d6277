//! Role and ownership checks.
//!
//! Role checks go to the users table on every call instead of trusting
//! anything in the session token. A role or status change made by an admin
//! therefore takes effect on the subject's very next request.

use std::sync::Arc;

use lifedrop_core::error::AppError;
use lifedrop_database::repositories::user::UserRepository;
use lifedrop_entity::user::{User, UserRole, UserStatus};

/// Enforces role-based access against the store-of-record.
#[derive(Debug, Clone)]
pub struct RoleGuard {
    /// User repository for current-role lookups.
    user_repo: Arc<UserRepository>,
}

impl RoleGuard {
    /// Creates a new role guard.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Requires the caller to currently hold the admin role.
    pub async fn require_admin(&self, email: &str) -> Result<User, AppError> {
        let user = self.fetch_active(email).await?;
        if user.role != UserRole::Admin {
            return Err(AppError::forbidden("Admin access required"));
        }
        Ok(user)
    }

    /// Requires the caller to currently hold the volunteer or admin role.
    pub async fn require_volunteer_or_admin(&self, email: &str) -> Result<User, AppError> {
        let user = self.fetch_active(email).await?;
        if !user.role.is_staff() {
            return Err(AppError::forbidden("Volunteer or admin access required"));
        }
        Ok(user)
    }

    /// Fetches the caller's current record, rejecting blocked accounts.
    async fn fetch_active(&self, email: &str) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::forbidden("No account for the authenticated email"))?;

        if user.status == UserStatus::Blocked {
            return Err(AppError::forbidden("Account is blocked"));
        }
        Ok(user)
    }
}

/// Requires the caller to be the owner of the target resource.
///
/// Emails are compared case-insensitively, matching how the store treats
/// them as a natural key.
pub fn require_self(caller_email: &str, target_email: &str) -> Result<(), AppError> {
    if caller_email.eq_ignore_ascii_case(target_email) {
        Ok(())
    } else {
        Err(AppError::forbidden(
            "You can only access your own resources",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifedrop_core::error::ErrorKind;

    #[test]
    fn test_require_self_exact_match() {
        assert!(require_self("a@b.c", "a@b.c").is_ok());
    }

    #[test]
    fn test_require_self_is_case_insensitive() {
        assert!(require_self("Donor@Example.com", "donor@example.com").is_ok());
    }

    #[test]
    fn test_require_self_rejects_other_user() {
        let err = require_self("a@b.c", "x@y.z").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }
}
