//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available on the platform.
///
/// Donors are the default role on registration; volunteers and admins are
/// assigned through the privileged update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A registered blood donor.
    Donor,
    /// A volunteer who helps coordinate requests.
    Volunteer,
    /// A platform administrator.
    Admin,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role is staff (volunteer or admin).
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Volunteer | Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Volunteer => "volunteer",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = lifedrop_core::AppError;

    // Case-insensitive to tolerate data entry drift across deployments.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "donor" => Ok(Self::Donor),
            "volunteer" => Ok(Self::Volunteer),
            "admin" => Ok(Self::Admin),
            _ => Err(lifedrop_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: donor, volunteer, admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_predicate() {
        assert!(UserRole::Admin.is_staff());
        assert!(UserRole::Volunteer.is_staff());
        assert!(!UserRole::Donor.is_staff());
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Volunteer.is_admin());
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("donor".parse::<UserRole>().unwrap(), UserRole::Donor);
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("Volunteer".parse::<UserRole>().unwrap(), UserRole::Volunteer);
        assert!("superuser".parse::<UserRole>().is_err());
    }
}
