//! Session token claims.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Claims payload embedded in every session token.
///
/// Deliberately minimal: the subject is the caller's email and nothing
/// else. Roles are looked up from the users table at decision time, so a
/// token never grants stale privileges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the caller's email.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the caller's email.
    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
