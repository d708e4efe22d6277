//! Session token configuration.

use serde::{Deserialize, Serialize};

/// Session credential configuration.
///
/// Tokens carry only the caller's email; role authority stays in the users
/// table so admin-driven role changes take effect without re-login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the session cookie carries the Secure attribute.
    ///
    /// Off by default so local development over plain HTTP works; production
    /// overlays turn it on.
    #[serde(default)]
    pub cookie_secure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    60
}

fn default_cookie_name() -> String {
    "lifedrop_session".to_string()
}
