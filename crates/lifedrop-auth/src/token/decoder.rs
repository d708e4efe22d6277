//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use lifedrop_core::config::auth::AuthConfig;
use lifedrop_core::error::AppError;

use super::claims::Claims;

/// Validates session tokens.
#[derive(Clone)]
pub struct SessionVerifier {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for SessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl SessionVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token string.
    ///
    /// Every failure mode — malformed, bad signature, expired — maps to
    /// `Unauthenticated`.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthenticated("Session has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthenticated("Invalid session token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthenticated("Invalid session token signature")
                    }
                    _ => AppError::unauthenticated(format!("Session validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::encoder::SessionEncoder;
    use lifedrop_core::error::ErrorKind;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_minutes: 60,
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_round_trip() {
        let config = test_config();
        let token = SessionEncoder::new(&config).issue("donor@example.com").unwrap();
        let claims = SessionVerifier::new(&config).verify(&token).unwrap();
        assert_eq!(claims.email(), "donor@example.com");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_garbage_token_is_unauthenticated() {
        let verifier = SessionVerifier::new(&test_config());
        let err = verifier.verify("not-a-token").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_wrong_secret_is_unauthenticated() {
        let token = SessionEncoder::new(&test_config()).issue("a@b.c").unwrap();
        let other = AuthConfig {
            jwt_secret: "different-secret".to_string(),
            ..test_config()
        };
        let err = SessionVerifier::new(&other).verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }
}
