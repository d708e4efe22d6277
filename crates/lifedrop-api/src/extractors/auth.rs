//! `AuthSession` extractor — pulls the session token from the request,
//! validates it, and exposes the verified caller email.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use lifedrop_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Verified caller identity available in handlers.
///
/// The token is accepted from the `Authorization: Bearer` header or from
/// the session cookie; the header wins when both are present. Only the
/// email travels in the token — role decisions re-fetch the user record.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Verified caller email.
    pub email: String,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(String::from);

        let token = match bearer {
            Some(token) => token,
            None => CookieJar::from_headers(&parts.headers)
                .get(&state.config.auth.cookie_name)
                .map(|c| c.value().to_string())
                .ok_or_else(|| {
                    ApiError(AppError::unauthenticated("Missing session credential"))
                })?,
        };

        let claims = state.session_verifier.verify(&token)?;

        Ok(AuthSession { email: claims.sub })
    }
}
