//! Session credential handlers.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use lifedrop_core::error::AppError;

use crate::dto::request::IssueTokenRequest;
use crate::dto::response::{SuccessResponse, TokenResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /jwt
///
/// Packages the supplied identity claims into a signed session token and
/// establishes it as an HttpOnly cookie. No credential verification happens
/// here — the identity is authenticated upstream.
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<IssueTokenRequest>,
) -> Result<(CookieJar, Json<TokenResponse>), ApiError> {
    body.validate()
        .map_err(|e| AppError::validation(format!("Invalid identity claims: {e}")))?;

    let token = state.session_encoder.issue(&body.email)?;

    let cookie = session_cookie(&state, token.clone());

    Ok((jar.add(cookie), Json(TokenResponse { token })))
}

/// POST /logout
///
/// Client-side session expiry: the cookie is cleared immediately. There is
/// no server-side revocation list.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SuccessResponse>) {
    let mut cookie = Cookie::new(state.config.auth.cookie_name.clone(), "");
    cookie.set_path("/");

    (jar.remove(cookie), Json(SuccessResponse { success: true }))
}

/// Builds the session cookie with environment-dependent security attributes.
fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    let auth = &state.config.auth;
    let mut cookie = Cookie::new(auth.cookie_name.clone(), token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    if auth.cookie_secure {
        cookie.set_secure(true);
        cookie.set_same_site(SameSite::None);
    } else {
        cookie.set_same_site(SameSite::Lax);
    }
    cookie
}
