//! User registration, donor directory, and profile handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use lifedrop_core::error::AppError;
use lifedrop_entity::user::User;
use lifedrop_entity::user::model::UpdateProfile;
use lifedrop_service::user::RegisterUser;

use crate::dto::request::{AdminUserUpdateRequest, DonorSearchParams, RegisterUserRequest};
use crate::dto::response::{InsertResponse, RoleResponse, UpdateResponse};
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// POST /users
///
/// Registration, idempotent by email: a repeated registration returns
/// `insertedId: null` and inserts nothing.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<Json<InsertResponse>, ApiError> {
    body.validate()
        .map_err(|e| AppError::validation(format!("Invalid registration: {e}")))?;

    let (_user, inserted_id) = state
        .user_service
        .register(RegisterUser {
            email: body.email,
            name: body.name,
            password: body.password,
            blood_group: body.blood_group,
            district: body.district,
            upazila: body.upazila,
            avatar_url: body.avatar_url,
        })
        .await?;

    Ok(Json(InsertResponse { inserted_id }))
}

/// GET /donors?bloodGroup&district&upazila
///
/// Public filtered search over active donors. The stored credential hash is
/// structurally excluded from serialization.
pub async fn search_donors(
    State(state): State<AppState>,
    Query(params): Query<DonorSearchParams>,
) -> Result<Json<Vec<User>>, ApiError> {
    let donors = state
        .user_service
        .search_donors(
            params.blood_group.as_deref(),
            params.district.as_deref(),
            params.upazila.as_deref(),
        )
        .await?;
    Ok(Json(donors))
}

/// GET /users/role/{email}
pub async fn get_role(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(email): Path<String>,
) -> Result<Json<RoleResponse>, ApiError> {
    let role = state.user_service.role_of(&email).await?;
    Ok(Json(RoleResponse { role }))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.user_service.list_all(&session.email).await?;
    Ok(Json(users))
}

/// GET /users/{email}
pub async fn get_user(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(email): Path<String>,
) -> Result<Json<Option<User>>, ApiError> {
    let user = state.user_service.get_by_email(&email).await?;
    Ok(Json(user))
}

/// PATCH /users/{email}
///
/// Self-update. Role, status, and email are not representable in the patch
/// body, so attempts to change them are stripped at deserialization.
pub async fn update_self(
    State(state): State<AppState>,
    session: AuthSession,
    Path(email): Path<String>,
    Json(patch): Json<UpdateProfile>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let matched = state
        .user_service
        .update_self(&session.email, &email, patch)
        .await?;
    Ok(Json(UpdateResponse {
        matched_count: matched,
        modified_count: matched,
    }))
}

/// PATCH /users/update/{id}
///
/// Privileged role/status update, admin only.
pub async fn admin_update_user(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(body): Json<AdminUserUpdateRequest>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let matched = state
        .user_service
        .admin_update(&session.email, id, body.role, body.status)
        .await?;
    Ok(Json(UpdateResponse {
        matched_count: matched,
        modified_count: matched,
    }))
}
