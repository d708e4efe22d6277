//! Notification handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use lifedrop_core::error::AppError;
use lifedrop_entity::notification::Notification;

use crate::dto::request::{CreateNotificationRequest, EmailQuery};
use crate::dto::response::{InsertResponse, UpdateResponse};
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// POST /notifications
///
/// Direct creation. Unlike the fan-out paths, a failure here propagates —
/// the client asked for exactly this write.
pub async fn create(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(body): Json<CreateNotificationRequest>,
) -> Result<Json<InsertResponse>, ApiError> {
    body.validate()
        .map_err(|e| AppError::validation(format!("Invalid notification: {e}")))?;

    let notification = Notification::unread(body.recipient_email, body.message, body.link);
    let created = state.notification_service.create(notification).await?;

    Ok(Json(InsertResponse {
        inserted_id: Some(created.id),
    }))
}

/// GET /notifications?email=
///
/// A user's own notifications, newest first.
pub async fn list(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let notifications = state
        .notification_service
        .list_for_user(&session.email, &query.email)
        .await?;
    Ok(Json(notifications))
}

/// PATCH /notifications/{id}
///
/// Marks one notification read. Idempotent.
pub async fn mark_read(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let matched = state.notification_service.mark_read(id).await?;
    Ok(Json(UpdateResponse {
        matched_count: matched,
        modified_count: matched,
    }))
}

/// PATCH /notifications/mark-all-read/user?email=
pub async fn mark_all_read(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<EmailQuery>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let modified = state
        .notification_service
        .mark_all_read(&session.email, &query.email)
        .await?;
    Ok(Json(UpdateResponse {
        matched_count: modified,
        modified_count: modified,
    }))
}
