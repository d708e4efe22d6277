//! Donation request lifecycle handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use lifedrop_entity::request::DonationRequest;
use lifedrop_entity::request::model::{CreateDonationRequest, DonationRequestPatch};
use lifedrop_service::request::UpdateOutcome;

use crate::dto::request::EmailQuery;
use crate::dto::response::DeleteResponse;
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// GET /donation-requests
///
/// Public listing; sweeps expired pending requests first so stale pending
/// statuses are never served.
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<DonationRequest>>, ApiError> {
    let requests = state.request_service.list_all().await?;
    Ok(Json(requests))
}

/// POST /donation-requests
///
/// Creates a request (always pending) and triggers the broadcast fan-out to
/// matched donors and staff.
pub async fn create(
    State(state): State<AppState>,
    session: AuthSession,
    Json(body): Json<CreateDonationRequest>,
) -> Result<Json<DonationRequest>, ApiError> {
    let created = state.request_service.create(&session.email, body).await?;
    Ok(Json(created))
}

/// GET /donation-requests/my?email=
pub async fn list_mine(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<DonationRequest>>, ApiError> {
    let requests = state
        .request_service
        .list_mine(&query.email, &session.email)
        .await?;
    Ok(Json(requests))
}

/// GET /donation-requests/{id}
///
/// Lazy-expires a past-due pending request before returning it. A missing
/// id yields `null`, not an error.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<DonationRequest>>, ApiError> {
    let request = state.request_service.get_one(id).await?;
    Ok(Json(request))
}

/// PATCH /donation-requests/{id}
///
/// Partial update; a status change triggers a targeted notification to the
/// original requester.
pub async fn update(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
    Json(patch): Json<DonationRequestPatch>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    let outcome = state.request_service.update_status(id, patch).await?;
    Ok(Json(outcome))
}

/// DELETE /donation-requests/{id}
///
/// Hard delete, owner or admin.
pub async fn delete(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state.request_service.delete(id, &session.email).await?;
    Ok(Json(DeleteResponse {
        deleted_count: deleted,
    }))
}
