//! Funding contribution and payment intent handlers.

use axum::Json;
use axum::extract::State;

use lifedrop_entity::funding::FundingContribution;

use crate::dto::request::{CreateFundingRequest, CreatePaymentIntentRequest};
use crate::dto::response::{InsertResponse, PaymentIntentResponse};
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// POST /funding
///
/// Records a contribution and announces it to active staff via the fan-out
/// engine.
pub async fn create(
    State(state): State<AppState>,
    session: AuthSession,
    Json(body): Json<CreateFundingRequest>,
) -> Result<Json<InsertResponse>, ApiError> {
    let created = state
        .funding_service
        .create(&session.email, body.amount_cents)
        .await?;
    Ok(Json(InsertResponse {
        inserted_id: Some(created.id),
    }))
}

/// GET /funding
pub async fn list(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<Vec<FundingContribution>>, ApiError> {
    let contributions = state.funding_service.list(&session.email).await?;
    Ok(Json(contributions))
}

/// POST /create-payment-intent
///
/// Delegates to the external payment processor and returns the client
/// secret.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(body): Json<CreatePaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, ApiError> {
    let client_secret = state
        .payment_client
        .create_payment_intent(body.amount_cents)
        .await?;
    Ok(Json(PaymentIntentResponse { client_secret }))
}
