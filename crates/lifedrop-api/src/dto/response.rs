//! Response DTOs.
//!
//! Write paths answer with the store's write-result vocabulary
//! (`insertedId`, `matchedCount`, `deletedCount`) so clients can treat the
//! API like a thin document-store front.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lifedrop_entity::user::UserRole;

/// Result of an insert. `inserted_id` is `null` when nothing was inserted
/// (idempotent registration hitting an existing record).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    /// Id of the inserted document, if one was inserted.
    pub inserted_id: Option<Uuid>,
}

/// Result of a partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    /// Rows matched by the update.
    pub matched_count: u64,
    /// Rows actually modified.
    pub modified_count: u64,
}

/// Result of a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// Rows deleted.
    pub deleted_count: u64,
}

/// Session token response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed session token (also set as a cookie).
    pub token: String,
}

/// Simple success acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Whether the request was successful.
    pub success: bool,
}

/// Role lookup response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleResponse {
    /// The user's current role, if the user exists.
    pub role: Option<UserRole>,
}

/// Payment intent creation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    /// Client secret handed back from the processor.
    pub client_secret: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Database connectivity.
    pub database: String,
}
