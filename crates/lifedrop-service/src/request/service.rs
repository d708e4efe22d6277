//! Donation request lifecycle orchestration.
//!
//! State machine: `pending → inprogress → done`, with side exits
//! `pending → expired` (time-driven, sweep-on-read) and
//! `{pending, inprogress} → canceled`. Every successful creation fans out
//! notifications to matched recipients on a spawned task; fan-out can never
//! fail or delay the triggering operation.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use lifedrop_auth::guard::{RoleGuard, require_self};
use lifedrop_core::error::AppError;
use lifedrop_database::repositories::request::RequestRepository;
use lifedrop_database::repositories::user::UserRepository;
use lifedrop_entity::request::model::{CreateDonationRequest, DonationRequestPatch};
use lifedrop_entity::request::{DonationRequest, RequestStatus};

use crate::matcher;
use crate::notification::NotificationService;

use super::rules;

/// Result of a partial update, mirroring the store's write-result shape.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    /// Rows matched by the update.
    pub matched_count: u64,
    /// Rows actually modified.
    pub modified_count: u64,
}

/// Owns the donation-request state machine.
#[derive(Debug, Clone)]
pub struct RequestService {
    /// Request repository.
    request_repo: Arc<RequestRepository>,
    /// User repository, for requester lookup and matcher input.
    user_repo: Arc<UserRepository>,
    /// Fan-out engine.
    notifier: Arc<NotificationService>,
    /// Role guard for the owner-or-admin delete policy.
    guard: Arc<RoleGuard>,
}

impl RequestService {
    /// Creates a new request service.
    pub fn new(
        request_repo: Arc<RequestRepository>,
        user_repo: Arc<UserRepository>,
        notifier: Arc<NotificationService>,
        guard: Arc<RoleGuard>,
    ) -> Self {
        Self {
            request_repo,
            user_repo,
            notifier,
            guard,
        }
    }

    /// The reference day for all lifecycle date comparisons.
    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Creates a request and triggers the broadcast fan-out.
    ///
    /// Any client-supplied status is discarded; new requests are always
    /// pending. Rejects dates strictly before today.
    pub async fn create(
        &self,
        requester_email: &str,
        fields: CreateDonationRequest,
    ) -> Result<DonationRequest, AppError> {
        rules::validate_create_date(fields.donation_date, Self::today())?;

        let requester_name = self
            .user_repo
            .find_by_email(requester_email)
            .await?
            .map(|u| u.name)
            .unwrap_or_else(|| requester_email.to_string());

        let created = self
            .request_repo
            .insert(requester_email, &requester_name, &fields)
            .await?;

        self.spawn_broadcast(created.clone());

        Ok(created)
    }

    /// Lists all requests, sweeping expired pending ones first.
    pub async fn list_all(&self) -> Result<Vec<DonationRequest>, AppError> {
        let swept = self.request_repo.sweep_expired(Self::today()).await?;
        if swept > 0 {
            debug!(swept, "Expired pending requests during sweep");
        }
        self.request_repo.find_all().await
    }

    /// Lists one owner's requests, sweeping that owner's expired ones first.
    pub async fn list_mine(
        &self,
        owner_email: &str,
        caller_email: &str,
    ) -> Result<Vec<DonationRequest>, AppError> {
        require_self(caller_email, owner_email)?;

        let swept = self
            .request_repo
            .sweep_expired_for_owner(owner_email, Self::today())
            .await?;
        if swept > 0 {
            debug!(swept, owner = %owner_email, "Expired pending requests during owner sweep");
        }
        self.request_repo.find_by_owner(owner_email).await
    }

    /// Fetches one request, lazily expiring it when pending and past-due.
    ///
    /// The returned object never shows a stale pending status. A missing id
    /// resolves to `None`, not an error.
    pub async fn get_one(&self, id: Uuid) -> Result<Option<DonationRequest>, AppError> {
        let Some(mut request) = self.request_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if rules::needs_expiry(&request, Self::today()) {
            self.request_repo.mark_expired(id).await?;
            request.donation_status = RequestStatus::Expired;
        }

        Ok(Some(request))
    }

    /// Applies a partial update, notifying the requester on status changes.
    ///
    /// Claiming a past-due request is rejected. The identity field cannot be
    /// patched — it is not representable in the patch type. A status change
    /// produces one targeted notification to the original requester; this is
    /// distinct from creation's broadcast fan-out.
    pub async fn update_status(
        &self,
        id: Uuid,
        patch: DonationRequestPatch,
    ) -> Result<UpdateOutcome, AppError> {
        let Some(current) = self.request_repo.find_by_id(id).await? else {
            return Ok(UpdateOutcome {
                matched_count: 0,
                modified_count: 0,
            });
        };

        rules::validate_patch(&current, &patch, Self::today())?;

        let matched = self.request_repo.apply_patch(id, &patch).await?;

        if let Some(new_status) = patch.donation_status {
            self.spawn_status_notice(current, new_status);
        }

        Ok(UpdateOutcome {
            matched_count: matched,
            modified_count: matched,
        })
    }

    /// Hard delete, allowed for the owner or an admin.
    ///
    /// Returns the number of deleted rows (0 when the id does not resolve).
    pub async fn delete(&self, id: Uuid, caller_email: &str) -> Result<u64, AppError> {
        let Some(current) = self.request_repo.find_by_id(id).await? else {
            return Ok(0);
        };

        if require_self(caller_email, &current.requester_email).is_err() {
            self.guard.require_admin(caller_email).await?;
        }

        self.request_repo.delete(id).await
    }

    /// Broadcast fan-out for a newly created request. Runs detached from the
    /// caller; failures are logged inside the task boundary and dropped.
    fn spawn_broadcast(&self, request: DonationRequest) {
        let user_repo = Arc::clone(&self.user_repo);
        let notifier = Arc::clone(&self.notifier);

        tokio::spawn(async move {
            let candidates = match user_repo.find_active().await {
                Ok(users) => users,
                Err(e) => {
                    warn!(request_id = %request.id, error = %e, "Fan-out candidate lookup failed; notifications dropped");
                    return;
                }
            };

            let recipients = matcher::match_recipients(
                &request.blood_group,
                &request.recipient_district,
                &candidates,
            );
            let message = rules::broadcast_message(&request);
            let link = rules::request_link(&request);

            notifier.fan_out(&recipients, &message, Some(&link)).await;
        });
    }

    /// Targeted status-change notification to the original requester.
    fn spawn_status_notice(&self, request: DonationRequest, new_status: RequestStatus) {
        let notifier = Arc::clone(&self.notifier);

        tokio::spawn(async move {
            let message = rules::status_message(&request, new_status);
            let link = rules::request_link(&request);
            notifier
                .notify_one(&request.requester_email, &message, Some(&link))
                .await;
        });
    }
}
