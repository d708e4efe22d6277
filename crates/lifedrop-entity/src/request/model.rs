//! Donation request entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::RequestStatus;

/// A request for a blood donation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// Email of the user who created the request (owner).
    pub requester_email: String,
    /// Name of the user who created the request.
    pub requester_name: String,
    /// Name of the patient receiving the donation.
    pub recipient_name: String,
    /// Required blood group, e.g. "O+".
    pub blood_group: String,
    /// District where the donation is needed.
    pub recipient_district: String,
    /// Upazila where the donation is needed.
    pub recipient_upazila: String,
    /// Hospital name.
    pub hospital_name: String,
    /// Full address of the donation site.
    pub address: String,
    /// Calendar date of the donation (no time component).
    pub donation_date: NaiveDate,
    /// Requested time of day, free-form (e.g. "10:30").
    pub donation_time: Option<String>,
    /// Message from the requester to potential donors.
    pub message: Option<String>,
    /// Current lifecycle state.
    pub donation_status: RequestStatus,
    /// Name of the donor who claimed the request, once claimed.
    pub donor_name: Option<String>,
    /// Email of the donor who claimed the request, once claimed.
    pub donor_email: Option<String>,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
}

impl DonationRequest {
    /// Whether the donation date lies strictly before the given day.
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        self.donation_date < today
    }
}

/// Fields accepted when creating a donation request.
///
/// The status is absent on purpose: every new request starts pending
/// regardless of what the client sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequest {
    /// Name of the patient receiving the donation.
    pub recipient_name: String,
    /// Required blood group.
    pub blood_group: String,
    /// District where the donation is needed.
    pub recipient_district: String,
    /// Upazila where the donation is needed.
    pub recipient_upazila: String,
    /// Hospital name.
    pub hospital_name: String,
    /// Full address of the donation site.
    pub address: String,
    /// Calendar date of the donation.
    pub donation_date: NaiveDate,
    /// Requested time of day.
    pub donation_time: Option<String>,
    /// Message to potential donors.
    pub message: Option<String>,
}

/// Partial update applied to an existing donation request.
///
/// The identity field is not representable here, so attempts to modify it
/// are stripped at deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequestPatch {
    /// New lifecycle state.
    pub donation_status: Option<RequestStatus>,
    /// Name of the claiming donor.
    pub donor_name: Option<String>,
    /// Email of the claiming donor.
    pub donor_email: Option<String>,
}

impl DonationRequestPatch {
    /// Whether this patch carries any change at all.
    pub fn is_empty(&self) -> bool {
        self.donation_status.is_none() && self.donor_name.is_none() && self.donor_email.is_none()
    }
}
