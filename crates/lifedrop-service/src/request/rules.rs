//! Lifecycle decision rules for donation requests.
//!
//! Pure functions so the temporal invariants are testable without a store.
//! All date comparisons are at day granularity in a single reference
//! timezone (UTC); there is no partial-day expiry.

use chrono::NaiveDate;

use lifedrop_core::error::AppError;
use lifedrop_entity::request::model::DonationRequestPatch;
use lifedrop_entity::request::{DonationRequest, RequestStatus};

/// Rejects creation when the donation date lies strictly before today.
pub fn validate_create_date(donation_date: NaiveDate, today: NaiveDate) -> Result<(), AppError> {
    if donation_date < today {
        return Err(AppError::validation(
            "Donation date cannot be in the past",
        ));
    }
    Ok(())
}

/// Whether a stored request must be lazily expired before being served.
pub fn needs_expiry(request: &DonationRequest, today: NaiveDate) -> bool {
    request.donation_status == RequestStatus::Pending && request.is_past_due(today)
}

/// Rejects a patch that claims (→ inprogress) a request whose donation date
/// is already past-due. The check runs against the stored record, not the
/// patch.
pub fn validate_patch(
    current: &DonationRequest,
    patch: &DonationRequestPatch,
    today: NaiveDate,
) -> Result<(), AppError> {
    if patch.donation_status == Some(RequestStatus::Inprogress) && current.is_past_due(today) {
        return Err(AppError::validation(
            "Cannot move a past-due request to inprogress",
        ));
    }
    Ok(())
}

/// Broadcast message announcing a new request to matched recipients.
pub fn broadcast_message(request: &DonationRequest) -> String {
    format!(
        "{} blood needed in {} at {} on {}",
        request.blood_group,
        request.recipient_district,
        request.hospital_name,
        request.donation_date,
    )
}

/// Targeted message to the requester describing a status change.
pub fn status_message(request: &DonationRequest, new_status: RequestStatus) -> String {
    format!(
        "Your donation request for {} is now {}",
        request.recipient_name, new_status,
    )
}

/// Deep-link into the client application for a request.
pub fn request_link(request: &DonationRequest) -> String {
    format!("/donation-requests/{}", request.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lifedrop_core::error::ErrorKind;
    use uuid::Uuid;

    fn request(date: NaiveDate, status: RequestStatus) -> DonationRequest {
        DonationRequest {
            id: Uuid::new_v4(),
            requester_email: "req@x.com".to_string(),
            requester_name: "Requester".to_string(),
            recipient_name: "Patient".to_string(),
            blood_group: "O+".to_string(),
            recipient_district: "Dhaka".to_string(),
            recipient_upazila: "Savar".to_string(),
            hospital_name: "Dhaka Medical".to_string(),
            address: "Secretariat Rd".to_string(),
            donation_date: date,
            donation_time: None,
            message: None,
            donation_status: status,
            donor_name: None,
            donor_email: None,
            created_at: Utc::now(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_rejects_past_date() {
        let today = day(2026, 8, 5);
        let err = validate_create_date(day(2026, 8, 4), today).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_create_accepts_today_and_future() {
        let today = day(2026, 8, 5);
        assert!(validate_create_date(today, today).is_ok());
        assert!(validate_create_date(day(2026, 8, 6), today).is_ok());
    }

    #[test]
    fn test_pending_past_due_needs_expiry() {
        let today = day(2026, 8, 5);
        assert!(needs_expiry(&request(day(2026, 8, 4), RequestStatus::Pending), today));
    }

    #[test]
    fn test_expiry_is_day_granular() {
        let today = day(2026, 8, 5);
        // Due today is not past-due.
        assert!(!needs_expiry(&request(today, RequestStatus::Pending), today));
    }

    #[test]
    fn test_non_pending_never_needs_expiry() {
        let today = day(2026, 8, 5);
        for status in [
            RequestStatus::Inprogress,
            RequestStatus::Done,
            RequestStatus::Canceled,
            RequestStatus::Expired,
        ] {
            assert!(!needs_expiry(&request(day(2026, 8, 4), status), today));
        }
    }

    #[test]
    fn test_patch_rejects_claiming_past_due_request() {
        let today = day(2026, 8, 5);
        let current = request(day(2026, 8, 4), RequestStatus::Pending);
        let patch = DonationRequestPatch {
            donation_status: Some(RequestStatus::Inprogress),
            donor_name: Some("Donor".to_string()),
            donor_email: Some("donor@x.com".to_string()),
        };
        let err = validate_patch(&current, &patch, today).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_patch_allows_claiming_future_request() {
        let today = day(2026, 8, 5);
        let current = request(day(2026, 8, 6), RequestStatus::Pending);
        let patch = DonationRequestPatch {
            donation_status: Some(RequestStatus::Inprogress),
            ..Default::default()
        };
        assert!(validate_patch(&current, &patch, today).is_ok());
    }

    #[test]
    fn test_patch_allows_closing_past_due_request() {
        // Done/canceled on a past-due record stays legal; only claiming is
        // date-gated.
        let today = day(2026, 8, 5);
        let current = request(day(2026, 8, 4), RequestStatus::Inprogress);
        let patch = DonationRequestPatch {
            donation_status: Some(RequestStatus::Done),
            ..Default::default()
        };
        assert!(validate_patch(&current, &patch, today).is_ok());
    }

    #[test]
    fn test_broadcast_message_names_group_and_district() {
        let msg = broadcast_message(&request(day(2026, 8, 6), RequestStatus::Pending));
        assert!(msg.contains("O+"));
        assert!(msg.contains("Dhaka"));
    }

    #[test]
    fn test_status_message_names_new_status() {
        let msg = status_message(
            &request(day(2026, 8, 6), RequestStatus::Inprogress),
            RequestStatus::Done,
        );
        assert!(msg.contains("done"));
    }
}
