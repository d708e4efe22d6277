//! Donation request status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle states of a donation request.
///
/// `pending → inprogress → done`, with side exits `pending → expired`
/// (time-driven) and `{pending, inprogress} → canceled` (explicit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Awaiting a donor.
    Pending,
    /// Claimed by a donor.
    Inprogress,
    /// Donation completed.
    Done,
    /// Canceled by the requester or staff.
    Canceled,
    /// Donation date passed while still pending.
    Expired,
}

impl RequestStatus {
    /// Whether the request is still open for a donor to claim.
    pub fn is_claimable(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Inprogress => "inprogress",
            Self::Done => "done",
            Self::Canceled => "canceled",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = lifedrop_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "inprogress" => Ok(Self::Inprogress),
            "done" => Ok(Self::Done),
            "canceled" => Ok(Self::Canceled),
            "expired" => Ok(Self::Expired),
            _ => Err(lifedrop_core::AppError::validation(format!(
                "Invalid request status: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        for s in ["pending", "inprogress", "done", "canceled", "expired"] {
            assert_eq!(s.parse::<RequestStatus>().unwrap().as_str(), s);
        }
        assert!("unknown".parse::<RequestStatus>().is_err());
    }
}
