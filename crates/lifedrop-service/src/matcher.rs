//! Recipient matching — determines who should be notified for an event.
//!
//! Pure functions over an in-memory slice of users; no side effects. The
//! repository narrows candidates to active users, the matcher applies the
//! actual selection rules.

use std::collections::HashSet;

use lifedrop_entity::user::User;

/// Computes the recipient set for a newly created donation request.
///
/// Union of:
/// - active donors whose blood group and district exactly match, and
/// - all active admins, and
/// - all active volunteers.
///
/// Blood group and district are exact-string matches; role comparison is on
/// the enum, which already parses case-insensitively. An empty result is
/// valid. Duplicate emails are collapsed; donors come first, then staff.
pub fn match_recipients(blood_group: &str, district: &str, users: &[User]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut recipients = Vec::new();

    for user in users {
        if user.is_active_donor() && user.blood_group == blood_group && user.district == district {
            push_unique(&mut recipients, &mut seen, &user.email);
        }
    }

    for user in users {
        if user.is_active_staff() {
            push_unique(&mut recipients, &mut seen, &user.email);
        }
    }

    recipients
}

/// Computes the staff recipient set (all active admins and volunteers).
///
/// Used by events that broadcast to coordinators only, such as a new
/// funding contribution.
pub fn staff_recipients(users: &[User]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut recipients = Vec::new();

    for user in users {
        if user.is_active_staff() {
            push_unique(&mut recipients, &mut seen, &user.email);
        }
    }

    recipients
}

fn push_unique(recipients: &mut Vec<String>, seen: &mut HashSet<String>, email: &str) {
    if seen.insert(email.to_lowercase()) {
        recipients.push(email.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lifedrop_entity::user::{UserRole, UserStatus};
    use uuid::Uuid;

    fn user(email: &str, role: UserRole, status: UserStatus, bg: &str, district: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: email.split('@').next().unwrap_or_default().to_string(),
            password_hash: None,
            role,
            status,
            blood_group: bg.to_string(),
            district: district.to_string(),
            upazila: "Savar".to_string(),
            avatar_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_union_of_matching_donors_and_staff() {
        let users = vec![
            user("d1@x.com", UserRole::Donor, UserStatus::Active, "O+", "Dhaka"),
            user("d2@x.com", UserRole::Donor, UserStatus::Active, "O+", "Dhaka"),
            user("d3@x.com", UserRole::Donor, UserStatus::Active, "A+", "Dhaka"),
            user("d4@x.com", UserRole::Donor, UserStatus::Active, "O+", "Khulna"),
            user("v1@x.com", UserRole::Volunteer, UserStatus::Active, "B+", "Sylhet"),
            user("a1@x.com", UserRole::Admin, UserStatus::Active, "AB-", "Bogra"),
        ];

        let recipients = match_recipients("O+", "Dhaka", &users);
        assert_eq!(recipients, vec!["d1@x.com", "d2@x.com", "v1@x.com", "a1@x.com"]);
    }

    #[test]
    fn test_blocked_users_never_match() {
        let users = vec![
            user("d1@x.com", UserRole::Donor, UserStatus::Blocked, "O+", "Dhaka"),
            user("v1@x.com", UserRole::Volunteer, UserStatus::Blocked, "B+", "Sylhet"),
            user("a1@x.com", UserRole::Admin, UserStatus::Blocked, "AB-", "Bogra"),
        ];

        assert!(match_recipients("O+", "Dhaka", &users).is_empty());
        assert!(staff_recipients(&users).is_empty());
    }

    #[test]
    fn test_empty_set_is_valid() {
        assert!(match_recipients("O+", "Dhaka", &[]).is_empty());
    }

    #[test]
    fn test_blood_group_and_district_are_exact_matches() {
        let users = vec![
            user("d1@x.com", UserRole::Donor, UserStatus::Active, "o+", "Dhaka"),
            user("d2@x.com", UserRole::Donor, UserStatus::Active, "O+", "dhaka"),
        ];

        assert!(match_recipients("O+", "Dhaka", &users).is_empty());
    }

    #[test]
    fn test_duplicate_emails_are_collapsed() {
        let users = vec![
            user("V1@x.com", UserRole::Volunteer, UserStatus::Active, "B+", "Sylhet"),
            user("v1@x.com", UserRole::Volunteer, UserStatus::Active, "B+", "Sylhet"),
        ];

        assert_eq!(staff_recipients(&users).len(), 1);
    }

    #[test]
    fn test_staff_recipients_excludes_donors() {
        let users = vec![
            user("d1@x.com", UserRole::Donor, UserStatus::Active, "O+", "Dhaka"),
            user("v1@x.com", UserRole::Volunteer, UserStatus::Active, "B+", "Sylhet"),
        ];

        assert_eq!(staff_recipients(&users), vec!["v1@x.com"]);
    }
}
