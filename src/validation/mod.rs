//! Submission validation.
//!
//! The same constraints the registration forms check client-side are
//! enforced here, in front of the registration store, so a hand-crafted
//! request cannot bypass them.

use crate::errors::AppError;
use crate::models::{ClubMembership, RecruitmentSubmission, WorkshopSubmission};

/// Maximum number of additional workshop team members.
const MAX_EXTRA_MEMBERS: usize = 3;

/// Validate a workshop registration payload.
pub fn validate_workshop(submission: &WorkshopSubmission) -> Result<(), AppError> {
    require(&submission.name, "Name is required")?;
    require(&submission.usn, "USN is required")?;
    require(&submission.year, "Year is required")?;
    require(&submission.department, "Department is required")?;
    require(&submission.payment_proof, "Payment proof is required")?;

    if !is_valid_phone(&submission.phone_number) {
        return Err(AppError::Validation(
            "Phone number must be exactly 10 digits".to_string(),
        ));
    }
    if !is_valid_email(&submission.email) {
        return Err(AppError::Validation(
            "A valid email address is required".to_string(),
        ));
    }

    if submission.members.len() > MAX_EXTRA_MEMBERS {
        return Err(AppError::Validation(format!(
            "At most {} additional team members are allowed",
            MAX_EXTRA_MEMBERS
        )));
    }
    for (i, member) in submission.members.iter().enumerate() {
        let label = format!("Team member {}", i + 2);
        require(&member.name, &format!("{}: name is required", label))?;
        require(&member.usn, &format!("{}: USN is required", label))?;
        require(
            &member.department,
            &format!("{}: department is required", label),
        )?;
        if !is_valid_phone(&member.phone) {
            return Err(AppError::Validation(format!(
                "{}: phone number must be exactly 10 digits",
                label
            )));
        }
    }

    Ok(())
}

/// Validate a recruitment registration payload.
pub fn validate_recruitment(submission: &RecruitmentSubmission) -> Result<(), AppError> {
    require(&submission.name, "Name is required")?;
    require(&submission.year, "Year is required")?;
    require(&submission.department, "Department is required")?;
    require(&submission.usn, "USN is required")?;
    require(&submission.skills, "Skills are required")?;

    if !is_valid_phone(&submission.contact_number) {
        return Err(AppError::Validation(
            "Contact number must be exactly 10 digits".to_string(),
        ));
    }

    // Club name is conditionally required, checked only at submission time
    if submission.in_college_club == ClubMembership::Yes
        && submission
            .club_name
            .as_deref()
            .map(str::trim)
            .unwrap_or("")
            .is_empty()
    {
        return Err(AppError::Validation(
            "Club name is required when already in a college club".to_string(),
        ));
    }

    Ok(())
}

fn require(value: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(())
}

/// Exactly 10 ASCII digits.
fn is_valid_phone(s: &str) -> bool {
    s.len() == 10 && s.chars().all(|c| c.is_ascii_digit())
}

/// local@domain with a dot in the domain and no whitespace.
fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkshopTeamMember;

    fn workshop() -> WorkshopSubmission {
        WorkshopSubmission {
            name: "Asha Rao".to_string(),
            usn: "1SI21CS001".to_string(),
            year: "2nd".to_string(),
            department: "CSE".to_string(),
            phone_number: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            members: vec![],
            payment_proof: "upi-ref-8812".to_string(),
        }
    }

    fn recruitment() -> RecruitmentSubmission {
        RecruitmentSubmission {
            name: "Ravi Kumar".to_string(),
            year: "1st".to_string(),
            department: "ECE".to_string(),
            usn: "1SI22EC042".to_string(),
            contact_number: "9123456780".to_string(),
            in_college_club: ClubMembership::No,
            club_name: None,
            skills: "CAD, soldering".to_string(),
        }
    }

    #[test]
    fn test_valid_workshop_passes() {
        assert!(validate_workshop(&workshop()).is_ok());
    }

    #[test]
    fn test_workshop_requires_name() {
        let mut sub = workshop();
        sub.name = "  ".to_string();
        assert!(matches!(
            validate_workshop(&sub),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_phone_must_be_ten_digits() {
        for bad in ["987654321", "98765432100", "98765-4321", "phone12345"] {
            let mut sub = workshop();
            sub.phone_number = bad.to_string();
            assert!(validate_workshop(&sub).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("asha@example.com"));
        assert!(is_valid_email("a.b@sub.example.org"));
        assert!(!is_valid_email("asha"));
        assert!(!is_valid_email("asha@nodot"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("asha@.com"));
    }

    #[test]
    fn test_workshop_member_limit() {
        let member = WorkshopTeamMember {
            name: "B".to_string(),
            usn: "1SI21CS002".to_string(),
            department: "CSE".to_string(),
            phone: "9876543211".to_string(),
        };
        let mut sub = workshop();
        sub.members = vec![member.clone(), member.clone(), member.clone()];
        assert!(validate_workshop(&sub).is_ok());

        sub.members.push(member);
        assert!(validate_workshop(&sub).is_err());
    }

    #[test]
    fn test_workshop_member_fields_required() {
        let mut sub = workshop();
        sub.members = vec![WorkshopTeamMember {
            name: "B".to_string(),
            usn: "".to_string(),
            department: "CSE".to_string(),
            phone: "9876543211".to_string(),
        }];
        assert!(validate_workshop(&sub).is_err());
    }

    #[test]
    fn test_club_name_required_when_in_club() {
        let mut sub = recruitment();
        sub.in_college_club = ClubMembership::Yes;
        sub.club_name = None;
        assert!(validate_recruitment(&sub).is_err());

        sub.club_name = Some("".to_string());
        assert!(validate_recruitment(&sub).is_err());

        sub.club_name = Some("Robotics Club".to_string());
        assert!(validate_recruitment(&sub).is_ok());
    }

    #[test]
    fn test_club_name_optional_when_not_in_club() {
        let sub = recruitment();
        assert_eq!(sub.in_college_club, ClubMembership::No);
        assert!(sub.club_name.is_none());
        assert!(validate_recruitment(&sub).is_ok());
    }
}
