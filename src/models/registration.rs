//! Registration models matching the frontend form interfaces.
//!
//! Submissions are the tagged payloads crossing the form boundary; the
//! registration rows add the store-assigned id and submission timestamp.
//! Rows are immutable after insert except for deletion.

use serde::{Deserialize, Serialize};

/// Whether a recruitment applicant already belongs to a college club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubMembership {
    Yes,
    No,
}

impl ClubMembership {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClubMembership::Yes => "yes",
            ClubMembership::No => "no",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "yes" => Some(ClubMembership::Yes),
            "no" => Some(ClubMembership::No),
            _ => None,
        }
    }
}

/// An additional workshop team member (team leader fields minus email).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopTeamMember {
    pub name: String,
    pub usn: String,
    pub department: String,
    pub phone: String,
}

/// Workshop registration form payload, validated before it reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopSubmission {
    pub name: String,
    pub usn: String,
    pub year: String,
    pub department: String,
    pub phone_number: String,
    pub email: String,
    /// Up to three additional team members
    #[serde(default)]
    pub members: Vec<WorkshopTeamMember>,
    /// Opaque reference to the payment proof
    pub payment_proof: String,
}

/// A workshop registration row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopRegistration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub usn: String,
    pub year: String,
    pub department: String,
    pub phone_number: String,
    pub email: String,
    #[serde(default)]
    pub members: Vec<WorkshopTeamMember>,
    pub payment_proof: String,
    pub timestamp: String,
}

/// Recruitment registration form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentSubmission {
    pub name: String,
    pub year: String,
    pub department: String,
    pub usn: String,
    pub contact_number: String,
    pub in_college_club: ClubMembership,
    /// Required iff `in_college_club` is yes
    #[serde(default)]
    pub club_name: Option<String>,
    pub skills: String,
}

/// A recruitment registration row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentRegistration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub year: String,
    pub department: String,
    pub usn: String,
    pub contact_number: String,
    pub in_college_club: ClubMembership,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_name: Option<String>,
    pub skills: String,
    pub timestamp: String,
}

/// A workshop record buffered in the local store by the pre-database site
/// revision, waiting to be pushed to the registration database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferedWorkshop {
    #[serde(flatten)]
    pub submission: WorkshopSubmission,
    pub timestamp: String,
}

/// A recruitment record buffered in the local store by the pre-database
/// site revision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferedRecruitment {
    #[serde(flatten)]
    pub submission: RecruitmentSubmission,
    pub timestamp: String,
}
