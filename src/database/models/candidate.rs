use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const CANDIDATE_COLUMNS: &[&str] = &[
    "id",
    "advisor_id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "committee_validation",
    "hr_validation",
    "zrr_validation",
];
pub const CANDIDATE_DEFAULT_COLUMNS: &[&str] = CANDIDATE_COLUMNS;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i32,
    pub advisor_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub committee_validation: bool,
    pub hr_validation: bool,
    pub zrr_validation: bool,
}

/// Candidate with the supervising advisor's name.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CandidateListItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub candidate: Candidate,
    pub advisor_first_name: String,
    pub advisor_last_name: String,
}

/// Create/update payload. `advisor_id` defaults to the authenticated advisor on create
/// and is left unchanged on update when absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInput {
    pub advisor_id: Option<i32>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub committee_validation: bool,
    #[serde(default)]
    pub hr_validation: bool,
    #[serde(default)]
    pub zrr_validation: bool,
}
