use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const THESIS_COLUMNS: &[&str] = &[
    "id",
    "advisor_id",
    "candidate_id",
    "laboratory_id",
    "topic",
    "year",
    "domain",
    "keywords",
    "description",
    "topic_validation",
    "refused_topic",
    "job_vacancy",
    "anrt_number",
    "created_at",
];
pub const THESIS_DEFAULT_COLUMNS: &[&str] = &[
    "id",
    "advisor_id",
    "candidate_id",
    "laboratory_id",
    "topic",
    "year",
    "domain",
    "keywords",
    "topic_validation",
];

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Thesis {
    pub id: i32,
    pub advisor_id: i32,
    pub candidate_id: Option<i32>,
    pub laboratory_id: Option<i32>,
    pub topic: String,
    pub year: i32,
    pub domain: String,
    pub keywords: String,
    pub description: Option<String>,
    pub topic_validation: bool,
    pub refused_topic: Option<String>,
    pub job_vacancy: Option<String>,
    pub anrt_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Thesis with the advisor, candidate and laboratory display fields.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ThesisListItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub thesis: Thesis,
    pub advisor_first_name: String,
    pub advisor_last_name: String,
    pub candidate_first_name: Option<String>,
    pub candidate_last_name: Option<String>,
    pub laboratory_name: Option<String>,
}

/// Editable thesis columns, used for creation and whole-record updates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisInput {
    pub topic: String,
    pub year: i32,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub keywords: String,
    pub description: Option<String>,
    pub laboratory_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicValidation {
    pub topic_validation: bool,
    pub refused_topic: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobVacancy {
    pub job_vacancy: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateAssignment {
    pub candidate_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnrtNumber {
    pub anrt_number: String,
}
