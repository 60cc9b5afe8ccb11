use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const ADVISOR_COLUMNS: &[&str] = &[
    "id",
    "establishment_id",
    "department",
    "research_area",
    "cost_center",
    "phone",
];
pub const ADVISOR_DEFAULT_COLUMNS: &[&str] = ADVISOR_COLUMNS;

/// Advisor extension row; `id` is the owning user's id.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Advisor {
    pub id: i32,
    pub establishment_id: Option<i32>,
    pub department: Option<String>,
    pub research_area: Option<String>,
    pub cost_center: Option<String>,
    pub phone: Option<String>,
}

/// Advisor joined with its user names and establishment name.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorListItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub advisor: Advisor,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub establishment_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorInput {
    pub establishment_id: Option<i32>,
    pub department: Option<String>,
    pub research_area: Option<String>,
    pub cost_center: Option<String>,
    pub phone: Option<String>,
}
