use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const LAB_DIRECTOR_COLUMNS: &[&str] = &["id", "laboratory_id", "first_name", "last_name", "email", "phone"];
pub const LAB_DIRECTOR_DEFAULT_COLUMNS: &[&str] = LAB_DIRECTOR_COLUMNS;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LabDirector {
    pub id: i32,
    pub laboratory_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabDirectorInput {
    pub laboratory_id: i32,
    #[serde(flatten)]
    pub details: DirectorDetails,
}
