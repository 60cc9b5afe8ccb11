use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::lab_director::DirectorDetails;

pub const LABORATORY_COLUMNS: &[&str] = &["id", "name", "address", "city", "country", "means", "expertise"];
pub const LABORATORY_DEFAULT_COLUMNS: &[&str] = &["id", "name", "city", "country"];

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Laboratory {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub means: Option<String>,
    pub expertise: Option<String>,
}

/// Laboratory with its director's name, for listings.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LaboratoryListItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub laboratory: Laboratory,
    pub director_id: Option<i32>,
    pub director_first_name: Option<String>,
    pub director_last_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaboratoryInput {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub means: Option<String>,
    pub expertise: Option<String>,
}

/// Creation payload: the laboratory plus the director created alongside it.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLaboratory {
    #[serde(flatten)]
    pub laboratory: LaboratoryInput,
    pub director: DirectorDetails,
}

/// Ids produced by a laboratory creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedLaboratory {
    pub id: i32,
    pub director_id: i32,
}
