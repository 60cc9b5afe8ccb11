use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const ESTABLISHMENT_COLUMNS: &[&str] = &[
    "id",
    "name",
    "siret",
    "address",
    "postal_code",
    "city",
    "country",
    "phone",
    "email",
];
pub const ESTABLISHMENT_DEFAULT_COLUMNS: &[&str] = &["id", "name", "siret", "city", "country"];

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Establishment {
    pub id: i32,
    pub name: String,
    pub siret: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentInput {
    pub name: String,
    pub siret: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
