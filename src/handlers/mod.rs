// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth): registration, login, service info and health.
// Protected (JWT auth): everything else; handlers receive `AuthUser` from the
// request extensions set by `jwt_auth_middleware`.

pub mod extract;
pub mod protected;
pub mod public;

pub use extract::{ApiJson, ApiPath, ApiQuery};

use serde::Deserialize;

/// `?fields=a,b,c` column projection for single-record reads.
#[derive(Debug, Default, Deserialize)]
pub struct FieldsQuery {
    pub fields: Option<String>,
}

impl FieldsQuery {
    pub fn as_deref(&self) -> Option<&str> {
        self.fields.as_deref()
    }
}
