use std::sync::Arc;

use serde_json::Value;

use super::error::ServiceError;
use crate::database::models::advisor::{AdvisorInput, AdvisorListItem, ADVISOR_COLUMNS, ADVISOR_DEFAULT_COLUMNS};
use crate::database::repository::AdvisorRepository;
use crate::filter::Columns;

/// Advisor rows are created by registration; this service reads and edits them.
#[derive(Clone)]
pub struct AdvisorService {
    advisors: Arc<dyn AdvisorRepository>,
}

impl AdvisorService {
    pub fn new(advisors: Arc<dyn AdvisorRepository>) -> Self {
        Self { advisors }
    }

    pub async fn list(&self) -> Result<Vec<AdvisorListItem>, ServiceError> {
        Ok(self.advisors.select_all().await?)
    }

    pub async fn get_by_id(&self, id: i32, fields: Option<&str>) -> Result<Value, ServiceError> {
        let columns = Columns::parse(fields, ADVISOR_COLUMNS, ADVISOR_DEFAULT_COLUMNS)?;
        self.advisors
            .select_by_id(id, &columns)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: i32, advisor: &AdvisorInput) -> Result<(), ServiceError> {
        if !self.advisors.exists(id).await? {
            return Err(not_found(id));
        }
        self.advisors.update(id, advisor).await?;
        Ok(())
    }
}

fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Advisor {} not found", id))
}
