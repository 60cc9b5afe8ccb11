use std::sync::Arc;

use serde_json::Value;

use super::error::{require_text, ServiceError};
use crate::database::models::establishment::{
    Establishment, EstablishmentInput, ESTABLISHMENT_COLUMNS, ESTABLISHMENT_DEFAULT_COLUMNS,
};
use crate::database::repository::EstablishmentRepository;
use crate::filter::Columns;

#[derive(Clone)]
pub struct EstablishmentService {
    establishments: Arc<dyn EstablishmentRepository>,
}

impl EstablishmentService {
    pub fn new(establishments: Arc<dyn EstablishmentRepository>) -> Self {
        Self { establishments }
    }

    pub async fn create(&self, establishment: &EstablishmentInput) -> Result<i32, ServiceError> {
        require_text("name", &establishment.name)?;
        Ok(self.establishments.insert(establishment).await?)
    }

    pub async fn list(&self) -> Result<Vec<Establishment>, ServiceError> {
        Ok(self.establishments.select_all().await?)
    }

    pub async fn get_by_id(&self, id: i32, fields: Option<&str>) -> Result<Value, ServiceError> {
        let columns = Columns::parse(fields, ESTABLISHMENT_COLUMNS, ESTABLISHMENT_DEFAULT_COLUMNS)?;
        self.establishments
            .select_by_id(id, &columns)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_by_name(&self, name: &str, fields: Option<&str>) -> Result<Value, ServiceError> {
        let columns = Columns::parse(fields, ESTABLISHMENT_COLUMNS, ESTABLISHMENT_DEFAULT_COLUMNS)?;
        self.establishments
            .select_by_name(name, &columns)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Establishment '{}' not found", name)))
    }

    pub async fn update(&self, id: i32, establishment: &EstablishmentInput) -> Result<(), ServiceError> {
        require_text("name", &establishment.name)?;

        if !self.establishments.exists(id).await? {
            return Err(not_found(id));
        }
        self.establishments.update(id, establishment).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.establishments.exists(id).await? {
            return Err(not_found(id));
        }
        self.establishments.delete(id).await?;
        Ok(())
    }
}

fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Establishment {} not found", id))
}
