use std::sync::Arc;

use serde_json::Value;

use super::error::{require_text, ServiceError};
use crate::database::models::laboratory::{
    CreatedLaboratory, Laboratory, LaboratoryInput, LaboratoryListItem, NewLaboratory, LABORATORY_COLUMNS,
    LABORATORY_DEFAULT_COLUMNS,
};
use crate::database::repository::{LabDirectorRepository, LaboratoryRepository};
use crate::filter::Columns;

#[derive(Clone)]
pub struct LaboratoryService {
    laboratories: Arc<dyn LaboratoryRepository>,
    directors: Arc<dyn LabDirectorRepository>,
}

impl LaboratoryService {
    pub fn new(laboratories: Arc<dyn LaboratoryRepository>, directors: Arc<dyn LabDirectorRepository>) -> Self {
        Self {
            laboratories,
            directors,
        }
    }

    /// Creates the laboratory, then its director pointing at it.
    ///
    /// The two inserts are not atomic: when the director insert fails the
    /// laboratory is deleted again before the error is returned.
    pub async fn create(&self, new: &NewLaboratory) -> Result<CreatedLaboratory, ServiceError> {
        require_text("name", &new.laboratory.name)?;
        require_text("director.firstName", &new.director.first_name)?;
        require_text("director.lastName", &new.director.last_name)?;

        let id = self.laboratories.insert(&new.laboratory).await?;

        match self.directors.insert(id, &new.director).await {
            Ok(director_id) => {
                tracing::info!("Created laboratory {} with director {}", id, director_id);
                Ok(CreatedLaboratory { id, director_id })
            }
            Err(e) => {
                tracing::error!("Director creation failed for laboratory {}, rolling back: {}", id, e);
                if let Err(cleanup) = self.laboratories.delete(id).await {
                    tracing::error!("Failed to remove laboratory {}: {}", id, cleanup);
                }
                Err(e.into())
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<LaboratoryListItem>, ServiceError> {
        Ok(self.laboratories.select_all().await?)
    }

    pub async fn get_by_id(&self, id: i32, fields: Option<&str>) -> Result<Value, ServiceError> {
        let columns = Columns::parse(fields, LABORATORY_COLUMNS, LABORATORY_DEFAULT_COLUMNS)?;
        self.laboratories
            .select_by_id(id, &columns)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_by_name(&self, name: &str, fields: Option<&str>) -> Result<Value, ServiceError> {
        let columns = Columns::parse(fields, LABORATORY_COLUMNS, LABORATORY_DEFAULT_COLUMNS)?;
        self.laboratories
            .select_by_name(name, &columns)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Laboratory '{}' not found", name)))
    }

    pub async fn list_by_city(&self, city: &str) -> Result<Vec<Laboratory>, ServiceError> {
        Ok(self.laboratories.select_by_city(city).await?)
    }

    pub async fn list_by_country(&self, country: &str) -> Result<Vec<Laboratory>, ServiceError> {
        Ok(self.laboratories.select_by_country(country).await?)
    }

    pub async fn update(&self, id: i32, laboratory: &LaboratoryInput) -> Result<(), ServiceError> {
        require_text("name", &laboratory.name)?;

        if !self.laboratories.exists(id).await? {
            return Err(not_found(id));
        }
        self.laboratories.update(id, laboratory).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.laboratories.exists(id).await? {
            return Err(not_found(id));
        }
        self.laboratories.delete(id).await?;
        Ok(())
    }
}

fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Laboratory {} not found", id))
}
