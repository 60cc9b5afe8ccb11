use std::sync::Arc;

use serde_json::Value;

use super::error::{require_text, ServiceError};
use crate::database::models::lab_director::{
    LabDirector, LabDirectorInput, LAB_DIRECTOR_COLUMNS, LAB_DIRECTOR_DEFAULT_COLUMNS,
};
use crate::database::repository::{LabDirectorRepository, LaboratoryRepository};
use crate::filter::Columns;

#[derive(Clone)]
pub struct LabDirectorService {
    directors: Arc<dyn LabDirectorRepository>,
    laboratories: Arc<dyn LaboratoryRepository>,
}

impl LabDirectorService {
    pub fn new(directors: Arc<dyn LabDirectorRepository>, laboratories: Arc<dyn LaboratoryRepository>) -> Self {
        Self {
            directors,
            laboratories,
        }
    }

    pub async fn create(&self, director: &LabDirectorInput) -> Result<i32, ServiceError> {
        require_text("firstName", &director.details.first_name)?;
        require_text("lastName", &director.details.last_name)?;

        self.ensure_laboratory(director.laboratory_id).await?;
        Ok(self.directors.insert(director.laboratory_id, &director.details).await?)
    }

    pub async fn list(&self) -> Result<Vec<LabDirector>, ServiceError> {
        Ok(self.directors.select_all().await?)
    }

    pub async fn get_by_id(&self, id: i32, fields: Option<&str>) -> Result<Value, ServiceError> {
        let columns = Columns::parse(fields, LAB_DIRECTOR_COLUMNS, LAB_DIRECTOR_DEFAULT_COLUMNS)?;
        self.directors
            .select_by_id(id, &columns)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_by_laboratory(&self, laboratory_id: i32, fields: Option<&str>) -> Result<Value, ServiceError> {
        let columns = Columns::parse(fields, LAB_DIRECTOR_COLUMNS, LAB_DIRECTOR_DEFAULT_COLUMNS)?;
        self.directors
            .select_by_laboratory(laboratory_id, &columns)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No director for laboratory {}", laboratory_id)))
    }

    pub async fn update(&self, id: i32, director: &LabDirectorInput) -> Result<(), ServiceError> {
        require_text("firstName", &director.details.first_name)?;
        require_text("lastName", &director.details.last_name)?;

        if !self.directors.exists(id).await? {
            return Err(not_found(id));
        }
        self.ensure_laboratory(director.laboratory_id).await?;
        self.directors
            .update(id, director.laboratory_id, &director.details)
            .await?;
        Ok(())
    }

    async fn ensure_laboratory(&self, laboratory_id: i32) -> Result<(), ServiceError> {
        if !self.laboratories.exists(laboratory_id).await? {
            return Err(ServiceError::NotFound(format!("Laboratory {} not found", laboratory_id)));
        }
        Ok(())
    }
}

fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Lab director {} not found", id))
}
