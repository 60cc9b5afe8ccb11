use std::sync::Arc;

use serde_json::Value;

use super::error::{require_text, ServiceError};
use crate::database::models::candidate::{
    CandidateInput, CandidateListItem, CANDIDATE_COLUMNS, CANDIDATE_DEFAULT_COLUMNS,
};
use crate::database::repository::CandidateRepository;
use crate::filter::Columns;

#[derive(Clone)]
pub struct CandidateService {
    candidates: Arc<dyn CandidateRepository>,
}

impl CandidateService {
    pub fn new(candidates: Arc<dyn CandidateRepository>) -> Self {
        Self { candidates }
    }

    /// Creates a candidate supervised by `input.advisor_id`, or by
    /// `current_advisor` when the payload leaves it out.
    ///
    /// Returns `None` without touching the store when a name is blank.
    pub async fn create(&self, current_advisor: i32, input: &CandidateInput) -> Result<Option<i32>, ServiceError> {
        if input.first_name.trim().is_empty() || input.last_name.trim().is_empty() {
            tracing::debug!("Candidate not created: blank name");
            return Ok(None);
        }

        let advisor_id = input.advisor_id.unwrap_or(current_advisor);
        let id = self.candidates.insert(advisor_id, input).await?;
        Ok(Some(id))
    }

    pub async fn list(&self) -> Result<Vec<CandidateListItem>, ServiceError> {
        Ok(self.candidates.select_all().await?)
    }

    pub async fn list_for_advisor(&self, advisor_id: i32) -> Result<Vec<CandidateListItem>, ServiceError> {
        Ok(self.candidates.select_by_advisor(advisor_id).await?)
    }

    pub async fn get_by_id(&self, id: i32, fields: Option<&str>) -> Result<Value, ServiceError> {
        let columns = Columns::parse(fields, CANDIDATE_COLUMNS, CANDIDATE_DEFAULT_COLUMNS)?;
        self.candidates
            .select_by_id(id, &columns)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: i32, input: &CandidateInput) -> Result<(), ServiceError> {
        require_text("firstName", &input.first_name)?;
        require_text("lastName", &input.last_name)?;

        if !self.candidates.exists(id).await? {
            return Err(not_found(id));
        }
        self.candidates.update(id, input).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.candidates.exists(id).await? {
            return Err(not_found(id));
        }
        self.candidates.delete(id).await?;
        Ok(())
    }
}

fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Candidate {} not found", id))
}
