use std::sync::Arc;

use serde_json::Value;

use super::error::{optional_text, require_text, ServiceError};
use crate::database::models::thesis::{
    ThesisInput, ThesisListItem, TopicValidation, THESIS_COLUMNS, THESIS_DEFAULT_COLUMNS,
};
use crate::database::repository::{CandidateRepository, ThesisRepository};
use crate::filter::{Columns, ThesisFilter};

/// Thesis records and their workflow steps.
///
/// The workflow actions (topic validation, job vacancy, candidate assignment,
/// ANRT number) only require the thesis to exist; they may run in any order.
#[derive(Clone)]
pub struct ThesisService {
    theses: Arc<dyn ThesisRepository>,
    candidates: Arc<dyn CandidateRepository>,
}

impl ThesisService {
    pub fn new(theses: Arc<dyn ThesisRepository>, candidates: Arc<dyn CandidateRepository>) -> Self {
        Self { theses, candidates }
    }

    /// Creates a thesis owned by `advisor_id` with the topic not yet validated.
    pub async fn create(&self, advisor_id: i32, thesis: &ThesisInput) -> Result<i32, ServiceError> {
        require_text("topic", &thesis.topic)?;

        let id = self.theses.insert(advisor_id, thesis).await?;
        tracing::info!("Advisor {} created thesis {}", advisor_id, id);
        Ok(id)
    }

    pub async fn list(&self, filter: &ThesisFilter) -> Result<Vec<ThesisListItem>, ServiceError> {
        // Surface bad filter values as client errors before querying
        filter.to_where_sql()?;
        Ok(self.theses.select_filtered(filter).await?)
    }

    pub async fn list_for_advisor(&self, advisor_id: i32) -> Result<Vec<ThesisListItem>, ServiceError> {
        Ok(self.theses.select_by_advisor(advisor_id).await?)
    }

    pub async fn get_by_id(&self, id: i32, fields: Option<&str>) -> Result<Value, ServiceError> {
        let columns = Columns::parse(fields, THESIS_COLUMNS, THESIS_DEFAULT_COLUMNS)?;
        self.theses
            .select_by_id(id, &columns)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: i32, thesis: &ThesisInput) -> Result<(), ServiceError> {
        require_text("topic", &thesis.topic)?;

        self.ensure_exists(id).await?;
        self.theses.update(id, thesis).await?;
        Ok(())
    }

    /// Accepting clears any earlier refusal reason; refusing records it.
    pub async fn validate_topic(&self, id: i32, validation: &TopicValidation) -> Result<(), ServiceError> {
        self.ensure_exists(id).await?;

        let refused = if validation.topic_validation {
            None
        } else {
            optional_text(validation.refused_topic.as_deref())
        };
        self.theses
            .set_topic_validation(id, validation.topic_validation, refused)
            .await?;

        tracing::info!(
            "Thesis {} topic {}",
            id,
            if validation.topic_validation { "validated" } else { "refused" }
        );
        Ok(())
    }

    pub async fn update_job_vacancy(&self, id: i32, job_vacancy: &str) -> Result<(), ServiceError> {
        require_text("jobVacancy", job_vacancy)?;

        self.ensure_exists(id).await?;
        self.theses.set_job_vacancy(id, job_vacancy.trim()).await?;
        Ok(())
    }

    pub async fn assign_candidate(&self, id: i32, candidate_id: i32) -> Result<(), ServiceError> {
        self.ensure_exists(id).await?;
        if !self.candidates.exists(candidate_id).await? {
            return Err(ServiceError::NotFound(format!("Candidate {} not found", candidate_id)));
        }
        self.theses.set_candidate(id, candidate_id).await?;
        Ok(())
    }

    pub async fn add_anrt_number(&self, id: i32, anrt_number: &str) -> Result<(), ServiceError> {
        require_text("anrtNumber", anrt_number)?;

        self.ensure_exists(id).await?;
        self.theses.set_anrt_number(id, anrt_number.trim()).await?;
        Ok(())
    }

    async fn ensure_exists(&self, id: i32) -> Result<(), ServiceError> {
        if !self.theses.exists(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Thesis {} not found", id))
}
