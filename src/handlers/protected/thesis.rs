// handlers/protected/thesis.rs - /thesis and its workflow actions

use axum::{extract::State, Extension};
use serde_json::{json, Value};

use crate::database::models::{AnrtNumber, CandidateAssignment, JobVacancy, ThesisInput, ThesisListItem, TopicValidation};
use crate::filter::ThesisFilter;
use crate::handlers::{ApiJson, ApiPath, ApiQuery, FieldsQuery};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /thesis - Filtered thesis listing
///
/// Optional query parameters, AND-combined: `keyword`, `year`, `domain`,
/// `advisorName` (matches the advisor's first or last name). Text filters are
/// case-insensitive substring matches. A non-numeric `year` responds 400.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<ThesisFilter>,
) -> ApiResult<Vec<ThesisListItem>> {
    let theses = state.theses.list(&filter).await?;
    Ok(ApiResponse::success("Theses", theses))
}

/// GET /thesis/mine - Theses of the authenticated advisor
pub async fn list_mine(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Vec<ThesisListItem>> {
    let theses = state.theses.list_for_advisor(auth.user_id).await?;
    Ok(ApiResponse::success("Theses", theses))
}

/// POST /thesis - Create a thesis owned by the authenticated advisor
///
/// Expected Input:
/// ```json
/// {
///   "topic": "Sparse attention for protein folding",
///   "year": 2024,
///   "domain": "informatique",
///   "keywords": "ml, biology",
///   "description": "...",      // optional
///   "laboratoryId": 3          // optional
/// }
/// ```
pub async fn post(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ApiJson(thesis): ApiJson<ThesisInput>,
) -> ApiResult<Value> {
    let id = state.theses.create(auth.user_id, &thesis).await?;
    Ok(ApiResponse::created("Thesis created", json!({ "id": id })))
}

pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<FieldsQuery>,
) -> ApiResult<Value> {
    let thesis = state.theses.get_by_id(id, query.as_deref()).await?;
    Ok(ApiResponse::success("Thesis found", thesis))
}

pub async fn put(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(thesis): ApiJson<ThesisInput>,
) -> ApiResult<()> {
    state.theses.update(id, &thesis).await?;
    Ok(ApiResponse::message("Thesis updated"))
}

/// PUT /thesis/:id/validate-topic - `{topicValidation, refusedTopic?}`
pub async fn validate_topic(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(validation): ApiJson<TopicValidation>,
) -> ApiResult<()> {
    state.theses.validate_topic(id, &validation).await?;
    let message = if validation.topic_validation {
        "Topic validated"
    } else {
        "Topic refused"
    };
    Ok(ApiResponse::message(message))
}

/// PUT /thesis/:id/update-job-vacancy - `{jobVacancy}`
pub async fn update_job_vacancy(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<JobVacancy>,
) -> ApiResult<()> {
    state.theses.update_job_vacancy(id, &body.job_vacancy).await?;
    Ok(ApiResponse::message("Job vacancy updated"))
}

/// PUT /thesis/:id/assign-candidate - `{candidateId}`
pub async fn assign_candidate(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<CandidateAssignment>,
) -> ApiResult<()> {
    state.theses.assign_candidate(id, body.candidate_id).await?;
    Ok(ApiResponse::message("Candidate assigned"))
}

/// PUT /thesis/:id/add-anrt-number - `{anrtNumber}`
pub async fn add_anrt_number(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<AnrtNumber>,
) -> ApiResult<()> {
    state.theses.add_anrt_number(id, &body.anrt_number).await?;
    Ok(ApiResponse::message("ANRT number added"))
}
