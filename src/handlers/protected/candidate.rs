// handlers/protected/candidate.rs - /candidate

use axum::{extract::State, Extension};
use serde_json::{json, Value};

use crate::database::models::{CandidateInput, CandidateListItem};
use crate::error::ApiError;
use crate::handlers::{ApiJson, ApiPath, ApiQuery, FieldsQuery};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /candidate - Candidates with their advisor's name
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<CandidateListItem>> {
    let candidates = state.candidates.list().await?;
    Ok(ApiResponse::success("Candidates", candidates))
}

/// GET /candidate/mine - Candidates supervised by the authenticated advisor
pub async fn list_mine(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Vec<CandidateListItem>> {
    let candidates = state.candidates.list_for_advisor(auth.user_id).await?;
    Ok(ApiResponse::success("Candidates", candidates))
}

/// POST /candidate - Create a candidate
///
/// `advisorId` defaults to the authenticated advisor. A blank first or last
/// name creates nothing and responds 400.
pub async fn post(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ApiJson(candidate): ApiJson<CandidateInput>,
) -> ApiResult<Value> {
    match state.candidates.create(auth.user_id, &candidate).await? {
        Some(id) => Ok(ApiResponse::created("Candidate created", json!({ "id": id }))),
        None => Err(ApiError::bad_request("firstName and lastName are required")),
    }
}

pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<FieldsQuery>,
) -> ApiResult<Value> {
    let candidate = state.candidates.get_by_id(id, query.as_deref()).await?;
    Ok(ApiResponse::success("Candidate found", candidate))
}

pub async fn put(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(candidate): ApiJson<CandidateInput>,
) -> ApiResult<()> {
    state.candidates.update(id, &candidate).await?;
    Ok(ApiResponse::message("Candidate updated"))
}

pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    state.candidates.delete(id).await?;
    Ok(ApiResponse::message("Candidate deleted"))
}
