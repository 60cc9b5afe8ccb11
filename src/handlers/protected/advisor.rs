// handlers/protected/advisor.rs - /advisor

use axum::extract::State;
use serde_json::Value;

use crate::database::models::{AdvisorInput, AdvisorListItem};
use crate::handlers::{ApiJson, ApiPath, ApiQuery, FieldsQuery};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /advisor - Advisors with their names and establishment
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<AdvisorListItem>> {
    let advisors = state.advisors.list().await?;
    Ok(ApiResponse::success("Advisors", advisors))
}

pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<FieldsQuery>,
) -> ApiResult<Value> {
    let advisor = state.advisors.get_by_id(id, query.as_deref()).await?;
    Ok(ApiResponse::success("Advisor found", advisor))
}

pub async fn put(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(advisor): ApiJson<AdvisorInput>,
) -> ApiResult<()> {
    state.advisors.update(id, &advisor).await?;
    Ok(ApiResponse::message("Advisor updated"))
}
