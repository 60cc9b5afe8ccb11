// handlers/protected/lab_director.rs - /lab-director

use axum::extract::State;
use serde_json::{json, Value};

use crate::database::models::{LabDirector, LabDirectorInput};
use crate::handlers::{ApiJson, ApiPath, ApiQuery, FieldsQuery};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<LabDirector>> {
    let directors = state.directors.list().await?;
    Ok(ApiResponse::success("Lab directors", directors))
}

/// POST /lab-director - `{laboratoryId, firstName, lastName, email?, phone?}`
pub async fn post(State(state): State<AppState>, ApiJson(director): ApiJson<LabDirectorInput>) -> ApiResult<Value> {
    let id = state.directors.create(&director).await?;
    Ok(ApiResponse::created("Lab director created", json!({ "id": id })))
}

pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<FieldsQuery>,
) -> ApiResult<Value> {
    let director = state.directors.get_by_id(id, query.as_deref()).await?;
    Ok(ApiResponse::success("Lab director found", director))
}

/// GET /lab-director/laboratory/:id - Director of a laboratory
pub async fn get_by_laboratory(
    State(state): State<AppState>,
    ApiPath(laboratory_id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<FieldsQuery>,
) -> ApiResult<Value> {
    let director = state
        .directors
        .get_by_laboratory(laboratory_id, query.as_deref())
        .await?;
    Ok(ApiResponse::success("Lab director found", director))
}

pub async fn put(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(director): ApiJson<LabDirectorInput>,
) -> ApiResult<()> {
    state.directors.update(id, &director).await?;
    Ok(ApiResponse::message("Lab director updated"))
}
