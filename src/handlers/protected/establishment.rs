// handlers/protected/establishment.rs - /establishment

use axum::extract::State;
use serde_json::{json, Value};

use crate::database::models::{Establishment, EstablishmentInput};
use crate::handlers::{ApiJson, ApiPath, ApiQuery, FieldsQuery};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Establishment>> {
    let establishments = state.establishments.list().await?;
    Ok(ApiResponse::success("Establishments", establishments))
}

/// POST /establishment - Responds 201 with `{"id": ...}`
pub async fn post(
    State(state): State<AppState>,
    ApiJson(establishment): ApiJson<EstablishmentInput>,
) -> ApiResult<Value> {
    let id = state.establishments.create(&establishment).await?;
    Ok(ApiResponse::created("Establishment created", json!({ "id": id })))
}

pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<FieldsQuery>,
) -> ApiResult<Value> {
    let establishment = state.establishments.get_by_id(id, query.as_deref()).await?;
    Ok(ApiResponse::success("Establishment found", establishment))
}

/// GET /establishment/name/:name - Exact name match
pub async fn get_by_name(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
    ApiQuery(query): ApiQuery<FieldsQuery>,
) -> ApiResult<Value> {
    let establishment = state.establishments.get_by_name(&name, query.as_deref()).await?;
    Ok(ApiResponse::success("Establishment found", establishment))
}

pub async fn put(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(establishment): ApiJson<EstablishmentInput>,
) -> ApiResult<()> {
    state.establishments.update(id, &establishment).await?;
    Ok(ApiResponse::message("Establishment updated"))
}

pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    state.establishments.delete(id).await?;
    Ok(ApiResponse::message("Establishment deleted"))
}
