// handlers/protected/laboratory.rs - /laboratory

use axum::extract::State;
use serde_json::Value;

use crate::database::models::{CreatedLaboratory, Laboratory, LaboratoryInput, LaboratoryListItem, NewLaboratory};
use crate::handlers::{ApiJson, ApiPath, ApiQuery, FieldsQuery};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /laboratory - Laboratories with their director's name
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<LaboratoryListItem>> {
    let laboratories = state.laboratories.list().await?;
    Ok(ApiResponse::success("Laboratories", laboratories))
}

/// POST /laboratory - Create a laboratory and its director
///
/// Expected Input:
/// ```json
/// {
///   "name": "LPNHE",
///   "address": "4 place Jussieu",
///   "city": "Paris",
///   "country": "France",
///   "means": "...",
///   "expertise": "...",
///   "director": { "firstName": "Ada", "lastName": "Lovelace", "email": "...", "phone": "..." }
/// }
/// ```
///
/// Responds 201 with `{"id": ..., "directorId": ...}`.
pub async fn post(
    State(state): State<AppState>,
    ApiJson(laboratory): ApiJson<NewLaboratory>,
) -> ApiResult<CreatedLaboratory> {
    let created = state.laboratories.create(&laboratory).await?;
    Ok(ApiResponse::created("Laboratory created", created))
}

pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<FieldsQuery>,
) -> ApiResult<Value> {
    let laboratory = state.laboratories.get_by_id(id, query.as_deref()).await?;
    Ok(ApiResponse::success("Laboratory found", laboratory))
}

pub async fn get_by_name(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
    ApiQuery(query): ApiQuery<FieldsQuery>,
) -> ApiResult<Value> {
    let laboratory = state.laboratories.get_by_name(&name, query.as_deref()).await?;
    Ok(ApiResponse::success("Laboratory found", laboratory))
}

/// GET /laboratory/city/:city - Every laboratory in the city (possibly none)
pub async fn list_by_city(State(state): State<AppState>, ApiPath(city): ApiPath<String>) -> ApiResult<Vec<Laboratory>> {
    let laboratories = state.laboratories.list_by_city(&city).await?;
    Ok(ApiResponse::success("Laboratories", laboratories))
}

/// GET /laboratory/country/:country - Every laboratory in the country (possibly none)
pub async fn list_by_country(
    State(state): State<AppState>,
    ApiPath(country): ApiPath<String>,
) -> ApiResult<Vec<Laboratory>> {
    let laboratories = state.laboratories.list_by_country(&country).await?;
    Ok(ApiResponse::success("Laboratories", laboratories))
}

pub async fn put(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(laboratory): ApiJson<LaboratoryInput>,
) -> ApiResult<()> {
    state.laboratories.update(id, &laboratory).await?;
    Ok(ApiResponse::message("Laboratory updated"))
}

pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    state.laboratories.delete(id).await?;
    Ok(ApiResponse::message("Laboratory deleted"))
}
