// handlers/protected/user.rs - /user/:id and /user/email/:email

use axum::extract::State;
use serde_json::Value;

use crate::database::models::UserUpdate;
use crate::handlers::{ApiJson, ApiPath, ApiQuery, FieldsQuery};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /user/:id - User by id, `?fields=` to choose columns
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<FieldsQuery>,
) -> ApiResult<Value> {
    let user = state.users.get_by_id(id, query.as_deref()).await?;
    Ok(ApiResponse::success("User found", user))
}

/// GET /user/email/:email - User by email, `?fields=` to choose columns
pub async fn get_by_email(
    State(state): State<AppState>,
    ApiPath(email): ApiPath<String>,
    ApiQuery(query): ApiQuery<FieldsQuery>,
) -> ApiResult<Value> {
    let user = state.users.get_by_email(&email, query.as_deref()).await?;
    Ok(ApiResponse::success("User found", user))
}

/// PUT /user/:id - Replace first name, last name and email
pub async fn put(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(user): ApiJson<UserUpdate>,
) -> ApiResult<()> {
    state.users.update(id, &user).await?;
    Ok(ApiResponse::message("User updated"))
}

/// DELETE /user/:id - Remove the user; the advisor row and its candidates and theses cascade
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    state.users.delete(id).await?;
    Ok(ApiResponse::message("User deleted"))
}
