// handlers/public/auth/register.rs - POST /auth/register handler

use axum::extract::State;
use serde_json::{json, Value};

use crate::handlers::ApiJson;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::RegisterRequest;
use crate::state::AppState;

/// POST /auth/register - Create an advisor account
///
/// Expected Input:
/// ```json
/// {
///   "firstName": "Marie",
///   "lastName": "Curie",
///   "email": "marie@lab.example",
///   "password": "string",
///   "establishmentId": 1,          // optional advisor fields
///   "department": "Physics"
/// }
/// ```
///
/// Responds 201 with `{"id": ...}`, 400 on a blank email or password and
/// 409 when the email is already registered.
pub async fn register_post(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ApiResult<Value> {
    let id = state.auth.register(&request).await?;
    Ok(ApiResponse::created("User registered", json!({ "id": id })))
}
