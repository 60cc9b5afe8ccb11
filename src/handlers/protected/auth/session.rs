use axum::{extract::State, Extension};
use serde_json::Value;
use tower_cookies::{Cookie, Cookies};

use crate::handlers::public::auth::login::TOKEN_COOKIE;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /auth/me - Public fields of the authenticated user
///
/// Expected Output:
/// ```json
/// {
///   "message": "Current user",
///   "data": { "id": 1, "firstName": "Marie", "lastName": "Curie", "email": "...", "role": "advisor" }
/// }
/// ```
pub async fn whoami(State(state): State<AppState>, Extension(auth): Extension<AuthUser>) -> ApiResult<Value> {
    let user = state.users.get_by_id(auth.user_id, None).await?;
    Ok(ApiResponse::success("Current user", user))
}

/// GET /auth/logout - Clear the session cookie
///
/// Bearer tokens stay valid until they expire; clients drop them locally.
pub async fn logout(cookies: Cookies, Extension(auth): Extension<AuthUser>) -> ApiResult<()> {
    cookies.remove(Cookie::build((TOKEN_COOKIE, "")).path("/").build());
    tracing::info!("User {} logged out", auth.user_id);
    Ok(ApiResponse::message("Logged out"))
}
