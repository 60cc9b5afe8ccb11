// handlers/public/auth/login.rs - POST /auth/login handler

use axum::extract::State;
use tower_cookies::cookie::{time::Duration, SameSite};
use tower_cookies::{Cookie, Cookies};

use crate::config;
use crate::handlers::ApiJson;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{LoginOutcome, LoginRequest};
use crate::state::AppState;

/// Name of the HttpOnly cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

/// POST /auth/login - Authenticate and receive a JWT
///
/// Expected Input:
/// ```json
/// { "email": "marie@lab.example", "password": "string" }
/// ```
///
/// Expected Output:
/// ```json
/// {
///   "message": "Login successful",
///   "data": {
///     "token": "eyJhbGciOiJIUzI1NiI...",
///     "user": { "id": 1, "firstName": "Marie", "lastName": "Curie", "email": "...", "role": "advisor" }
///   }
/// }
/// ```
///
/// The token is also set as an HttpOnly `token` cookie.
pub async fn login_post(
    State(state): State<AppState>,
    cookies: Cookies,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<LoginOutcome> {
    let outcome = state.auth.login(&request).await?;

    let cookie = Cookie::build((TOKEN_COOKIE, outcome.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config::config().security.cookie_secure)
        .max_age(Duration::seconds(outcome.claims.expires_in()))
        .build();
    cookies.add(cookie);

    Ok(ApiResponse::success("Login successful", outcome))
}
