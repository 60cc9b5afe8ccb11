// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Routed behind `jwt_auth_middleware`; handlers needing the caller's id take
// `Extension<AuthUser>`.

pub mod advisor;
pub mod auth;
pub mod candidate;
pub mod establishment;
pub mod lab_director;
pub mod laboratory;
pub mod thesis;
pub mod user;
