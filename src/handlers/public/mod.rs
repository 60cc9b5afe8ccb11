// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition plus the service info and health probes.

pub mod auth;
pub mod system;
