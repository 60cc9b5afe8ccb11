use super::AuthError;
use crate::config;

/// Hashes a password with bcrypt using the configured cost.
///
/// bcrypt is CPU bound, so the work runs on the blocking pool.
pub async fn hash_password(password: &str) -> Result<String, AuthError> {
    let password = password.to_string();
    let cost = config::config().security.bcrypt_cost;

    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| {
            tracing::error!("Password hashing task failed: {:?}", e);
            AuthError::PasswordHash(e.to_string())
        })?
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Compares a password against a stored bcrypt hash.
pub async fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();

    tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash))
        .await
        .map_err(|e| {
            tracing::error!("Password verification task failed: {:?}", e);
            AuthError::PasswordHash(e.to_string())
        })?
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}
