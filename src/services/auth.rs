use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::{require_text, ServiceError};
use crate::auth::{generate_jwt, hash_password, verify_password, Claims};
use crate::database::models::{user::DEFAULT_ROLE, AdvisorInput, NewUser, UserInfo};
use crate::database::repository::{AdvisorRepository, UserRepository};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(flatten)]
    pub advisor: AdvisorInput,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login: signed token, its claims and the public user fields.
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    pub token: String,
    #[serde(skip)]
    pub claims: Claims,
    pub user: UserInfo,
}

/// Account registration and credential checks.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    advisors: Arc<dyn AdvisorRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, advisors: Arc<dyn AdvisorRepository>) -> Self {
        Self { users, advisors }
    }

    /// Creates the user and its advisor row; returns the new user id.
    pub async fn register(&self, request: &RegisterRequest) -> Result<i32, ServiceError> {
        require_text("email", &request.email)?;
        require_text("password", &request.password)?;

        let email = request.email.trim();
        if self.users.find_by_email(email).await?.is_some() {
            tracing::warn!("Registration rejected, email already in use: {}", email);
            return Err(ServiceError::Conflict("Email already registered".to_string()));
        }

        let password = hash_password(&request.password).await?;
        let user_id = self
            .users
            .insert(&NewUser {
                first_name: request.first_name.trim().to_string(),
                last_name: request.last_name.trim().to_string(),
                email: email.to_string(),
                password,
                role: DEFAULT_ROLE.to_string(),
            })
            .await?;

        if let Err(e) = self.advisors.insert(user_id, &request.advisor).await {
            tracing::error!("Advisor creation failed for user {}, removing user: {}", user_id, e);
            if let Err(cleanup) = self.users.delete(user_id).await {
                tracing::error!("Failed to remove user {}: {}", user_id, cleanup);
            }
            return Err(e.into());
        }

        tracing::info!("Registered advisor {} ({})", user_id, email);
        Ok(user_id)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome, ServiceError> {
        require_text("email", &request.email)?;
        require_text("password", &request.password)?;

        let email = request.email.trim();
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

        if !verify_password(&request.password, &user.password).await? {
            tracing::warn!("Rejected login for {}", email);
            return Err(ServiceError::Unauthorized("Invalid credentials".to_string()));
        }

        let claims = Claims::new(user.id);
        let token = generate_jwt(&claims)?;

        tracing::info!("User {} logged in", user.id);
        Ok(LoginOutcome {
            token,
            claims,
            user: UserInfo::from(&user),
        })
    }
}
