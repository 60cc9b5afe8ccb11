use std::sync::Arc;

use serde_json::Value;

use super::error::{require_text, ServiceError};
use crate::database::models::user::{UserUpdate, USER_COLUMNS, USER_DEFAULT_COLUMNS};
use crate::database::repository::UserRepository;
use crate::filter::Columns;

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn get_by_id(&self, id: i32, fields: Option<&str>) -> Result<Value, ServiceError> {
        let columns = Columns::parse(fields, USER_COLUMNS, USER_DEFAULT_COLUMNS)?;
        self.users
            .select_by_id(id, &columns)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_by_email(&self, email: &str, fields: Option<&str>) -> Result<Value, ServiceError> {
        let columns = Columns::parse(fields, USER_COLUMNS, USER_DEFAULT_COLUMNS)?;
        self.users
            .select_by_email(email, &columns)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))
    }

    pub async fn update(&self, id: i32, user: &UserUpdate) -> Result<(), ServiceError> {
        require_text("firstName", &user.first_name)?;
        require_text("lastName", &user.last_name)?;
        require_text("email", &user.email)?;

        if !self.users.exists(id).await? {
            return Err(not_found(id));
        }
        self.users.update(id, user).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.users.exists(id).await? {
            return Err(not_found(id));
        }
        self.users.delete(id).await?;
        Ok(())
    }
}

fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("User {} not found", id))
}
