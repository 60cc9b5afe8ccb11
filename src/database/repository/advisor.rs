use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{AdvisorInput, AdvisorListItem};
use crate::database::query_builder::select_projection;
use crate::filter::Columns;

#[async_trait]
pub trait AdvisorRepository: Send + Sync {
    /// Inserts the advisor row for an existing user id.
    async fn insert(&self, user_id: i32, advisor: &AdvisorInput) -> Result<i32, DatabaseError>;
    async fn select_all(&self) -> Result<Vec<AdvisorListItem>, DatabaseError>;
    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError>;
    async fn exists(&self, id: i32) -> Result<bool, DatabaseError>;
    async fn update(&self, id: i32, advisor: &AdvisorInput) -> Result<(), DatabaseError>;
}

pub struct PgAdvisorRepository {
    pool: PgPool,
}

impl PgAdvisorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdvisorRepository for PgAdvisorRepository {
    async fn insert(&self, user_id: i32, advisor: &AdvisorInput) -> Result<i32, DatabaseError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO advisors (id, establishment_id, department, research_area, cost_center, phone)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(user_id)
        .bind(advisor.establishment_id)
        .bind(&advisor.department)
        .bind(&advisor.research_area)
        .bind(&advisor.cost_center)
        .bind(&advisor.phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn select_all(&self) -> Result<Vec<AdvisorListItem>, DatabaseError> {
        let rows = sqlx::query_as::<_, AdvisorListItem>(
            "SELECT a.id, a.establishment_id, a.department, a.research_area, a.cost_center, a.phone,
                    u.first_name, u.last_name, u.email,
                    e.name AS establishment_name
             FROM advisors a
             JOIN users u ON u.id = a.id
             LEFT JOIN establishments e ON e.id = a.establishment_id
             ORDER BY u.last_name, u.first_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        select_projection(&self.pool, "advisors", columns, "id", id).await
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM advisors WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }

    async fn update(&self, id: i32, advisor: &AdvisorInput) -> Result<(), DatabaseError> {
        sqlx::query(
            "UPDATE advisors
             SET establishment_id = $1, department = $2, research_area = $3, cost_center = $4, phone = $5
             WHERE id = $6",
        )
        .bind(advisor.establishment_id)
        .bind(&advisor.department)
        .bind(&advisor.research_area)
        .bind(&advisor.cost_center)
        .bind(&advisor.phone)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
