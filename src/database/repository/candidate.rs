use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{CandidateInput, CandidateListItem};
use crate::database::query_builder::select_projection;
use crate::filter::Columns;

const LIST_SELECT: &str = "SELECT c.id, c.advisor_id, c.first_name, c.last_name, c.email, c.phone,
        c.committee_validation, c.hr_validation, c.zrr_validation,
        u.first_name AS advisor_first_name, u.last_name AS advisor_last_name
 FROM candidates c
 JOIN users u ON u.id = c.advisor_id";

#[async_trait]
pub trait CandidateRepository: Send + Sync {
    async fn insert(&self, advisor_id: i32, candidate: &CandidateInput) -> Result<i32, DatabaseError>;
    async fn select_all(&self) -> Result<Vec<CandidateListItem>, DatabaseError>;
    async fn select_by_advisor(&self, advisor_id: i32) -> Result<Vec<CandidateListItem>, DatabaseError>;
    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError>;
    async fn exists(&self, id: i32) -> Result<bool, DatabaseError>;
    /// Replaces the candidate; `advisor_id` is kept when the input leaves it out.
    async fn update(&self, id: i32, candidate: &CandidateInput) -> Result<(), DatabaseError>;
    async fn delete(&self, id: i32) -> Result<(), DatabaseError>;
}

pub struct PgCandidateRepository {
    pool: PgPool,
}

impl PgCandidateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateRepository for PgCandidateRepository {
    async fn insert(&self, advisor_id: i32, c: &CandidateInput) -> Result<i32, DatabaseError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO candidates
                (advisor_id, first_name, last_name, email, phone, committee_validation, hr_validation, zrr_validation)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id",
        )
        .bind(advisor_id)
        .bind(&c.first_name)
        .bind(&c.last_name)
        .bind(&c.email)
        .bind(&c.phone)
        .bind(c.committee_validation)
        .bind(c.hr_validation)
        .bind(c.zrr_validation)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn select_all(&self) -> Result<Vec<CandidateListItem>, DatabaseError> {
        let sql = format!("{} ORDER BY c.last_name, c.first_name", LIST_SELECT);
        let rows = sqlx::query_as::<_, CandidateListItem>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn select_by_advisor(&self, advisor_id: i32) -> Result<Vec<CandidateListItem>, DatabaseError> {
        let sql = format!("{} WHERE c.advisor_id = $1 ORDER BY c.last_name, c.first_name", LIST_SELECT);
        let rows = sqlx::query_as::<_, CandidateListItem>(&sql)
            .bind(advisor_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        select_projection(&self.pool, "candidates", columns, "id", id).await
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM candidates WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }

    async fn update(&self, id: i32, c: &CandidateInput) -> Result<(), DatabaseError> {
        sqlx::query(
            "UPDATE candidates
             SET advisor_id = COALESCE($1, advisor_id), first_name = $2, last_name = $3, email = $4,
                 phone = $5, committee_validation = $6, hr_validation = $7, zrr_validation = $8
             WHERE id = $9",
        )
        .bind(c.advisor_id)
        .bind(&c.first_name)
        .bind(&c.last_name)
        .bind(&c.email)
        .bind(&c.phone)
        .bind(c.committee_validation)
        .bind(c.hr_validation)
        .bind(c.zrr_validation)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
