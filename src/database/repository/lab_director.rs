use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{DirectorDetails, LabDirector};
use crate::database::query_builder::select_projection;
use crate::filter::Columns;

#[async_trait]
pub trait LabDirectorRepository: Send + Sync {
    async fn insert(&self, laboratory_id: i32, director: &DirectorDetails) -> Result<i32, DatabaseError>;
    async fn select_all(&self) -> Result<Vec<LabDirector>, DatabaseError>;
    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError>;
    async fn select_by_laboratory(&self, laboratory_id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError>;
    async fn exists(&self, id: i32) -> Result<bool, DatabaseError>;
    async fn update(&self, id: i32, laboratory_id: i32, director: &DirectorDetails) -> Result<(), DatabaseError>;
}

pub struct PgLabDirectorRepository {
    pool: PgPool,
}

impl PgLabDirectorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LabDirectorRepository for PgLabDirectorRepository {
    async fn insert(&self, laboratory_id: i32, d: &DirectorDetails) -> Result<i32, DatabaseError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO lab_directors (laboratory_id, first_name, last_name, email, phone)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(laboratory_id)
        .bind(&d.first_name)
        .bind(&d.last_name)
        .bind(&d.email)
        .bind(&d.phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn select_all(&self) -> Result<Vec<LabDirector>, DatabaseError> {
        let rows = sqlx::query_as::<_, LabDirector>(
            "SELECT id, laboratory_id, first_name, last_name, email, phone
             FROM lab_directors
             ORDER BY last_name, first_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        select_projection(&self.pool, "lab_directors", columns, "id", id).await
    }

    async fn select_by_laboratory(&self, laboratory_id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        select_projection(&self.pool, "lab_directors", columns, "laboratory_id", laboratory_id).await
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM lab_directors WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }

    async fn update(&self, id: i32, laboratory_id: i32, d: &DirectorDetails) -> Result<(), DatabaseError> {
        sqlx::query(
            "UPDATE lab_directors
             SET laboratory_id = $1, first_name = $2, last_name = $3, email = $4, phone = $5
             WHERE id = $6",
        )
        .bind(laboratory_id)
        .bind(&d.first_name)
        .bind(&d.last_name)
        .bind(&d.email)
        .bind(&d.phone)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
