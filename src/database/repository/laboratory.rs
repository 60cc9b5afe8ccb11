use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Laboratory, LaboratoryInput, LaboratoryListItem};
use crate::database::query_builder::select_projection;
use crate::filter::Columns;

#[async_trait]
pub trait LaboratoryRepository: Send + Sync {
    async fn insert(&self, laboratory: &LaboratoryInput) -> Result<i32, DatabaseError>;
    async fn select_all(&self) -> Result<Vec<LaboratoryListItem>, DatabaseError>;
    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError>;
    async fn select_by_name(&self, name: &str, columns: &Columns) -> Result<Option<Value>, DatabaseError>;
    async fn select_by_city(&self, city: &str) -> Result<Vec<Laboratory>, DatabaseError>;
    async fn select_by_country(&self, country: &str) -> Result<Vec<Laboratory>, DatabaseError>;
    async fn exists(&self, id: i32) -> Result<bool, DatabaseError>;
    async fn update(&self, id: i32, laboratory: &LaboratoryInput) -> Result<(), DatabaseError>;
    async fn delete(&self, id: i32) -> Result<(), DatabaseError>;
}

pub struct PgLaboratoryRepository {
    pool: PgPool,
}

impl PgLaboratoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn select_where(&self, column: &str, value: &str) -> Result<Vec<Laboratory>, DatabaseError> {
        let sql = format!(
            "SELECT id, name, address, city, country, means, expertise
             FROM laboratories
             WHERE \"{}\" = $1
             ORDER BY name",
            column
        );
        let rows = sqlx::query_as::<_, Laboratory>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl LaboratoryRepository for PgLaboratoryRepository {
    async fn insert(&self, lab: &LaboratoryInput) -> Result<i32, DatabaseError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO laboratories (name, address, city, country, means, expertise)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&lab.name)
        .bind(&lab.address)
        .bind(&lab.city)
        .bind(&lab.country)
        .bind(&lab.means)
        .bind(&lab.expertise)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn select_all(&self) -> Result<Vec<LaboratoryListItem>, DatabaseError> {
        // A laboratory has at most one director in practice; DISTINCT ON keeps the first
        let rows = sqlx::query_as::<_, LaboratoryListItem>(
            "SELECT DISTINCT ON (l.id)
                    l.id, l.name, l.address, l.city, l.country, l.means, l.expertise,
                    d.id AS director_id,
                    d.first_name AS director_first_name,
                    d.last_name AS director_last_name
             FROM laboratories l
             LEFT JOIN lab_directors d ON d.laboratory_id = l.id
             ORDER BY l.id, d.id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        select_projection(&self.pool, "laboratories", columns, "id", id).await
    }

    async fn select_by_name(&self, name: &str, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        select_projection(&self.pool, "laboratories", columns, "name", name.to_string()).await
    }

    async fn select_by_city(&self, city: &str) -> Result<Vec<Laboratory>, DatabaseError> {
        self.select_where("city", city).await
    }

    async fn select_by_country(&self, country: &str) -> Result<Vec<Laboratory>, DatabaseError> {
        self.select_where("country", country).await
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM laboratories WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }

    async fn update(&self, id: i32, lab: &LaboratoryInput) -> Result<(), DatabaseError> {
        sqlx::query(
            "UPDATE laboratories
             SET name = $1, address = $2, city = $3, country = $4, means = $5, expertise = $6
             WHERE id = $7",
        )
        .bind(&lab.name)
        .bind(&lab.address)
        .bind(&lab.city)
        .bind(&lab.country)
        .bind(&lab.means)
        .bind(&lab.expertise)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM laboratories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
