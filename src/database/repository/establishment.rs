use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Establishment, EstablishmentInput};
use crate::database::query_builder::select_projection;
use crate::filter::Columns;

#[async_trait]
pub trait EstablishmentRepository: Send + Sync {
    async fn insert(&self, establishment: &EstablishmentInput) -> Result<i32, DatabaseError>;
    async fn select_all(&self) -> Result<Vec<Establishment>, DatabaseError>;
    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError>;
    async fn select_by_name(&self, name: &str, columns: &Columns) -> Result<Option<Value>, DatabaseError>;
    async fn exists(&self, id: i32) -> Result<bool, DatabaseError>;
    async fn update(&self, id: i32, establishment: &EstablishmentInput) -> Result<(), DatabaseError>;
    async fn delete(&self, id: i32) -> Result<(), DatabaseError>;
}

pub struct PgEstablishmentRepository {
    pool: PgPool,
}

impl PgEstablishmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EstablishmentRepository for PgEstablishmentRepository {
    async fn insert(&self, e: &EstablishmentInput) -> Result<i32, DatabaseError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO establishments (name, siret, address, postal_code, city, country, phone, email)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id",
        )
        .bind(&e.name)
        .bind(&e.siret)
        .bind(&e.address)
        .bind(&e.postal_code)
        .bind(&e.city)
        .bind(&e.country)
        .bind(&e.phone)
        .bind(&e.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn select_all(&self) -> Result<Vec<Establishment>, DatabaseError> {
        let rows = sqlx::query_as::<_, Establishment>(
            "SELECT id, name, siret, address, postal_code, city, country, phone, email
             FROM establishments
             ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        select_projection(&self.pool, "establishments", columns, "id", id).await
    }

    async fn select_by_name(&self, name: &str, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        select_projection(&self.pool, "establishments", columns, "name", name.to_string()).await
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM establishments WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }

    async fn update(&self, id: i32, e: &EstablishmentInput) -> Result<(), DatabaseError> {
        sqlx::query(
            "UPDATE establishments
             SET name = $1, siret = $2, address = $3, postal_code = $4, city = $5, country = $6,
                 phone = $7, email = $8
             WHERE id = $9",
        )
        .bind(&e.name)
        .bind(&e.siret)
        .bind(&e.address)
        .bind(&e.postal_code)
        .bind(&e.city)
        .bind(&e.country)
        .bind(&e.phone)
        .bind(&e.email)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM establishments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
