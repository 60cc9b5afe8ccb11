use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{ThesisInput, ThesisListItem};
use crate::database::query_builder::{bind_param_query_as, select_projection};
use crate::filter::{Columns, ThesisFilter};

/// Listing query; filter conditions refer to the `t` and `u` aliases.
const LIST_SELECT: &str = "SELECT t.id, t.advisor_id, t.candidate_id, t.laboratory_id, t.topic, t.year,
        t.domain, t.keywords, t.description, t.topic_validation, t.refused_topic,
        t.job_vacancy, t.anrt_number, t.created_at,
        u.first_name AS advisor_first_name, u.last_name AS advisor_last_name,
        c.first_name AS candidate_first_name, c.last_name AS candidate_last_name,
        l.name AS laboratory_name
 FROM theses t
 JOIN advisors a ON a.id = t.advisor_id
 JOIN users u ON u.id = a.id
 LEFT JOIN candidates c ON c.id = t.candidate_id
 LEFT JOIN laboratories l ON l.id = t.laboratory_id";

#[async_trait]
pub trait ThesisRepository: Send + Sync {
    async fn insert(&self, advisor_id: i32, thesis: &ThesisInput) -> Result<i32, DatabaseError>;
    async fn select_filtered(&self, filter: &ThesisFilter) -> Result<Vec<ThesisListItem>, DatabaseError>;
    async fn select_by_advisor(&self, advisor_id: i32) -> Result<Vec<ThesisListItem>, DatabaseError>;
    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError>;
    async fn exists(&self, id: i32) -> Result<bool, DatabaseError>;
    async fn update(&self, id: i32, thesis: &ThesisInput) -> Result<(), DatabaseError>;
    async fn set_topic_validation(
        &self,
        id: i32,
        validated: bool,
        refused_topic: Option<&str>,
    ) -> Result<(), DatabaseError>;
    async fn set_job_vacancy(&self, id: i32, job_vacancy: &str) -> Result<(), DatabaseError>;
    async fn set_candidate(&self, id: i32, candidate_id: i32) -> Result<(), DatabaseError>;
    async fn set_anrt_number(&self, id: i32, anrt_number: &str) -> Result<(), DatabaseError>;
}

pub struct PgThesisRepository {
    pool: PgPool,
}

impl PgThesisRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn set_text(&self, column: &str, id: i32, value: &str) -> Result<(), DatabaseError> {
        let sql = format!("UPDATE theses SET \"{}\" = $1 WHERE id = $2", column);
        sqlx::query(&sql)
            .bind(value)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ThesisRepository for PgThesisRepository {
    async fn insert(&self, advisor_id: i32, thesis: &ThesisInput) -> Result<i32, DatabaseError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO theses (advisor_id, laboratory_id, topic, year, domain, keywords, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(advisor_id)
        .bind(thesis.laboratory_id)
        .bind(&thesis.topic)
        .bind(thesis.year)
        .bind(&thesis.domain)
        .bind(&thesis.keywords)
        .bind(&thesis.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn select_filtered(&self, filter: &ThesisFilter) -> Result<Vec<ThesisListItem>, DatabaseError> {
        if filter.is_empty() {
            let sql = format!("{} ORDER BY t.id", LIST_SELECT);
            let rows = sqlx::query_as::<_, ThesisListItem>(&sql).fetch_all(&self.pool).await?;
            return Ok(rows);
        }

        let where_clause = filter
            .to_where_sql()
            .map_err(|e| DatabaseError::QueryError(e.to_string()))?;
        let sql = format!("{} WHERE {} ORDER BY t.id", LIST_SELECT, where_clause.query);
        tracing::debug!("Thesis list query: {}", sql);

        let mut query = sqlx::query_as::<_, ThesisListItem>(&sql);
        for param in &where_clause.params {
            query = bind_param_query_as(query, param);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn select_by_advisor(&self, advisor_id: i32) -> Result<Vec<ThesisListItem>, DatabaseError> {
        let sql = format!("{} WHERE t.advisor_id = $1 ORDER BY t.id", LIST_SELECT);
        let rows = sqlx::query_as::<_, ThesisListItem>(&sql)
            .bind(advisor_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        select_projection(&self.pool, "theses", columns, "id", id).await
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM theses WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }

    async fn update(&self, id: i32, thesis: &ThesisInput) -> Result<(), DatabaseError> {
        sqlx::query(
            "UPDATE theses
             SET laboratory_id = $1, topic = $2, year = $3, domain = $4, keywords = $5, description = $6
             WHERE id = $7",
        )
        .bind(thesis.laboratory_id)
        .bind(&thesis.topic)
        .bind(thesis.year)
        .bind(&thesis.domain)
        .bind(&thesis.keywords)
        .bind(&thesis.description)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn set_topic_validation(
        &self,
        id: i32,
        validated: bool,
        refused_topic: Option<&str>,
    ) -> Result<(), DatabaseError> {
        sqlx::query("UPDATE theses SET topic_validation = $1, refused_topic = $2 WHERE id = $3")
            .bind(validated)
            .bind(refused_topic)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn set_job_vacancy(&self, id: i32, job_vacancy: &str) -> Result<(), DatabaseError> {
        self.set_text("job_vacancy", id, job_vacancy).await
    }

    async fn set_candidate(&self, id: i32, candidate_id: i32) -> Result<(), DatabaseError> {
        sqlx::query("UPDATE theses SET candidate_id = $1 WHERE id = $2")
            .bind(candidate_id)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn set_anrt_number(&self, id: i32, anrt_number: &str) -> Result<(), DatabaseError> {
        self.set_text("anrt_number", id, anrt_number).await
    }
}
