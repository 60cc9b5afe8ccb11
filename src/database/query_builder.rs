use serde_json::Value;
use sqlx::{postgres::PgArguments, FromRow, PgPool, Postgres, Row};

use crate::database::manager::DatabaseError;
use crate::filter::Columns;

/// Fetches one row of `table` as a JSON object restricted to `columns`.
///
/// `table` and `key_column` are trusted identifiers from the repositories;
/// the column list comes from a validated [`Columns`].
pub async fn select_projection<K>(
    pool: &PgPool,
    table: &str,
    columns: &Columns,
    key_column: &str,
    key: K,
) -> Result<Option<Value>, DatabaseError>
where
    K: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + Send + 'static,
{
    let sql = format!(
        "SELECT row_to_json(t) AS row FROM (SELECT {} FROM \"{}\" WHERE \"{}\" = $1 ORDER BY \"id\" LIMIT 1) t",
        columns.to_sql(),
        table,
        key_column
    );
    tracing::debug!("Projection query: {}", sql);

    let row = sqlx::query(&sql).bind(key).fetch_optional(pool).await?;
    match row {
        Some(row) => Ok(Some(row.try_get::<Value, _>("row")?)),
        None => Ok(None),
    }
}

pub fn bind_param_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, Postgres, O, PgArguments>,
    v: &'q Value,
) -> sqlx::query::QueryAs<'q, Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, sqlx::postgres::PgRow>,
{
    match v {
        Value::Null => {
            let none: Option<String> = None;
            q.bind(none)
        }
        Value::Bool(b) => q.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                // Filter integers are INTEGER columns
                match i32::try_from(i) {
                    Ok(small) => q.bind(small),
                    Err(_) => q.bind(i),
                }
            } else if let Some(f) = n.as_f64() {
                q.bind(f)
            } else {
                q.bind(n.to_string())
            }
        }
        Value::String(s) => q.bind(s),
        Value::Array(_) | Value::Object(_) => q.bind(v.clone()),
    }
}
