use serde::Deserialize;
use serde_json::{json, Value};

use super::error::FilterError;
use super::types::SqlResult;

/// Query parameters accepted by the thesis listing.
///
/// Every field is optional and blank values are ignored. Present fields are
/// AND-combined against the joined listing query, whose aliases are
/// `t` (theses) and `u` (the advisor's user row).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisFilter {
    pub keyword: Option<String>,
    pub year: Option<String>,
    pub domain: Option<String>,
    pub advisor_name: Option<String>,
}

impl ThesisFilter {
    pub fn is_empty(&self) -> bool {
        [&self.keyword, &self.year, &self.domain, &self.advisor_name]
            .iter()
            .all(|v| non_blank(v).is_none())
    }

    pub fn to_where_sql(&self) -> Result<SqlResult, FilterError> {
        FilterWhere::default().build(self)
    }
}

#[derive(Default)]
struct FilterWhere {
    conditions: Vec<String>,
    param_values: Vec<Value>,
}

impl FilterWhere {
    fn build(mut self, filter: &ThesisFilter) -> Result<SqlResult, FilterError> {
        if let Some(keyword) = non_blank(&filter.keyword) {
            let p = self.param(json!(contains_pattern(keyword)));
            self.conditions.push(format!("t.\"keywords\" ILIKE {}", p));
        }

        if let Some(year) = non_blank(&filter.year) {
            let year: i32 = year.parse().map_err(|_| FilterError::InvalidValue {
                field: "year",
                value: year.to_string(),
            })?;
            let p = self.param(json!(year));
            self.conditions.push(format!("t.\"year\" = {}", p));
        }

        if let Some(domain) = non_blank(&filter.domain) {
            let p = self.param(json!(contains_pattern(domain)));
            self.conditions.push(format!("t.\"domain\" ILIKE {}", p));
        }

        if let Some(name) = non_blank(&filter.advisor_name) {
            let p = self.param(json!(contains_pattern(name)));
            self.conditions
                .push(format!("(u.\"first_name\" ILIKE {p} OR u.\"last_name\" ILIKE {p})"));
        }

        tracing::debug!("Thesis filter: {} condition(s)", self.conditions.len());

        Ok(SqlResult {
            query: self.conditions.join(" AND "),
            params: self.param_values,
        })
    }

    fn param(&mut self, value: Value) -> String {
        self.param_values.push(value);
        format!("${}", self.param_values.len())
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `%value%` with LIKE wildcards in the user input escaped.
fn contains_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('%');
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}
