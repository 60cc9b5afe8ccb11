use serde_json::{Map, Value};

use super::error::FilterError;

/// Validated column projection for single-record reads.
///
/// Callers pass a comma separated `fields` list (camelCase or snake_case);
/// every entry must be in the entity's allow-list. An absent or blank list
/// selects the entity's default columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    selected: Vec<&'static str>,
}

impl Columns {
    pub fn parse(
        fields: Option<&str>,
        allowed: &'static [&'static str],
        default: &'static [&'static str],
    ) -> Result<Self, FilterError> {
        let requested: Vec<&str> = fields
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();

        if requested.is_empty() {
            return Ok(Self::defaults(default));
        }

        let mut selected = Vec::with_capacity(requested.len());
        for field in requested {
            let column = allowed
                .iter()
                .copied()
                .find(|c| *c == field || to_camel_case(c) == field)
                .ok_or_else(|| FilterError::InvalidColumn(field.to_string()))?;
            if !selected.contains(&column) {
                selected.push(column);
            }
        }

        Ok(Self { selected })
    }

    pub fn defaults(default: &'static [&'static str]) -> Self {
        Self { selected: default.to_vec() }
    }

    #[cfg(test)]
    pub fn names(&self) -> &[&'static str] {
        &self.selected
    }

    /// Select list aliasing each column to its camelCase name, e.g. `"first_name" AS "firstName"`.
    pub fn to_sql(&self) -> String {
        self.selected
            .iter()
            .map(|c| format!("\"{}\" AS \"{}\"", c, to_camel_case(c)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Keeps only the selected keys of a camelCase JSON object.
    pub fn project(&self, value: &Value) -> Value {
        let mut out = Map::new();
        if let Value::Object(obj) = value {
            for column in &self.selected {
                let key = to_camel_case(column);
                if let Some(v) = obj.get(&key) {
                    out.insert(key, v.clone());
                }
            }
        }
        Value::Object(out)
    }
}

pub fn to_camel_case(column: &str) -> String {
    let mut out = String::with_capacity(column.len());
    let mut upper = false;
    for ch in column.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ALLOWED: &[&str] = &["id", "first_name", "last_name", "email"];
    const DEFAULT: &[&str] = &["id", "email"];

    #[test]
    fn camel_cases_columns() {
        assert_eq!(to_camel_case("first_name"), "firstName");
        assert_eq!(to_camel_case("zrr_validation"), "zrrValidation");
        assert_eq!(to_camel_case("id"), "id");
    }

    #[test]
    fn missing_or_blank_fields_use_defaults() {
        assert_eq!(Columns::parse(None, ALLOWED, DEFAULT).unwrap().names(), DEFAULT);
        assert_eq!(Columns::parse(Some(" , "), ALLOWED, DEFAULT).unwrap().names(), DEFAULT);
    }

    #[test]
    fn accepts_both_naming_styles_and_dedups() {
        let columns = Columns::parse(Some("firstName, last_name,first_name"), ALLOWED, DEFAULT).unwrap();
        assert_eq!(columns.names(), &["first_name", "last_name"]);
        assert_eq!(columns.to_sql(), "\"first_name\" AS \"firstName\", \"last_name\" AS \"lastName\"");
    }

    #[test]
    fn rejects_unknown_columns() {
        let err = Columns::parse(Some("id,password"), ALLOWED, DEFAULT).unwrap_err();
        assert!(matches!(err, FilterError::InvalidColumn(c) if c == "password"));
    }

    #[test]
    fn projects_json_objects() {
        let columns = Columns::parse(Some("firstName"), ALLOWED, DEFAULT).unwrap();
        let value = json!({"id": 1, "firstName": "Ada", "email": "ada@example.org"});
        assert_eq!(columns.project(&value), json!({"firstName": "Ada"}));
    }
}
