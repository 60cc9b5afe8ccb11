use serde_json::Value;

/// SQL fragment plus the positional parameters it references.
#[derive(Debug, Clone, Default)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<Value>,
}

impl SqlResult {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }
}
