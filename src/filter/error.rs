use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid column name: {0}")]
    InvalidColumn(String),

    #[error("Invalid filter value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}
