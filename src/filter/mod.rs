pub mod error;
pub mod select;
pub mod thesis;
pub mod types;

pub use error::FilterError;
pub use select::Columns;
pub use thesis::ThesisFilter;
pub use types::SqlResult;
