pub mod config;
pub mod errors;

pub use config::{FieldNames, TableOptions, DEFAULT_DELIMITER};
pub use errors::{CsvTableError, Result};
