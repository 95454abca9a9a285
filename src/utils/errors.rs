use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvTableError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Table unavailable: {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Record is missing field: {0}")]
    MissingField(String),

    #[error("Delimiter must not be empty")]
    InvalidDelimiter,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CsvTableError>;
