use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid CSV Header: {0}")]
    CsvHeader(String),

    #[error("Invalid CSV row {row}: expected at least {expected} columns, got {got}")]
    CsvRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Invalid number at row {row} in column '{column}': {value}")]
    NumberParse {
        row: usize,
        column: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Non-finite number at row {row} in column '{column}': {value}")]
    NonFiniteNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Unknown area tag at row {row}: {label}")]
    UnknownAreaTag { row: usize, label: String },

    #[error("Duplicate point id at row {row}: {id}")]
    DuplicatePointId { row: usize, id: String },

    #[error("Unknown policy type: {0}")]
    UnknownPolicy(String),

    #[error("Unknown report format: {0}")]
    UnknownReportFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        SimError::Config(format!("TOML parse error: {}", err))
    }
}
