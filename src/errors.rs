use thiserror::Error;

/// Error type shared by the record store, persistence and CSV boundaries.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Failed to parse CSV file: {0}")]
    Import(String),
    #[error("Record not found: {0}")]
    RecordNotFound(String),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        TrackerError::Import(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
