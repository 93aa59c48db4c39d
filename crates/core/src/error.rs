// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// The taxonomy is deliberately narrow: `Fetch` and `Connection` are fatal to
/// a run, `RowInsert` is recovered per record by the batch upsert.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Row insert failed for job_id {job_id}: {reason}")]
    RowInsert { job_id: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-postgres
// by mapping to AppError::Connection / AppError::RowInsert
