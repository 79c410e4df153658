//! Ingest error types

use thiserror::Error;

/// Structural ingest errors. Value-level problems never appear here; they
/// degrade to missing fields on the affected row.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input has no header row")]
    EmptyInput,

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
