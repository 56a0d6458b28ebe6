//! Error types for the roster library.
//!
//! Problems with individual pasted rows are not errors in this sense: they are
//! collected as [`RowError`](crate::validation::RowError) values on the parse
//! outcome. `RosterError` covers the operations around the parse, such as
//! loading or saving the record store.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record store could not be read or written.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// No record with the given id exists.
    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Result type alias for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
