//! Error types for the Vitrine library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`VitrineError`] enum. The filtering core itself is made of total
//! functions; errors only arise at the boundary (loading product data,
//! validating the search envelope, parsing CLI arguments).

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Vitrine operations.
#[derive(Error, Debug)]
pub enum VitrineError {
    /// I/O errors (reading product data files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Query-related errors (invalid sort mode, malformed filter keys, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Upstream data errors (non-success envelope, unusable product payloads)
    #[error("Data error: {0}")]
    Data(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with VitrineError.
pub type Result<T> = std::result::Result<T, VitrineError>;

impl VitrineError {
    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        VitrineError::Query(msg.into())
    }

    /// Create a new data error.
    pub fn data<S: Into<String>>(msg: S) -> Self {
        VitrineError::Data(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = VitrineError::query("unknown sort mode");
        assert_eq!(error.to_string(), "Query error: unknown sort mode");

        let error = VitrineError::data("upstream search failed");
        assert_eq!(error.to_string(), "Data error: upstream search failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let vitrine_error = VitrineError::from(io_error);

        match vitrine_error {
            VitrineError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
