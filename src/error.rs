//! Error types for the Polarity library.
//!
//! All fallible operations in Polarity return [`Result`], whose error type is
//! the [`PolarityError`] enum below.
//!
//! # Examples
//!
//! ```
//! use polarity::error::{PolarityError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PolarityError::config("stemming and lemmatization are exclusive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Polarity operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common error kinds.
#[derive(Error, Debug)]
pub enum PolarityError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, normalization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors (invalid or missing normalization parameters)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Corpus errors (unreadable rows, missing columns, bad labels)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Persisted model file errors (unparsable header or word line)
    #[error("Model format error: {0}")]
    ModelFormat(String),

    /// Training errors (degenerate corpus, empty class)
    #[error("Training error: {0}")]
    Training(String),

    /// Evaluation errors (summary/gold mismatch)
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reading errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PolarityError.
pub type Result<T> = std::result::Result<T, PolarityError>;

impl PolarityError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PolarityError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PolarityError::Config(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        PolarityError::Corpus(msg.into())
    }

    /// Create a new model format error.
    pub fn model_format<S: Into<String>>(msg: S) -> Self {
        PolarityError::ModelFormat(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        PolarityError::Training(msg.into())
    }

    /// Create a new evaluation error.
    pub fn evaluation<S: Into<String>>(msg: S) -> Self {
        PolarityError::Evaluation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PolarityError::Other(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        PolarityError::Other(format!("Not found: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PolarityError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = PolarityError::training("Test training error");
        assert_eq!(error.to_string(), "Training error: Test training error");

        let error = PolarityError::model_format("Test format error");
        assert_eq!(error.to_string(), "Model format error: Test format error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let polarity_error = PolarityError::from(io_error);

        match polarity_error {
            PolarityError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
