//! Error types for the tokdist library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`TokdistError`] enum. Note that the distance computation itself is not
//! fallible: over-limit results are reported through the
//! [`OVER_LIMIT`](crate::OVER_LIMIT) sentinel, not through errors. Errors are
//! reserved for construction-time failures (an invalid token-split pattern)
//! and for I/O and input problems in the command-line driver.

use std::io;

use thiserror::Error;

/// The main error type for tokdist operations.
#[derive(Error, Debug)]
pub enum TokdistError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, invalid split patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed input (CLI file lines, argument mistakes)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for operations that may fail with [`TokdistError`].
pub type Result<T> = std::result::Result<T, TokdistError>;

impl TokdistError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TokdistError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TokdistError::Config(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        TokdistError::InvalidInput(msg.into())
    }
}
