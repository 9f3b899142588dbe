//! Error types for symbol address extraction.
//!
//! Every fatal condition of a run maps onto one variant of [`SymaddrError`].
//! Functions that cannot be resolved are not errors; they are reported by the
//! propagation pass and skipped.

use thiserror::Error;

/// Main error type for symaddr operations.
#[derive(Debug, Error)]
pub enum SymaddrError {
    /// The symbol dump command ran but did not exit successfully
    #[error("The objdump command '{command}' exited with status {}", display_status(.status))]
    CommandFailed {
        command: String,
        status: Option<i32>,
    },

    /// The symbol dump command could not be started
    #[error("Failed to run objdump command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The symbol dump command did not finish in time
    #[error("Symbol dump timeout after {seconds}s")]
    Timeout { seconds: u64 },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Program document or configuration (de)serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for SymaddrError {
    fn from(err: serde_json::Error) -> Self {
        SymaddrError::Serialization(err.to_string())
    }
}

// Processes killed by a signal carry no exit code.
fn display_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

/// Result type alias for symaddr operations
pub type Result<T> = std::result::Result<T, SymaddrError>;
