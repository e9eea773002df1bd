//! Command error types
//!
//! Defines all error conditions that can occur during command parsing and execution.

use thiserror::Error;

/// Errors that can occur while handling a shell command
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command parsing failed
    #[error("Parse error: {0}")]
    Parse(String),

    /// The organizer rejected the operation
    #[error("{0}")]
    Store(#[from] crate::store::StoreError),

    /// Rendering the result failed
    #[error("Output error: {0}")]
    Output(String),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::Output(err.to_string())
    }
}

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;
