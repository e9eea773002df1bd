//! Event store error types
//!
//! Every failure in the store is local and recoverable. A rejected
//! insert or registration leaves the store exactly as it was.

use thiserror::Error;

/// Errors that can occur while mutating or querying the event store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An event with this exact name already exists
    #[error("Event already exists: {0}")]
    DuplicateName(String),

    /// Capacity was zero, negative, or too large to represent
    #[error("Invalid capacity: {0} (must be a positive integer)")]
    InvalidCapacity(i64),

    /// No event matched the lookup
    #[error("Event not found: {0}")]
    NotFound(String),

    /// Registration rejected because every seat is taken
    #[error("Event '{name}' is already full ({capacity} seats)")]
    EventFull { name: String, capacity: u32 },
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
