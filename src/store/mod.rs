//! UEvent Event Store
//!
//! The primary collection every index is derived from:
//!
//! - **types**: Core data structures (Event, NewEvent, Participant)
//! - **event_store**: Name-sorted owning collection with id assignment
//! - **error**: Error types
//!
//! # Invariants
//!
//! ```text
//! names unique        -> insert rejects duplicates
//! sorted by name      -> re-sorted after every insert
//! occupancy <= cap    -> registration rejects when full
//! ```

pub mod error;
pub mod event_store;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use event_store::EventStore;
pub use types::{Event, EventId, NewEvent, Participant};
