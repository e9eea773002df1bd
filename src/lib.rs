//! # UEvent
//!
//! UEvent Organizer - an in-memory catalogue of school events with
//! indexed lookups and fast date range counts.
//!
//! ## Features
//!
//! - **Name-sorted store**: Unique names, monotonically assigned ids
//! - **Secondary indexes**: Exact name lookup and department substring search
//! - **Range counts**: Segment tree over a date histogram, O(log K) per query
//! - **Registration**: Capacity-checked participant sign-up
//!
//! ## Modules
//!
//! - [`store`]: Primary event collection
//! - [`index`]: Derived index structures
//! - [`organizer`]: Session aggregate exposing every operation
//! - [`command`]: Command language, parser and executor for the shell
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use uevent::{NewEvent, Organizer};
//!
//! let mut organizer = Organizer::new();
//!
//! organizer.insert_event(NewEvent::new("Orientation", "2024-06-01", 100)).unwrap();
//! organizer.insert_event(NewEvent::new("Fair", "2024-06-03", 1).department("Engineering")).unwrap();
//! organizer.insert_event(NewEvent::new("Fair2", "2024-06-03", 50)).unwrap();
//!
//! assert_eq!(organizer.count_in_date_range("2024-06-01", "2024-06-03"), 3);
//! assert_eq!(organizer.count_in_date_range("2024-06-02", "2024-06-02"), 0);
//!
//! organizer.register_participant("Fair", "Ana", "BSCS").unwrap();
//! assert!(organizer.register_participant("Fair", "Ben", "BSIT").is_err());
//! ```

pub mod command;
pub mod config;
pub mod index;
pub mod organizer;
pub mod store;

// Re-export top-level types for convenience
pub use store::{Event, EventId, EventStore, NewEvent, Participant, StoreError, StoreResult};

pub use index::{
    DateCoordinateMap, DateHistogram, DepartmentIndex, IndexManager, IndexStats, NameIndex,
    RangeCountTree,
};

pub use organizer::{Organizer, OrganizerStats};

pub use command::{
    parse_command, Command, CommandError, CommandExecutor, CommandOutput, CommandResult,
    ListOrder,
};

pub use config::{generate_default_config, Config, ConfigError, LoggingConfig, OutputFormat, ShellConfig};
