//! Command Abstract Syntax Tree
//!
//! One parsed line of the organizer shell.
//!
//! # Example Commands
//!
//! ```text
//! ADD 'Career Fair' ON 2024-06-03 FROM 09:00 TO 15:00 AT 'Gym' DEPT 'Engineering' CAPACITY 200
//! REGISTER 'Ana Cruz' 'BSCS' FOR 'Career Fair'
//! COUNT FROM 2024-06-01 TO 2024-06-30
//! ```

use crate::store::NewEvent;

/// A parsed command ready for execution
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert a new event
    Add(NewEvent),
    /// Look up one event by exact name
    Find { name: String },
    /// Events whose department contains a substring
    Department { query: String },
    /// Register a participant for an event
    Register {
        event: String,
        participant: String,
        course: String,
    },
    /// List every event
    List { order: ListOrder },
    /// Events on an exact date
    OnDate { date: String },
    /// Count events in an inclusive date range
    Count { start: String, end: String },
    /// Session statistics
    Stats,
    /// Show the command summary
    Help,
    /// Leave the shell
    Exit,
}

/// Ordering for `LIST`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    #[default]
    Name,
    Date,
}

impl Command {
    /// Whether running this command can change the organizer
    pub fn is_mutation(&self) -> bool {
        matches!(self, Command::Add(_) | Command::Register { .. })
    }
}

/// Command summary printed by `HELP`
pub const HELP_TEXT: &str = "\
Commands (keywords are case-insensitive, quote text with spaces in '...'):
  ADD 'name' ON YYYY-MM-DD [FROM hh:mm] [TO hh:mm] [AT 'location'] [DEPT 'department'] CAPACITY n
  FIND 'name'
  DEPT 'substring'
  REGISTER 'participant' ['course'] FOR 'event'
  LIST [BY NAME | BY DATE]
  ON YYYY-MM-DD
  COUNT FROM YYYY-MM-DD TO YYYY-MM-DD
  STATS
  HELP
  EXIT | QUIT";
