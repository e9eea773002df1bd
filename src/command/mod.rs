//! UEvent Command Shell
//!
//! A small line-oriented language driving an [`Organizer`](crate::Organizer):
//!
//! - **AST**: Command types
//! - **Parser**: Parse command lines into the AST
//! - **Executor**: Execute commands and render their output
//!
//! # Example
//!
//! ```rust
//! use uevent::command::{CommandExecutor, CommandOutput};
//!
//! let mut executor = CommandExecutor::new();
//! executor.execute_str("ADD Orientation ON 2024-06-01 CAPACITY 100").unwrap();
//! executor.execute_str("ADD 'Career Fair' ON 2024-06-03 DEPT Engineering CAPACITY 200").unwrap();
//!
//! let output = executor.execute_str("COUNT FROM 2024-06-01 TO 2024-06-03").unwrap();
//! assert!(matches!(output, CommandOutput::Count { count: 2, .. }));
//! ```

mod ast;
mod error;
mod executor;
mod parser;

pub use ast::{Command, ListOrder, HELP_TEXT};
pub use error::{CommandError, CommandResult};
pub use executor::{CommandExecutor, CommandOutput};
pub use parser::parse_command;
