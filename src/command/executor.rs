//! Command Executor
//!
//! Runs a [`Command`] against an [`Organizer`] and turns the outcome into
//! a [`CommandOutput`] that can be rendered as a table or as JSON.
//!
//! # Execution Pipeline
//!
//! ```text
//! line → parse_command → Command → Organizer operation → CommandOutput → render
//! ```

use crate::command::ast::{Command, ListOrder, HELP_TEXT};
use crate::command::error::CommandResult;
use crate::command::parser::parse_command;
use crate::config::OutputFormat;
use crate::organizer::{Organizer, OrganizerStats};
use crate::store::{Event, EventId};
use serde::Serialize;
use std::fmt::Write;

/// Result of one executed command
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandOutput {
    /// An event was inserted
    Inserted { id: EventId, name: String },
    /// A list of events with a heading
    Events { title: String, events: Vec<Event> },
    /// A participant was registered
    Registered {
        event: String,
        participant: String,
        occupancy: usize,
        capacity: u32,
    },
    /// Events counted in a date range
    Count {
        start: String,
        end: String,
        count: usize,
    },
    Stats(OrganizerStats),
    Help { text: String },
    /// The shell should stop reading commands
    Exit,
}

impl CommandOutput {
    /// Whether the shell should stop after this output
    pub fn is_exit(&self) -> bool {
        matches!(self, CommandOutput::Exit)
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> CommandResult<String> {
        match format {
            OutputFormat::Table => Ok(self.render_table()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Render as human-readable text
    pub fn render_table(&self) -> String {
        match self {
            CommandOutput::Inserted { id, name } => {
                format!("Event '{}' added with id {}", name, id)
            }
            CommandOutput::Events { title, events } => render_events(title, events),
            CommandOutput::Registered {
                event,
                participant,
                occupancy,
                capacity,
            } => format!(
                "Registered '{}' for '{}' ({}/{} seats taken)",
                participant, event, occupancy, capacity
            ),
            CommandOutput::Count { start, end, count } => {
                format!("{} event(s) between {} and {}", count, start, end)
            }
            CommandOutput::Stats(stats) => format!(
                "Events:          {}\n\
                 Seats taken:     {}/{}\n\
                 Full events:     {}\n\
                 Departments:     {}\n\
                 Distinct dates:  {}\n\
                 Tree nodes:      {}",
                stats.events,
                stats.seats_taken,
                stats.total_seats,
                stats.full_events,
                stats.index.departments_indexed,
                stats.index.distinct_dates,
                stats.index.tree_nodes,
            ),
            CommandOutput::Help { text } => text.clone(),
            CommandOutput::Exit => "Goodbye".to_string(),
        }
    }
}

const COLUMNS: [(&str, usize); 8] = [
    ("ID", 5),
    ("Name", 20),
    ("Date", 12),
    ("Time", 13),
    ("Location", 15),
    ("Department", 15),
    ("Capacity", 8),
    ("Participants", 12),
];

fn render_events(title: &str, events: &[Event]) -> String {
    let width: usize = COLUMNS.iter().map(|(_, w)| w + 3).sum::<usize>() - 3;
    let mut out = String::new();

    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(width));
    if events.is_empty() {
        out.push_str("No events found.");
        return out;
    }

    let header: Vec<String> = COLUMNS
        .iter()
        .map(|(name, w)| format!("{:<w$}", name, w = *w))
        .collect();
    let _ = writeln!(out, "{}", header.join(" | ").trim_end());
    let _ = writeln!(out, "{}", "-".repeat(width));

    for event in events {
        let time = match (event.start_time.is_empty(), event.end_time.is_empty()) {
            (true, true) => String::new(),
            (false, true) => event.start_time.clone(),
            _ => format!("{}-{}", event.start_time, event.end_time),
        };
        let cells = [
            event.id.to_string(),
            event.name.clone(),
            event.date.clone(),
            time,
            event.location.clone(),
            event.department.clone(),
            event.capacity.to_string(),
            event.occupancy().to_string(),
        ];
        let row: Vec<String> = cells
            .iter()
            .zip(COLUMNS.iter())
            .map(|(cell, (_, w))| format!("{:<w$}", cell, w = *w))
            .collect();
        let _ = writeln!(out, "{}", row.join(" | ").trim_end());
    }
    out.push_str(&"=".repeat(width));
    out
}

/// Command executor owning one organizer session
#[derive(Debug, Default)]
pub struct CommandExecutor {
    organizer: Organizer,
}

impl CommandExecutor {
    /// Create an executor over an empty organizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor over an existing organizer
    pub fn with_organizer(organizer: Organizer) -> Self {
        Self { organizer }
    }

    pub fn organizer(&self) -> &Organizer {
        &self.organizer
    }

    /// Execute a command line (parses and executes)
    pub fn execute_str(&mut self, line: &str) -> CommandResult<CommandOutput> {
        let command = parse_command(line)?;
        self.execute(command)
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: Command) -> CommandResult<CommandOutput> {
        tracing::debug!(?command, mutation = command.is_mutation(), "Executing command");

        let output = match command {
            Command::Add(candidate) => {
                let name = candidate.name.clone();
                let id = self.organizer.insert_event(candidate)?;
                CommandOutput::Inserted { id, name }
            }
            Command::Find { name } => {
                let event = self.organizer.find_by_name(&name)?;
                CommandOutput::Events {
                    title: format!("Event '{}'", name),
                    events: vec![event.clone()],
                }
            }
            Command::Department { query } => CommandOutput::Events {
                title: format!("Events with department containing '{}'", query),
                events: cloned(self.organizer.find_by_department(&query)),
            },
            Command::Register {
                event,
                participant,
                course,
            } => {
                self.organizer
                    .register_participant(&event, &participant, &course)?;
                let registered = self.organizer.find_by_name(&event)?;
                CommandOutput::Registered {
                    occupancy: registered.occupancy(),
                    capacity: registered.capacity,
                    event,
                    participant,
                }
            }
            Command::List { order } => match order {
                ListOrder::Name => CommandOutput::Events {
                    title: "All events (by name)".to_string(),
                    events: self.organizer.all_events().to_vec(),
                },
                ListOrder::Date => CommandOutput::Events {
                    title: "All events (by date)".to_string(),
                    events: cloned(self.organizer.list_sorted_by_date()),
                },
            },
            Command::OnDate { date } => CommandOutput::Events {
                title: format!("Events on {}", date),
                events: cloned(self.organizer.find_by_date(&date)),
            },
            Command::Count { start, end } => {
                let count = self.organizer.count_in_date_range(&start, &end);
                CommandOutput::Count { start, end, count }
            }
            Command::Stats => CommandOutput::Stats(self.organizer.stats()),
            Command::Help => CommandOutput::Help {
                text: HELP_TEXT.to_string(),
            },
            Command::Exit => CommandOutput::Exit,
        };

        Ok(output)
    }
}

fn cloned(events: Vec<&Event>) -> Vec<Event> {
    events.into_iter().cloned().collect()
}
