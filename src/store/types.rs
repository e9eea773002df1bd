//! Core data types for the event store
//!
//! - `Event`: A scheduled event owned by the store
//! - `NewEvent`: Caller-supplied fields for an event that has not been inserted yet
//! - `Participant`: One registered attendee

use crate::store::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// Identifier assigned to an event on insert
pub type EventId = u32;

/// A participant registered for an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub course: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, course: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            course: course.into(),
        }
    }
}

/// A scheduled event
///
/// Events are only created by the store. `participants.len()` is the
/// occupancy and never exceeds `capacity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    /// Assigned on insert, never reused
    pub id: EventId,
    /// Unique primary key
    pub name: String,
    /// `YYYY-MM-DD`, compared as text
    pub date: String,
    /// Opaque start time (e.g. "09:00")
    pub start_time: String,
    /// Opaque end time
    pub end_time: String,
    pub location: String,
    pub department: String,
    /// Maximum number of participants, always positive
    pub capacity: u32,
    /// Registered participants in registration order
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Event {
    /// Number of registered participants
    pub fn occupancy(&self) -> usize {
        self.participants.len()
    }

    /// Seats still available
    pub fn remaining_seats(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.occupancy())
    }

    pub fn is_full(&self) -> bool {
        self.remaining_seats() == 0
    }

    /// Add a participant, rejecting when every seat is taken
    pub(crate) fn admit(&mut self, participant: Participant) -> StoreResult<()> {
        if self.is_full() {
            return Err(StoreError::EventFull {
                name: self.name.clone(),
                capacity: self.capacity,
            });
        }
        self.participants.push(participant);
        Ok(())
    }
}

/// Fields for an event that has not been inserted yet
///
/// Capacity is kept signed so that out-of-range input from the caller
/// reaches the store and is rejected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub department: String,
    pub capacity: i64,
}

impl NewEvent {
    /// Create a new event with required fields
    pub fn new(name: impl Into<String>, date: impl Into<String>, capacity: i64) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            start_time: String::new(),
            end_time: String::new(),
            location: String::new(),
            department: String::new(),
            capacity,
        }
    }

    /// Builder: set start and end time
    pub fn times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    /// Builder: set location
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Builder: set department
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Capacity as stored, or `InvalidCapacity`
    pub fn validated_capacity(&self) -> StoreResult<u32> {
        u32::try_from(self.capacity)
            .ok()
            .filter(|&c| c > 0)
            .ok_or(StoreError::InvalidCapacity(self.capacity))
    }

    pub(crate) fn into_event(self, id: EventId, capacity: u32) -> Event {
        Event {
            id,
            name: self.name,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location,
            department: self.department,
            capacity,
            participants: Vec::new(),
        }
    }
}
