//! Event Store - the authoritative, name-sorted collection of events
//!
//! Every insert appends and then re-sorts by name, so positions handed
//! out before an insert are meaningless after it. Derived indexes must
//! be rebuilt before they are read again.

use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{Event, EventId, NewEvent};

/// Owns every event, sorted by name (ordinal byte order)
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new event
    ///
    /// Rejects duplicate names (case-sensitive) and non-positive capacity.
    /// On success the event gets `max(existing ids) + 1`, or 1 for the
    /// first event.
    pub fn insert(&mut self, candidate: NewEvent) -> StoreResult<EventId> {
        if self.position_of(&candidate.name).is_some() {
            return Err(StoreError::DuplicateName(candidate.name));
        }
        let capacity = candidate.validated_capacity()?;

        let id = self.next_id();
        self.events.push(candidate.into_event(id, capacity));
        self.events.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(id)
    }

    /// Next identifier to hand out
    fn next_id(&self) -> EventId {
        self.events
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Binary search for an event's position by exact name
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.events
            .binary_search_by(|e| e.name.as_str().cmp(name))
            .ok()
    }

    /// Get event at a position
    pub fn get(&self, position: usize) -> Option<&Event> {
        self.events.get(position)
    }

    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut Event> {
        self.events.get_mut(position)
    }

    /// All events in name order
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
