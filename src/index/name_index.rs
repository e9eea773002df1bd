//! Name Index - exact-match name → position lookup
//!
//! Ordered map rebuilt from the store after every insert. Holds store
//! positions, never references, so it can't dangle across a re-sort.

use crate::index::Position;
use crate::store::Event;
use std::collections::BTreeMap;

/// Exact-match index from event name to store position
#[derive(Debug, Default)]
pub struct NameIndex {
    /// name → position in the store's name-sorted sequence
    index: BTreeMap<String, Position>,
}

impl NameIndex {
    /// Build from the store's current sequence
    pub fn build(events: &[Event]) -> Self {
        let index = events
            .iter()
            .enumerate()
            .map(|(position, event)| (event.name.clone(), position))
            .collect();

        Self { index }
    }

    /// Look up an event position by exact name
    pub fn get(&self, name: &str) -> Option<Position> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of names indexed
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
