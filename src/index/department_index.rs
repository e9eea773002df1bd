//! Department Index - grouping index for department queries
//!
//! Maps department → positions of its events, in store order.
//!
//! # Example
//! ```ignore
//! // Query: every event whose department contains "Eng"
//! let positions = department_index.find_substring("Eng");
//! // positions = [0, 3, 4] - name order, no duplicates
//! ```

use crate::index::Position;
use crate::store::Event;
use std::collections::{BTreeMap, BTreeSet};

/// Department → event positions
#[derive(Debug, Default)]
pub struct DepartmentIndex {
    /// department → positions, ascending (i.e. by event name)
    index: BTreeMap<String, Vec<Position>>,
}

impl DepartmentIndex {
    /// Build from the store's current sequence
    pub fn build(events: &[Event]) -> Self {
        let mut index: BTreeMap<String, Vec<Position>> = BTreeMap::new();

        for (position, event) in events.iter().enumerate() {
            index
                .entry(event.department.clone())
                .or_default()
                .push(position);
        }

        Self { index }
    }

    /// Positions for an exact department name
    pub fn get(&self, department: &str) -> &[Position] {
        self.index
            .get(department)
            .map(|positions| positions.as_slice())
            .unwrap_or(&[])
    }

    /// Union of every department whose name contains `query`
    ///
    /// Case-sensitive. Positions are deduplicated and ascending, which is
    /// name order because the store is sorted by name.
    pub fn find_substring(&self, query: &str) -> Vec<Position> {
        let matches: BTreeSet<Position> = self
            .index
            .iter()
            .filter(|(department, _)| department.contains(query))
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect();

        matches.into_iter().collect()
    }

    /// All department names
    pub fn departments(&self) -> Vec<&str> {
        self.index.keys().map(|k| k.as_str()).collect()
    }

    /// Number of distinct departments
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
