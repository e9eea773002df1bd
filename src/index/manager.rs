//! Index Manager - Coordinates all UEvent indexes
//!
//! Provides a unified interface to:
//! - NameIndex (exact name lookup)
//! - DepartmentIndex (department grouping and substring search)
//! - DateHistogram + RangeCountTree (date range counts)
//!
//! # Rebuild Path
//!
//! Every derived structure is a pure function of the store. After each
//! insert the manager throws everything away and rebuilds:
//!
//! ```text
//! EventStore::insert
//!        ↓
//! rebuild_all(events)
//!   ├─ NameIndex::build
//!   ├─ DepartmentIndex::build
//!   └─ DateHistogram::build → RangeCountTree::build(counts)
//! ```
//!
//! A full rebuild is O(N log N + K); inserts are human-paced, so no
//! incremental path exists.

use crate::index::{
    DateCoordinateMap, DateHistogram, DepartmentIndex, IndexStats, NameIndex, Position,
    RangeCountTree,
};
use crate::store::Event;

/// Owns and rebuilds every derived index
#[derive(Debug, Default)]
pub struct IndexManager {
    /// Exact name → position
    name_index: NameIndex,
    /// Department → positions
    department_index: DepartmentIndex,
    /// Date coordinates and per-date counts
    histogram: DateHistogram,
    /// Range sums over the histogram
    tree: RangeCountTree,
}

impl IndexManager {
    /// Create a manager with indexes built for `events`
    pub fn build(events: &[Event]) -> Self {
        let mut manager = Self::default();
        manager.rebuild_all(events);
        manager
    }

    // ==================== Index Update Methods ====================

    /// Rebuild every index from the store's current sequence
    ///
    /// Must run after any mutation that reorders events or changes the
    /// set of dates. Registrations do neither.
    pub fn rebuild_all(&mut self, events: &[Event]) {
        self.name_index = NameIndex::build(events);
        self.department_index = DepartmentIndex::build(events);
        self.histogram = DateHistogram::build(events);
        self.tree = RangeCountTree::build(self.histogram.counts());

        tracing::debug!(
            events = events.len(),
            departments = self.department_index.len(),
            distinct_dates = self.tree.len(),
            "Rebuilt indexes"
        );
    }

    // ==================== Query Methods ====================

    /// Position of the event with this exact name
    pub fn find_by_name(&self, name: &str) -> Option<Position> {
        self.name_index.get(name)
    }

    /// Positions of events whose department contains `query`, in name order
    pub fn find_by_department(&self, query: &str) -> Vec<Position> {
        self.department_index.find_substring(query)
    }

    /// Number of events dated within `[start, end]` (inclusive on both ends)
    ///
    /// Neither date has to belong to an event. Reversed or disjoint ranges
    /// count zero without touching the tree.
    pub fn count_in_date_range(&self, start: &str, end: &str) -> usize {
        if self.tree.is_empty() {
            return 0;
        }

        match self.histogram.coordinates().coordinate_range(start, end) {
            Some((lo, hi)) => self.tree.query(lo, hi),
            None => 0,
        }
    }

    /// Number of events on an exact date
    pub fn count_on_date(&self, date: &str) -> usize {
        self.histogram.count_on(date)
    }

    /// Current date coordinate mapping
    pub fn date_coordinates(&self) -> &DateCoordinateMap {
        self.histogram.coordinates()
    }

    /// All department names
    pub fn departments(&self) -> Vec<&str> {
        self.department_index.departments()
    }

    // ==================== Stats Methods ====================

    /// Get statistics about all indexes
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            names_indexed: self.name_index.len(),
            departments_indexed: self.department_index.len(),
            distinct_dates: self.histogram.coordinates().len(),
            tree_nodes: self.tree.node_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{EventStore, NewEvent};

    fn create_test_store() -> EventStore {
        let mut store = EventStore::new();
        store
            .insert(NewEvent::new("Orientation", "2024-06-01", 100).department("Student Affairs"))
            .unwrap();
        store
            .insert(NewEvent::new("Fair", "2024-06-03", 50).department("Engineering"))
            .unwrap();
        store
            .insert(NewEvent::new("Fair2", "2024-06-03", 50).department("Engineering"))
            .unwrap();
        store
    }

    #[test]
    fn test_manager_creation() {
        let manager = IndexManager::default();
        let stats = manager.stats();

        assert_eq!(stats.names_indexed, 0);
        assert_eq!(stats.departments_indexed, 0);
        assert_eq!(stats.distinct_dates, 0);
        assert_eq!(stats.tree_nodes, 1);
        assert_eq!(manager.count_in_date_range("0000-00-00", "9999-99-99"), 0);
    }

    #[test]
    fn test_rebuild_all() {
        let store = create_test_store();
        let manager = IndexManager::build(store.all());
        let stats = manager.stats();

        assert_eq!(stats.names_indexed, 3);
        assert_eq!(stats.departments_indexed, 2);
        assert_eq!(stats.distinct_dates, 2);
        assert_eq!(stats.tree_nodes, 8);
    }

    #[test]
    fn test_count_in_date_range() {
        let store = create_test_store();
        let manager = IndexManager::build(store.all());

        assert_eq!(manager.count_in_date_range("2024-06-01", "2024-06-03"), 3);
        assert_eq!(manager.count_in_date_range("2024-06-02", "2024-06-02"), 0);
        assert_eq!(manager.count_in_date_range("2024-06-03", "2024-06-03"), 2);
        assert_eq!(manager.count_in_date_range("2024-06-02", "2024-12-31"), 2);
        assert_eq!(manager.count_in_date_range("2024-06-03", "2024-06-01"), 0);
    }

    #[test]
    fn test_lookups_resolve_against_store() {
        let store = create_test_store();
        let manager = IndexManager::build(store.all());

        let position = manager.find_by_name("Fair2").unwrap();
        assert_eq!(store.all()[position].name, "Fair2");
        assert!(manager.find_by_name("Missing").is_none());

        let engineering: Vec<&str> = manager
            .find_by_department("Eng")
            .into_iter()
            .map(|p| store.all()[p].name.as_str())
            .collect();
        assert_eq!(engineering, vec!["Fair", "Fair2"]);
    }

    #[test]
    fn test_rebuild_drops_stale_positions() {
        let mut store = create_test_store();
        let mut manager = IndexManager::build(store.all());
        assert_eq!(manager.find_by_name("Orientation"), Some(2));

        // "Assembly" sorts first and shifts every position
        store
            .insert(NewEvent::new("Assembly", "2024-05-30", 10))
            .unwrap();
        manager.rebuild_all(store.all());

        assert_eq!(manager.find_by_name("Orientation"), Some(3));
        assert_eq!(manager.find_by_name("Assembly"), Some(0));
        assert_eq!(manager.date_coordinates().coordinate("2024-05-30"), Some(0));
        assert_eq!(manager.count_on_date("2024-06-03"), 2);
    }
}
