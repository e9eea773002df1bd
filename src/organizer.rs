//! Organizer - the session aggregate
//!
//! Owns the event store and its indexes and exposes the operations a
//! front end calls:
//!
//! - insert an event
//! - find by name, by department substring, by exact date
//! - register a participant
//! - list by name or by date
//! - count events in a date range
//!
//! Each mutating call brings the indexes back in sync before it returns,
//! so no caller can observe a stale index.

use crate::index::{IndexManager, IndexStats, Position};
use crate::store::{Event, EventId, EventStore, NewEvent, Participant, StoreError, StoreResult};
use serde::Serialize;

/// Summary of the current session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizerStats {
    /// Number of events
    pub events: usize,
    /// Total capacity across events
    pub total_seats: usize,
    /// Registered participants across events
    pub seats_taken: usize,
    /// Events with no seats left
    pub full_events: usize,
    /// Index statistics
    pub index: IndexStats,
}

/// In-memory event organizer
#[derive(Debug, Default)]
pub struct Organizer {
    store: EventStore,
    indexes: IndexManager,
}

impl Organizer {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Mutations ====================

    /// Insert a new event and rebuild every index
    ///
    /// Fails with `DuplicateName` or `InvalidCapacity`; a failed insert
    /// changes nothing.
    pub fn insert_event(&mut self, candidate: NewEvent) -> StoreResult<EventId> {
        let name = candidate.name.clone();

        match self.store.insert(candidate) {
            Ok(id) => {
                self.indexes.rebuild_all(self.store.all());
                tracing::info!(event_name = %name, event_id = id, "Added event");
                Ok(id)
            }
            Err(e) => {
                tracing::warn!(event_name = %name, error = %e, "Rejected event");
                Err(e)
            }
        }
    }

    /// Register a participant for an event
    ///
    /// Fails with `NotFound` or `EventFull`. Dates and names are untouched,
    /// so the indexes stay valid without a rebuild.
    pub fn register_participant(
        &mut self,
        event_name: &str,
        participant_name: &str,
        participant_course: &str,
    ) -> StoreResult<()> {
        let event = self
            .indexes
            .find_by_name(event_name)
            .and_then(|position| self.store.get_mut(position))
            .ok_or_else(|| StoreError::NotFound(event_name.to_string()))?;

        match event.admit(Participant::new(participant_name, participant_course)) {
            Ok(()) => {
                tracing::info!(
                    event_name = %event.name,
                    participant = %participant_name,
                    occupancy = event.occupancy(),
                    capacity = event.capacity,
                    "Registered participant"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(event_name = %event.name, error = %e, "Registration rejected");
                Err(e)
            }
        }
    }

    // ==================== Queries ====================

    /// Find an event by exact name
    pub fn find_by_name(&self, name: &str) -> StoreResult<&Event> {
        self.indexes
            .find_by_name(name)
            .and_then(|position| self.store.get(position))
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Events whose department contains `query` (case-sensitive), by name
    pub fn find_by_department(&self, query: &str) -> Vec<&Event> {
        self.resolve(self.indexes.find_by_department(query))
    }

    /// Events on an exact date, by name
    pub fn find_by_date(&self, date: &str) -> Vec<&Event> {
        if self.indexes.count_on_date(date) == 0 {
            return Vec::new();
        }
        self.store.all().iter().filter(|e| e.date == date).collect()
    }

    /// All events in name order
    pub fn all_events(&self) -> &[Event] {
        self.store.all()
    }

    /// All events by ascending date, ties broken by name
    pub fn list_sorted_by_date(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.store.all().iter().collect();
        // Stable sort over a name-ordered sequence keeps name as tie-break
        events.sort_by(|a, b| a.date.cmp(&b.date));
        events
    }

    /// Number of events dated within `[start_date, end_date]`, inclusive
    pub fn count_in_date_range(&self, start_date: &str, end_date: &str) -> usize {
        self.indexes.count_in_date_range(start_date, end_date)
    }

    /// All department names
    pub fn departments(&self) -> Vec<&str> {
        self.indexes.departments()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ==================== Stats ====================

    pub fn stats(&self) -> OrganizerStats {
        let events = self.store.all();

        OrganizerStats {
            events: events.len(),
            total_seats: events.iter().map(|e| e.capacity as usize).sum(),
            seats_taken: events.iter().map(Event::occupancy).sum(),
            full_events: events.iter().filter(|e| e.is_full()).count(),
            index: self.indexes.stats(),
        }
    }

    fn resolve(&self, positions: Vec<Position>) -> Vec<&Event> {
        positions
            .into_iter()
            .filter_map(|position| self.store.get(position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn names<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<&'a str> {
        events.into_iter().map(|e| e.name.as_str()).collect()
    }

    fn sample_organizer() -> Organizer {
        let mut organizer = Organizer::new();
        organizer
            .insert_event(
                NewEvent::new("Orientation", "2024-06-01", 100)
                    .times("08:00", "10:00")
                    .location("Auditorium")
                    .department("Student Affairs"),
            )
            .unwrap();
        organizer
            .insert_event(NewEvent::new("Fair", "2024-06-03", 50).department("Engineering"))
            .unwrap();
        organizer
            .insert_event(NewEvent::new("Fair2", "2024-06-03", 50).department("Civil Engineering"))
            .unwrap();
        organizer
    }

    #[test]
    fn test_date_range_example() {
        let organizer = sample_organizer();

        assert_eq!(organizer.count_in_date_range("2024-06-01", "2024-06-03"), 3);
        assert_eq!(organizer.count_in_date_range("2024-06-02", "2024-06-02"), 0);
    }

    #[test]
    fn test_empty_organizer() {
        let organizer = Organizer::new();

        assert!(organizer.is_empty());
        assert_eq!(organizer.count_in_date_range("2024-01-01", "2024-12-31"), 0);
        assert!(organizer.find_by_department("").is_empty());
        assert!(organizer.list_sorted_by_date().is_empty());
        assert_eq!(
            organizer.find_by_name("Fair").unwrap_err(),
            StoreError::NotFound("Fair".to_string())
        );
    }

    #[test]
    fn test_find_by_name() {
        let organizer = sample_organizer();

        let event = organizer.find_by_name("Orientation").unwrap();
        assert_eq!(event.name, "Orientation");
        assert_eq!(event.location, "Auditorium");
        assert_eq!(event.start_time, "08:00");
        assert_eq!(event.id, 1);

        assert!(matches!(
            organizer.find_by_name("orientation"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_insert_leaves_indexes_unchanged() {
        let mut organizer = sample_organizer();
        let before = organizer.stats();

        let err = organizer
            .insert_event(NewEvent::new("Fair", "2030-01-01", 5).department("Nursing"))
            .unwrap_err();

        assert_eq!(err, StoreError::DuplicateName("Fair".to_string()));
        assert_eq!(organizer.stats(), before);
        assert_eq!(organizer.find_by_name("Fair").unwrap().date, "2024-06-03");
        assert!(organizer.find_by_department("Nursing").is_empty());
        assert_eq!(organizer.count_in_date_range("2030-01-01", "2030-01-01"), 0);
    }

    #[test]
    fn test_invalid_capacity_insert() {
        let mut organizer = sample_organizer();

        let err = organizer
            .insert_event(NewEvent::new("Gala", "2024-06-09", 0))
            .unwrap_err();

        assert_eq!(err, StoreError::InvalidCapacity(0));
        assert_eq!(organizer.len(), 3);
        assert!(organizer.find_by_name("Gala").is_err());
    }

    #[test]
    fn test_find_by_department() {
        let organizer = sample_organizer();

        assert_eq!(
            names(organizer.find_by_department("Engineering")),
            vec!["Fair", "Fair2"]
        );
        assert_eq!(names(organizer.find_by_department("Civil")), vec!["Fair2"]);
        assert!(organizer.find_by_department("engineering").is_empty());
    }

    #[test]
    fn test_register_participant() {
        let mut organizer = Organizer::new();
        organizer
            .insert_event(NewEvent::new("Seminar", "2024-06-05", 1))
            .unwrap();

        organizer
            .register_participant("Seminar", "Ana", "BSCS")
            .unwrap();
        let event = organizer.find_by_name("Seminar").unwrap();
        assert_eq!(event.occupancy(), 1);
        assert_eq!(event.participants, vec![Participant::new("Ana", "BSCS")]);

        let err = organizer
            .register_participant("Seminar", "Ben", "BSIT")
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::EventFull {
                name: "Seminar".to_string(),
                capacity: 1
            }
        );
        assert_eq!(organizer.find_by_name("Seminar").unwrap().occupancy(), 1);
    }

    #[test]
    fn test_register_unknown_event() {
        let mut organizer = sample_organizer();

        let err = organizer
            .register_participant("Missing", "Ana", "BSCS")
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound("Missing".to_string()));
    }

    #[test]
    fn test_registration_survives_later_inserts() {
        let mut organizer = sample_organizer();
        organizer.register_participant("Fair", "Ana", "BSCS").unwrap();

        // Shifts "Fair" to a new position
        organizer
            .insert_event(NewEvent::new("Assembly", "2024-05-01", 10))
            .unwrap();
        organizer.register_participant("Fair", "Ben", "BSIT").unwrap();

        let fair = organizer.find_by_name("Fair").unwrap();
        assert_eq!(names(organizer.all_events().iter())[1], "Fair");
        assert_eq!(fair.occupancy(), 2);
        assert_eq!(organizer.find_by_name("Assembly").unwrap().occupancy(), 0);
    }

    #[test]
    fn test_list_sorted_by_date() {
        let mut organizer = sample_organizer();
        organizer
            .insert_event(NewEvent::new("Alumni", "2024-06-03", 10))
            .unwrap();
        organizer
            .insert_event(NewEvent::new("Kickoff", "2024-05-20", 10))
            .unwrap();

        assert_eq!(
            names(organizer.list_sorted_by_date()),
            vec!["Kickoff", "Orientation", "Alumni", "Fair", "Fair2"]
        );
    }

    #[test]
    fn test_find_by_date() {
        let organizer = sample_organizer();

        assert_eq!(names(organizer.find_by_date("2024-06-03")), vec!["Fair", "Fair2"]);
        assert!(organizer.find_by_date("2024-06-02").is_empty());
    }

    #[test]
    fn test_stats() {
        let mut organizer = sample_organizer();
        organizer
            .insert_event(NewEvent::new("Tiny", "2024-06-07", 1))
            .unwrap();
        organizer.register_participant("Tiny", "Ana", "BSCS").unwrap();

        let stats = organizer.stats();
        assert_eq!(stats.events, 4);
        assert_eq!(stats.total_seats, 201);
        assert_eq!(stats.seats_taken, 1);
        assert_eq!(stats.full_events, 1);
        assert_eq!(stats.index.distinct_dates, 3);
        assert_eq!(stats.index.departments_indexed, 4);
    }

    fn event_strategy() -> impl Strategy<Value = (String, String)> {
        (
            "[A-Za-z]{1,6}",
            (1u32..=3, 1u32..=28).prop_map(|(m, d)| format!("2024-{:02}-{:02}", m, d)),
        )
    }

    fn build(inputs: &[(String, String)]) -> Organizer {
        let mut organizer = Organizer::new();
        for (name, date) in inputs {
            let _ = organizer.insert_event(NewEvent::new(name.clone(), date.clone(), 5));
        }
        organizer
    }

    proptest! {
        #[test]
        fn prop_store_sorted_by_name(inputs in prop::collection::vec(event_strategy(), 0..40)) {
            let organizer = build(&inputs);
            let all = names(organizer.all_events().iter());
            prop_assert!(all.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_find_by_name_round_trip(inputs in prop::collection::vec(event_strategy(), 0..40)) {
            let organizer = build(&inputs);
            for (name, _) in &inputs {
                prop_assert_eq!(&organizer.find_by_name(name).unwrap().name, name);
            }
        }

        #[test]
        fn prop_single_day_count_matches_exact_dates(
            inputs in prop::collection::vec(event_strategy(), 0..40),
            probe in event_strategy(),
        ) {
            let organizer = build(&inputs);
            let date = probe.1;
            let expected = organizer.all_events().iter().filter(|e| e.date == date).count();
            prop_assert_eq!(organizer.count_in_date_range(&date, &date), expected);
        }

        #[test]
        fn prop_range_count_is_sum_of_days(
            inputs in prop::collection::vec(event_strategy(), 0..40),
            a in event_strategy(),
            b in event_strategy(),
        ) {
            let organizer = build(&inputs);
            let (start, end) = if a.1 <= b.1 { (a.1, b.1) } else { (b.1, a.1) };

            let distinct: BTreeSet<&str> = organizer
                .all_events()
                .iter()
                .map(|e| e.date.as_str())
                .filter(|d| start.as_str() <= *d && *d <= end.as_str())
                .collect();
            let per_day: usize = distinct
                .into_iter()
                .map(|d| organizer.count_in_date_range(d, d))
                .sum();

            prop_assert_eq!(organizer.count_in_date_range(&start, &end), per_day);
        }
    }
}
