//! Date Histogram - dense coordinates for distinct event dates
//!
//! Distinct dates are sorted lexically and numbered `0..K`. The histogram
//! counts events per coordinate and is the leaf layer of the
//! [`RangeCountTree`](crate::index::RangeCountTree).
//!
//! ```text
//! events:      Orientation 2024-06-01, Fair 2024-06-03, Fair2 2024-06-03
//! coordinates: 2024-06-01 → 0, 2024-06-03 → 1
//! histogram:   [1, 2]
//! ```
//!
//! Both structures are rebuilt from scratch; nothing is patched in place.

use crate::store::Event;
use std::collections::BTreeSet;

/// Bijection between the distinct dates in use and `0..K`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateCoordinateMap {
    /// Sorted, distinct; a date's coordinate is its position
    dates: Vec<String>,
}

impl DateCoordinateMap {
    /// Coordinate of a date that is present in the map
    pub fn coordinate(&self, date: &str) -> Option<usize> {
        self.dates.binary_search_by(|d| d.as_str().cmp(date)).ok()
    }

    /// Date at a coordinate
    pub fn date(&self, coordinate: usize) -> Option<&str> {
        self.dates.get(coordinate).map(|d| d.as_str())
    }

    /// First coordinate whose date is `>= date`
    pub fn lower_bound(&self, date: &str) -> usize {
        self.dates.partition_point(|d| d.as_str() < date)
    }

    /// First coordinate whose date is `> date`
    pub fn upper_bound(&self, date: &str) -> usize {
        self.dates.partition_point(|d| d.as_str() <= date)
    }

    /// Inclusive coordinate bounds covering `[start, end]` on date strings
    ///
    /// Neither date needs to be present. Returns `None` when no coordinate
    /// falls inside the range.
    pub fn coordinate_range(&self, start: &str, end: &str) -> Option<(usize, usize)> {
        let lo = self.lower_bound(start);
        let hi_exclusive = self.upper_bound(end);

        if lo >= self.dates.len() || lo >= hi_exclusive {
            return None;
        }
        Some((lo, hi_exclusive - 1))
    }

    /// All dates in coordinate order
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// Number of distinct dates (K)
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Per-coordinate event counts together with their coordinate map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateHistogram {
    coordinates: DateCoordinateMap,
    counts: Vec<usize>,
}

impl DateHistogram {
    /// Build the coordinate map and histogram for a set of events
    ///
    /// Depends only on the multiset of dates, not on event order.
    pub fn build(events: &[Event]) -> Self {
        let distinct: BTreeSet<&str> = events.iter().map(|e| e.date.as_str()).collect();
        let coordinates = DateCoordinateMap {
            dates: distinct.into_iter().map(str::to_string).collect(),
        };

        let mut counts = vec![0; coordinates.len()];
        for event in events {
            if let Some(coordinate) = coordinates.coordinate(&event.date) {
                counts[coordinate] += 1;
            }
        }

        Self {
            coordinates,
            counts,
        }
    }

    pub fn coordinates(&self) -> &DateCoordinateMap {
        &self.coordinates
    }

    /// Event count per coordinate
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of events on an exact date
    pub fn count_on(&self, date: &str) -> usize {
        self.coordinates
            .coordinate(date)
            .map(|c| self.counts[c])
            .unwrap_or(0)
    }

    /// Total events counted
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn into_parts(self) -> (DateCoordinateMap, Vec<usize>) {
        (self.coordinates, self.counts)
    }
}
