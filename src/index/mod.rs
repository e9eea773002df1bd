//! UEvent Index Structures
//!
//! Derived lookups over the event store, all rebuilt after every insert:
//!
//! - **NameIndex**: Ordered map for exact name lookup
//! - **DepartmentIndex**: Grouping index for department substring queries
//! - **DateHistogram**: Dense date coordinates with per-date counts
//! - **RangeCountTree**: Segment tree for O(log K) date range counts
//!
//! # Architecture
//!
//! ```text
//! Query: "how many events between 2024-06-01 and 2024-06-03?"
//!        ↓
//! DateCoordinateMap: lower/upper bound → coordinates [lo, hi]
//!        ↓
//! RangeCountTree: sum histogram[lo..=hi] in O(log K)
//! ```
//!
//! Indexes store positions into the store's name-sorted sequence. A
//! position is only valid until the next insert.

mod date_histogram;
mod department_index;
mod manager;
mod name_index;
mod range_tree;

pub use date_histogram::{DateCoordinateMap, DateHistogram};
pub use department_index::DepartmentIndex;
pub use manager::IndexManager;
pub use name_index::NameIndex;
pub use range_tree::RangeCountTree;

use serde::Serialize;

/// Position of an event in the store's name-sorted sequence
pub type Position = usize;

/// Statistics about index usage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Number of names in the name index
    pub names_indexed: usize,
    /// Number of distinct departments
    pub departments_indexed: usize,
    /// Number of distinct dates (K)
    pub distinct_dates: usize,
    /// Allocated segment tree nodes
    pub tree_nodes: usize,
}
