//! Range Count Tree - segment tree over the date histogram
//!
//! Stored as an implicit 1-indexed array: node `v` covers some
//! `[start, end]` and its children are `2v` and `2v + 1`. Each node holds
//! the sum of the histogram entries it covers.
//!
//! # Performance
//! - Build: O(K)
//! - Range query: O(log K)
//! - Space: 4·K nodes
//!
//! The tree knows nothing about dates. Callers map date strings to
//! coordinates with [`DateCoordinateMap`](crate::index::DateCoordinateMap)
//! first.

/// Root node index
const ROOT: usize = 1;

/// Segment tree answering inclusive range sums over a histogram
#[derive(Debug, Clone)]
pub struct RangeCountTree {
    nodes: Vec<usize>,
    /// Number of leaves (K)
    len: usize,
}

impl Default for RangeCountTree {
    fn default() -> Self {
        Self::build(&[])
    }
}

impl RangeCountTree {
    /// Build over a histogram
    ///
    /// An empty histogram yields a single zero node.
    pub fn build(histogram: &[usize]) -> Self {
        let len = histogram.len();
        if len == 0 {
            return Self {
                nodes: vec![0],
                len: 0,
            };
        }

        let mut nodes = vec![0; 4 * len];
        Self::build_node(&mut nodes, histogram, ROOT, 0, len - 1);
        Self { nodes, len }
    }

    fn build_node(nodes: &mut [usize], histogram: &[usize], node: usize, start: usize, end: usize) {
        if start == end {
            nodes[node] = histogram[start];
            return;
        }

        let mid = start + (end - start) / 2;
        Self::build_node(nodes, histogram, 2 * node, start, mid);
        Self::build_node(nodes, histogram, 2 * node + 1, mid + 1, end);
        nodes[node] = nodes[2 * node] + nodes[2 * node + 1];
    }

    /// Sum of histogram entries in `[lo, hi]`
    ///
    /// Callers are expected to pass `lo <= hi < len()`. Anything else,
    /// including any query against an empty tree, counts as zero.
    pub fn query(&self, lo: usize, hi: usize) -> usize {
        if self.is_empty() || lo > hi || hi >= self.len {
            return 0;
        }
        self.query_node(ROOT, 0, self.len - 1, lo, hi)
    }

    fn query_node(&self, node: usize, start: usize, end: usize, lo: usize, hi: usize) -> usize {
        // No overlap
        if hi < start || end < lo {
            return 0;
        }
        // Total containment
        if lo <= start && end <= hi {
            return self.nodes[node];
        }
        // Partial overlap
        let mid = start + (end - start) / 2;
        self.query_node(2 * node, start, mid, lo, hi)
            + self.query_node(2 * node + 1, mid + 1, end, lo, hi)
    }

    /// Sum over every leaf
    pub fn total(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.nodes[ROOT]
    }

    /// Number of leaves (K)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated node slots
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
