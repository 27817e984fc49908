//! Duplicate edge detection
//!
//! Edges are keyed by the names of their endpoints rather than their IDs, so
//! two edges between equally named vertices count as duplicates even when the
//! vertices are distinct.

use crate::graph::{Directedness, Edge, Graph, VertexId};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::cell::OnceCell;
use tracing::debug;

/// Endpoint names of an edge. Ordered lexicographically unless the graph is
/// directed.
pub type CanonicalEdgeKey = (String, String);

/// Cached counts produced by a [`DuplicateEdgeDetector`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateCounts {
    pub unique_edges: usize,
    pub edges_with_duplicates: usize,
    pub total_edges_after_merging_duplicates_no_self_loops: usize,
    pub duplicate_keys: Vec<CanonicalEdgeKey>,
}

/// Counts duplicate edges of one graph.
///
/// Nothing is computed until the first query; later queries reuse the cached
/// counts. The detector only reads the graph.
#[derive(Debug)]
pub struct DuplicateEdgeDetector<'g> {
    graph: &'g Graph,
    counts: OnceCell<DuplicateCounts>,
}

impl<'g> DuplicateEdgeDetector<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        DuplicateEdgeDetector {
            graph,
            counts: OnceCell::new(),
        }
    }

    /// Number of distinct edge keys
    pub fn unique_edges(&self) -> usize {
        self.counts().unique_edges
    }

    /// Number of edges whose key is shared with at least one other edge,
    /// counting every one of them
    pub fn edges_with_duplicates(&self) -> usize {
        self.counts().edges_with_duplicates
    }

    pub fn graph_contains_duplicate_edges(&self) -> bool {
        self.edges_with_duplicates() > 0
    }

    /// Number of edges left if duplicates were merged and self-loops dropped
    pub fn total_edges_after_merging_duplicates_no_self_loops(&self) -> usize {
        self.counts()
            .total_edges_after_merging_duplicates_no_self_loops
    }

    /// Keys that occur more than once, in first-seen order
    pub fn duplicate_keys(&self) -> &[CanonicalEdgeKey] {
        &self.counts().duplicate_keys
    }

    pub fn counts(&self) -> &DuplicateCounts {
        self.counts.get_or_init(|| self.compute())
    }

    fn compute(&self) -> DuplicateCounts {
        let keep_order = self.graph.directedness() == Directedness::Directed;
        let mut occurrences: IndexMap<CanonicalEdgeKey, usize, FxBuildHasher> =
            IndexMap::default();

        for edge in self.graph.edges() {
            if let Some(key) = self.edge_key(edge, keep_order) {
                *occurrences.entry(key).or_insert(0) += 1;
            }
        }

        let mut counts = DuplicateCounts {
            unique_edges: occurrences.len(),
            ..DuplicateCounts::default()
        };
        for (key, &count) in &occurrences {
            if count > 1 {
                counts.edges_with_duplicates += count;
                counts.duplicate_keys.push(key.clone());
            }
            if key.0 != key.1 {
                counts.total_edges_after_merging_duplicates_no_self_loops += 1;
            }
        }

        debug!(
            "Graph {}: {} unique edges, {} edges with duplicates",
            self.graph.id(),
            counts.unique_edges,
            counts.edges_with_duplicates
        );
        counts
    }

    /// Key of an edge, or `None` if either endpoint has no name
    fn edge_key(&self, edge: &Edge, keep_order: bool) -> Option<CanonicalEdgeKey> {
        let name = |vertex: VertexId| {
            self.graph
                .vertex(vertex)
                .and_then(|v| v.name())
                .filter(|name| !name.is_empty())
        };
        let first = name(edge.vertex1())?;
        let second = name(edge.vertex2())?;

        if keep_order || first <= second {
            Some((first.to_string(), second.to_string()))
        } else {
            Some((second.to_string(), first.to_string()))
        }
    }
}
