//! Core type definitions for the graph

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a graph instance.
///
/// Every handle issued by a graph carries its `GraphId`, so a handle can never
/// be mistaken for an entity of another graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphId({})", self.0)
    }
}

/// Handle to a vertex owned by a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId {
    graph: GraphId,
    id: u64,
}

impl VertexId {
    pub(crate) fn new(graph: GraphId, id: u64) -> Self {
        VertexId { graph, id }
    }

    /// The integer ID assigned when the vertex was created
    pub fn as_u64(&self) -> u64 {
        self.id
    }

    /// The graph that owns this vertex
    pub fn graph(&self) -> GraphId {
        self.graph
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.id)
    }
}

/// Handle to an edge owned by a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId {
    graph: GraphId,
    id: u64,
}

impl EdgeId {
    pub(crate) fn new(graph: GraphId, id: u64) -> Self {
        EdgeId { graph, id }
    }

    /// The integer ID assigned when the edge was created
    pub fn as_u64(&self) -> u64 {
        self.id
    }

    /// The graph that owns this edge
    pub fn graph(&self) -> GraphId {
        self.graph
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.id)
    }
}

/// Which kinds of edge a graph accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Directedness {
    /// Only directed edges
    Directed,
    /// Only undirected edges
    #[default]
    Undirected,
    /// Both directed and undirected edges
    Mixed,
}

impl Directedness {
    /// Whether an edge with the given directedness may be added
    pub fn accepts(&self, is_directed: bool) -> bool {
        match self {
            Directedness::Directed => is_directed,
            Directedness::Undirected => !is_directed,
            Directedness::Mixed => true,
        }
    }
}

impl fmt::Display for Directedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Directedness::Directed => "Directed",
            Directedness::Undirected => "Undirected",
            Directedness::Mixed => "Mixed",
        };
        write!(f, "{}", name)
    }
}

bitflags! {
    /// Structural constraints a graph enforces when edges are added
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Restrictions: u32 {
        /// An edge may not connect a vertex to itself
        const NO_SELF_LOOPS = 0x0001;
        /// Two edges may not connect the same vertex pair
        const NO_PARALLEL_EDGES = 0x0002;
        /// Every restriction
        const ALL = Self::NO_SELF_LOOPS.bits() | Self::NO_PARALLEL_EDGES.bits();
    }
}

impl Restrictions {
    /// No restrictions
    pub const NONE: Self = Self::empty();
}

impl Default for Restrictions {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let graph = GraphId::next();
        let id = VertexId::new(graph, 42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(id.graph(), graph);
        assert_eq!(format!("{}", id), "VertexId(42)");
    }

    #[test]
    fn test_edge_id() {
        let graph = GraphId::next();
        let id = EdgeId::new(graph, 99);
        assert_eq!(id.as_u64(), 99);
        assert_eq!(format!("{}", id), "EdgeId(99)");
    }

    #[test]
    fn test_graph_ids_are_distinct() {
        let a = GraphId::next();
        let b = GraphId::next();
        assert_ne!(a, b);
        assert_ne!(VertexId::new(a, 1), VertexId::new(b, 1));
    }

    #[test]
    fn test_directedness_accepts() {
        assert!(Directedness::Directed.accepts(true));
        assert!(!Directedness::Directed.accepts(false));
        assert!(Directedness::Undirected.accepts(false));
        assert!(!Directedness::Undirected.accepts(true));
        assert!(Directedness::Mixed.accepts(true));
        assert!(Directedness::Mixed.accepts(false));
    }

    #[test]
    fn test_restriction_containment() {
        assert!(Restrictions::ALL.contains(Restrictions::NO_SELF_LOOPS));
        assert!(Restrictions::ALL.contains(Restrictions::NO_PARALLEL_EDGES));
        assert!(!Restrictions::NO_SELF_LOOPS.contains(Restrictions::NO_PARALLEL_EDGES));
        assert!(Restrictions::NO_SELF_LOOPS.contains(Restrictions::NONE));
        assert_eq!(Restrictions::default(), Restrictions::NONE);
    }
}
