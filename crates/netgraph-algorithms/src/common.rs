//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution.

use rustc_hash::FxHashMap;

/// Node identifier type (u64)
pub type NodeId = u64;

/// Edge identifier type (u64)
pub type EdgeKey = u64;

/// One end of an edge as seen from a node: the node at the other end and the edge itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Adjacent {
    /// Dense index of the node at the other end
    pub node: usize,
    /// Identifier of the connecting edge
    pub edge: EdgeKey,
}

/// A dense, integer-indexed view of the graph topology.
///
/// Nodes are mapped to indices `0..N`. Each edge is recorded once per endpoint
/// in `incident`, and in `outgoing`/`incoming` according to its direction.
/// An undirected edge is traversable both ways, so it appears in the
/// `outgoing` and `incoming` lists of both endpoints.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: FxHashMap<NodeId, usize>,
    /// Traversable successors: index -> [(target index, edge)]
    pub outgoing: Vec<Vec<Adjacent>>,
    /// Traversable predecessors: index -> [(source index, edge)]
    pub incoming: Vec<Vec<Adjacent>>,
    /// Every edge touching a node, regardless of direction
    pub incident: Vec<Vec<Adjacent>>,
}

impl GraphView {
    /// Create a view over the given nodes with no edges
    pub fn with_nodes(index_to_node: Vec<NodeId>) -> Self {
        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            outgoing: vec![Vec::new(); node_count],
            incoming: vec![Vec::new(); node_count],
            incident: vec![Vec::new(); node_count],
        }
    }

    /// Record an edge between two node indices.
    ///
    /// Self-loops are recorded once in each list.
    pub fn add_edge(&mut self, edge: EdgeKey, from: usize, to: usize, directed: bool) {
        self.outgoing[from].push(Adjacent { node: to, edge });
        self.incoming[to].push(Adjacent { node: from, edge });
        self.incident[from].push(Adjacent { node: to, edge });

        if from == to {
            return;
        }

        self.incident[to].push(Adjacent { node: from, edge });
        if !directed {
            self.outgoing[to].push(Adjacent { node: from, edge });
            self.incoming[from].push(Adjacent { node: to, edge });
        }
    }

    /// Dense index of a node, if it is part of the view
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.node_to_index.get(&node).copied()
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.outgoing[idx].len()
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.incoming[idx].len()
    }

    /// Get traversable successors of a node
    pub fn successors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.outgoing[idx].iter().map(|adj| adj.node)
    }
}
