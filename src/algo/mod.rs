//! Graph algorithms module
//!
//! The algorithms themselves live in the `netgraph-algorithms` crate and run
//! over a dense [`GraphView`]. This module projects a [`Graph`] into that view
//! and maps results back to vertex and edge handles.
//!
//! Algorithms never write onto the graph: per-vertex working state stays in
//! maps owned by the call.

pub mod components;
pub mod duplicates;
pub mod subgraph;

use crate::graph::{EdgeId, Graph, GraphError, VertexId};
use netgraph_algorithms::GraphView;
use thiserror::Error;

pub use components::{ConnectedComponentCalculator, LayoutOrder};
pub use duplicates::{CanonicalEdgeKey, DuplicateCounts, DuplicateEdgeDetector};
pub use subgraph::{Subgraph, SubgraphCalculator, SubgraphOptions};

/// Errors raised by algorithms
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    #[error("Levels must be a non-negative multiple of 0.5, got {0}")]
    InvalidLevels(f64),

    #[error("Vertex collection must not be empty")]
    EmptyVertexSet,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

/// Build a dense view of the whole graph.
///
/// Dense indices follow vertex insertion order.
pub fn build_view(graph: &Graph) -> GraphView {
    let mut view = GraphView::with_nodes(graph.vertices().ids().map(|v| v.as_u64()).collect());

    for edge in graph.edges() {
        let [a, b] = edge.vertices();
        if let (Some(from), Some(to)) = (view.index_of(a.as_u64()), view.index_of(b.as_u64())) {
            view.add_edge(edge.id().as_u64(), from, to, edge.is_directed());
        }
    }
    view
}

/// Map a dense index back to the vertex handle
pub(crate) fn vertex_at(graph: &Graph, view: &GraphView, idx: usize) -> VertexId {
    VertexId::new(graph.id(), view.index_to_node[idx])
}

pub(crate) fn edge_handle(graph: &Graph, raw: u64) -> EdgeId {
    EdgeId::new(graph.id(), raw)
}

/// Dense index of a vertex, failing if the handle is not part of the graph
pub(crate) fn index_of(graph: &Graph, view: &GraphView, vertex: VertexId) -> AlgorithmResult<usize> {
    graph.check_vertex(vertex)?;
    view.index_of(vertex.as_u64())
        .ok_or(AlgorithmError::Graph(GraphError::VertexNotFound(vertex)))
}
