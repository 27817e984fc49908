//! Netgraph
//!
//! An in-memory network graph with a small family of structural algorithms.
//!
//! # Architecture
//!
//! - [`graph`]: vertices, edges, metadata and the [`Graph`] container that
//!   enforces directedness and restrictions
//! - [`algo`]: strongly connected components, duplicate edge detection and
//!   subgraph extraction, built on the `netgraph-algorithms` crate
//!
//! Vertices and edges are owned by their graph and addressed through
//! [`VertexId`]/[`EdgeId`] handles. A handle remembers which graph issued it,
//! so using it with another graph is an error rather than a silent mix-up.
//!
//! ## Example Usage
//!
//! ```rust
//! use netgraph::algo::{ConnectedComponentCalculator, SubgraphCalculator, SubgraphOptions};
//! use netgraph::graph::{Directedness, Graph, Restrictions};
//!
//! let mut graph = Graph::new(Directedness::Directed, Restrictions::NO_SELF_LOOPS);
//!
//! let a = graph.add_named_vertex("a").unwrap();
//! let b = graph.add_named_vertex("b").unwrap();
//! let c = graph.add_named_vertex("c").unwrap();
//!
//! graph.add_edge(a, b, true).unwrap();
//! graph.add_edge(b, a, true).unwrap();
//! graph.add_edge(b, c, true).unwrap();
//! assert!(graph.add_edge(c, c, true).is_err());
//!
//! let components = ConnectedComponentCalculator::new()
//!     .calculate_strongly_connected_components(&graph, None, None)
//!     .unwrap();
//! assert_eq!(components.len(), 2);
//! assert_eq!(components[0], vec![c]);
//!
//! let neighbourhood = SubgraphCalculator::new()
//!     .get_subgraph(&graph, a, SubgraphOptions::new(1.0, true))
//!     .unwrap();
//! assert_eq!(neighbourhood.vertices.len(), 2);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{
    AlgorithmError, AlgorithmResult, ConnectedComponentCalculator, DuplicateEdgeDetector,
    LayoutOrder, Subgraph, SubgraphCalculator, SubgraphOptions,
};

pub use graph::{
    Directedness, Edge, EdgeId, Graph, GraphConfig, GraphError, GraphEvent, GraphResult,
    Metadata, MetadataValue, Restrictions, Vertex, VertexId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
