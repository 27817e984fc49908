//! Subgraph extraction
//!
//! Two operations:
//! - neighbourhood of a root vertex bounded by a number of levels (hops)
//! - materialization of a vertex set into a new, independent graph
//!
//! A whole number of levels `N` keeps the vertices within `N` hops and the
//! edges that reached them. `N.5` additionally keeps the edges that join two
//! vertices of the outermost level.

use super::{build_view, edge_handle, index_of, vertex_at, AlgorithmError, AlgorithmResult};
use crate::graph::{EdgeId, Graph, GraphError, VertexId};
use indexmap::{IndexMap, IndexSet};
use netgraph_algorithms::{add_lateral_edges, bounded_bfs};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters of a neighbourhood extraction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubgraphOptions {
    /// Non-negative multiple of 0.5
    pub levels: f64,
    /// Collect the traversed edges as well as the vertices
    pub include_edges: bool,
}

impl Default for SubgraphOptions {
    fn default() -> Self {
        Self {
            levels: 1.0,
            include_edges: true,
        }
    }
}

impl SubgraphOptions {
    pub fn new(levels: f64, include_edges: bool) -> Self {
        Self {
            levels,
            include_edges,
        }
    }
}

/// Vertices (with their hop distance from the root) and edges of a
/// neighbourhood, in discovery order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subgraph {
    pub vertices: IndexMap<VertexId, usize>,
    pub edges: IndexSet<EdgeId>,
}

impl Subgraph {
    pub fn level_of(&self, vertex: VertexId) -> Option<usize> {
        self.vertices.get(&vertex).copied()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(&vertex)
    }

    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }

    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SubgraphCalculator;

impl SubgraphCalculator {
    pub fn new() -> Self {
        SubgraphCalculator
    }

    /// Neighbourhood of `root` within `options.levels` hops.
    ///
    /// Edges are followed regardless of direction. Each vertex is recorded
    /// with its shortest hop distance from the root.
    pub fn get_subgraph(
        &self,
        graph: &Graph,
        root: VertexId,
        options: SubgraphOptions,
    ) -> AlgorithmResult<Subgraph> {
        let levels = options.levels;
        if !levels.is_finite() || levels < 0.0 || (levels * 2.0).fract() != 0.0 {
            return Err(AlgorithmError::InvalidLevels(levels));
        }

        let view = build_view(graph);
        index_of(graph, &view, root)?;

        let max_level = levels.floor() as usize;
        let mut result = bounded_bfs(&view, root.as_u64(), max_level, options.include_edges)
            .ok_or(GraphError::VertexNotFound(root))?;
        if options.include_edges && levels.fract() == 0.5 {
            add_lateral_edges(&view, &mut result);
        }

        let vertices = result
            .order
            .iter()
            .filter_map(|&idx| {
                result
                    .level_of(idx)
                    .map(|level| (vertex_at(graph, &view, idx), level))
            })
            .collect();
        let edges = result
            .edges
            .iter()
            .map(|&raw| edge_handle(graph, raw))
            .collect();

        let subgraph = Subgraph { vertices, edges };
        debug!(
            "Subgraph of {} at {} levels: {} vertices, {} edges",
            root,
            levels,
            subgraph.vertices.len(),
            subgraph.edges.len()
        );
        Ok(subgraph)
    }

    /// Copy a set of vertices and every edge between them into a new graph.
    ///
    /// The new graph has the same directedness and restrictions. Names are
    /// copied; IDs are fresh and metadata is not copied. Edges keep their
    /// direction and each is copied once.
    pub fn materialize(&self, graph: &Graph, vertices: &[VertexId]) -> AlgorithmResult<Graph> {
        if vertices.is_empty() {
            return Err(AlgorithmError::EmptyVertexSet);
        }
        for &vertex in vertices {
            graph.check_vertex(vertex)?;
        }

        let mut copy = Graph::new(graph.directedness(), graph.restrictions());
        let mut mapping: FxHashMap<VertexId, VertexId> = FxHashMap::default();
        let mut included: Vec<VertexId> = Vec::with_capacity(vertices.len());

        for &vertex in vertices {
            if mapping.contains_key(&vertex) {
                continue;
            }
            let name = graph.vertex(vertex).and_then(|v| v.name());
            let new_id = match name {
                Some(name) => copy.add_named_vertex(name)?,
                None => copy.add_vertex()?,
            };
            mapping.insert(vertex, new_id);
            included.push(vertex);
        }

        let mut seen_edges: FxHashSet<EdgeId> = FxHashSet::default();
        for vertex in included {
            for edge in graph.edges().incident_to(vertex) {
                if !seen_edges.insert(edge.id()) {
                    continue;
                }
                let [a, b] = edge.vertices();
                if let (Some(&a), Some(&b)) = (mapping.get(&a), mapping.get(&b)) {
                    copy.add_edge(a, b, edge.is_directed())?;
                }
            }
        }

        debug!(
            "Materialized {} vertices and {} edges of graph {} into graph {}",
            copy.vertex_count(),
            copy.edge_count(),
            graph.id(),
            copy.id()
        );
        Ok(copy)
    }
}
