//! In-memory graph container
//!
//! Owns the vertex and edge collections, enforces directedness and
//! restrictions on insertion and fires add notifications.

use super::collection::{EdgeCollection, VertexCollection};
use super::config::GraphConfig;
use super::edge::Edge;
use super::event::{EventBus, GraphEvent, Observer};
use super::id::IdGenerator;
use super::metadata::{reserved_keys, Metadata, ValueKind};
use super::types::{Directedness, EdgeId, GraphId, Restrictions, VertexId};
use super::vertex::Vertex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, trace};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("Vertex {vertex} does not belong to graph {graph}")]
    VertexNotInGraph { vertex: VertexId, graph: GraphId },

    #[error("A {directedness} graph does not accept an edge with directed = {is_directed}")]
    DirectednessConflict {
        directedness: Directedness,
        is_directed: bool,
    },

    #[error("Self-loops are not allowed: edge would connect {0} to itself")]
    SelfLoopNotAllowed(VertexId),

    #[error("Parallel edges are not allowed: {0} and {1} are already connected")]
    ParallelEdgeNotAllowed(VertexId, VertexId),

    #[error("Invalid metadata key {0:?}: keys must be non-empty and must not start with '~'")]
    InvalidKey(String),

    #[error("Metadata key {0:?} not found")]
    MissingKey(String),

    #[error("Metadata key {key:?} holds a {actual} value, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("ID space exhausted")]
    IdsExhausted,

    #[error("First ID {0} leaves no room to issue an ID")]
    InvalidFirstId(u64),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Summary counts of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub directed_edge_count: usize,
    pub undirected_edge_count: usize,
    pub self_loop_count: usize,
}

/// A network graph
///
/// Vertices and edges live in insertion-ordered collections owned by the
/// graph; callers hold [`VertexId`]/[`EdgeId`] handles. Directedness and
/// restrictions are fixed at construction.
#[derive(Debug)]
pub struct Graph {
    id: GraphId,
    directedness: Directedness,
    restrictions: Restrictions,
    vertices: VertexCollection,
    edges: EdgeCollection,
    vertex_ids: IdGenerator,
    edge_ids: IdGenerator,
    metadata: Metadata,
    events: EventBus,
}

impl Graph {
    /// Create an empty graph with default ID numbering
    pub fn new(directedness: Directedness, restrictions: Restrictions) -> Self {
        let id = GraphId::next();
        debug!("Created graph {} ({}, {:?})", id, directedness, restrictions);

        Graph {
            id,
            directedness,
            restrictions,
            vertices: VertexCollection::new(id),
            edges: EdgeCollection::new(id),
            vertex_ids: IdGenerator::default(),
            edge_ids: IdGenerator::default(),
            metadata: Metadata::new(),
            events: EventBus::default(),
        }
    }

    /// Create an empty graph from a configuration
    pub fn with_config(config: GraphConfig) -> GraphResult<Self> {
        let vertex_ids = IdGenerator::new(config.first_vertex_id)?;
        let edge_ids = IdGenerator::new(config.first_edge_id)?;

        let mut graph = Self::new(config.directedness, config.restrictions);
        graph.vertex_ids = vertex_ids;
        graph.edge_ids = edge_ids;
        Ok(graph)
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn restrictions(&self) -> Restrictions {
        self.restrictions
    }

    /// Check whether every flag in `flags` is set on this graph
    pub fn has_restrictions(&self, flags: Restrictions) -> bool {
        self.restrictions.contains(flags)
    }

    pub fn vertices(&self) -> &VertexCollection {
        &self.vertices
    }

    pub fn edges(&self) -> &EdgeCollection {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    /// Graph-level metadata
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Add an unnamed vertex
    pub fn add_vertex(&mut self) -> GraphResult<VertexId> {
        self.insert_vertex(None)
    }

    /// Add a vertex with a name
    pub fn add_named_vertex(&mut self, name: impl Into<String>) -> GraphResult<VertexId> {
        self.insert_vertex(Some(name.into()))
    }

    fn insert_vertex(&mut self, name: Option<String>) -> GraphResult<VertexId> {
        let id = VertexId::new(self.id, self.vertex_ids.next_id()?);
        self.vertices.insert(Vertex::new(id, name));
        trace!("Added vertex {} to graph {}", id, self.id);

        self.events.publish(GraphEvent::VertexAdded {
            graph: self.id,
            vertex: id,
        });
        Ok(id)
    }

    /// Connect two vertices of this graph.
    ///
    /// Every check runs before anything is stored, so a rejected edge leaves
    /// the graph untouched.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId, is_directed: bool) -> GraphResult<EdgeId> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;

        if !self.directedness.accepts(is_directed) {
            return Err(GraphError::DirectednessConflict {
                directedness: self.directedness,
                is_directed,
            });
        }
        if v1 == v2 && self.has_restrictions(Restrictions::NO_SELF_LOOPS) {
            return Err(GraphError::SelfLoopNotAllowed(v1));
        }
        if self.has_restrictions(Restrictions::NO_PARALLEL_EDGES)
            && self.edges.has_parallel(v1, v2, is_directed)
        {
            return Err(GraphError::ParallelEdgeNotAllowed(v1, v2));
        }

        let id = EdgeId::new(self.id, self.edge_ids.next_id()?);
        self.edges.insert(Edge::new(id, v1, v2, is_directed));
        trace!("Added edge {} ({} -> {}) to graph {}", id, v1, v2, self.id);

        self.events.publish(GraphEvent::EdgeAdded {
            graph: self.id,
            edge: id,
        });
        Ok(id)
    }

    /// Remove an edge
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<Edge> {
        let edge = self.edges.remove(id).ok_or(GraphError::EdgeNotFound(id))?;
        debug!("Removed edge {} from graph {}", id, self.id);
        Ok(edge)
    }

    /// Remove a vertex together with every edge touching it
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<Vertex> {
        self.check_vertex(id)?;

        for edge_id in self.edges.incident_ids(id) {
            self.edges.remove(edge_id);
        }
        self.edges.forget_vertex(id);

        let vertex = self.vertices.remove(id).ok_or(GraphError::VertexNotFound(id))?;
        debug!("Removed vertex {} from graph {}", id, self.id);
        Ok(vertex)
    }

    /// Edges touching a vertex, in insertion order
    pub fn incident_edges(&self, vertex: VertexId) -> Vec<&Edge> {
        self.edges.incident_to(vertex).collect()
    }

    /// Edges that can be followed away from a vertex.
    /// Undirected edges count as both outgoing and incoming.
    pub fn outgoing_edges(&self, vertex: VertexId) -> Vec<&Edge> {
        self.edges
            .incident_to(vertex)
            .filter(|e| e.starts_from(vertex))
            .collect()
    }

    /// Edges that can be followed into a vertex
    pub fn incoming_edges(&self, vertex: VertexId) -> Vec<&Edge> {
        self.edges
            .incident_to(vertex)
            .filter(|e| e.ends_at(vertex))
            .collect()
    }

    /// Distinct vertices at the other end of an incident edge
    pub fn adjacent_vertices(&self, vertex: VertexId) -> Vec<VertexId> {
        Self::distinct_ends(vertex, self.edges.incident_to(vertex))
    }

    /// Distinct vertices reachable over one outgoing edge
    pub fn successors(&self, vertex: VertexId) -> Vec<VertexId> {
        Self::distinct_ends(vertex, self.outgoing_edges(vertex))
    }

    /// Distinct vertices that reach this one over one edge
    pub fn predecessors(&self, vertex: VertexId) -> Vec<VertexId> {
        Self::distinct_ends(vertex, self.incoming_edges(vertex))
    }

    fn distinct_ends<'a>(vertex: VertexId, edges: impl IntoIterator<Item = &'a Edge>) -> Vec<VertexId> {
        let mut ends: Vec<VertexId> = Vec::new();
        for other in edges.into_iter().filter_map(|e| e.adjacent_vertex(vertex)) {
            if !ends.contains(&other) {
                ends.push(other);
            }
        }
        ends
    }

    /// Record a sortable layout order for a vertex.
    ///
    /// Also marks the graph as carrying layout orders, which is what
    /// [`LayoutOrder::from_graph`](crate::algo::LayoutOrder::from_graph) checks.
    pub fn set_layout_order(&mut self, vertex: VertexId, order: f64) -> GraphResult<()> {
        self.check_vertex(vertex)?;
        let target = self
            .vertices
            .get_mut(vertex)
            .ok_or(GraphError::VertexNotFound(vertex))?;
        target
            .metadata_mut()
            .set_reserved_value(reserved_keys::SORTABLE_LAYOUT_ORDER, order);
        self.metadata
            .set_reserved_value(reserved_keys::SORTABLE_LAYOUT_ORDER_SET, true);
        Ok(())
    }

    /// Copy the graph's structure into a new, independent graph.
    ///
    /// Directedness, restrictions, topology and names are kept; IDs are
    /// assigned fresh. Metadata values and tags (graph, vertex and edge) are
    /// shallow-copied only when requested.
    pub fn clone_graph(&self, copy_metadata: bool, copy_tag: bool) -> GraphResult<Graph> {
        let mut copy = Graph::new(self.directedness, self.restrictions);
        copy.metadata.copy_from(&self.metadata, copy_metadata, copy_tag);

        let mut mapping: FxHashMap<VertexId, VertexId> = FxHashMap::default();
        for vertex in &self.vertices {
            let new_id = copy.insert_vertex(vertex.name().map(str::to_string))?;
            if let Some(new_vertex) = copy.vertices.get_mut(new_id) {
                new_vertex
                    .metadata_mut()
                    .copy_from(vertex.metadata(), copy_metadata, copy_tag);
            }
            mapping.insert(vertex.id(), new_id);
        }

        for edge in &self.edges {
            let [a, b] = edge.vertices();
            let (a, b) = match (mapping.get(&a), mapping.get(&b)) {
                (Some(&a), Some(&b)) => (a, b),
                _ => return Err(GraphError::EdgeNotFound(edge.id())),
            };
            let new_id = copy.add_edge(a, b, edge.is_directed())?;
            if let Some(new_edge) = copy.edges.get_mut(new_id) {
                new_edge
                    .metadata_mut()
                    .copy_from(edge.metadata(), copy_metadata, copy_tag);
            }
        }

        debug!(
            "Cloned graph {} into {} ({} vertices, {} edges)",
            self.id,
            copy.id,
            copy.vertex_count(),
            copy.edge_count()
        );
        Ok(copy)
    }

    /// Summary counts
    pub fn statistics(&self) -> GraphStatistics {
        let mut stats = GraphStatistics {
            vertex_count: self.vertices.len(),
            edge_count: self.edges.len(),
            ..GraphStatistics::default()
        };
        for edge in &self.edges {
            if edge.is_directed() {
                stats.directed_edge_count += 1;
            } else {
                stats.undirected_edge_count += 1;
            }
            if edge.is_self_loop() {
                stats.self_loop_count += 1;
            }
        }
        stats
    }

    /// Register a callback run synchronously after every addition
    pub fn add_observer(&mut self, observer: Observer) {
        self.events.add_observer(observer);
    }

    /// Receive every subsequent addition on a channel
    pub fn subscribe(&mut self) -> UnboundedReceiver<GraphEvent> {
        self.events.subscribe()
    }

    /// Fail unless the handle refers to a live vertex of this graph
    pub fn check_vertex(&self, vertex: VertexId) -> GraphResult<()> {
        if vertex.graph() != self.id {
            return Err(GraphError::VertexNotInGraph {
                vertex,
                graph: self.id,
            });
        }
        if !self.vertices.contains(vertex) {
            return Err(GraphError::VertexNotFound(vertex));
        }
        Ok(())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(Directedness::default(), Restrictions::NONE)
    }
}
