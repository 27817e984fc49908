//! Vertex and edge collections owned by a graph
//!
//! Both collections iterate in insertion order and look entities up by ID in
//! O(1). Mutation goes through [`Graph`](super::Graph), which enforces the
//! structural invariants.

use super::edge::Edge;
use super::types::{EdgeId, GraphId, VertexId};
use super::vertex::Vertex;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

/// The vertices of one graph
#[derive(Debug, Clone)]
pub struct VertexCollection {
    graph: GraphId,
    vertices: IndexMap<u64, Vertex>,
}

impl VertexCollection {
    pub(crate) fn new(graph: GraphId) -> Self {
        VertexCollection {
            graph,
            vertices: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check if the handle refers to a vertex of this collection
    pub fn contains(&self, id: VertexId) -> bool {
        id.graph() == self.graph && self.vertices.contains_key(&id.as_u64())
    }

    pub fn get(&self, id: VertexId) -> Option<&Vertex> {
        if id.graph() != self.graph {
            return None;
        }
        self.vertices.get(&id.as_u64())
    }

    pub fn get_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        if id.graph() != self.graph {
            return None;
        }
        self.vertices.get_mut(&id.as_u64())
    }

    /// Look a vertex up by the integer ID it was created with
    pub fn find_by_id(&self, id: u64) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// First vertex, in insertion order, carrying the given name
    pub fn find_by_name(&self, name: &str) -> Option<&Vertex> {
        self.vertices.values().find(|v| v.name() == Some(name))
    }

    /// Vertices in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Handles in insertion order
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.values().map(Vertex::id)
    }

    pub(crate) fn insert(&mut self, vertex: Vertex) {
        self.vertices.insert(vertex.id().as_u64(), vertex);
    }

    pub(crate) fn remove(&mut self, id: VertexId) -> Option<Vertex> {
        if id.graph() != self.graph {
            return None;
        }
        self.vertices.shift_remove(&id.as_u64())
    }
}

impl<'a> IntoIterator for &'a VertexCollection {
    type Item = &'a Vertex;
    type IntoIter = indexmap::map::Values<'a, u64, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.values()
    }
}

/// The edges of one graph, with per-vertex incidence lists
#[derive(Debug, Clone)]
pub struct EdgeCollection {
    graph: GraphId,
    edges: IndexMap<u64, Edge>,
    /// Vertex ID -> IDs of edges touching it (a self-loop is listed once)
    incident: FxHashMap<u64, Vec<u64>>,
}

impl EdgeCollection {
    pub(crate) fn new(graph: GraphId) -> Self {
        EdgeCollection {
            graph,
            edges: IndexMap::new(),
            incident: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, id: EdgeId) -> bool {
        id.graph() == self.graph && self.edges.contains_key(&id.as_u64())
    }

    pub fn get(&self, id: EdgeId) -> Option<&Edge> {
        if id.graph() != self.graph {
            return None;
        }
        self.edges.get(&id.as_u64())
    }

    pub fn get_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        if id.graph() != self.graph {
            return None;
        }
        self.edges.get_mut(&id.as_u64())
    }

    /// Look an edge up by the integer ID it was created with
    pub fn find_by_id(&self, id: u64) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Edges in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.values().map(Edge::id)
    }

    /// Edges touching a vertex, in insertion order
    pub fn incident_to(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> {
        let ids: &[u64] = if vertex.graph() == self.graph {
            self.incident
                .get(&vertex.as_u64())
                .map(Vec::as_slice)
                .unwrap_or_default()
        } else {
            &[]
        };
        ids.iter().filter_map(|id| self.edges.get(id))
    }

    /// Check whether an edge between `a` and `b` already exists that a new
    /// edge with the given directedness would run parallel to.
    ///
    /// A directed edge is parallel to a directed edge with the same source and
    /// target, or to any undirected edge on the same pair. An undirected edge
    /// is parallel to any edge on the same pair.
    pub fn has_parallel(&self, a: VertexId, b: VertexId, directed: bool) -> bool {
        self.incident_to(a).any(|edge| {
            if directed && edge.is_directed() {
                edge.vertex1() == a && edge.vertex2() == b
            } else {
                edge.connects(a, b)
            }
        })
    }

    pub(crate) fn insert(&mut self, edge: Edge) {
        let id = edge.id().as_u64();
        let [a, b] = edge.vertices();
        self.incident.entry(a.as_u64()).or_default().push(id);
        if a != b {
            self.incident.entry(b.as_u64()).or_default().push(id);
        }
        self.edges.insert(id, edge);
    }

    pub(crate) fn remove(&mut self, id: EdgeId) -> Option<Edge> {
        if id.graph() != self.graph {
            return None;
        }
        let raw = id.as_u64();
        let edge = self.edges.shift_remove(&raw)?;
        for vertex in edge.vertices() {
            if let Some(list) = self.incident.get_mut(&vertex.as_u64()) {
                list.retain(|&e| e != raw);
            }
        }
        Some(edge)
    }

    /// IDs of edges touching a vertex
    pub(crate) fn incident_ids(&self, vertex: VertexId) -> Vec<EdgeId> {
        self.incident_to(vertex).map(Edge::id).collect()
    }

    pub(crate) fn forget_vertex(&mut self, vertex: VertexId) {
        self.incident.remove(&vertex.as_u64());
    }
}

impl<'a> IntoIterator for &'a EdgeCollection {
    type Item = &'a Edge;
    type IntoIter = indexmap::map::Values<'a, u64, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.values()
    }
}
