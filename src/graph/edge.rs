//! Edge entity
//!
//! An edge references exactly two vertices of its own graph and is either
//! directed (from `vertices[0]` to `vertices[1]`) or undirected.

use super::metadata::Metadata;
use super::types::{EdgeId, VertexId};

/// An edge in the network graph
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    vertices: [VertexId; 2],
    directed: bool,
    metadata: Metadata,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, vertex1: VertexId, vertex2: VertexId, directed: bool) -> Self {
        Edge {
            id,
            vertices: [vertex1, vertex2],
            directed,
            metadata: Metadata::new(),
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Both endpoints; for a directed edge the first is the source
    pub fn vertices(&self) -> [VertexId; 2] {
        self.vertices
    }

    pub fn vertex1(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn vertex2(&self) -> VertexId {
        self.vertices[1]
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Check if both endpoints are the same vertex
    pub fn is_self_loop(&self) -> bool {
        self.vertices[0] == self.vertices[1]
    }

    /// The endpoint opposite `vertex`, or `None` if `vertex` is not an endpoint.
    ///
    /// For a self-loop the opposite endpoint is the vertex itself.
    pub fn adjacent_vertex(&self, vertex: VertexId) -> Option<VertexId> {
        if self.vertices[0] == vertex {
            Some(self.vertices[1])
        } else if self.vertices[1] == vertex {
            Some(self.vertices[0])
        } else {
            None
        }
    }

    /// Check if this edge connects two vertices (in either direction)
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.vertices[0] == a && self.vertices[1] == b)
            || (self.vertices[0] == b && self.vertices[1] == a)
    }

    /// Check if the edge may be followed from `vertex`
    pub fn starts_from(&self, vertex: VertexId) -> bool {
        if self.directed {
            self.vertices[0] == vertex
        } else {
            self.vertices.contains(&vertex)
        }
    }

    /// Check if the edge may be followed into `vertex`
    pub fn ends_at(&self, vertex: VertexId) -> bool {
        if self.directed {
            self.vertices[1] == vertex
        } else {
            self.vertices.contains(&vertex)
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
