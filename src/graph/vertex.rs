//! Vertex entity
//!
//! A vertex lives inside exactly one graph for its whole lifetime; the owning
//! graph is encoded in its [`VertexId`].

use super::metadata::Metadata;
use super::types::{GraphId, VertexId};

/// A vertex in the network graph
///
/// Vertices have:
/// - A unique ID, never reused
/// - An optional name (not required to be unique)
/// - Metadata (key/value pairs plus a tag)
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    name: Option<String>,
    metadata: Metadata,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, name: Option<String>) -> Self {
        Vertex {
            id,
            name,
            metadata: Metadata::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The graph that owns this vertex
    pub fn parent_graph(&self) -> GraphId {
        self.id.graph()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the name, returning the previous one
    pub fn set_name(&mut self, name: impl Into<String>) -> Option<String> {
        self.name.replace(name.into())
    }

    pub fn clear_name(&mut self) -> Option<String> {
        self.name.take()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl std::hash::Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
