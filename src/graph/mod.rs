//! Core graph implementation
//!
//! This module implements the network graph data model:
//! - Vertices and edges with unique, never reused integer IDs
//! - Directed, undirected and mixed graphs with optional restrictions
//! - Per-entity metadata (typed key/value pairs plus a tag)
//! - Synchronous add notifications

pub mod collection;
pub mod config;
pub mod edge;
pub mod event;
pub mod id;
pub mod metadata;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use collection::{EdgeCollection, VertexCollection};
pub use config::GraphConfig;
pub use edge::Edge;
pub use event::{GraphEvent, Observer};
pub use id::IdGenerator;
pub use metadata::{reserved_keys, Metadata, MetadataValue, Tag, ValueKind, RESERVED_PREFIX};
pub use store::{Graph, GraphError, GraphResult, GraphStatistics};
pub use types::{Directedness, EdgeId, GraphId, Restrictions, VertexId};
pub use vertex::Vertex;
