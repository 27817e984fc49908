//! Graph construction settings

use super::id::IdGenerator;
use super::types::{Directedness, Restrictions};
use serde::{Deserialize, Serialize};

/// Settings fixed when a graph is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Which kinds of edge the graph accepts
    pub directedness: Directedness,
    /// Constraints enforced on edge insertion
    pub restrictions: Restrictions,
    /// First ID issued to a vertex
    pub first_vertex_id: u64,
    /// First ID issued to an edge
    pub first_edge_id: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directedness: Directedness::Undirected,
            restrictions: Restrictions::NONE,
            first_vertex_id: IdGenerator::DEFAULT_FIRST_ID,
            first_edge_id: IdGenerator::DEFAULT_FIRST_ID,
        }
    }
}

impl GraphConfig {
    pub fn new(directedness: Directedness, restrictions: Restrictions) -> Self {
        Self {
            directedness,
            restrictions,
            ..Self::default()
        }
    }
}
